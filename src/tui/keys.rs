/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the dashboard.
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::announcement::{Announcement, Audience};
use crate::coach::generate_access_code;
use crate::session::Page;

use super::action::Action;
use super::helpers::{
    selected_announcement, selected_coach, selected_event, selected_season,
    selected_sport_definition, selected_staff, selected_ticket,
};
use super::state::AppState;
use super::types::{Prompt, PromptKind};

/// While a prompt is open every key goes to it
fn handle_prompt_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::PromptCancel),
        KeyCode::Enter => Some(Action::PromptSubmit),
        KeyCode::Tab => Some(Action::PromptNextField),
        KeyCode::Backspace => Some(Action::PromptBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::PromptInput(c))
        }
        _ => None,
    }
}

/// Handle global keys that work regardless of page or focus state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::RefreshData),
        _ => None,
    }
}

/// Jump to the Nth menu entry
fn handle_number_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let KeyCode::Char(c) = key_code else {
        return None;
    };
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    state.menu().get(index).map(|page| Action::NavigatePage(*page))
}

/// Handle navigation when the side menu is focused
fn handle_menu_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::NavigateMenuUp),
        KeyCode::Down => Some(Action::NavigateMenuDown),
        KeyCode::Right | KeyCode::Enter => {
            debug!("KEY: Entering page content");
            Some(Action::EnterContentFocus)
        }
        _ => None,
    }
}

/// Keys shared by every list page
fn handle_list_keys(key_code: KeyCode, page: Page) -> Option<Action> {
    let drills = matches!(page, Page::Registrations | Page::Screening);
    match key_code {
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Right if drills => Some(Action::ActivateSelection),
        KeyCode::Left => Some(Action::NavigateUp),
        _ => None,
    }
}

fn open(kind: PromptKind) -> Option<Action> {
    Some(Action::OpenPrompt(Prompt::new(kind)))
}

fn open_filled<I, S>(kind: PromptKind, values: I) -> Option<Action>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(Action::OpenPrompt(Prompt::new(kind).with_values(values)))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "y"
    } else {
        "n"
    }
}

fn edit_announcement(item: &Announcement) -> Option<Action> {
    let audience = match item.audience {
        Audience::All => "all",
        Audience::SchoolsCoaches => "schools",
    };
    open_filled(
        PromptKind::EditAnnouncement {
            announcement_id: item.id,
        },
        [
            item.title.as_str(),
            item.description.as_str(),
            audience,
            yes_no(item.is_pinned),
        ],
    )
}

fn generated_code() -> String {
    // Random code is drawn here so the reducer stays deterministic
    generate_access_code(&mut rand::thread_rng())
}

/// Single-letter commands for the current page
fn handle_page_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let KeyCode::Char(c) = key_code else {
        return None;
    };
    let page = state.navigation.current_page;

    match (page, c) {
        (Page::Registrations | Page::Screening, 'a') => Some(Action::ApproveSelected),
        (Page::Registrations | Page::Screening, 'd') => Some(Action::OpenDeclinePrompt),
        (Page::Registrations, 'n') => open(PromptKind::NewRegistrationForm),

        (Page::Seasons, 'n') => open(PromptKind::NewSeason),
        (Page::Seasons, 'e') => {
            let season = selected_season(state)?;
            let date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
            open_filled(
                PromptKind::EditSeason {
                    season_id: season.id,
                },
                [
                    season.title.clone(),
                    season.status.to_string(),
                    date(season.start_date),
                    date(season.end_date),
                ],
            )
        }
        (Page::Seasons, 't') => Some(Action::ToggleSeasonEnded),
        (Page::Seasons, 's') => Some(Action::SetSeasonActive),
        (Page::Seasons, 'x') => Some(Action::DeleteSelectedSeason),

        (Page::Home | Page::Announcements, 'n') => open(PromptKind::NewAnnouncement),
        (Page::Home | Page::Announcements, 'e') => edit_announcement(selected_announcement(state)?),
        (Page::Home | Page::Announcements, 'p') => Some(Action::TogglePin),
        (Page::Home | Page::Announcements, 'x') => Some(Action::DeleteSelectedAnnouncement),
        (Page::Home, 'f') => Some(Action::CycleAudienceFilter),

        (Page::Coaches, 'n') => Some(Action::OpenPrompt(
            Prompt::new(PromptKind::AddCoach).with_value(2, generated_code()),
        )),
        (Page::Coaches, 'e') => {
            let coach = selected_coach(state)?;
            open_filled(
                PromptKind::EditCoach { coach_id: coach.id },
                [
                    coach.name.clone(),
                    coach.email.clone(),
                    coach.access_code.clone(),
                    coach.sports.join(", "),
                ],
            )
        }
        (Page::Coaches, 's') => {
            let coach = selected_coach(state)?;
            open_filled(
                PromptKind::AssignCoachSports { coach_id: coach.id },
                [coach.sports.join(", ")],
            )
        }
        (Page::Coaches, '/') => {
            let ui = &state.ui.coaches;
            Some(Action::OpenPrompt(
                Prompt::new(PromptKind::SearchCoaches)
                    .with_value(0, ui.query.clone())
                    .with_value(1, ui.sport.clone().unwrap_or_default()),
            ))
        }
        (Page::Coaches, 'c') => Some(Action::ClearCoachSearch),
        (Page::Coaches, 'x') => Some(Action::RemoveSelectedCoach),

        (Page::Events | Page::Schedules, 'f') => Some(Action::CycleEventSport),
        (Page::Events, 'n') => open(PromptKind::NewEvent),
        (Page::Events, 'e') => {
            let event = selected_event(state)?;
            open_filled(
                PromptKind::EditEvent { event_id: event.id },
                [
                    event.name.clone(),
                    event.sport.clone(),
                    event.date.to_string(),
                    event.time.clone(),
                    event.venue.clone(),
                ],
            )
        }
        (Page::Events, 'v') => {
            let event = selected_event(state)?;
            Some(Action::OpenPrompt(
                Prompt::new(PromptKind::ChangeVenue { event_id: event.id })
                    .with_value(0, event.venue.clone()),
            ))
        }
        (Page::Events, 's') => {
            let event = selected_event(state)?;
            open(PromptKind::RecordResult { event_id: event.id })
        }

        (Page::Sports, 'n') => open(PromptKind::NewSport),
        (Page::Sports, 'e') => {
            let sport = selected_sport_definition(state)?;
            open_filled(
                PromptKind::EditSport { sport_id: sport.id },
                [
                    sport.name.as_str(),
                    sport.description.as_str(),
                    yes_no(sport.require_jersey_number),
                    yes_no(sport.require_position),
                ],
            )
        }
        (Page::Sports, 'x') => Some(Action::DeleteSelectedSport),

        (Page::UserManagement, 'n') => Some(Action::OpenPrompt(
            Prompt::new(PromptKind::AddStaff).with_value(3, generated_code()),
        )),
        (Page::UserManagement, 'e') => {
            let account = selected_staff(state)?;
            open_filled(
                PromptKind::EditStaff {
                    staff_id: account.id,
                },
                [
                    account.name.as_str(),
                    account.position.as_str(),
                    account.email.as_str(),
                    account.access_code.as_str(),
                    account.status.name(),
                ],
            )
        }
        (Page::UserManagement, 'x') => Some(Action::RemoveSelectedStaff),

        (Page::Support, 'm') if state.can_manage(page) => {
            let ticket = selected_ticket(state)?;
            open(PromptKind::ReplyTicket {
                ticket_id: ticket.id.clone(),
            })
        }

        (Page::Analytics, 't') => Some(Action::CycleTrendRange),
        _ => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state
///
/// - Open prompt: captures every key
/// - Global keys (q, r)
/// - ESC: close one drill-down level, then leave the page content
/// - Number keys jump to menu entries
/// - Menu focus: Up/Down move, Right/Enter enter the page
/// - Content focus: list movement plus per-page command letters
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let page = state.navigation.current_page;
    let content_focused = state.navigation.content_focused;

    trace!(
        "KEY: {:?} (page={:?}, content_focused={}, prompt_open={})",
        key.code,
        page,
        content_focused,
        state.ui.prompt.is_some()
    );

    if state.ui.prompt.is_some() {
        return handle_prompt_keys(key);
    }

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    if key.code == KeyCode::Esc {
        if content_focused {
            return Some(Action::NavigateUp);
        }
        debug!("KEY: ESC pressed on menu - ignoring (use 'q' to quit)");
        return None;
    }

    if let Some(action) = handle_number_keys(key.code, state) {
        return Some(action);
    }

    if !content_focused {
        return handle_menu_navigation(key.code);
    }

    handle_list_keys(key.code, page).or_else(|| handle_page_keys(key.code, state))
}
