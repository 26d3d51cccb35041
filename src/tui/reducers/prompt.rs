use tracing::debug;

use crate::announcement::{Audience, AnnouncementDraft, ADMIN_AUTHOR};
use crate::coach::CoachDraft;
use crate::error::LeagueError;
use crate::event::{parse_ticket_rows, EventDraft, NewEvent};
use crate::registration::parse_deadline;
use crate::review::Decision;
use crate::season::{SeasonDraft, SeasonStatus};
use crate::session::Page;
use crate::sports::SportDraft;
use crate::staff::{StaffDraft, StaffStatus};
use crate::tui::action::{Action, Mutation};
use crate::tui::effects::Effect;
use crate::tui::state::AppState;
use crate::tui::types::{Prompt, PromptKind};

/// Handle the modal prompt: typing, field focus, submit and cancel
pub fn reduce_prompt(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::OpenPrompt(prompt) => Ok(open_prompt(state, prompt)),
        Action::PromptInput(c) => Ok(edit_prompt(state, |p| p.push_char(*c))),
        Action::PromptBackspace => Ok(edit_prompt(state, Prompt::backspace)),
        Action::PromptNextField => Ok(edit_prompt(state, Prompt::next_field)),
        Action::PromptCancel => {
            let mut new_state = state;
            new_state.ui.prompt = None;
            Ok((new_state, Effect::None))
        }
        Action::PromptSubmit => Ok(submit_prompt(state)),
        _ => Err(state),
    }
}

fn open_prompt(state: AppState, prompt: &Prompt) -> (AppState, Effect) {
    let mut new_state = state;
    let page = new_state.navigation.current_page;
    if prompt.kind != PromptKind::SearchCoaches && !new_state.can_manage(page) {
        new_state
            .system
            .set_status_error_message(format!("{} is read-only for this role", page));
        return (new_state, Effect::None);
    }
    new_state.ui.prompt = Some(prompt.clone());
    (new_state, Effect::None)
}

fn edit_prompt(state: AppState, edit: impl FnOnce(&mut Prompt)) -> (AppState, Effect) {
    let mut new_state = state;
    if let Some(prompt) = new_state.ui.prompt.as_mut() {
        edit(prompt);
    }
    (new_state, Effect::None)
}

/// What a submitted prompt turns into
enum Submission {
    Mutate(Mutation),
    /// Handled in the reducer without touching the repository
    Local,
}

fn submit_prompt(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let Some(mut prompt) = new_state.ui.prompt.take() else {
        return (new_state, Effect::None);
    };

    match build_submission(&mut new_state, &prompt) {
        Ok(Submission::Mutate(mutation)) => {
            debug!("PROMPT: {} submitted", prompt.kind.title());
            (new_state, Effect::Mutate(mutation))
        }
        Ok(Submission::Local) => (new_state, Effect::None),
        Err(message) => {
            // Keep the form open with what was typed
            prompt.error = Some(message);
            new_state.ui.prompt = Some(prompt);
            (new_state, Effect::None)
        }
    }
}

fn build_submission(state: &mut AppState, prompt: &Prompt) -> Result<Submission, String> {
    let mutation = match &prompt.kind {
        PromptKind::DeclineTeam { team_id } => Mutation::ReviewTeam {
            team_id: team_id.clone(),
            decision: Decision::decline(prompt.value(0)).map_err(|e| e.to_string())?,
        },
        PromptKind::DeclinePlayer { player_id } => Mutation::ReviewPlayer {
            player_id: player_id.clone(),
            decision: Decision::decline(prompt.value(0)).map_err(|e| e.to_string())?,
        },
        PromptKind::NewSeason => Mutation::CreateSeason(season_draft(prompt)?),
        PromptKind::EditSeason { season_id } => Mutation::EditSeason {
            id: *season_id,
            draft: season_draft(prompt)?,
        },
        PromptKind::NewAnnouncement => {
            let audience = parse_audience(prompt.value(2))?;
            let draft =
                AnnouncementDraft::new(prompt.value(0), prompt.value(1)).for_audience(audience);
            // Posts from the admin home are signed by the office, not the login
            if state.navigation.current_page == Page::Home {
                Mutation::CreateAnnouncement(draft.signed(ADMIN_AUTHOR))
            } else {
                Mutation::CreateAnnouncement(draft)
            }
        }
        PromptKind::EditAnnouncement { announcement_id } => {
            let audience = parse_audience(prompt.value(2))?;
            let mut draft =
                AnnouncementDraft::new(prompt.value(0), prompt.value(1)).for_audience(audience);
            if let Some(pinned) = parse_yes_no("Pinned", prompt.value(3))? {
                draft = draft.pinned(pinned);
            }
            Mutation::EditAnnouncement {
                id: *announcement_id,
                draft,
            }
        }
        PromptKind::AddCoach => Mutation::AddCoach(coach_draft(prompt)),
        PromptKind::EditCoach { coach_id } => Mutation::EditCoach {
            id: *coach_id,
            draft: coach_draft(prompt),
        },
        PromptKind::AssignCoachSports { coach_id } => Mutation::AssignCoachSports {
            id: *coach_id,
            sports: split_list(prompt.value(0)),
        },
        PromptKind::SearchCoaches => {
            let ui = &mut state.ui.coaches;
            ui.query = prompt.value(0).trim().to_string();
            let sport = prompt.value(1).trim();
            ui.sport = (!sport.is_empty()).then(|| sport.to_string());
            ui.list.selected = 0;
            return Ok(Submission::Local);
        }
        PromptKind::NewEvent => Mutation::CreateEvent(new_event(prompt)?),
        PromptKind::EditEvent { event_id } => {
            let raw_date = prompt.value(2).trim();
            if raw_date.is_empty() {
                return Err(LeagueError::MissingField("Event date").to_string());
            }
            let date = parse_deadline(raw_date).map_err(|e| e.to_string())?;
            Mutation::EditEvent {
                id: *event_id,
                draft: EventDraft {
                    name: prompt.value(0).to_string(),
                    sport: prompt.value(1).to_string(),
                    date,
                    time: prompt.value(3).to_string(),
                    venue: prompt.value(4).to_string(),
                },
            }
        }
        PromptKind::ChangeVenue { event_id } => Mutation::ChangeEventVenue {
            id: *event_id,
            venue: prompt.value(0).to_string(),
        },
        PromptKind::RecordResult { event_id } => Mutation::RecordEventResult {
            id: *event_id,
            result: prompt.value(0).to_string(),
        },
        PromptKind::NewRegistrationForm => {
            let deadline = prompt.value(1).trim();
            parse_deadline(deadline).map_err(|e| e.to_string())?;
            Mutation::CreateRegistrationForm {
                sport: prompt.value(0).trim().to_string(),
                deadline: deadline.to_string(),
            }
        }
        PromptKind::NewSport => Mutation::CreateSport(sport_draft(prompt)?),
        PromptKind::EditSport { sport_id } => Mutation::EditSport {
            id: *sport_id,
            draft: sport_draft(prompt)?,
        },
        PromptKind::AddStaff => Mutation::AddStaff(staff_draft(prompt)),
        PromptKind::EditStaff { staff_id } => {
            let raw = prompt.value(4).trim();
            let status = StaffStatus::parse(raw)
                .ok_or_else(|| format!("Unknown status '{}' (use active or inactive)", raw))?;
            Mutation::EditStaff {
                id: *staff_id,
                draft: staff_draft(prompt).with_status(status),
            }
        }
        PromptKind::ReplyTicket { ticket_id } => Mutation::ReplyToTicket {
            id: ticket_id.clone(),
            text: prompt.value(0).to_string(),
        },
    };
    Ok(Submission::Mutate(mutation))
}

/// Title, status and optional dates; a blank status means upcoming
fn season_draft(prompt: &Prompt) -> Result<SeasonDraft, String> {
    let raw_status = prompt.value(1).trim();
    let status = if raw_status.is_empty() {
        SeasonStatus::Upcoming
    } else {
        SeasonStatus::parse(raw_status)
            .ok_or_else(|| format!("Unknown season status '{}'", raw_status))?
    };
    let date = |index: usize| -> Result<_, String> {
        let raw = prompt.value(index).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_deadline(raw).map(Some).map_err(|e| e.to_string())
    };
    Ok(SeasonDraft::new(prompt.value(0), status).with_dates(date(2)?, date(3)?))
}

/// Create-event form. The date is checked here; everything else is left
/// to the schedule so errors come back in form order.
fn new_event(prompt: &Prompt) -> Result<NewEvent, String> {
    let raw_date = prompt.value(2).trim();
    let date = if raw_date.is_empty() {
        None
    } else {
        Some(parse_deadline(raw_date).map_err(|e| e.to_string())?)
    };
    Ok(NewEvent {
        name: prompt.value(0).to_string(),
        sport: prompt.value(1).to_string(),
        date,
        time: prompt.value(3).to_string(),
        venue: prompt.value(4).to_string(),
        location: prompt.value(5).to_string(),
        team_a: prompt.value(6).to_string(),
        team_b: prompt.value(7).to_string(),
        participants: split_list(prompt.value(8)),
        tickets: parse_ticket_rows(prompt.value(9)),
    })
}

fn coach_draft(prompt: &Prompt) -> CoachDraft {
    CoachDraft::new(prompt.value(0), prompt.value(1), prompt.value(2))
        .with_sports(split_list(prompt.value(3)))
}

fn sport_draft(prompt: &Prompt) -> Result<SportDraft, String> {
    let jersey = parse_yes_no("Jersey number required", prompt.value(2))?.unwrap_or(false);
    let position = parse_yes_no("Position required", prompt.value(3))?.unwrap_or(false);
    Ok(SportDraft::new(prompt.value(0), prompt.value(1)).requiring(jersey, position))
}

fn staff_draft(prompt: &Prompt) -> StaffDraft {
    StaffDraft::new(prompt.value(0), prompt.value(1), prompt.value(2), prompt.value(3))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank means "leave as is"
fn parse_yes_no(field: &str, raw: &str) -> Result<Option<bool>, String> {
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "y" | "yes" => Ok(Some(true)),
        "n" | "no" => Ok(Some(false)),
        other => Err(format!("{}: expected y or n, got '{}'", field, other)),
    }
}

fn parse_audience(raw: &str) -> Result<Audience, String> {
    match raw.trim().to_lowercase().as_str() {
        "" | "all" => Ok(Audience::All),
        "schools" | "coaches" => Ok(Audience::SchoolsCoaches),
        other => Err(format!("Unknown audience '{}' (use all or schools)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::tui::testing::focused_state;
    use chrono::NaiveDate;

    fn with_prompt(prompt: Prompt) -> AppState {
        let mut state = focused_state(Role::Admin);
        state.ui.prompt = Some(prompt);
        state
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let state = with_prompt(Prompt::new(PromptKind::NewRegistrationForm));
        let (state, _) = reduce_prompt(state, &Action::PromptInput('B')).ok().unwrap();
        let (state, _) = reduce_prompt(state, &Action::PromptNextField).ok().unwrap();
        let (state, _) = reduce_prompt(state, &Action::PromptInput('2')).ok().unwrap();

        let prompt = state.ui.prompt.unwrap();
        assert_eq!(prompt.value(0), "B");
        assert_eq!(prompt.value(1), "2");
    }

    #[test]
    fn test_short_decline_reason_keeps_prompt_open() {
        let prompt = Prompt::new(PromptKind::DeclineTeam {
            team_id: "b-ncf-001".to_string(),
        })
        .with_value(0, "  bad docs ");

        let (state, effect) = submit_prompt(with_prompt(prompt));

        assert!(matches!(effect, Effect::None));
        let prompt = state.ui.prompt.unwrap();
        assert_eq!(prompt.value(0), "  bad docs ");
        assert!(prompt.error.is_some());
    }

    #[test]
    fn test_valid_decline_becomes_review_mutation() {
        let prompt = Prompt::new(PromptKind::DeclinePlayer {
            player_id: "p-001".to_string(),
        })
        .with_value(0, "  Missing birth certificate  ");

        let (state, effect) = submit_prompt(with_prompt(prompt));

        assert!(state.ui.prompt.is_none());
        match effect {
            Effect::Mutate(Mutation::ReviewPlayer {
                player_id,
                decision: Decision::Decline(reason),
            }) => {
                assert_eq!(player_id, "p-001");
                assert_eq!(reason.as_str(), "Missing birth certificate");
            }
            _ => panic!("Expected decline mutation"),
        }
    }

    #[test]
    fn test_new_season_parses_status_and_dates() {
        let prompt = Prompt::new(PromptKind::NewSeason)
            .with_value(0, "Season 8")
            .with_value(1, "Upcoming")
            .with_value(2, "2026-01-12");

        let (_, effect) = submit_prompt(with_prompt(prompt));

        match effect {
            Effect::Mutate(Mutation::CreateSeason(draft)) => {
                assert_eq!(draft.title, "Season 8");
                assert_eq!(draft.status, SeasonStatus::Upcoming);
                assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2026, 1, 12));
                assert_eq!(draft.end_date, None);
            }
            _ => panic!("Expected create season"),
        }
    }

    #[test]
    fn test_bad_date_is_reported_in_prompt() {
        let prompt = Prompt::new(PromptKind::NewRegistrationForm)
            .with_value(0, "Volleyball")
            .with_value(1, "31/08/2025");

        let (state, _) = submit_prompt(with_prompt(prompt));

        assert!(state.ui.prompt.unwrap().error.is_some());
    }

    #[test]
    fn test_coach_sports_are_split() {
        let prompt = Prompt::new(PromptKind::AddCoach)
            .with_value(0, "Ana Reyes")
            .with_value(1, "ana@school.edu")
            .with_value(2, "ZX81QW22")
            .with_value(3, "Basketball - Junior, , Volleyball Men");

        let (_, effect) = submit_prompt(with_prompt(prompt));

        match effect {
            Effect::Mutate(Mutation::AddCoach(draft)) => {
                assert_eq!(draft.sports, vec!["Basketball - Junior", "Volleyball Men"]);
            }
            _ => panic!("Expected add coach"),
        }
    }

    #[test]
    fn test_search_applies_locally() {
        let mut state = with_prompt(
            Prompt::new(PromptKind::SearchCoaches)
                .with_value(0, " maria ")
                .with_value(1, ""),
        );
        state.ui.coaches.list.selected = 1;

        let (state, effect) = submit_prompt(state);

        assert!(matches!(effect, Effect::None));
        assert!(state.ui.prompt.is_none());
        assert_eq!(state.ui.coaches.query, "maria");
        assert_eq!(state.ui.coaches.sport, None);
        assert_eq!(state.ui.coaches.list.selected, 0);
    }

    #[test]
    fn test_read_only_role_cannot_open_forms() {
        let mut state = focused_state(Role::Staff);
        state.navigation.current_page = crate::session::Page::Announcements;

        let (state, _) = open_prompt(state, &Prompt::new(PromptKind::NewAnnouncement));

        assert!(state.ui.prompt.is_none());
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_cancel_drops_prompt() {
        let state = with_prompt(Prompt::new(PromptKind::NewAnnouncement).with_value(0, "Hi"));
        let (state, _) = reduce_prompt(state, &Action::PromptCancel).ok().unwrap();
        assert!(state.ui.prompt.is_none());
    }

    #[test]
    fn test_edit_season_reuses_season_fields() {
        let prompt = Prompt::new(PromptKind::EditSeason { season_id: 3 })
            .with_values(["Season 3", "ended", "2024-06-01", "2024-09-30"]);

        let (_, effect) = submit_prompt(with_prompt(prompt));

        match effect {
            Effect::Mutate(Mutation::EditSeason { id, draft }) => {
                assert_eq!(id, 3);
                assert_eq!(draft.status, SeasonStatus::Ended);
                assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2024, 9, 30));
            }
            _ => panic!("Expected edit season"),
        }
    }

    #[test]
    fn test_home_posts_are_signed_by_admin() {
        let prompt = Prompt::new(PromptKind::NewAnnouncement)
            .with_values(["Gym closed", "Maintenance on Friday", "schools"]);
        let mut state = with_prompt(prompt.clone());
        state.navigation.current_page = Page::Home;

        match submit_prompt(state).1 {
            Effect::Mutate(Mutation::CreateAnnouncement(draft)) => {
                assert_eq!(draft.author.as_deref(), Some(ADMIN_AUTHOR));
                assert_eq!(draft.audience, Some(Audience::SchoolsCoaches));
            }
            _ => panic!("Expected create announcement"),
        }

        let mut state = with_prompt(prompt);
        state.navigation.current_page = Page::Announcements;
        match submit_prompt(state).1 {
            Effect::Mutate(Mutation::CreateAnnouncement(draft)) => assert_eq!(draft.author, None),
            _ => panic!("Expected create announcement"),
        }
    }

    #[test]
    fn test_edit_announcement_reads_pin_flag() {
        let prompt = Prompt::new(PromptKind::EditAnnouncement { announcement_id: 2 })
            .with_values(["Title", "Body", "schools", "y"]);
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::EditAnnouncement { id, draft }) => {
                assert_eq!(id, 2);
                assert_eq!(draft.pinned, Some(true));
            }
            _ => panic!("Expected edit announcement"),
        }

        let prompt = Prompt::new(PromptKind::EditAnnouncement { announcement_id: 2 })
            .with_values(["Title", "Body", "all", "maybe"]);
        let (state, effect) = submit_prompt(with_prompt(prompt));
        assert!(matches!(effect, Effect::None));
        assert!(state.ui.prompt.unwrap().error.unwrap().starts_with("Pinned"));
    }

    #[test]
    fn test_coach_edit_and_sport_assignment() {
        let prompt = Prompt::new(PromptKind::EditCoach { coach_id: 1 })
            .with_values(["Maria Santos", "maria@school.edu", "ABCD2345", "Basketball"]);
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::EditCoach { id, draft }) => {
                assert_eq!(id, 1);
                assert_eq!(draft.sports, vec!["Basketball"]);
            }
            _ => panic!("Expected edit coach"),
        }

        let prompt = Prompt::new(PromptKind::AssignCoachSports { coach_id: 2 })
            .with_value(0, "Volleyball Men,Cheer & Dance ,");
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::AssignCoachSports { id, sports }) => {
                assert_eq!(id, 2);
                assert_eq!(sports, vec!["Volleyball Men", "Cheer & Dance"]);
            }
            _ => panic!("Expected sport assignment"),
        }
    }

    #[test]
    fn test_new_event_collects_lineup_and_tickets() {
        let prompt = Prompt::new(PromptKind::NewEvent).with_values([
            "Cheer Finals",
            "Cheer & Dance",
            "2025-10-04",
            "6:00PM",
            "Coliseum",
            "Naga City",
            "",
            "",
            "NCF Pep, ADNU Pep",
            "Patron:A:50:500; Bleachers:300:80",
        ]);

        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::CreateEvent(draft)) => {
                assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 10, 4));
                assert_eq!(draft.participants, vec!["NCF Pep", "ADNU Pep"]);
                assert_eq!(draft.tickets.len(), 2);
                assert_eq!(draft.tickets[1].side, "");
            }
            _ => panic!("Expected create event"),
        }
    }

    #[test]
    fn test_new_event_blank_date_is_left_to_validation() {
        let prompt = Prompt::new(PromptKind::NewEvent).with_value(0, "Finals");
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::CreateEvent(draft)) => assert_eq!(draft.date, None),
            _ => panic!("Expected create event"),
        }
    }

    #[test]
    fn test_edit_event_requires_date() {
        let prompt = Prompt::new(PromptKind::EditEvent { event_id: 1 })
            .with_values(["Finals", "Basketball", "", "3:00PM", "Coliseum"]);

        let (state, _) = submit_prompt(with_prompt(prompt));

        assert_eq!(
            state.ui.prompt.unwrap().error.as_deref(),
            Some("Event date is required")
        );
    }

    #[test]
    fn test_sport_and_staff_forms() {
        let prompt = Prompt::new(PromptKind::NewSport)
            .with_values(["Futsal", "5v5 indoor football", "yes", ""]);
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::CreateSport(draft)) => {
                assert!(draft.require_jersey_number);
                assert!(!draft.require_position);
            }
            _ => panic!("Expected create sport"),
        }

        let prompt = Prompt::new(PromptKind::EditStaff { staff_id: 2 })
            .with_values(["Maria", "Usher", "m@bucal.ph", "XYZ789", "Active"]);
        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::EditStaff { id, draft }) => {
                assert_eq!(id, 2);
                assert_eq!(draft.status, StaffStatus::Active);
            }
            _ => panic!("Expected edit staff"),
        }

        let prompt = Prompt::new(PromptKind::EditStaff { staff_id: 2 })
            .with_values(["Maria", "Usher", "m@bucal.ph", "XYZ789", "retired"]);
        assert!(submit_prompt(with_prompt(prompt)).0.ui.prompt.is_some());
    }

    #[test]
    fn test_ticket_reply_keeps_ticket_id() {
        let prompt = Prompt::new(PromptKind::ReplyTicket {
            ticket_id: "T-1001".to_string(),
        })
        .with_value(0, "Resent your QR code");

        match submit_prompt(with_prompt(prompt)).1 {
            Effect::Mutate(Mutation::ReplyToTicket { id, text }) => {
                assert_eq!(id, "T-1001");
                assert_eq!(text, "Resent your QR code");
            }
            _ => panic!("Expected ticket reply"),
        }
    }

    #[test]
    fn test_parse_audience() {
        assert_eq!(parse_audience(""), Ok(Audience::All));
        assert_eq!(parse_audience(" Schools"), Ok(Audience::SchoolsCoaches));
        assert!(parse_audience("parents").is_err());
    }
}
