use tracing::debug;

use crate::announcement::Audience;
use crate::season::SeasonStatus;
use crate::session::Page;
use crate::tui::action::{Action, Mutation};
use crate::tui::effects::Effect;
use crate::tui::helpers::{
    selected_announcement, selected_coach, selected_season, selected_sport_definition,
    selected_staff,
};
use crate::tui::state::AppState;

/// Handle single-key commands on the list pages
pub fn reduce_pages(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::ToggleSeasonEnded => Ok(season_command(state, Mutation::ToggleSeasonEnded)),
        Action::SetSeasonActive => Ok(season_command(state, |id| Mutation::SetSeasonStatus {
            id,
            status: SeasonStatus::Active,
        })),
        Action::DeleteSelectedSeason => Ok(season_command(state, Mutation::DeleteSeason)),
        Action::TogglePin => Ok(announcement_command(state, Mutation::ToggleAnnouncementPin)),
        Action::DeleteSelectedAnnouncement => {
            Ok(announcement_command(state, Mutation::DeleteAnnouncement))
        }
        Action::CycleAudienceFilter => Ok(cycle_audience_filter(state)),
        Action::RemoveSelectedCoach => Ok(remove_selected_coach(state)),
        Action::DeleteSelectedSport => Ok(guarded(
            state,
            Page::Sports,
            |s| selected_sport_definition(s).map(|x| x.id),
            Mutation::DeleteSport,
        )),
        Action::RemoveSelectedStaff => Ok(guarded(
            state,
            Page::UserManagement,
            |s| selected_staff(s).map(|x| x.id),
            Mutation::RemoveStaff,
        )),
        Action::ClearCoachSearch => Ok(clear_coach_search(state)),
        Action::CycleEventSport => Ok(cycle_event_sport(state)),
        Action::CycleTrendRange => Ok(cycle_trend_range(state)),
        _ => Err(state),
    }
}

/// Turn a command on the highlighted row of `page` into a mutation
fn guarded(
    state: AppState,
    page: Page,
    id_of: impl FnOnce(&AppState) -> Option<u32>,
    mutation: impl FnOnce(u32) -> Mutation,
) -> (AppState, Effect) {
    let mut new_state = state;
    if !new_state.can_manage(page) {
        new_state
            .system
            .set_status_error_message(format!("{} is read-only for this role", page));
        return (new_state, Effect::None);
    }
    match id_of(&new_state) {
        Some(id) => {
            let mutation = mutation(id);
            debug!("PAGES: {:?}", mutation);
            (new_state, Effect::Mutate(mutation))
        }
        None => (new_state, Effect::None),
    }
}

fn season_command(state: AppState, mutation: impl FnOnce(u32) -> Mutation) -> (AppState, Effect) {
    guarded(state, Page::Seasons, |s| selected_season(s).map(|x| x.id), mutation)
}

/// Announcements are managed from the admin home and the announcements page
fn announcement_command(
    state: AppState,
    mutation: impl FnOnce(u32) -> Mutation,
) -> (AppState, Effect) {
    let page = match state.navigation.current_page {
        Page::Home => Page::Home,
        _ => Page::Announcements,
    };
    guarded(
        state,
        page,
        |s| selected_announcement(s).map(|a| a.id),
        mutation,
    )
}

/// Home list filter: every audience, then each audience on its own
fn cycle_audience_filter(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let home = &mut new_state.ui.home;
    home.audience = match home.audience {
        None => Some(Audience::All),
        Some(Audience::All) => Some(Audience::SchoolsCoaches),
        Some(Audience::SchoolsCoaches) => None,
    };
    debug!("PAGES: Home audience filter -> {:?}", home.audience);
    home.list.selected = 0;
    (new_state, Effect::None)
}

fn remove_selected_coach(state: AppState) -> (AppState, Effect) {
    guarded(
        state,
        Page::Coaches,
        |s| selected_coach(s).map(|c| c.id),
        Mutation::RemoveCoach,
    )
}

fn clear_coach_search(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.coaches.query.clear();
    new_state.ui.coaches.sport = None;
    new_state.ui.coaches.list.selected = 0;
    (new_state, Effect::None)
}

/// Step the event filter through the sport options, wrapping to "all"
fn cycle_event_sport(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let mut options = new_state.data.events.sport_options();
    if options.is_empty() {
        return (new_state, Effect::None);
    }

    let current = options
        .iter()
        .position(|o| *o == new_state.ui.events.sport)
        .unwrap_or(0);
    let next = options.swap_remove((current + 1) % options.len());
    debug!("PAGES: Event filter -> {}", next);
    new_state.ui.events.sport = next;
    new_state.ui.events.list.selected = 0;
    (new_state, Effect::None)
}

fn cycle_trend_range(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.analytics.range = new_state.ui.analytics.range.next();
    (new_state, Effect::None)
}
