use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::announcement::AnnouncementBoard;
use crate::coach::CoachRoster;
use crate::event::EventSchedule;
use crate::registration::RegistrationForms;
use crate::sports::SportRegistry;
use crate::staff::StaffDirectory;
use crate::support::SupportDesk;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::reducers::selection::clamp_selections;
use crate::tui::state::{AppState, LoadingKey};

/// Handle all data loading actions (repository responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RefreshData => Ok(handle_refresh_data(state)),
        Action::SportsLoaded(result) => Ok(store(state, LoadingKey::Sports, result, |s, v| {
            s.data.sports = Arc::new(v);
            let sports = s.data.sports.clone();
            s.ui.registrations.drill.prune(&sports);
            s.ui.screening.drill.prune(&sports);
        })),
        Action::FormsLoaded(result) => Ok(store(state, LoadingKey::Forms, result, |s, v| {
            s.data.forms = Arc::new(RegistrationForms::new(v));
        })),
        Action::SeasonsLoaded(result) => Ok(store(state, LoadingKey::Seasons, result, |s, v| {
            s.data.seasons = Arc::new(v);
        })),
        Action::AnnouncementsLoaded(result) => {
            Ok(store(state, LoadingKey::Announcements, result, |s, v| {
                s.data.announcements = Arc::new(AnnouncementBoard::new(v));
            }))
        }
        Action::CoachesLoaded(result) => Ok(store(state, LoadingKey::Coaches, result, |s, v| {
            s.data.coaches = Arc::new(CoachRoster::new(v));
        })),
        Action::EventsLoaded(result) => Ok(store(state, LoadingKey::Events, result, |s, v| {
            s.data.events = Arc::new(EventSchedule::new(v));
        })),
        Action::SalesLoaded(result) => Ok(store(state, LoadingKey::Sales, result, |s, v| {
            s.data.sales = Arc::new(Some(v));
        })),
        Action::RegistryLoaded(result) => Ok(store(state, LoadingKey::Registry, result, |s, v| {
            s.data.registry = Arc::new(SportRegistry::new(v));
        })),
        Action::StaffLoaded(result) => Ok(store(state, LoadingKey::Staff, result, |s, v| {
            s.data.staff = Arc::new(StaffDirectory::new(v));
        })),
        Action::TicketsLoaded(result) => Ok(store(state, LoadingKey::Tickets, result, |s, v| {
            s.data.tickets = Arc::new(SupportDesk::new(v));
        })),
        Action::MutationCompleted { reload, result } => {
            Ok(handle_mutation_completed(state, *reload, result))
        }
        _ => Err(state),
    }
}

fn handle_refresh_data(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.system.last_refresh = Some(SystemTime::now());
    new_state.data.loading.extend(LoadingKey::all());
    let fetches = LoadingKey::all().into_iter().map(Effect::Fetch).collect();
    (new_state, Effect::Batch(fetches))
}

/// Apply a load result: store it on success, record the error otherwise
fn store<T: Clone>(
    state: AppState,
    key: LoadingKey,
    result: &Result<T, String>,
    apply: impl FnOnce(&mut AppState, T),
) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading.remove(&key);

    match result {
        Ok(value) => {
            debug!("DATA: Loaded {:?}", key);
            apply(&mut new_state, value.clone());
            new_state.data.errors.remove(&key);
            clamp_selections(&mut new_state);
        }
        Err(e) => {
            warn!("DATA: Failed to load {:?}: {}", key, e);
            new_state.data.errors.insert(key, e.clone());
            new_state
                .system
                .set_status_error_message(format!("Failed to load {:?}: {}", key, e));
        }
    }
    (new_state, Effect::None)
}

fn handle_mutation_completed(
    state: AppState,
    reload: LoadingKey,
    result: &Result<String, String>,
) -> (AppState, Effect) {
    let mut new_state = state;
    match result {
        Ok(message) => {
            new_state.system.set_status_message(message.clone());
            new_state.data.loading.insert(reload);
            (new_state, Effect::Fetch(reload))
        }
        Err(e) => {
            warn!("DATA: Mutation failed: {}", e);
            new_state.system.set_status_error_message(e.clone());
            (new_state, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drilldown::Level;
    use crate::fixtures;
    use crate::session::{Page, Role};
    use crate::tui::testing::{focused_state, seeded_state};

    #[test]
    fn test_refresh_marks_everything_loading() {
        let (state, effect) = handle_refresh_data(seeded_state(Role::Admin));

        assert!(state.system.last_refresh.is_some());
        assert_eq!(state.data.loading.len(), LoadingKey::all().len());
        match effect {
            Effect::Batch(all) => assert!(all
                .iter()
                .all(|e| matches!(e, Effect::Fetch(_)))),
            _ => panic!("Expected batch of fetches"),
        }
    }

    #[test]
    fn test_sports_reload_prunes_vanished_selection() {
        let mut state = focused_state(Role::Admin);
        let sports = state.data.sports.clone();
        state.ui.screening.drill.open_sport("Volleyball", &sports).unwrap();
        state.ui.screening.drill.open_school("USI", &sports).unwrap();
        state.data.loading.insert(LoadingKey::Sports);

        let mut reloaded = fixtures::create_sport_groups();
        reloaded[1].schools.retain(|s| s.school_code != "USI");
        let action = Action::SportsLoaded(Ok(reloaded));
        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        let drill = &state.ui.screening.drill;
        assert_eq!(drill.depth(), 1);
        assert_eq!(drill.selected(Level::Sport), Some("Volleyball"));
        assert!(!state.data.loading.contains(&LoadingKey::Sports));
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let state = seeded_state(Role::Admin);
        let action = Action::CoachesLoaded(Err("store offline".to_string()));

        let (state, _) = reduce_data_loading(state, &action).ok().unwrap();

        assert_eq!(state.data.coaches.all().len(), 2);
        assert_eq!(
            state.data.errors.get(&LoadingKey::Coaches).map(String::as_str),
            Some("store offline")
        );
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_shrinking_list_clamps_cursor() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Seasons;
        state.ui.seasons.selected = 3;

        let mut seasons = fixtures::create_seasons();
        seasons.truncate(2);
        let (state, _) = reduce_data_loading(state, &Action::SeasonsLoaded(Ok(seasons)))
            .ok()
            .unwrap();

        assert_eq!(state.ui.seasons.selected, 1);
    }

    #[test]
    fn test_staff_reload_replaces_directory() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::UserManagement;
        state.ui.staff.selected = 1;
        state.data.loading.insert(LoadingKey::Staff);

        let mut accounts = fixtures::create_staff_accounts();
        accounts.truncate(1);
        let (state, _) = reduce_data_loading(state, &Action::StaffLoaded(Ok(accounts)))
            .ok()
            .unwrap();

        assert_eq!(state.data.staff.all().len(), 1);
        assert_eq!(state.ui.staff.selected, 0);
        assert!(!state.data.loading.contains(&LoadingKey::Staff));
    }

    #[test]
    fn test_mutation_success_reloads_dataset() {
        let action = Action::MutationCompleted {
            reload: LoadingKey::Seasons,
            result: Ok("Deleted Season 4".to_string()),
        };
        let (state, effect) = reduce_data_loading(seeded_state(Role::Admin), &action)
            .ok()
            .unwrap();

        assert!(matches!(effect, Effect::Fetch(LoadingKey::Seasons)));
        assert_eq!(state.system.status_message.as_deref(), Some("Deleted Season 4"));
        assert!(!state.system.status_is_error);
    }

    #[test]
    fn test_mutation_failure_sets_error_status() {
        let action = Action::MutationCompleted {
            reload: LoadingKey::Seasons,
            result: Err("No season with id '99'".to_string()),
        };
        let (state, effect) = reduce_data_loading(seeded_state(Role::Admin), &action)
            .ok()
            .unwrap();

        assert!(matches!(effect, Effect::None));
        assert!(state.system.status_is_error);
    }
}
