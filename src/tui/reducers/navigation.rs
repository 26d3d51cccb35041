use tracing::{debug, trace};

use crate::session::Page;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

/// Handle side-menu and focus actions
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigatePage(page) => Ok(navigate_to_page(state, *page)),
        Action::NavigateMenuUp => Ok(step_menu(state, -1)),
        Action::NavigateMenuDown => Ok(step_menu(state, 1)),
        Action::EnterContentFocus => Ok(enter_content_focus(state)),
        Action::ExitContentFocus => Ok(exit_content_focus(state)),
        Action::NavigateUp => Ok(navigate_up(state)),
        _ => Err(state),
    }
}

fn navigate_to_page(state: AppState, page: Page) -> (AppState, Effect) {
    let mut new_state = state;
    if !new_state.menu().contains(&page) {
        debug!("NAV: {} is not in the {:?} menu", page, new_state.system.role);
        new_state
            .system
            .set_status_error_message(format!("{} is not available to this role", page));
        return (new_state, Effect::None);
    }
    trace!("NAV: Navigating to {}", page);
    new_state.navigation.current_page = page;
    new_state.navigation.content_focused = false;
    (new_state, Effect::None)
}

/// Move through the menu, wrapping at both ends
fn step_menu(state: AppState, delta: isize) -> (AppState, Effect) {
    let mut new_state = state;
    let menu = new_state.menu();
    if menu.is_empty() {
        return (new_state, Effect::None);
    }
    let current = menu
        .iter()
        .position(|p| *p == new_state.navigation.current_page)
        .unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(menu.len() as isize) as usize;
    new_state.navigation.current_page = menu[next];
    new_state.navigation.content_focused = false;
    (new_state, Effect::None)
}

fn enter_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Entering content of {}", state.navigation.current_page);
    let mut new_state = state;
    new_state.navigation.content_focused = true;
    (new_state, Effect::None)
}

fn exit_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Returning to menu");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}

/// ESC: close the deepest drill-down level, else leave the content
fn navigate_up(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let page = new_state.navigation.current_page;
    let drill_state = match page {
        Page::Registrations => Some(&mut new_state.ui.registrations),
        Page::Screening => Some(&mut new_state.ui.screening),
        _ => None,
    };

    if let Some(drill_state) = drill_state {
        if drill_state.drill.back().is_some() {
            debug!("NAVIGATE_UP: Closed one {} level", page);
            drill_state.selected = 0;
            return (new_state, Effect::None);
        }
    }

    if new_state.navigation.content_focused {
        return exit_content_focus(new_state);
    }

    debug!("NAVIGATE_UP: Already at top level, ignoring");
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::tui::testing::{focused_state, seeded_state};

    #[test]
    fn test_menu_navigation_wraps() {
        let state = seeded_state(Role::Staff);
        assert_eq!(state.navigation.current_page, Page::Announcements);

        let (state, _) = step_menu(state, 1);
        assert_eq!(state.navigation.current_page, Page::Events);
        let (state, _) = step_menu(state, 1);
        assert_eq!(state.navigation.current_page, Page::Announcements);
        let (state, _) = step_menu(state, -1);
        assert_eq!(state.navigation.current_page, Page::Events);
    }

    #[test]
    fn test_navigate_to_page_outside_menu_is_rejected() {
        let state = seeded_state(Role::Coach);
        let (state, _) = navigate_to_page(state, Page::Analytics);

        assert_eq!(state.navigation.current_page, Page::Announcements);
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_navigate_up_closes_one_level_then_leaves_content() {
        let mut state = focused_state(Role::Admin);
        let sports = state.data.sports.clone();
        state.ui.screening.drill.open_sport("Basketball", &sports).unwrap();
        state.ui.screening.drill.open_school("ADNU", &sports).unwrap();
        state.navigation.current_page = Page::Screening;
        state.ui.screening.selected = 3;

        let (state, _) = navigate_up(state);
        assert_eq!(state.ui.screening.drill.depth(), 1);
        assert_eq!(state.ui.screening.selected, 0);
        assert!(state.navigation.content_focused);

        let (state, _) = navigate_up(state);
        let (state, _) = navigate_up(state);
        assert!(state.ui.screening.drill.is_at_root());
        assert!(!state.navigation.content_focused);
    }

    #[test]
    fn test_unrelated_action_is_passed_on() {
        let state = seeded_state(Role::Admin);
        assert!(reduce_navigation(state, &Action::SelectNext).is_err());
    }
}
