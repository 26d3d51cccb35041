use tracing::debug;

use crate::session::Page;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::helpers::{drill_rows, row_count};
use crate::tui::state::AppState;

/// Handle row movement and drill-in on the current page
pub fn reduce_selection(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectNext => Ok(move_selection(state, 1)),
        Action::SelectPrevious => Ok(move_selection(state, -1)),
        Action::ActivateSelection => Ok(activate_selection(state)),
        _ => Err(state),
    }
}

fn cursor_mut(state: &mut AppState, page: Page) -> Option<&mut usize> {
    match page {
        Page::Registrations => Some(&mut state.ui.registrations.selected),
        Page::Screening => Some(&mut state.ui.screening.selected),
        Page::Seasons => Some(&mut state.ui.seasons.selected),
        Page::Home => Some(&mut state.ui.home.list.selected),
        Page::Announcements => Some(&mut state.ui.announcements.selected),
        Page::Coaches => Some(&mut state.ui.coaches.list.selected),
        Page::Events | Page::Schedules => Some(&mut state.ui.events.list.selected),
        Page::Sports => Some(&mut state.ui.sports.selected),
        Page::UserManagement => Some(&mut state.ui.staff.selected),
        Page::Support => Some(&mut state.ui.support.selected),
        Page::Analytics => None,
    }
}

/// Keep every cursor inside its list (after reloads or filter changes)
pub fn clamp_selections(state: &mut AppState) {
    for page in [
        Page::Home,
        Page::Registrations,
        Page::Screening,
        Page::Seasons,
        Page::Announcements,
        Page::Coaches,
        Page::Events,
        Page::Sports,
        Page::UserManagement,
        Page::Support,
    ] {
        let len = row_count(state, page);
        if let Some(cursor) = cursor_mut(state, page) {
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }
}

/// Move the cursor, stopping at the first and last rows
fn move_selection(state: AppState, delta: isize) -> (AppState, Effect) {
    let mut new_state = state;
    let page = new_state.navigation.current_page;
    let len = row_count(&new_state, page);
    if let Some(cursor) = cursor_mut(&mut new_state, page) {
        let next = (*cursor as isize + delta).clamp(0, len.saturating_sub(1) as isize);
        *cursor = next as usize;
    }
    (new_state, Effect::None)
}

/// Open the highlighted row one level deeper
fn activate_selection(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let page = new_state.navigation.current_page;
    let rows = drill_rows(&new_state, page);
    let sports = new_state.data.sports.clone();

    let drill_state = match page {
        Page::Registrations => &mut new_state.ui.registrations,
        Page::Screening => &mut new_state.ui.screening,
        _ => return (new_state, Effect::None),
    };

    let (Some(level), Some(row)) = (drill_state.drill.next_level(), rows.get(drill_state.selected))
    else {
        return (new_state, Effect::None);
    };
    match drill_state.drill.open(level, &row.id, &sports) {
        Ok(()) => {
            debug!("DRILLDOWN: Opened {} '{}'", level.name(), row.id);
            drill_state.selected = 0;
        }
        Err(e) => new_state.system.set_status_error_message(e.to_string()),
    }
    (new_state, Effect::None)
}
