use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{
    reduce_data_loading, reduce_navigation, reduce_pages, reduce_prompt, reduce_review,
    reduce_selection,
};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here: repository reads and writes come back as
/// `Effect::Fetch` / `Effect::Mutate` for the runtime to execute.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // An open prompt owns the keyboard
    let state = match reduce_prompt(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_selection(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_review(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_pages(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Error(message) => {
            debug!("REDUCER: Error action: {}", message);
            let mut new_state = state;
            new_state.system.set_status_error_message(message);
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        _ => (state, Effect::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drilldown::Level;
    use crate::session::{Page, Role};
    use crate::tui::action::Mutation;
    use crate::tui::testing::{focused_state, seeded_state};
    use crate::tui::types::PromptKind;

    fn run(state: AppState, actions: Vec<Action>) -> AppState {
        actions
            .into_iter()
            .fold(state, |state, action| reduce(state, action).0)
    }

    #[test]
    fn test_navigation_actions_are_handled() {
        let state = seeded_state(Role::Admin);
        let (new_state, _) = reduce(state, Action::NavigatePage(Page::Seasons));

        assert_eq!(new_state.navigation.current_page, Page::Seasons);
        assert!(!new_state.navigation.content_focused);
    }

    #[test]
    fn test_drill_in_and_decline_flow() {
        let state = run(
            focused_state(Role::Admin),
            vec![
                Action::NavigatePage(Page::Registrations),
                Action::EnterContentFocus,
                Action::ActivateSelection,
                Action::OpenDeclinePrompt,
            ],
        );
        assert_eq!(
            state.ui.registrations.drill.selected(Level::Sport),
            Some("Basketball")
        );
        assert!(state.ui.prompt.as_ref().is_some_and(|p| p.kind.is_decline()));

        let mut state = state;
        for c in "Incomplete roster".chars() {
            state = reduce(state, Action::PromptInput(c)).0;
        }
        let (state, effect) = reduce(state, Action::PromptSubmit);

        assert!(state.ui.prompt.is_none());
        assert!(matches!(
            effect,
            Effect::Mutate(Mutation::ReviewTeam { ref team_id, .. }) if team_id == "b-ncf-001"
        ));
    }

    #[test]
    fn test_prompt_captures_input_before_navigation() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Seasons;
        let state = reduce(
            state,
            Action::OpenPrompt(crate::tui::types::Prompt::new(PromptKind::NewSeason)),
        )
        .0;

        let (state, _) = reduce(state, Action::PromptInput('S'));

        assert_eq!(state.ui.prompt.unwrap().value(0), "S");
    }

    #[test]
    fn test_set_status_message() {
        let state = seeded_state(Role::Admin);
        let (state, _) = reduce(
            state,
            Action::SetStatusMessage {
                message: "Saved".to_string(),
                is_error: false,
            },
        );
        assert_eq!(state.system.status_message.as_deref(), Some("Saved"));
        assert!(!state.system.status_is_error);
    }

    #[test]
    fn test_error_action_shows_on_status_bar() {
        let (state, _) = reduce(seeded_state(Role::Admin), Action::Error("boom".to_string()));
        assert!(state.system.status_is_error);
    }
}
