use tracing::debug;

use crate::review::Decision;
use crate::tui::action::{Action, Mutation};
use crate::tui::effects::Effect;
use crate::tui::helpers::review_target;
use crate::tui::state::AppState;
use crate::tui::types::{Prompt, PromptKind, ReviewTarget};

/// Handle approve / decline on the registration and screening pages
pub fn reduce_review(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::ApproveSelected => Ok(approve_selected(state)),
        Action::OpenDeclinePrompt => Ok(open_decline_prompt(state)),
        _ => Err(state),
    }
}

/// Resolve the review target, or explain on the status bar why there is none
fn checked_target(state: &mut AppState) -> Option<ReviewTarget> {
    if !state.is_admin() {
        state
            .system
            .set_status_error_message("Only admins can review registrations".to_string());
        return None;
    }
    let target = review_target(state, state.navigation.current_page);
    if target.is_none() {
        state
            .system
            .set_status_error_message("Open a team or player to review".to_string());
    }
    target
}

fn approve_selected(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let Some(target) = checked_target(&mut new_state) else {
        return (new_state, Effect::None);
    };
    debug!("REVIEW: Approving {:?}", target);
    let mutation = match target {
        ReviewTarget::Team(team_id) => Mutation::ReviewTeam {
            team_id,
            decision: Decision::Approve,
        },
        ReviewTarget::Player(player_id) => Mutation::ReviewPlayer {
            player_id,
            decision: Decision::Approve,
        },
    };
    (new_state, Effect::Mutate(mutation))
}

fn open_decline_prompt(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let Some(target) = checked_target(&mut new_state) else {
        return (new_state, Effect::None);
    };
    let kind = match target {
        ReviewTarget::Team(team_id) => PromptKind::DeclineTeam { team_id },
        ReviewTarget::Player(player_id) => PromptKind::DeclinePlayer { player_id },
    };
    new_state.ui.prompt = Some(Prompt::new(kind));
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Page, Role};
    use crate::tui::testing::focused_state;

    fn team_list_state(role: Role) -> AppState {
        let mut state = focused_state(role);
        state.navigation.current_page = Page::Registrations;
        let sports = state.data.sports.clone();
        state
            .ui
            .registrations
            .drill
            .open_sport("Basketball", &sports)
            .unwrap();
        state
    }

    #[test]
    fn test_approve_highlighted_team() {
        let (state, effect) = approve_selected(team_list_state(Role::Admin));

        match effect {
            Effect::Mutate(Mutation::ReviewTeam { team_id, decision }) => {
                assert_eq!(team_id, "b-ncf-001");
                assert_eq!(decision, Decision::Approve);
            }
            _ => panic!("Expected review mutation"),
        }
        assert!(!state.system.status_is_error);
    }

    #[test]
    fn test_approve_opened_player_in_screening() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Screening;
        let sports = state.data.sports.clone();
        let drill = &mut state.ui.screening.drill;
        drill.open_sport("Basketball", &sports).unwrap();
        drill.open_school("NCF", &sports).unwrap();
        drill.open_team("b-ncf-001", &sports).unwrap();
        drill.open_player("p-002", &sports).unwrap();

        let (_, effect) = approve_selected(state);

        assert!(matches!(
            effect,
            Effect::Mutate(Mutation::ReviewPlayer { ref player_id, .. }) if player_id == "p-002"
        ));
    }

    #[test]
    fn test_non_admin_cannot_review() {
        let (state, effect) = approve_selected(team_list_state(Role::School));

        assert!(matches!(effect, Effect::None));
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_review_needs_a_target() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Registrations;

        let (state, effect) = open_decline_prompt(state);

        assert!(matches!(effect, Effect::None));
        assert!(state.ui.prompt.is_none());
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_decline_opens_reason_prompt() {
        let mut state = team_list_state(Role::Admin);
        state.ui.registrations.selected = 1;

        let (state, _) = open_decline_prompt(state);

        let prompt = state.ui.prompt.unwrap();
        assert_eq!(
            prompt.kind,
            PromptKind::DeclineTeam {
                team_id: "b-adnu-001".to_string()
            }
        );
    }
}
