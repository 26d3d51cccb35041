//! Read-only views over `AppState` shared by the reducer, key mapping and
//! renderer, so that row indexes mean the same thing everywhere.

use crate::aggregates::{doc_ratio_label, team_count_for_school, team_count_for_sport};
use crate::announcement::Announcement;
use crate::coach::Coach;
use crate::drilldown::Level;
use crate::event::Event;
use crate::review::ReviewStatus;
use crate::season::Season;
use crate::session::Page;
use crate::sports::SportDefinition;
use crate::staff::StaffAccount;
use crate::support::SupportTicket;
use crate::types::SportGroup;

use super::state::{AppState, DrillState};
use super::types::ReviewTarget;

/// One selectable row in a drill-down list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillRow {
    pub id: String,
    pub label: String,
    pub detail: String,
    pub status: Option<ReviewStatus>,
}

impl DrillRow {
    fn new(id: &str, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
            detail: detail.into(),
            status: None,
        }
    }

    fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Sports shown in the registration grid (those with an open form)
pub fn registration_sports(state: &AppState) -> Vec<&SportGroup> {
    state.data.forms.visible_groups(&state.data.sports)
}

/// Rows at the current registration level: sports, then teams, then the
/// opened team's roster
pub fn registration_rows(state: &AppState) -> Vec<DrillRow> {
    let sports = &state.data.sports;
    let resolved = state.ui.registrations.drill.resolve(sports);

    if let Some(team) = resolved.team {
        return team
            .players
            .iter()
            .map(|p| {
                DrillRow::new(&p.id, p.name.clone(), format!("#{} {}", p.jersey_label(), p.position))
                    .with_status(p.review.status)
            })
            .collect();
    }
    if let Some(group) = resolved.sport {
        return group
            .teams()
            .map(|t| {
                DrillRow::new(&t.id, t.team_name.clone(), t.school_name.clone())
                    .with_status(t.review.status)
            })
            .collect();
    }
    registration_sports(state)
        .into_iter()
        .map(|g| {
            DrillRow::new(
                &g.sport,
                g.sport.clone(),
                format!("{} teams", team_count_for_sport(sports, &g.sport)),
            )
        })
        .collect()
}

/// Rows at the current screening level
pub fn screening_rows(state: &AppState) -> Vec<DrillRow> {
    let resolved = state.ui.screening.drill.resolve(&state.data.sports);

    if let Some(player) = resolved.player {
        return player
            .docs
            .iter()
            .map(|d| {
                DrillRow::new(
                    d.doc_type.name(),
                    d.doc_type.name(),
                    d.url.clone().unwrap_or_else(|| d.status.name().to_string()),
                )
            })
            .collect();
    }
    if let Some(team) = resolved.team {
        return team
            .players
            .iter()
            .map(|p| {
                DrillRow::new(&p.id, p.name.clone(), doc_ratio_label(p)).with_status(p.review.status)
            })
            .collect();
    }
    if let Some(school) = resolved.school {
        return school
            .teams
            .iter()
            .map(|t| {
                DrillRow::new(&t.id, t.team_name.clone(), format!("{} players", t.players.len()))
                    .with_status(t.review.status)
            })
            .collect();
    }
    if let Some(group) = resolved.sport {
        return group
            .schools
            .iter()
            .map(|s| {
                DrillRow::new(
                    &s.school_code,
                    s.school_name.clone(),
                    format!("{} teams", team_count_for_school(s)),
                )
            })
            .collect();
    }
    state
        .data
        .sports
        .iter()
        .map(|g| DrillRow::new(&g.sport, g.sport.clone(), format!("{} schools", g.schools.len())))
        .collect()
}

pub fn drill_state(state: &AppState, page: Page) -> Option<&DrillState> {
    match page {
        Page::Registrations => Some(&state.ui.registrations),
        Page::Screening => Some(&state.ui.screening),
        _ => None,
    }
}

pub fn drill_rows(state: &AppState, page: Page) -> Vec<DrillRow> {
    match page {
        Page::Registrations => registration_rows(state),
        Page::Screening => screening_rows(state),
        _ => Vec::new(),
    }
}

/// Team or player the approve/decline keys act on
///
/// Registration reviews teams (highlighted in the team list, or the opened
/// team); screening reviews players the same way.
pub fn review_target(state: &AppState, page: Page) -> Option<ReviewTarget> {
    let drill_state = drill_state(state, page)?;
    let drill = &drill_state.drill;
    let rows = drill_rows(state, page);
    let highlighted = rows.get(drill_state.selected).map(|r| r.id.clone());

    match (page, drill.current_level()) {
        (Page::Registrations, Some(Level::Sport)) => highlighted.map(ReviewTarget::Team),
        (Page::Registrations, Some(Level::Team)) => {
            drill.selected(Level::Team).map(|id| ReviewTarget::Team(id.to_string()))
        }
        (Page::Screening, Some(Level::Team)) => highlighted.map(ReviewTarget::Player),
        (Page::Screening, Some(Level::Player)) => {
            drill.selected(Level::Player).map(|id| ReviewTarget::Player(id.to_string()))
        }
        _ => None,
    }
}

/// Announcements the current role may read, newest first
pub fn visible_announcements(state: &AppState) -> Vec<&Announcement> {
    match state.system.role {
        Some(role) => state.data.announcements.visible_to(role),
        None => Vec::new(),
    }
}

/// Admin home list under the current audience filter
pub fn home_announcements(state: &AppState) -> Vec<&Announcement> {
    state.data.announcements.filter_by_audience(state.ui.home.audience)
}

/// Announcement rows on `page` (the admin home or the read view)
pub fn page_announcements(state: &AppState, page: Page) -> Vec<&Announcement> {
    match page {
        Page::Home => home_announcements(state),
        _ => visible_announcements(state),
    }
}

pub fn filtered_coaches(state: &AppState) -> Vec<&Coach> {
    let ui = &state.ui.coaches;
    state.data.coaches.search(&ui.query, ui.sport.as_deref())
}

pub fn filtered_events(state: &AppState) -> Vec<&Event> {
    let events = &state.data.events;
    events.filter_by_sport(events.effective_filter(&state.ui.events.sport))
}

pub fn selected_season(state: &AppState) -> Option<&Season> {
    state.data.seasons.get(state.ui.seasons.selected)
}

/// Highlighted announcement on the current page
pub fn selected_announcement(state: &AppState) -> Option<&Announcement> {
    let page = state.navigation.current_page;
    let cursor = match page {
        Page::Home => state.ui.home.list.selected,
        _ => state.ui.announcements.selected,
    };
    page_announcements(state, page).get(cursor).copied()
}

pub fn selected_coach(state: &AppState) -> Option<&Coach> {
    filtered_coaches(state).get(state.ui.coaches.list.selected).copied()
}

pub fn selected_event(state: &AppState) -> Option<&Event> {
    filtered_events(state).get(state.ui.events.list.selected).copied()
}

pub fn selected_sport_definition(state: &AppState) -> Option<&SportDefinition> {
    state.data.registry.all().get(state.ui.sports.selected)
}

pub fn selected_staff(state: &AppState) -> Option<&StaffAccount> {
    state.data.staff.all().get(state.ui.staff.selected)
}

pub fn selected_ticket(state: &AppState) -> Option<&SupportTicket> {
    state.data.tickets.all().get(state.ui.support.selected)
}

/// Number of selectable rows on a page
pub fn row_count(state: &AppState, page: Page) -> usize {
    match page {
        Page::Registrations | Page::Screening => drill_rows(state, page).len(),
        Page::Seasons => state.data.seasons.len(),
        Page::Home | Page::Announcements => page_announcements(state, page).len(),
        Page::Coaches => filtered_coaches(state).len(),
        Page::Events | Page::Schedules => filtered_events(state).len(),
        Page::Sports => state.data.registry.all().len(),
        Page::UserManagement => state.data.staff.all().len(),
        Page::Support => state.data.tickets.all().len(),
        Page::Analytics => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::tui::testing::seeded_state;

    #[test]
    fn test_registration_rows_follow_drilldown() {
        let mut state = seeded_state(Role::Admin);

        let sports: Vec<String> = registration_rows(&state).into_iter().map(|r| r.id).collect();
        assert_eq!(sports, vec!["Basketball", "Volleyball"]);

        state
            .ui
            .registrations
            .drill
            .open_sport("Basketball", &state.data.sports)
            .unwrap();
        let teams = registration_rows(&state);
        assert_eq!(teams[0].id, "b-ncf-001");
        assert_eq!(teams[0].status, Some(ReviewStatus::Pending));
        assert_eq!(teams[1].detail, "Ateneo de Naga University");
    }

    #[test]
    fn test_screening_rows_show_doc_ratio() {
        let mut state = seeded_state(Role::Admin);
        let sports = state.data.sports.clone();
        let drill = &mut state.ui.screening.drill;
        drill.open_sport("Basketball", &sports).unwrap();
        drill.open_school("NCF", &sports).unwrap();
        drill.open_team("b-ncf-001", &sports).unwrap();

        let rows = screening_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].detail, "2/5 verified");
    }

    #[test]
    fn test_review_target_in_registration_team_list() {
        let mut state = seeded_state(Role::Admin);
        assert_eq!(review_target(&state, Page::Registrations), None);

        state
            .ui
            .registrations
            .drill
            .open_sport("Basketball", &state.data.sports)
            .unwrap();
        state.ui.registrations.selected = 1;

        assert_eq!(
            review_target(&state, Page::Registrations),
            Some(ReviewTarget::Team("b-adnu-001".to_string()))
        );
    }

    #[test]
    fn test_staff_does_not_see_schools_only_announcements() {
        let staff = seeded_state(Role::Staff);
        let coach = seeded_state(Role::Coach);

        assert_eq!(visible_announcements(&staff).len(), 2);
        assert_eq!(visible_announcements(&coach).len(), 3);
    }

    #[test]
    fn test_row_count_per_page() {
        let state = seeded_state(Role::Admin);
        assert_eq!(row_count(&state, Page::Seasons), 4);
        assert_eq!(row_count(&state, Page::Events), 4);
        assert_eq!(row_count(&state, Page::Coaches), 2);
        assert_eq!(row_count(&state, Page::Analytics), 0);
        assert_eq!(row_count(&state, Page::Sports), 3);
        assert_eq!(row_count(&state, Page::UserManagement), 2);
        assert_eq!(row_count(&state, Page::Support), 2);
    }

    #[test]
    fn test_home_filter_drives_selection() {
        let mut state = seeded_state(Role::Admin);
        assert_eq!(state.navigation.current_page, Page::Home);
        assert_eq!(row_count(&state, Page::Home), 3);

        state.ui.home.audience = Some(crate::announcement::Audience::SchoolsCoaches);
        assert_eq!(row_count(&state, Page::Home), 1);
        assert_eq!(selected_announcement(&state).map(|a| a.id), Some(2));
    }
}
