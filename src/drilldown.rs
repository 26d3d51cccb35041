//! Drill-down navigation over the registration hierarchy
//!
//! A reviewer focuses one level at a time: sport, then school, team and
//! player. The controller keeps the open selections as a stack so that a
//! level can only be open while all of its ancestors are, and going back
//! closes exactly one level.

use tracing::trace;

use crate::error::{EntityKind, LeagueError, LeagueResult};
use crate::types::{Player, SchoolGroup, SportGroup, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Sport,
    School,
    Team,
    Player,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::School => "school",
            Self::Team => "team",
            Self::Player => "player",
        }
    }

    fn entity_kind(&self) -> EntityKind {
        match self {
            Self::Sport => EntityKind::Sport,
            Self::School => EntityKind::School,
            Self::Team => EntityKind::Team,
            Self::Player => EntityKind::Player,
        }
    }
}

/// Which path through the hierarchy a view walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Sport -> School -> Team -> Player (document screening)
    Screening,
    /// Sport -> Team (registration review)
    Registration,
}

impl Flow {
    pub fn levels(&self) -> &'static [Level] {
        match self {
            Self::Screening => &[Level::Sport, Level::School, Level::Team, Level::Player],
            Self::Registration => &[Level::Sport, Level::Team],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Screening => "screening",
            Self::Registration => "registration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub level: Level,
    pub id: String,
}

/// Nodes currently focused in a tree
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolved<'a> {
    pub sport: Option<&'a SportGroup>,
    pub school: Option<&'a SchoolGroup>,
    pub team: Option<&'a Team>,
    pub player: Option<&'a Player>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDown {
    flow: Flow,
    stack: Vec<Selection>,
}

impl DrillDown {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            stack: Vec::new(),
        }
    }

    pub fn screening() -> Self {
        Self::new(Flow::Screening)
    }

    pub fn registration() -> Self {
        Self::new(Flow::Registration)
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.stack
    }

    /// Deepest open level, if any
    pub fn current_level(&self) -> Option<Level> {
        self.stack.last().map(|s| s.level)
    }

    /// Level that would be opened next (None when fully drilled in)
    pub fn next_level(&self) -> Option<Level> {
        self.flow.levels().get(self.stack.len()).copied()
    }

    pub fn selected(&self, level: Level) -> Option<&str> {
        self.stack
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.id.as_str())
    }

    /// Open `id` at `level`, closing anything deeper
    ///
    /// Fails without touching the stack when an ancestor is not open or the
    /// id does not exist beneath the open parent.
    pub fn open(&mut self, level: Level, id: &str, sports: &[SportGroup]) -> LeagueResult<()> {
        let levels = self.flow.levels();
        let index = levels
            .iter()
            .position(|l| *l == level)
            .ok_or(LeagueError::LevelNotInFlow {
                flow: self.flow.name(),
                level: level.name(),
            })?;

        if self.stack.len() < index {
            return Err(LeagueError::NavigationPrecondition {
                level: level.name(),
                missing: levels[self.stack.len()].name(),
            });
        }

        let mut candidate = self.stack[..index].to_vec();
        candidate.push(Selection {
            level,
            id: id.to_string(),
        });
        if !selections_exist(self.flow, &candidate, sports) {
            return Err(LeagueError::not_found(level.entity_kind(), id));
        }

        trace!("DRILLDOWN: {} open {} '{}'", self.flow.name(), level.name(), id);
        self.stack = candidate;
        Ok(())
    }

    pub fn open_sport(&mut self, sport: &str, sports: &[SportGroup]) -> LeagueResult<()> {
        self.open(Level::Sport, sport, sports)
    }

    pub fn open_school(&mut self, school_code: &str, sports: &[SportGroup]) -> LeagueResult<()> {
        self.open(Level::School, school_code, sports)
    }

    pub fn open_team(&mut self, team_id: &str, sports: &[SportGroup]) -> LeagueResult<()> {
        self.open(Level::Team, team_id, sports)
    }

    pub fn open_player(&mut self, player_id: &str, sports: &[SportGroup]) -> LeagueResult<()> {
        self.open(Level::Player, player_id, sports)
    }

    /// Close the deepest open level
    pub fn back(&mut self) -> Option<Selection> {
        let popped = self.stack.pop();
        if let Some(sel) = &popped {
            trace!("DRILLDOWN: {} back from {}", self.flow.name(), sel.level.name());
        }
        popped
    }

    /// Drop selections that no longer exist in `sports` (after a data reload)
    pub fn prune(&mut self, sports: &[SportGroup]) {
        while !self.stack.is_empty() && !selections_exist(self.flow, &self.stack, sports) {
            self.stack.pop();
        }
    }

    pub fn resolve<'a>(&self, sports: &'a [SportGroup]) -> Resolved<'a> {
        resolve_selections(self.flow, &self.stack, sports)
    }

    /// Display labels for each open level
    pub fn breadcrumb(&self, sports: &[SportGroup]) -> Vec<String> {
        let resolved = self.resolve(sports);
        self.stack
            .iter()
            .map(|sel| match sel.level {
                Level::Sport => resolved.sport.map(|s| s.sport.clone()),
                Level::School => resolved.school.map(|s| s.school_name.clone()),
                Level::Team => resolved.team.map(|t| t.team_name.clone()),
                Level::Player => resolved.player.map(|p| p.name.clone()),
            })
            .map(|label| label.unwrap_or_else(|| "?".to_string()))
            .collect()
    }
}

fn selections_exist(flow: Flow, stack: &[Selection], sports: &[SportGroup]) -> bool {
    let resolved = resolve_selections(flow, stack, sports);
    stack.iter().all(|sel| match sel.level {
        Level::Sport => resolved.sport.is_some(),
        Level::School => resolved.school.is_some(),
        Level::Team => resolved.team.is_some(),
        Level::Player => resolved.player.is_some(),
    })
}

fn resolve_selections<'a>(flow: Flow, stack: &[Selection], sports: &'a [SportGroup]) -> Resolved<'a> {
    let mut resolved = Resolved::default();
    for sel in stack {
        match sel.level {
            Level::Sport => {
                resolved.sport = sports.iter().find(|g| g.sport == sel.id);
            }
            Level::School => {
                resolved.school = resolved.sport.and_then(|g| g.school(&sel.id));
            }
            Level::Team => {
                resolved.team = match flow {
                    Flow::Screening => resolved.school.and_then(|s| s.team(&sel.id)),
                    Flow::Registration => resolved.sport.and_then(|g| g.team(&sel.id)),
                };
            }
            Level::Player => {
                resolved.player = resolved.team.and_then(|t| t.player(&sel.id));
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_open_team_without_sport_is_rejected() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();

        let result = nav.open_team("b-ncf-001", &sports);

        assert_eq!(
            result,
            Err(LeagueError::NavigationPrecondition {
                level: "team",
                missing: "sport",
            })
        );
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_open_team_without_school_is_rejected_in_screening() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();

        let result = nav.open_team("b-ncf-001", &sports);

        assert_eq!(
            result,
            Err(LeagueError::NavigationPrecondition {
                level: "team",
                missing: "school",
            })
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_full_screening_path_resolves() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("NCF", &sports).unwrap();
        nav.open_team("b-ncf-001", &sports).unwrap();
        nav.open_player("p-002", &sports).unwrap();

        let resolved = nav.resolve(&sports);
        assert_eq!(resolved.sport.unwrap().sport, "Basketball");
        assert_eq!(resolved.school.unwrap().school_code, "NCF");
        assert_eq!(resolved.team.unwrap().id, "b-ncf-001");
        assert_eq!(resolved.player.unwrap().name, "Pedro Santos");
        assert_eq!(nav.next_level(), None);
    }

    #[test]
    fn test_registration_flow_skips_school() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::registration();
        nav.open_sport("Volleyball", &sports).unwrap();
        nav.open_team("v-usi-001", &sports).unwrap();

        assert_eq!(nav.resolve(&sports).team.unwrap().team_name, "USI Spikers");
        assert!(matches!(
            nav.open_school("USI", &sports),
            Err(LeagueError::LevelNotInFlow { .. })
        ));
    }

    #[test]
    fn test_team_must_belong_to_open_school() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("ADNU", &sports).unwrap();

        let result = nav.open_team("b-ncf-001", &sports);

        assert_eq!(result, Err(LeagueError::not_found(EntityKind::Team, "b-ncf-001")));
        assert_eq!(nav.current_level(), Some(Level::School));
    }

    #[test]
    fn test_back_pops_only_the_deepest_level() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("NCF", &sports).unwrap();
        nav.open_team("b-ncf-001", &sports).unwrap();

        let popped = nav.back().unwrap();

        assert_eq!(popped.level, Level::Team);
        assert_eq!(nav.selected(Level::Sport), Some("Basketball"));
        assert_eq!(nav.selected(Level::School), Some("NCF"));
        assert_eq!(nav.selected(Level::Team), None);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = DrillDown::screening();
        assert!(nav.back().is_none());
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_reopening_a_level_clears_deeper_levels() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("NCF", &sports).unwrap();
        nav.open_team("b-ncf-001", &sports).unwrap();

        nav.open_sport("Volleyball", &sports).unwrap();

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.selected(Level::School), None);
    }

    #[test]
    fn test_every_reachable_state_keeps_ancestors_open() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        let attempts: Vec<(Level, &str)> = vec![
            (Level::Player, "p-001"),
            (Level::Team, "b-ncf-001"),
            (Level::Sport, "Basketball"),
            (Level::Player, "p-001"),
            (Level::School, "NCF"),
            (Level::Player, "p-001"),
            (Level::Team, "b-ncf-001"),
            (Level::Player, "p-001"),
            (Level::School, "ADNU"),
            (Level::Player, "p-003"),
        ];

        for (level, id) in attempts {
            let _ = nav.open(level, id, &sports);
            let levels = nav.flow().levels();
            for (i, sel) in nav.selections().iter().enumerate() {
                assert_eq!(sel.level, levels[i]);
            }
        }
    }

    #[test]
    fn test_breadcrumb_uses_display_names() {
        let sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("ADNU", &sports).unwrap();

        assert_eq!(
            nav.breadcrumb(&sports),
            vec!["Basketball".to_string(), "Ateneo de Naga University".to_string()]
        );
    }

    #[test]
    fn test_prune_drops_selections_missing_after_reload() {
        let mut sports = fixtures::create_sport_groups();
        let mut nav = DrillDown::screening();
        nav.open_sport("Basketball", &sports).unwrap();
        nav.open_school("NCF", &sports).unwrap();
        nav.open_team("b-ncf-001", &sports).unwrap();

        sports[0].schools[0].teams.clear();
        nav.prune(&sports);

        assert_eq!(nav.current_level(), Some(Level::School));
    }
}
