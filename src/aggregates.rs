//! Derived counts over the registration tree
//!
//! Nothing here is cached; every figure is recomputed from the tree it is
//! given.
use crate::announcement::Announcement;
use crate::review::ReviewTally;
use crate::types::{find_sport, DocStatus, Player, SchoolGroup, SportGroup, Team};

/// Teams registered for a sport (0 for an unknown sport)
pub fn team_count_for_sport(sports: &[SportGroup], sport: &str) -> usize {
    find_sport(sports, sport).map_or(0, |g| g.teams().count())
}

pub fn team_count_for_school(school: &SchoolGroup) -> usize {
    school.teams.len()
}

/// Team count for every sport, in tree order, including sports with none
pub fn team_counts(sports: &[SportGroup]) -> Vec<(&str, usize)> {
    sports
        .iter()
        .map(|g| (g.sport.as_str(), g.teams().count()))
        .collect()
}

pub fn total_teams(sports: &[SportGroup]) -> usize {
    sports.iter().map(|g| g.teams().count()).sum()
}

/// (verified, total) documents for a player
pub fn verified_docs(player: &Player) -> (usize, usize) {
    let verified = player
        .docs
        .iter()
        .filter(|d| d.status == DocStatus::Verified)
        .count();
    (verified, player.docs.len())
}

/// "3/5 verified"
pub fn doc_ratio_label(player: &Player) -> String {
    let (verified, total) = verified_docs(player);
    format!("{}/{} verified", verified, total)
}

pub fn pinned<'a>(announcements: impl IntoIterator<Item = &'a Announcement>) -> Vec<&'a Announcement> {
    announcements.into_iter().filter(|a| a.is_pinned).collect()
}

/// Review tally across every team in a sport
pub fn team_tally(group: &SportGroup) -> ReviewTally {
    ReviewTally::from_reviews(group.teams().map(|t| &t.review))
}

/// Review tally across every team in the tree
pub fn league_team_tally(sports: &[SportGroup]) -> ReviewTally {
    ReviewTally::from_reviews(sports.iter().flat_map(|g| g.teams()).map(|t| &t.review))
}

pub fn player_tally(team: &Team) -> ReviewTally {
    ReviewTally::from_reviews(team.players.iter().map(|p| &p.review))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::find_player;

    #[test]
    fn test_team_counts_sum_to_total() {
        let sports = fixtures::create_sport_groups();
        let counts = team_counts(&sports);

        assert_eq!(
            counts,
            vec![("Basketball", 2), ("Volleyball", 2), ("Cheer and Dance", 0)]
        );
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), total_teams(&sports));
    }

    #[test]
    fn test_team_count_for_sport_and_school() {
        let sports = fixtures::create_sport_groups();

        assert_eq!(team_count_for_sport(&sports, "Volleyball"), 2);
        assert_eq!(team_count_for_sport(&sports, "Chess"), 0);
        let ncf = sports[0].school("NCF").unwrap();
        assert_eq!(team_count_for_school(ncf), 1);
    }

    #[test]
    fn test_doc_ratio_label() {
        let sports = fixtures::create_sport_groups();
        let (_, juan) = find_player(&sports, "p-001").unwrap();
        let (_, miguel) = find_player(&sports, "p-003").unwrap();

        assert_eq!(doc_ratio_label(juan), "2/5 verified");
        assert_eq!(doc_ratio_label(miguel), "5/5 verified");
    }

    #[test]
    fn test_pinned_subset() {
        let announcements = fixtures::create_announcements();
        let pinned = pinned(&announcements);

        assert_eq!(pinned.len(), 1);
        assert!(pinned[0].title.starts_with("Basketball Tournament 2024"));
    }

    #[test]
    fn test_review_tallies() {
        let sports = fixtures::create_sport_groups();

        let league = league_team_tally(&sports);
        assert_eq!(league.pending, 2);
        assert_eq!(league.approved, 2);
        assert_eq!(league.total(), total_teams(&sports));

        let basketball = team_tally(&sports[0]);
        assert_eq!(basketball.pending, 1);
        assert_eq!(basketball.approved, 1);

        let tigers = sports[0].team("b-ncf-001").unwrap();
        assert_eq!(player_tally(tigers).total(), tigers.players.len());
    }
}
