/// Registration hierarchy: Sport -> School -> Team -> Player -> Document
///
/// The same tree backs both the registration review (sport -> team) and the
/// player screening (sport -> school -> team -> player) flows.
use std::fmt;

use phf::phf_map;

use crate::review::{Review, ReviewStatus};

/// Member schools keyed by school code
pub static SCHOOL_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "NCF" => "Naga College Foundation",
    "ADNU" => "Ateneo de Naga University",
    "USI" => "Universidad de Sta. Isabel",
    "UNC" => "University of Nueva Caceres",
};

/// Look up a school's full name from its code
pub fn school_name(code: &str) -> Option<&'static str> {
    SCHOOL_NAMES.get(code).copied()
}

/// Loose email check: something, "@", something, ".", something.
/// Same shape as the form pattern `.+@.+\..+`
pub fn is_valid_email(email: &str) -> bool {
    // the first "@" after the first character leaves the longest domain
    let Some((at, _)) = email.char_indices().skip(1).find(|&(_, c)| c == '@') else {
        return false;
    };
    let domain = &email[at + 1..];
    domain
        .char_indices()
        .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    BirthCertificate,
    SchoolMatriculation,
    SchoolId,
    TranscriptOfGrades,
    MedicalCertificate,
}

impl DocType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BirthCertificate => "Birth Certificate",
            Self::SchoolMatriculation => "School Matriculation",
            Self::SchoolId => "School ID",
            Self::TranscriptOfGrades => "Transcript of Grades",
            Self::MedicalCertificate => "Medical Certificate",
        }
    }

    /// Every document a player is expected to submit, in display order
    pub fn all() -> [Self; 5] {
        [
            Self::BirthCertificate,
            Self::SchoolMatriculation,
            Self::SchoolId,
            Self::TranscriptOfGrades,
            Self::MedicalCertificate,
        ]
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocStatus {
    Pending,
    Verified,
    Flagged,
    NotSubmitted,
}

impl DocStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Flagged => "Flagged",
            Self::NotSubmitted => "Not Submitted",
        }
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDoc {
    pub doc_type: DocType,
    pub url: Option<String>,
    pub status: DocStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub year_course: String,
    pub birthdate: String,
    pub jersey_number: Option<u32>,
    pub position: String,
    pub is_bicolano: bool,
    pub is_transferee: bool,
    pub last_school: Option<String>,
    pub years_played: u32,
    pub docs: Vec<PlayerDoc>,
    pub review: Review,
}

impl Player {
    /// Transferee line for the player card, naming the last school
    pub fn transferee_label(&self) -> String {
        if self.is_transferee {
            format!("Yes — {}", self.last_school.as_deref().unwrap_or("N/A"))
        } else {
            "No".to_string()
        }
    }

    pub fn jersey_label(&self) -> String {
        self.jersey_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

/// People and signatures attached to a team registration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMetadata {
    pub school_president: String,
    pub athletics_director: String,
    pub head_coach: String,
    pub assistant_coach: Option<String>,
    pub head_coach_esign_url: Option<String>,
}

/// Status shown in the submission timeline (includes the pre-submission draft)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl TimelineStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl From<ReviewStatus> for TimelineStatus {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => Self::Pending,
            ReviewStatus::Approved => Self::Approved,
            ReviewStatus::Rejected => Self::Rejected,
        }
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub status: TimelineStatus,
    pub timestamp: String,
    pub actor: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub team_name: String,
    pub sport: String,
    pub school_code: String,
    pub school_name: String,
    pub metadata: TeamMetadata,
    pub players: Vec<Player>,
    pub submitted_at: String,
    pub review: Review,
    pub timeline: Vec<TimelineEntry>,
}

impl Team {
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolGroup {
    pub school_code: String,
    pub school_name: String,
    pub teams: Vec<Team>,
}

impl SchoolGroup {
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportGroup {
    pub sport: String,
    pub schools: Vec<SchoolGroup>,
}

impl SportGroup {
    pub fn school(&self, school_code: &str) -> Option<&SchoolGroup> {
        self.schools.iter().find(|s| s.school_code == school_code)
    }

    /// All teams registered for this sport, across schools
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.schools.iter().flat_map(|s| s.teams.iter())
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams().find(|t| t.id == team_id)
    }
}

/// Find a sport group by name
pub fn find_sport<'a>(sports: &'a [SportGroup], sport: &str) -> Option<&'a SportGroup> {
    sports.iter().find(|g| g.sport == sport)
}

/// Find a team anywhere in the tree
pub fn find_team<'a>(sports: &'a [SportGroup], team_id: &str) -> Option<&'a Team> {
    sports.iter().find_map(|g| g.team(team_id))
}

pub fn find_team_mut<'a>(sports: &'a mut [SportGroup], team_id: &str) -> Option<&'a mut Team> {
    sports
        .iter_mut()
        .flat_map(|g| g.schools.iter_mut())
        .flat_map(|s| s.teams.iter_mut())
        .find(|t| t.id == team_id)
}

/// Find a player anywhere in the tree, along with its team
pub fn find_player<'a>(sports: &'a [SportGroup], player_id: &str) -> Option<(&'a Team, &'a Player)> {
    sports
        .iter()
        .flat_map(|g| g.teams())
        .find_map(|t| t.player(player_id).map(|p| (t, p)))
}

pub fn find_player_mut<'a>(
    sports: &'a mut [SportGroup],
    player_id: &str,
) -> Option<&'a mut Player> {
    sports
        .iter_mut()
        .flat_map(|g| g.schools.iter_mut())
        .flat_map(|s| s.teams.iter_mut())
        .flat_map(|t| t.players.iter_mut())
        .find(|p| p.id == player_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_school_name_lookup() {
        assert_eq!(school_name("ADNU"), Some("Ateneo de Naga University"));
        assert_eq!(school_name("XYZ"), None);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("juan@school.edu"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("juan@school"));
        assert!(!is_valid_email("@school.edu"));
        assert!(!is_valid_email("juan@.edu"));
        assert!(!is_valid_email("juan@school."));
        // any interior dot in the domain satisfies the pattern
        assert!(is_valid_email("juan@school.edu."));
        assert!(is_valid_email("juan@mail.school"));
        assert!(!is_valid_email("juan.school.edu"));
        // ".+" before the "@" may itself contain one
        assert!(is_valid_email("@juan@school.edu"));
        assert!(is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@"));
    }

    #[test]
    fn test_find_team_across_sports() {
        let sports = fixtures::create_sport_groups();
        let team = find_team(&sports, "v-usi-001").unwrap();
        assert_eq!(team.team_name, "USI Spikers");
        assert!(find_team(&sports, "missing").is_none());
    }

    #[test]
    fn test_find_player_returns_owning_team() {
        let sports = fixtures::create_sport_groups();
        let (team, player) = find_player(&sports, "p-002").unwrap();
        assert_eq!(team.id, "b-ncf-001");
        assert_eq!(player.name, "Pedro Santos");
    }

    #[test]
    fn test_find_player_mut_allows_update() {
        let mut sports = fixtures::create_sport_groups();
        find_player_mut(&mut sports, "p-003").unwrap().review.approve();
        let (_, player) = find_player(&sports, "p-003").unwrap();
        assert_eq!(player.review.status, ReviewStatus::Approved);
    }

    #[test]
    fn test_transferee_label() {
        let sports = fixtures::create_sport_groups();
        let (_, transferee) = find_player(&sports, "p-002").unwrap();
        let (_, local) = find_player(&sports, "p-001").unwrap();
        assert_eq!(transferee.transferee_label(), "Yes — USI");
        assert_eq!(local.transferee_label(), "No");
    }

    #[test]
    fn test_timeline_status_from_review_status() {
        assert_eq!(TimelineStatus::from(ReviewStatus::Pending), TimelineStatus::Pending);
        assert_eq!(TimelineStatus::from(ReviewStatus::Rejected), TimelineStatus::Rejected);
    }
}
