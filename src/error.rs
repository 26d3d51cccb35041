use thiserror::Error;

use crate::session::Role;

/// Kind of entity an id failed to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Sport,
    School,
    Team,
    Player,
    Season,
    Announcement,
    Coach,
    Event,
    StaffAccount,
    Ticket,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sport => "sport",
            Self::School => "school",
            Self::Team => "team",
            Self::Player => "player",
            Self::Season => "season",
            Self::Announcement => "announcement",
            Self::Coach => "coach",
            Self::Event => "event",
            Self::StaffAccount => "staff account",
            Self::Ticket => "support ticket",
        };
        f.write_str(name)
    }
}

/// League domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Decline reason too short: {0} characters (minimum 10)")]
    ReasonTooShort(usize),

    #[error("Decline reason too long: {0} characters (maximum 300)")]
    ReasonTooLong(usize),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: EntityKind, id: String },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("At least 2 teams are required")]
    TooFewParticipants(usize),

    #[error("At least one ticket section is required")]
    NoTicketSections,

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Access code must be exactly 8 letters or digits, got '{0}'")]
    InvalidAccessCode(String),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}")]
    StartAfterEnd { start: String, end: String },

    #[error("Cannot open {level} before {missing} is selected")]
    NavigationPrecondition {
        level: &'static str,
        missing: &'static str,
    },

    #[error("The {flow} flow has no {level} level")]
    LevelNotInFlow {
        flow: &'static str,
        level: &'static str,
    },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("This view requires the {required} role (logged in as {actual})")]
    WrongRole { required: Role, actual: Role },

    #[error("Session storage error: {0}")]
    Session(String),
}

impl LeagueError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type for league operations
pub type LeagueResult<T> = Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_id() {
        let err = LeagueError::not_found(EntityKind::Team, "b-001");
        assert_eq!(err.to_string(), "No team with id 'b-001'");
    }

    #[test]
    fn test_reason_errors_report_length() {
        assert_eq!(
            LeagueError::ReasonTooShort(9).to_string(),
            "Decline reason too short: 9 characters (minimum 10)"
        );
        assert_eq!(
            LeagueError::ReasonTooLong(301).to_string(),
            "Decline reason too long: 301 characters (maximum 300)"
        );
    }
}
