use crate::review::ReasonFeedback;

/// What a text prompt is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    DeclineTeam { team_id: String },
    DeclinePlayer { player_id: String },
    NewSeason,
    EditSeason { season_id: u32 },
    NewAnnouncement,
    EditAnnouncement { announcement_id: u32 },
    AddCoach,
    EditCoach { coach_id: u32 },
    AssignCoachSports { coach_id: u32 },
    SearchCoaches,
    NewEvent,
    EditEvent { event_id: u32 },
    ChangeVenue { event_id: u32 },
    RecordResult { event_id: u32 },
    NewRegistrationForm,
    NewSport,
    EditSport { sport_id: u32 },
    AddStaff,
    EditStaff { staff_id: u32 },
    ReplyTicket { ticket_id: String },
}

const SEASON_FIELDS: &[&str] = &["Title", "Status (active/ended/upcoming)", "Start (YYYY-MM-DD)", "End (YYYY-MM-DD)"];
const COACH_FIELDS: &[&str] = &["Name", "Email", "Access code", "Sports (comma separated)"];
const SPORT_FIELDS: &[&str] = &["Name", "Description", "Jersey number required (y/n)", "Position required (y/n)"];

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DeclineTeam { .. } => "Decline Team Registration",
            Self::DeclinePlayer { .. } => "Decline Player",
            Self::NewSeason => "New Season",
            Self::EditSeason { .. } => "Edit Season",
            Self::NewAnnouncement => "New Announcement",
            Self::EditAnnouncement { .. } => "Edit Announcement",
            Self::AddCoach => "Add Coach",
            Self::EditCoach { .. } => "Edit Coach",
            Self::AssignCoachSports { .. } => "Assign Sports",
            Self::SearchCoaches => "Search Coaches",
            Self::NewEvent => "Create Event",
            Self::EditEvent { .. } => "Edit Event",
            Self::ChangeVenue { .. } => "Change Venue",
            Self::RecordResult { .. } => "Record Result",
            Self::NewRegistrationForm => "Open Registration Form",
            Self::NewSport => "New Sport",
            Self::EditSport { .. } => "Edit Sport",
            Self::AddStaff => "Add Staff Account",
            Self::EditStaff { .. } => "Edit Staff Account",
            Self::ReplyTicket { .. } => "Reply to Ticket",
        }
    }

    /// Field labels in input order
    pub fn field_labels(&self) -> &'static [&'static str] {
        match self {
            Self::DeclineTeam { .. } | Self::DeclinePlayer { .. } => &["Reason"],
            Self::NewSeason | Self::EditSeason { .. } => SEASON_FIELDS,
            Self::NewAnnouncement => &["Title", "Description", "Audience (all/schools)"],
            Self::EditAnnouncement { .. } => {
                &["Title", "Description", "Audience (all/schools)", "Pinned (y/n)"]
            }
            Self::AddCoach | Self::EditCoach { .. } => COACH_FIELDS,
            Self::AssignCoachSports { .. } => &["Sports (comma separated)"],
            Self::SearchCoaches => &["Search", "Sport"],
            Self::NewEvent => &[
                "Event name",
                "Sport",
                "Date (YYYY-MM-DD)",
                "Time",
                "Venue",
                "Location",
                "Team A",
                "Team B",
                "Cheer teams (comma separated)",
                "Tickets (section:side:max:price; ...)",
            ],
            Self::EditEvent { .. } => &["Event name", "Sport", "Date (YYYY-MM-DD)", "Time", "Venue"],
            Self::ChangeVenue { .. } => &["Venue"],
            Self::RecordResult { .. } => &["Result"],
            Self::NewRegistrationForm => &["Sport", "Deadline (YYYY-MM-DD)"],
            Self::NewSport | Self::EditSport { .. } => SPORT_FIELDS,
            Self::AddStaff => &["Name", "Position", "Email", "Access code"],
            Self::EditStaff { .. } => &[
                "Name",
                "Position",
                "Email",
                "Access code",
                "Status (active/inactive)",
            ],
            Self::ReplyTicket { .. } => &["Message"],
        }
    }

    pub fn is_decline(&self) -> bool {
        matches!(self, Self::DeclineTeam { .. } | Self::DeclinePlayer { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptField {
    pub label: &'static str,
    pub value: String,
}

/// An open modal form
///
/// Input is only committed on submit; cancelling drops the whole prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub fields: Vec<PromptField>,
    pub active: usize,
    pub error: Option<String>,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        let fields = kind
            .field_labels()
            .iter()
            .map(|label| PromptField {
                label,
                value: String::new(),
            })
            .collect();
        Self {
            kind,
            fields,
            active: 0,
            error: None,
        }
    }

    /// Pre-fill a field (ignored when out of range)
    pub fn with_value(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
        self
    }

    /// Pre-fill fields in order, starting at the first
    pub fn with_values<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .enumerate()
            .fold(self, |prompt, (index, value)| prompt.with_value(index, value))
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.push(c);
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.pop();
        }
        self.error = None;
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    /// Live length feedback, only for decline prompts
    pub fn reason_feedback(&self) -> Option<ReasonFeedback> {
        self.kind
            .is_decline()
            .then(|| ReasonFeedback::for_input(self.value(0)))
    }
}

/// Which list a review action applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewTarget {
    Team(String),
    Player(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fields_follow_kind() {
        let prompt = Prompt::new(PromptKind::AddCoach);
        assert_eq!(prompt.fields.len(), 4);
        assert_eq!(prompt.fields[1].label, "Email");
        assert_eq!(prompt.active, 0);
    }

    #[test]
    fn test_with_values_fills_in_order() {
        let prompt = Prompt::new(PromptKind::EditSport { sport_id: 1 })
            .with_values(["Basketball", "5v5 indoor sport", "y", "y", "ignored"]);

        assert_eq!(prompt.value(1), "5v5 indoor sport");
        assert_eq!(prompt.value(3), "y");
        assert_eq!(prompt.fields.len(), 4);
    }

    #[test]
    fn test_prompt_typing_and_field_cycle() {
        let mut prompt = Prompt::new(PromptKind::SearchCoaches);
        prompt.push_char('j');
        prompt.push_char('u');
        prompt.backspace();
        prompt.next_field();
        prompt.push_char('B');
        prompt.next_field();

        assert_eq!(prompt.value(0), "j");
        assert_eq!(prompt.value(1), "B");
        assert_eq!(prompt.active, 0);
    }

    #[test]
    fn test_reason_feedback_only_for_decline() {
        let decline = Prompt::new(PromptKind::DeclineTeam {
            team_id: "b-ncf-001".to_string(),
        })
        .with_value(0, "too short");
        let feedback = decline.reason_feedback().unwrap();
        assert_eq!(feedback.more_required, 1);
        assert!(feedback.too_short);

        assert!(Prompt::new(PromptKind::NewSeason).reason_feedback().is_none());
    }
}
