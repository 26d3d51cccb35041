//! Scheduled games and showcases
use std::fmt;

use chrono::NaiveDate;

use crate::error::{EntityKind, LeagueError, LeagueResult};

/// Always offered in the sport filter, even with no scheduled events
pub const CHEER_AND_DANCE: &str = "Cheer & Dance";

/// Filter value meaning "every sport"
pub const ALL_SPORTS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Active,
    Upcoming,
    Completed,
}

impl EventStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    /// Free-form time window, e.g. "9:00AM - 12:00PM"
    pub time: String,
    pub sport: String,
    pub venue: String,
    pub status: EventStatus,
    pub result: Option<String>,
    /// Street or campus address; empty for events imported without one
    pub location: String,
    pub lineup: Option<Lineup>,
    pub tickets: Vec<TicketSection>,
}

/// Who takes the floor: two teams, or a field of cheer squads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lineup {
    Matchup { team_a: String, team_b: String },
    Participants(Vec<String>),
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matchup { team_a, team_b } => write!(f, "{} vs {}", team_a, team_b),
            Self::Participants(teams) => f.write_str(&teams.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TicketSide {
    A,
    B,
    #[default]
    General,
}

impl TicketSide {
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "Side A",
            Self::B => "Side B",
            Self::General => "General",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "B" => Self::B,
            _ => Self::General,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSection {
    pub section: String,
    pub side: TicketSide,
    pub max_tickets: u32,
    /// Whole pesos
    pub price: u32,
}

/// One row of the ticket table as typed; blank rows are skipped on create
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketRow {
    pub section: String,
    pub side: String,
    pub max_tickets: String,
    pub price: String,
}

impl TicketRow {
    pub fn new(section: &str, side: &str, max_tickets: &str, price: &str) -> Self {
        Self {
            section: section.to_string(),
            side: side.to_string(),
            max_tickets: max_tickets.to_string(),
            price: price.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.section.trim().is_empty()
            && !self.max_tickets.trim().is_empty()
            && !self.price.trim().is_empty()
    }

    fn parse(&self) -> LeagueResult<TicketSection> {
        Ok(TicketSection {
            section: self.section.trim().to_string(),
            side: TicketSide::parse(&self.side),
            max_tickets: parse_whole("Max tickets", &self.max_tickets)?,
            price: parse_whole("Ticket price", &self.price)?,
        })
    }
}

fn parse_whole(field: &'static str, raw: &str) -> LeagueResult<u32> {
    raw.trim().parse().map_err(|_| LeagueError::InvalidNumber {
        field,
        value: raw.trim().to_string(),
    })
}

/// Parse `section:side:max:price` rows separated by `;`.
/// A three-part row has no side, e.g. `Bleachers:300:80`.
pub fn parse_ticket_rows(raw: &str) -> Vec<TicketRow> {
    raw.split(';')
        .filter(|row| !row.trim().is_empty())
        .map(|row| {
            let parts: Vec<&str> = row.split(':').map(str::trim).collect();
            match parts.as_slice() {
                [section, max, price] => TicketRow::new(section, "", max, price),
                [section, side, max, price, ..] => TicketRow::new(section, side, max, price),
                [section, rest @ ..] => TicketRow::new(section, "", rest.first().unwrap_or(&""), ""),
                [] => TicketRow::default(),
            }
        })
        .collect()
}

/// Cheer events list participating squads instead of a two-team matchup
pub fn is_cheer_sport(sport: &str) -> bool {
    let sport = sport.trim();
    sport.eq_ignore_ascii_case(CHEER_AND_DANCE) || sport.eq_ignore_ascii_case("Cheer and Dance")
}

/// Everything the create-event form collects
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEvent {
    pub name: String,
    pub sport: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub venue: String,
    pub location: String,
    pub team_a: String,
    pub team_b: String,
    /// Only read for cheer events
    pub participants: Vec<String>,
    pub tickets: Vec<TicketRow>,
}

impl NewEvent {
    fn validate(&self) -> LeagueResult<(NaiveDate, Lineup, Vec<TicketSection>)> {
        if self.name.trim().is_empty() {
            return Err(LeagueError::MissingField("Event name"));
        }
        let Some(date) = self.date else {
            return Err(LeagueError::MissingField("Event date"));
        };
        if self.time.trim().is_empty() {
            return Err(LeagueError::MissingField("Event time"));
        }
        if self.venue.trim().is_empty() {
            return Err(LeagueError::MissingField("Venue name"));
        }
        if self.location.trim().is_empty() {
            return Err(LeagueError::MissingField("Venue location"));
        }

        let lineup = if is_cheer_sport(&self.sport) {
            let teams: Vec<String> = self
                .participants
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if teams.len() < 2 {
                return Err(LeagueError::TooFewParticipants(teams.len()));
            }
            Lineup::Participants(teams)
        } else {
            if self.team_a.trim().is_empty() {
                return Err(LeagueError::MissingField("Team A"));
            }
            if self.team_b.trim().is_empty() {
                return Err(LeagueError::MissingField("Team B"));
            }
            Lineup::Matchup {
                team_a: self.team_a.trim().to_string(),
                team_b: self.team_b.trim().to_string(),
            }
        };

        let rows: Vec<&TicketRow> = self.tickets.iter().filter(|r| r.is_complete()).collect();
        if rows.is_empty() {
            return Err(LeagueError::NoTicketSections);
        }
        let tickets = rows.into_iter().map(TicketRow::parse).collect::<LeagueResult<_>>()?;

        Ok((date, lineup, tickets))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub sport: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
}

impl EventDraft {
    fn validate(&self) -> LeagueResult<()> {
        if self.name.trim().is_empty() {
            return Err(LeagueError::MissingField("Event name"));
        }
        if self.sport.trim().is_empty() {
            return Err(LeagueError::MissingField("Sport"));
        }
        if self.venue.trim().is_empty() {
            return Err(LeagueError::MissingField("Venue"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSchedule {
    events: Vec<Event>,
}

impl EventSchedule {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// "all", then Cheer & Dance, then every other sport in schedule order
    pub fn sport_options(&self) -> Vec<String> {
        let mut options = vec![ALL_SPORTS.to_string(), CHEER_AND_DANCE.to_string()];
        for event in &self.events {
            if !options.iter().any(|o| *o == event.sport) {
                options.push(event.sport.clone());
            }
        }
        options
    }

    /// Events for one sport, or every event for "all"
    pub fn filter_by_sport(&self, sport: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| sport == ALL_SPORTS || e.sport == sport)
            .collect()
    }

    /// Normalise a filter value, falling back to "all" when the sport is gone
    pub fn effective_filter<'a>(&self, sport: &'a str) -> &'a str {
        if self.sport_options().iter().any(|o| o == sport) {
            sport
        } else {
            ALL_SPORTS
        }
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Event, id.to_string()))
    }

    /// Validate and schedule a new event; it starts out Upcoming
    pub fn create(&mut self, draft: NewEvent) -> LeagueResult<&Event> {
        let (date, lineup, tickets) = draft.validate()?;
        let id = self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.events.push(Event {
            id,
            name: draft.name.trim().to_string(),
            date,
            time: draft.time.trim().to_string(),
            sport: draft.sport.trim().to_string(),
            venue: draft.venue.trim().to_string(),
            status: EventStatus::Upcoming,
            result: None,
            location: draft.location.trim().to_string(),
            lineup: Some(lineup),
            tickets,
        });
        Ok(&self.events[self.events.len() - 1])
    }

    pub fn edit(&mut self, id: u32, draft: EventDraft) -> LeagueResult<&Event> {
        draft.validate()?;
        let index = self.position(id)?;
        let event = &mut self.events[index];
        event.name = draft.name.trim().to_string();
        event.sport = draft.sport.trim().to_string();
        event.date = draft.date;
        event.time = draft.time.trim().to_string();
        event.venue = draft.venue.trim().to_string();
        Ok(&self.events[index])
    }

    pub fn change_venue(&mut self, id: u32, venue: &str) -> LeagueResult<&Event> {
        let venue = venue.trim();
        if venue.is_empty() {
            return Err(LeagueError::MissingField("Venue"));
        }
        let index = self.position(id)?;
        self.events[index].venue = venue.to_string();
        Ok(&self.events[index])
    }

    /// Store a final result such as "NCF | 95-102"; the event becomes Completed
    pub fn record_result(&mut self, id: u32, result: &str) -> LeagueResult<&Event> {
        let result = result.trim();
        if result.is_empty() {
            return Err(LeagueError::MissingField("Result"));
        }
        let index = self.position(id)?;
        let event = &mut self.events[index];
        event.result = Some(result.to_string());
        event.status = EventStatus::Completed;
        Ok(&self.events[index])
    }
}
