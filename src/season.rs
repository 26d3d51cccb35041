//! Season archive
//!
//! At most one season may be active. Every status change goes through
//! [`SeasonArchive::set_status`], which ends any other active season in the
//! same update.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};

/// Logo used when a new season is created without one
pub const DEFAULT_SEASON_IMG: &str = "/bucals7.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonStatus {
    Active,
    Ended,
    Upcoming,
}

impl SeasonStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Ended => "Ended",
            Self::Upcoming => "Upcoming",
        }
    }

    /// Parse "active" / "ended" / "upcoming" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "ended" => Some(Self::Ended),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub img: String,
    pub status: SeasonStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Input for creating or editing a season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDraft {
    pub title: String,
    pub img: Option<String>,
    pub status: SeasonStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SeasonDraft {
    pub fn new(title: impl Into<String>, status: SeasonStatus) -> Self {
        Self {
            title: title.into(),
            img: None,
            status,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    fn validate(&self) -> LeagueResult<()> {
        if self.title.trim().is_empty() {
            return Err(LeagueError::MissingField("Season title"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(LeagueError::StartAfterEnd {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Derive "s8" from a title like "Season 8", falling back to "s{id}"
pub fn derive_slug(title: &str, id: u32) -> String {
    let lower = title.trim().to_lowercase();
    if let Some(pos) = lower.find("season") {
        let rest = lower[pos + "season".len()..].trim_start();
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            return format!("s{}", digits);
        }
    }
    format!("s{}", id)
}

/// The ordered collection of seasons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonArchive {
    seasons: Vec<Season>,
}

impl SeasonArchive {
    /// Build an archive, keeping only the first active season if several are
    pub fn new(seasons: Vec<Season>) -> Self {
        let mut archive = Self { seasons };
        if let Some(id) = archive.active().map(|s| s.id) {
            archive.end_others(id);
        }
        archive
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn get(&self, id: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == id)
    }

    pub fn active(&self) -> Option<&Season> {
        self.seasons.iter().find(|s| s.status == SeasonStatus::Active)
    }

    pub fn active_count(&self) -> usize {
        self.seasons
            .iter()
            .filter(|s| s.status == SeasonStatus::Active)
            .count()
    }

    fn next_id(&self) -> u32 {
        self.seasons.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.seasons
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Season, id.to_string()))
    }

    fn end_others(&mut self, id: u32) {
        for season in self.seasons.iter_mut() {
            if season.id != id && season.status == SeasonStatus::Active {
                debug!("SEASON: Ending {} so {} can be active", season.title, id);
                season.status = SeasonStatus::Ended;
            }
        }
    }

    /// The single place a season's status changes
    pub fn set_status(&mut self, id: u32, status: SeasonStatus) -> LeagueResult<()> {
        let index = self.position(id)?;
        self.seasons[index].status = status;
        if status == SeasonStatus::Active {
            self.end_others(id);
        }
        Ok(())
    }

    /// Create a season; it is listed first
    pub fn create(&mut self, draft: SeasonDraft) -> LeagueResult<&Season> {
        draft.validate()?;
        let id = self.next_id();
        let title = draft.title.trim().to_string();
        let season = Season {
            id,
            slug: derive_slug(&title, id),
            title,
            img: draft
                .img
                .filter(|img| !img.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SEASON_IMG.to_string()),
            // placeholder until set_status applies the requested status
            status: SeasonStatus::Upcoming,
            start_date: draft.start_date,
            end_date: draft.end_date,
        };
        self.seasons.insert(0, season);
        self.set_status(id, draft.status)?;
        Ok(&self.seasons[0])
    }

    /// Replace a season's details
    pub fn edit(&mut self, id: u32, draft: SeasonDraft) -> LeagueResult<&Season> {
        draft.validate()?;
        let index = self.position(id)?;
        {
            let season = &mut self.seasons[index];
            season.title = draft.title.trim().to_string();
            if let Some(img) = draft.img.filter(|img| !img.trim().is_empty()) {
                season.img = img;
            }
            season.start_date = draft.start_date;
            season.end_date = draft.end_date;
        }
        self.set_status(id, draft.status)?;
        Ok(&self.seasons[index])
    }

    pub fn set_active(&mut self, id: u32) -> LeagueResult<()> {
        self.set_status(id, SeasonStatus::Active)
    }

    /// Ended becomes Upcoming; anything else becomes Ended
    pub fn toggle_ended(&mut self, id: u32) -> LeagueResult<SeasonStatus> {
        let index = self.position(id)?;
        let next = match self.seasons[index].status {
            SeasonStatus::Ended => SeasonStatus::Upcoming,
            _ => SeasonStatus::Ended,
        };
        self.set_status(id, next)?;
        Ok(next)
    }

    pub fn remove(&mut self, id: u32) -> LeagueResult<Season> {
        let index = self.position(id)?;
        Ok(self.seasons.remove(index))
    }
}
