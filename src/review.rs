//! Registration review state machine
//!
//! Teams and players move from `Pending` to either `Approved` or `Rejected`.
//! Approval is unconditional; declining requires a reason whose trimmed
//! length is between [`MIN_REASON_CHARS`] and [`MAX_REASON_CHARS`].

use std::fmt;

use crate::error::{LeagueError, LeagueResult};

/// Minimum trimmed length of a decline reason
pub const MIN_REASON_CHARS: usize = 10;

/// Maximum trimmed length of a decline reason
pub const MAX_REASON_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Rejected]
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated decline reason (already trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineReason(String);

impl DeclineReason {
    /// Trim and validate a raw reason
    pub fn parse(raw: &str) -> LeagueResult<Self> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < MIN_REASON_CHARS {
            return Err(LeagueError::ReasonTooShort(len));
        }
        if len > MAX_REASON_CHARS {
            return Err(LeagueError::ReasonTooLong(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Live feedback for a reason being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonFeedback {
    /// Characters still needed to reach the minimum
    pub more_required: usize,
    /// Characters left before the maximum
    pub remaining: usize,
    pub too_short: bool,
    pub too_long: bool,
}

impl ReasonFeedback {
    pub fn for_input(raw: &str) -> Self {
        let len = raw.trim().chars().count();
        Self {
            more_required: MIN_REASON_CHARS.saturating_sub(len),
            remaining: MAX_REASON_CHARS.saturating_sub(len),
            too_short: len < MIN_REASON_CHARS,
            too_long: len > MAX_REASON_CHARS,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.too_short && !self.too_long
    }

    pub fn hint(&self) -> String {
        format!(
            "{} more characters required • {} remaining (max {})",
            self.more_required, self.remaining, MAX_REASON_CHARS
        )
    }
}

/// Reviewer decision applied to a team or player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Decline(DeclineReason),
}

impl Decision {
    /// Build a decline decision from raw input, validating the reason
    pub fn decline(raw: &str) -> LeagueResult<Self> {
        DeclineReason::parse(raw).map(Self::Decline)
    }

    pub fn resulting_status(&self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Decline(_) => ReviewStatus::Rejected,
        }
    }
}

/// Review state of a single team or player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Review {
    pub status: ReviewStatus,
    /// Decline reason, present only while rejected
    pub note: Option<String>,
}

impl Review {
    pub fn with_status(status: ReviewStatus) -> Self {
        Self { status, note: None }
    }

    /// Approve regardless of the current status
    pub fn approve(&mut self) {
        self.status = ReviewStatus::Approved;
        self.note = None;
    }

    /// Decline with a raw reason; leaves the review untouched on error
    pub fn decline(&mut self, raw_reason: &str) -> LeagueResult<()> {
        let reason = DeclineReason::parse(raw_reason)?;
        self.reject(reason);
        Ok(())
    }

    fn reject(&mut self, reason: DeclineReason) {
        self.status = ReviewStatus::Rejected;
        self.note = Some(reason.into_inner());
    }

    pub fn apply(&mut self, decision: Decision) {
        match decision {
            Decision::Approve => self.approve(),
            Decision::Decline(reason) => self.reject(reason),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReviewStatus::Pending
    }
}

/// Counts of reviews per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewTally {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ReviewTally {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        reviews.into_iter().fold(Self::default(), |mut tally, review| {
            match review.status {
                ReviewStatus::Pending => tally.pending += 1,
                ReviewStatus::Approved => tally.approved += 1,
                ReviewStatus::Rejected => tally.rejected += 1,
            }
            tally
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}
