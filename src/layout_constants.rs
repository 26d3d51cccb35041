//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common column widths so the reporting commands and
//! the dashboard tables line up the same way.

/// Width of team id columns ("b-ncf-001")
pub const TEAM_ID_COL_WIDTH: usize = 12;

/// Width of team and player name columns
pub const NAME_COL_WIDTH: usize = 24;

/// Width of school name columns
pub const SCHOOL_COL_WIDTH: usize = 28;

/// Width of sport name columns
pub const SPORT_COL_WIDTH: usize = 22;

/// Width of review / season / event status columns
pub const STATUS_COL_WIDTH: usize = 10;

/// Width of "YYYY-MM-DD HH:MM" timestamp columns
pub const TIMESTAMP_COL_WIDTH: usize = 18;

/// Width of "YYYY-MM-DD" date columns
pub const DATE_COL_WIDTH: usize = 12;

/// Width of venue columns
pub const VENUE_COL_WIDTH: usize = 16;

/// Width of email columns
pub const EMAIL_COL_WIDTH: usize = 24;

/// Width of numeric columns (tickets, capacity, counts)
pub const NUMBER_COL_WIDTH: usize = 9;

/// Width of money columns ("₱240,000")
pub const MONEY_COL_WIDTH: usize = 12;

/// Width of the horizontal rule under CLI tables
pub const CLI_RULE_WIDTH: usize = 100;

/// Width of the sidebar menu in the dashboard
pub const SIDEBAR_WIDTH: u16 = 22;

/// Height of the decline / text prompt popup
pub const PROMPT_HEIGHT: u16 = 7;
