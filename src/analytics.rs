//! Ticket sales analytics
//!
//! Everything here is computed from a [`SalesReport`] of seed rows; there is
//! no ticketing backend.
use std::fmt;

use chrono::NaiveDate;

/// One ticketed event with its sales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSales {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub sport: String,
    pub venue: String,
    pub tickets_sold: u32,
    pub capacity: u32,
    /// Whole pesos
    pub revenue: u64,
}

impl EventSales {
    pub fn fill_rate(&self) -> u32 {
        fill_rate(self.tickets_sold, self.capacity)
    }
}

/// One day of the sales trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesPoint {
    pub label: String,
    pub tickets: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportShare {
    pub sport: String,
    pub tickets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodTotals {
    pub revenue: u64,
    pub tickets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalesReport {
    pub top_events: Vec<EventSales>,
    pub trend: Vec<SalesPoint>,
    pub tickets_by_sport: Vec<SportShare>,
    pub this_month: PeriodTotals,
    pub last_month: PeriodTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrendRange {
    SevenDays,
    #[default]
    FourteenDays,
    ThirtyDays,
}

impl TrendRange {
    pub fn days(&self) -> usize {
        match self {
            Self::SevenDays => 7,
            Self::FourteenDays => 14,
            Self::ThirtyDays => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::FourteenDays => "14d",
            Self::ThirtyDays => "30d",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::SevenDays, Self::FourteenDays, Self::ThirtyDays]
    }

    /// Next range in the 7d -> 14d -> 30d cycle
    pub fn next(&self) -> Self {
        match self {
            Self::SevenDays => Self::FourteenDays,
            Self::FourteenDays => Self::ThirtyDays,
            Self::ThirtyDays => Self::SevenDays,
        }
    }
}

impl fmt::Display for TrendRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline numbers for the analytics page
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_revenue: u64,
    pub total_tickets: u64,
    pub top_sport: Option<(String, u64)>,
    pub top_venue: Option<(String, u64)>,
    pub revenue_change: f64,
    pub tickets_change: f64,
}

/// Percentage change from `previous` to `current`; 100 when there is no
/// previous value
pub fn pct_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 100.0;
    }
    (current - previous) / previous * 100.0
}

/// Tickets sold as a rounded percentage of capacity (0 with no capacity)
pub fn fill_rate(tickets_sold: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    (f64::from(tickets_sold) / f64::from(capacity) * 100.0).round() as u32
}

/// Sum tickets per key, keeping first-seen order, and return the largest
///
/// Ties go to the key seen first.
fn top_by_tickets<'a>(
    events: &'a [EventSales],
    key: impl Fn(&'a EventSales) -> &'a str,
) -> Option<(String, u64)> {
    let mut totals: Vec<(&str, u64)> = Vec::new();
    for event in events {
        let k = key(event);
        match totals.iter_mut().find(|(name, _)| *name == k) {
            Some((_, total)) => *total += u64::from(event.tickets_sold),
            None => totals.push((k, u64::from(event.tickets_sold))),
        }
    }
    let mut best: Option<(&str, u64)> = None;
    for (name, total) in totals {
        if best.map_or(true, |(_, t)| total > t) {
            best = Some((name, total));
        }
    }
    best.map(|(name, total)| (name.to_string(), total))
}

impl SalesReport {
    pub fn summarize(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            total_revenue: self.top_events.iter().map(|e| e.revenue).sum(),
            total_tickets: self
                .top_events
                .iter()
                .map(|e| u64::from(e.tickets_sold))
                .sum(),
            top_sport: top_by_tickets(&self.top_events, |e| e.sport.as_str()),
            top_venue: top_by_tickets(&self.top_events, |e| e.venue.as_str()),
            revenue_change: pct_change(
                self.this_month.revenue as f64,
                self.last_month.revenue as f64,
            ),
            tickets_change: pct_change(
                f64::from(self.this_month.tickets),
                f64::from(self.last_month.tickets),
            ),
        }
    }

    /// The most recent `range.days()` points of the trend
    pub fn trend(&self, range: TrendRange) -> &[SalesPoint] {
        let start = self.trend.len().saturating_sub(range.days());
        &self.trend[start..]
    }
}

/// "1234567" -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-peso currency, e.g. "₱961,000"
pub fn format_peso(amount: u64) -> String {
    format!("₱{}", group_thousands(amount))
}

/// Signed change badge, e.g. "▲ 18.3%" or "▼ 4.0%"
pub fn format_change(change: f64) -> String {
    let arrow = if change >= 0.0 { "▲" } else { "▼" };
    format!("{} {:.1}%", arrow, change.abs())
}
