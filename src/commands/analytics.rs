use anyhow::{Context, Result};

use crate::analytics::{format_change, format_peso, group_thousands, SalesReport, TrendRange};
use crate::cache;
use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{
    DATE_COL_WIDTH, MONEY_COL_WIDTH, NAME_COL_WIDTH, NUMBER_COL_WIDTH, SPORT_COL_WIDTH,
    VENUE_COL_WIDTH,
};
use crate::session::{Page, SessionContext};

fn format_summary(report: &SalesReport, box_chars: &BoxChars) -> String {
    let summary = report.summarize();
    let mut output = String::new();

    output.push_str(&format!(
        "Total revenue: {} ({} vs last month)\n",
        format_peso(summary.total_revenue),
        format_change(summary.revenue_change)
    ));
    output.push_str(&format!(
        "Tickets sold:  {} ({} vs last month)\n",
        group_thousands(summary.total_tickets),
        format_change(summary.tickets_change)
    ));
    let (sport, sport_tickets) = summary.top_sport.unwrap_or_else(|| ("—".to_string(), 0));
    let (venue, venue_tickets) = summary.top_venue.unwrap_or_else(|| ("—".to_string(), 0));
    output.push_str(&format!(
        "Top sport:     {} {} {} tickets\n",
        sport,
        box_chars.bullet,
        group_thousands(sport_tickets)
    ));
    output.push_str(&format!(
        "Top venue:     {} {} {} tickets\n",
        venue,
        box_chars.bullet,
        group_thousands(venue_tickets)
    ));
    output
}

fn format_top_events(report: &SalesReport, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header("Top Events", false, box_chars));
    for event in &report.top_events {
        output.push_str(&format!(
            "{} {} {} {} {:>num$} {:>5}% {:>money$}\n",
            fit_to_width(&event.name, NAME_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&event.date.to_string(), DATE_COL_WIDTH, ""),
            fit_to_width(&event.sport, SPORT_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&event.venue, VENUE_COL_WIDTH, &box_chars.ellipsis),
            format!("{}/{}", event.tickets_sold, event.capacity),
            event.fill_rate(),
            format_peso(event.revenue),
            num = NUMBER_COL_WIDTH,
            money = MONEY_COL_WIDTH,
        ));
    }
    output
}

fn format_trend(report: &SalesReport, range: TrendRange, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header(
        &format!("Sales Trend ({})", range),
        false,
        box_chars,
    ));
    for point in report.trend(range) {
        output.push_str(&format!(
            "{:<8} {:>num$} {:>money$}\n",
            point.label,
            point.tickets,
            format_peso(point.revenue),
            num = NUMBER_COL_WIDTH,
            money = MONEY_COL_WIDTH,
        ));
    }
    output
}

fn format_tickets_by_sport(report: &SalesReport, box_chars: &BoxChars) -> String {
    let total: u32 = report.tickets_by_sport.iter().map(|s| s.tickets).sum();
    let mut output = String::new();
    output.push_str(&format_header("Tickets by Sport", false, box_chars));
    for share in &report.tickets_by_sport {
        let pct = if total == 0 {
            0.0
        } else {
            f64::from(share.tickets) / f64::from(total) * 100.0
        };
        output.push_str(&format!(
            "{} {:>num$} {:>5.1}%\n",
            fit_to_width(&share.sport, SPORT_COL_WIDTH, &box_chars.ellipsis),
            group_thousands(u64::from(share.tickets)),
            pct,
            num = NUMBER_COL_WIDTH,
        ));
    }
    output
}

/// Full analytics report: summary cards, top events, trend and sport split
pub fn format_analytics(report: &SalesReport, range: TrendRange, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Ticket Sales Analytics", true, box_chars));
    output.push_str(&format_summary(report, box_chars));
    output.push('\n');
    output.push_str(&format_top_events(report, box_chars));
    output.push('\n');
    output.push_str(&format_trend(report, range, box_chars));
    output.push('\n');
    output.push_str(&format_tickets_by_sport(report, box_chars));
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    range: Option<TrendRange>,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Analytics])?;
    let report = cache::fetch_sales_report_cached(provider)
        .await
        .context("Failed to load sales report")?;

    let range = range.unwrap_or_else(|| config.trend_range());
    print!("{}", format_analytics(&report, range, &config.box_chars()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_format_analytics_summary() {
        let report = fixtures::create_sales_report();
        let output = format_analytics(&report, TrendRange::FourteenDays, &BoxChars::unicode());

        assert!(output.contains("Total revenue: ₱828,500 (▲ 18.3% vs last month)"));
        assert!(output.contains("Tickets sold:  1,870 (▲ 16.0% vs last month)"));
        assert!(output.contains("Top sport:     Basketball • 1,290 tickets"));
        assert!(output.contains("Top venue:     UNC Dome • 480 tickets"));
        assert!(output.contains("Sales Trend (14d)"));
    }

    #[test]
    fn test_format_analytics_trend_window() {
        let report = fixtures::create_sales_report();
        let output = format_analytics(&report, TrendRange::SevenDays, &BoxChars::ascii());

        assert!(output.contains("Sales Trend (7d)"));
        assert!(!output.contains("Aug 03"));
        assert!(output.contains("Aug 04"));
        assert!(output.contains("Aug 10"));
    }

    #[test]
    fn test_format_analytics_fill_rate_and_share() {
        let report = fixtures::create_sales_report();
        let output = format_analytics(&report, TrendRange::ThirtyDays, &BoxChars::ascii());

        // 420 of 500 seats
        assert!(output.contains("420/500    84%"));
        // 1290 of 2080 tickets
        assert!(output.contains("62.0%"));
    }
}
