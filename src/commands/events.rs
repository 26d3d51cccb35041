use anyhow::{Context, Result};

use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::event::{Event, EventSchedule, ALL_SPORTS};
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{
    DATE_COL_WIDTH, NAME_COL_WIDTH, SPORT_COL_WIDTH, STATUS_COL_WIDTH, VENUE_COL_WIDTH,
};
use crate::session::{Page, SessionContext};

const TIME_COL_WIDTH: usize = 18;

pub fn format_events(events: &[&Event], sport: &str, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    let title = if sport == ALL_SPORTS {
        "Events".to_string()
    } else {
        format!("Events: {}", sport)
    };
    output.push_str(&format_header(&title, true, box_chars));

    if events.is_empty() {
        output.push_str("No events scheduled.\n");
        return output;
    }

    for event in events {
        output.push_str(&format!(
            "{} {} {} {} {} {}\n",
            fit_to_width(&event.name, NAME_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&event.date.to_string(), DATE_COL_WIDTH, ""),
            fit_to_width(&event.time, TIME_COL_WIDTH, ""),
            fit_to_width(&event.sport, SPORT_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&event.venue, VENUE_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(event.status.name(), STATUS_COL_WIDTH, ""),
        ));
        if let Some(result) = &event.result {
            output.push_str(&format!("    Result: {}\n", result));
        }
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    sport: Option<String>,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Events, Page::Schedules])?;
    let schedule = EventSchedule::new(provider.events().await.context("Failed to load events")?);

    let sport = sport.unwrap_or_else(|| ALL_SPORTS.to_string());
    if !schedule.sport_options().iter().any(|o| *o == sport) {
        anyhow::bail!(
            "Unknown sport '{}'. Options: {}",
            sport,
            schedule.sport_options().join(", ")
        );
    }

    let events = schedule.filter_by_sport(&sport);
    print!("{}", format_events(&events, &sport, &config.box_chars()));
    Ok(())
}
