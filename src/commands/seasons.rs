use anyhow::{Context, Result};

use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{DATE_COL_WIDTH, STATUS_COL_WIDTH};
use crate::season::Season;
use crate::session::{Page, SessionContext};

const SLUG_COL_WIDTH: usize = 6;
const TITLE_COL_WIDTH: usize = 24;

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "—".to_string())
}

pub fn format_seasons(seasons: &[Season], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Seasons", true, box_chars));

    match seasons.iter().find(|s| s.status == crate::season::SeasonStatus::Active) {
        Some(active) => output.push_str(&format!("Current season: {}\n\n", active.title)),
        None => output.push_str("No active season\n\n"),
    }

    output.push_str(&format!(
        "{} {} {} {} {}\n",
        fit_to_width("Slug", SLUG_COL_WIDTH, ""),
        fit_to_width("Title", TITLE_COL_WIDTH, ""),
        fit_to_width("Status", STATUS_COL_WIDTH, ""),
        fit_to_width("Start", DATE_COL_WIDTH, ""),
        "End"
    ));
    output.push_str(&format!(
        "{}\n",
        box_chars
            .horizontal
            .repeat(SLUG_COL_WIDTH + TITLE_COL_WIDTH + STATUS_COL_WIDTH + DATE_COL_WIDTH * 2 + 4)
    ));

    for season in seasons {
        output.push_str(&format!(
            "{} {} {} {} {}\n",
            fit_to_width(&season.slug, SLUG_COL_WIDTH, ""),
            fit_to_width(&season.title, TITLE_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(season.status.name(), STATUS_COL_WIDTH, ""),
            fit_to_width(&date_or_dash(season.start_date), DATE_COL_WIDTH, ""),
            date_or_dash(season.end_date)
        ));
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Seasons])?;
    let seasons = provider.seasons().await.context("Failed to load seasons")?;
    print!("{}", format_seasons(&seasons, &config.box_chars()));
    Ok(())
}
