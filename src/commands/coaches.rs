use anyhow::{Context, Result};

use crate::coach::{Coach, CoachRoster};
use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{EMAIL_COL_WIDTH, NAME_COL_WIDTH};
use crate::session::{Page, SessionContext};

const CODE_COL_WIDTH: usize = 10;

pub fn format_coaches(coaches: &[&Coach], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Coaches", true, box_chars));

    if coaches.is_empty() {
        output.push_str("No coaches match.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<4} {} {} {} Sports\n",
        "ID",
        fit_to_width("Name", NAME_COL_WIDTH, ""),
        fit_to_width("Email", EMAIL_COL_WIDTH, ""),
        fit_to_width("Code", CODE_COL_WIDTH, ""),
    ));
    output.push_str(&format!(
        "{}\n",
        box_chars
            .horizontal
            .repeat(4 + NAME_COL_WIDTH + EMAIL_COL_WIDTH + CODE_COL_WIDTH + 30)
    ));
    for coach in coaches {
        let sports = if coach.sports.is_empty() {
            "—".to_string()
        } else {
            coach.sports.join(", ")
        };
        output.push_str(&format!(
            "{:<4} {} {} {} {}\n",
            coach.id,
            fit_to_width(&coach.name, NAME_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&coach.email, EMAIL_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&coach.access_code, CODE_COL_WIDTH, ""),
            sports
        ));
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    query: Option<String>,
    sport: Option<String>,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Coaches])?;
    let roster = CoachRoster::new(provider.coaches().await.context("Failed to load coaches")?);
    let matches = roster.search(query.as_deref().unwrap_or(""), sport.as_deref());
    print!("{}", format_coaches(&matches, &config.box_chars()));
    Ok(())
}
