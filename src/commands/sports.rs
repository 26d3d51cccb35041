use anyhow::{Context, Result};

use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::SPORT_COL_WIDTH;
use crate::session::{Page, SessionContext};
use crate::sports::SportDefinition;

const DESCRIPTION_COL_WIDTH: usize = 28;

pub fn format_sports(sports: &[SportDefinition], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Sports", true, box_chars));

    if sports.is_empty() {
        output.push_str("No sports defined.\n");
        return output;
    }

    for sport in sports {
        output.push_str(&format!(
            "{:<4} {} {} {}\n",
            sport.id,
            fit_to_width(&sport.name, SPORT_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&sport.description, DESCRIPTION_COL_WIDTH, &box_chars.ellipsis),
            sport.roster_requirements()
        ));
    }
    output
}

pub async fn run(provider: &dyn LeagueDataProvider, session: &SessionContext, config: &Config) -> Result<()> {
    authorize(session, &[Page::Sports])?;
    let sports = provider
        .sport_definitions()
        .await
        .context("Failed to load sports")?;
    print!("{}", format_sports(&sports, &config.box_chars()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_format_sports_shows_roster_requirements() {
        let output = format_sports(&fixtures::create_sport_definitions(), &BoxChars::ascii());

        assert!(output.contains("6v6 court sport"));
        assert!(output.contains("Jersey #, Position"));
        assert!(output.contains("Name only"));
    }
}
