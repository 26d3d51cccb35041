use anyhow::{Context, Result};

use crate::aggregates::{team_tally, total_teams};
use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{
    CLI_RULE_WIDTH, NAME_COL_WIDTH, NUMBER_COL_WIDTH, SCHOOL_COL_WIDTH, STATUS_COL_WIDTH,
    TEAM_ID_COL_WIDTH, TIMESTAMP_COL_WIDTH,
};
use crate::session::{Page, SessionContext};
use crate::types::SportGroup;

fn format_sport_group(group: &SportGroup, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    let tally = team_tally(group);
    output.push_str(&format!(
        "\n{} ({} teams {b} {} pending {b} {} approved {b} {} rejected)\n",
        group.sport,
        tally.total(),
        tally.pending,
        tally.approved,
        tally.rejected,
        b = box_chars.bullet,
    ));

    if tally.total() == 0 {
        output.push_str("  No teams have registered yet.\n");
        return output;
    }

    output.push_str(&format!(
        "{} {} {} {} {} {:>num$}\n",
        fit_to_width("ID", TEAM_ID_COL_WIDTH, ""),
        fit_to_width("Team", NAME_COL_WIDTH, ""),
        fit_to_width("School", SCHOOL_COL_WIDTH, ""),
        fit_to_width("Status", STATUS_COL_WIDTH, ""),
        fit_to_width("Submitted", TIMESTAMP_COL_WIDTH, ""),
        "Players",
        num = NUMBER_COL_WIDTH,
    ));
    output.push_str(&format!("{}\n", box_chars.horizontal.repeat(CLI_RULE_WIDTH)));

    for team in group.teams() {
        output.push_str(&format!(
            "{} {} {} {} {} {:>num$}\n",
            fit_to_width(&team.id, TEAM_ID_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&team.team_name, NAME_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&team.school_name, SCHOOL_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(team.review.status.name(), STATUS_COL_WIDTH, ""),
            fit_to_width(&team.submitted_at, TIMESTAMP_COL_WIDTH, ""),
            team.players.len(),
            num = NUMBER_COL_WIDTH,
        ));
        if let Some(note) = &team.review.note {
            output.push_str(&format!("    Reason: {}\n", note));
        }
    }
    output
}

/// Registration review report for the sports with an open form
pub fn format_registration(groups: &[SportGroup], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Team Registration", true, box_chars));

    if groups.is_empty() {
        output.push_str("\nNo registration forms yet.\n");
        return output;
    }

    for group in groups {
        output.push_str(&format_sport_group(group, box_chars));
    }
    output.push_str(&format!("\nTotal teams: {}\n", total_teams(groups)));
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    sport: Option<String>,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Registrations])?;
    let mut groups = provider
        .registration_groups()
        .await
        .context("Failed to load registrations")?;

    if let Some(sport) = sport {
        groups.retain(|g| g.sport.eq_ignore_ascii_case(sport.trim()));
        if groups.is_empty() {
            anyhow::bail!("No registration form for sport '{}'", sport);
        }
    }

    print!("{}", format_registration(&groups, &config.box_chars()));
    Ok(())
}
