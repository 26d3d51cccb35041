use anyhow::{Context, Result};

use crate::aggregates::{doc_ratio_label, team_count_for_school};
use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{NAME_COL_WIDTH, STATUS_COL_WIDTH};
use crate::session::{Page, SessionContext};
use crate::types::{Player, SportGroup};

fn format_player(player: &Player, box_chars: &BoxChars) -> String {
    let mut line = format!(
        "      #{:<3} {} {:<4} {} {}\n",
        player.jersey_label(),
        fit_to_width(&player.name, NAME_COL_WIDTH, &box_chars.ellipsis),
        player.position,
        fit_to_width(player.review.status.name(), STATUS_COL_WIDTH, ""),
        doc_ratio_label(player),
    );
    if player.is_transferee {
        line.push_str(&format!("           Transferee: {}\n", player.transferee_label()));
    }
    if let Some(note) = &player.review.note {
        line.push_str(&format!("           Reason: {}\n", note));
    }
    line
}

/// Sport -> school -> team -> player tree with document progress
pub fn format_screening(groups: &[SportGroup], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Player Screening", true, box_chars));

    for group in groups {
        output.push('\n');
        output.push_str(&format_header(&group.sport, false, box_chars));
        if group.schools.is_empty() {
            output.push_str("  No schools registered.\n");
            continue;
        }
        for school in &group.schools {
            output.push_str(&format!(
                "  {} ({}) {} {} team(s)\n",
                school.school_name,
                school.school_code,
                box_chars.bullet,
                team_count_for_school(school)
            ));
            for team in &school.teams {
                output.push_str(&format!(
                    "    {} [{}] {} player(s)\n",
                    team.team_name,
                    team.id,
                    team.players.len()
                ));
                if team.players.is_empty() {
                    output.push_str("      No players submitted.\n");
                }
                for player in &team.players {
                    output.push_str(&format_player(player, box_chars));
                }
            }
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
    authorize(session, &[Page::Screening])?;
    let mut groups = provider
        .sport_groups()
        .await
        .context("Failed to load screening data")?;

    if let Some(sport) = sport {
        groups.retain(|g| g.sport.eq_ignore_ascii_case(sport.trim()));
        if groups.is_empty() {
            anyhow::bail!("Unknown sport '{}'", sport);
        }
    }

    print!("{}", format_screening(&groups, &config.box_chars()));
    Ok(())
}
