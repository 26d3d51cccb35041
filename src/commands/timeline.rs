use anyhow::{Context, Result};

use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{STATUS_COL_WIDTH, TIMESTAMP_COL_WIDTH};
use crate::session::{Role, SessionContext};
use crate::types::Team;

/// Submission timeline for one team
pub fn format_timeline(team: &Team, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(
        &format!("Submission Timeline: {} – {}", team.team_name, team.sport),
        true,
        box_chars,
    ));

    if team.timeline.is_empty() {
        output.push_str("No submission history available yet.\n");
        return output;
    }

    for entry in &team.timeline {
        output.push_str(&format!(
            "{} {} {}\n",
            fit_to_width(entry.status.name(), STATUS_COL_WIDTH, ""),
            fit_to_width(&entry.timestamp, TIMESTAMP_COL_WIDTH, ""),
            entry.actor
        ));
        if let Some(remarks) = &entry.remarks {
            output.push_str(&format!("    Remarks: {}\n", remarks));
        }
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    team_id: &str,
    config: &Config,
) -> Result<()> {
    session.require_role(Role::Admin)?;
    let team = provider
        .team(team_id)
        .await
        .with_context(|| format!("Failed to load timeline for team '{}'", team_id))?;

    print!("{}", format_timeline(&team, &config.box_chars()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::find_team;

    #[test]
    fn test_format_timeline_lists_entries_in_order() {
        let groups = fixtures::create_sport_groups();
        let team = find_team(&groups, "b-adnu-001").unwrap();

        let output = format_timeline(team, &BoxChars::ascii());

        let draft = output.find("Draft").unwrap();
        let pending = output.find("Pending").unwrap();
        let approved = output.find("Approved").unwrap();
        assert!(draft < pending && pending < approved);
        assert!(output.contains("Coach Ana Lim"));
        assert!(output.contains("Submission Timeline: ADNU Blue Knights – Basketball"));
    }

    #[test]
    fn test_format_timeline_empty_and_remarks() {
        let groups = fixtures::create_sport_groups();
        let mut team = find_team(&groups, "v-usi-001").unwrap().clone();
        team.timeline.clear();
        assert!(format_timeline(&team, &BoxChars::ascii()).contains("No submission history"));

        team.timeline.push(crate::types::TimelineEntry {
            status: crate::types::TimelineStatus::Rejected,
            timestamp: "2025-08-13 09:00".to_string(),
            actor: "bucaladmin@gmail.com".to_string(),
            remarks: Some("e-signature missing".to_string()),
        });
        assert!(format_timeline(&team, &BoxChars::ascii()).contains("Remarks: e-signature missing"));
    }
}
