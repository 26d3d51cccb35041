use anyhow::{Context, Result};

use crate::aggregates::pinned;
use crate::announcement::Announcement;
use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{format_header, BoxChars};
use crate::session::{Page, SessionContext};

pub fn format_announcements(items: &[&Announcement], title: &str, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(title, true, box_chars));

    if items.is_empty() {
        output.push_str("No announcements.\n");
        return output;
    }

    for item in items {
        let pin = if item.is_pinned { " [pinned]" } else { "" };
        output.push_str(&format!("\n{}{}\n", item.title, pin));
        output.push_str(&format!(
            "{} {} {} {} {}\n",
            item.author,
            box_chars.bullet,
            item.created_at.format("%Y-%m-%d %H:%M"),
            box_chars.bullet,
            item.audience
        ));
        output.push_str(&format!("{}\n", item.description));
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    pinned_only: bool,
    config: &Config,
) -> Result<()> {
    let role = authorize(session, &[Page::Announcements, Page::Home])?;
    let all = provider
        .announcements()
        .await
        .context("Failed to load announcements")?;

    let visible: Vec<&Announcement> = all
        .iter()
        .filter(|a| a.audience.is_visible_to(role))
        .collect();
    let (items, title) = if pinned_only {
        (pinned(visible), "Pinned Announcements")
    } else {
        (visible, "Announcements")
    };

    print!("{}", format_announcements(&items, title, &config.box_chars()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_format_announcements_marks_pinned() {
        let all = fixtures::create_announcements();
        let items: Vec<&Announcement> = all.iter().collect();

        let output = format_announcements(&items, "Announcements", &BoxChars::unicode());

        assert!(output.contains("Basketball Tournament 2024 - Registration Open [pinned]"));
        assert!(output.contains("BUCAL Admin • 2025-08-11 09:00 • All"));
        assert!(output.contains("New Player Screening Requirements\n"));
    }

    #[test]
    fn test_format_announcements_empty() {
        let output = format_announcements(&[], "Pinned Announcements", &BoxChars::ascii());
        assert!(output.contains("No announcements."));
    }
}
