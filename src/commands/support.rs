use anyhow::{Context, Result};

use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{EMAIL_COL_WIDTH, STATUS_COL_WIDTH, TIMESTAMP_COL_WIDTH};
use crate::session::{Page, SessionContext};
use crate::support::{SupportDesk, SupportTicket};

const TICKET_ID_COL_WIDTH: usize = 8;
const SUBJECT_COL_WIDTH: usize = 36;

/// Ticket table followed by the message thread of `thread`, if given
pub fn format_tickets(desk: &SupportDesk, thread: Option<&SupportTicket>, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(
        &format!("Support ({} open)", desk.open_count()),
        true,
        box_chars,
    ));

    if desk.all().is_empty() {
        output.push_str("No support tickets.\n");
        return output;
    }

    output.push_str(&format!(
        "{} {} {} {} {}\n",
        fit_to_width("ID", TICKET_ID_COL_WIDTH, ""),
        fit_to_width("Subject", SUBJECT_COL_WIDTH, ""),
        fit_to_width("From", EMAIL_COL_WIDTH, ""),
        fit_to_width("Status", STATUS_COL_WIDTH, ""),
        fit_to_width("Updated", TIMESTAMP_COL_WIDTH, ""),
    ));
    for ticket in desk.all() {
        output.push_str(&format!(
            "{} {} {} {} {}\n",
            fit_to_width(&ticket.id, TICKET_ID_COL_WIDTH, ""),
            fit_to_width(&ticket.subject, SUBJECT_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&ticket.user_email, EMAIL_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(ticket.status.name(), STATUS_COL_WIDTH, ""),
            fit_to_width(&ticket.updated_at, TIMESTAMP_COL_WIDTH, ""),
        ));
    }

    if let Some(ticket) = thread {
        output.push('\n');
        output.push_str(&format_header(&ticket.subject, false, box_chars));
        output.push_str(&format!(
            "{} {} {} priority{}\n",
            ticket.user_email,
            box_chars.bullet,
            ticket.priority.name(),
            ticket
                .sport
                .as_ref()
                .map(|s| format!(" {} {}", box_chars.bullet, s))
                .unwrap_or_default()
        ));
        for message in &ticket.messages {
            output.push_str(&format!(
                "[{} {} {}] {}\n",
                message.sender.name(),
                box_chars.bullet,
                message.time,
                message.text
            ));
        }
    }
    output
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    session: &SessionContext,
    ticket_id: Option<String>,
    config: &Config,
) -> Result<()> {
    authorize(session, &[Page::Support])?;
    let desk = SupportDesk::new(
        provider
            .support_tickets()
            .await
            .context("Failed to load support tickets")?,
    );
    let thread = match ticket_id.as_deref() {
        Some(id) => Some(
            desk.get(id)
                .with_context(|| format!("No support ticket with id '{}'", id))?,
        ),
        None => None,
    };
    print!("{}", format_tickets(&desk, thread, &config.box_chars()));
    Ok(())
}
