use anyhow::{Context, Result};

use crate::commands::authorize;
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::formatting::{fit_to_width, format_header, BoxChars};
use crate::layout_constants::{EMAIL_COL_WIDTH, NAME_COL_WIDTH, STATUS_COL_WIDTH};
use crate::session::{Page, SessionContext};
use crate::staff::StaffAccount;

const POSITION_COL_WIDTH: usize = 14;

pub fn format_staff(accounts: &[StaffAccount], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Staff Accounts", true, box_chars));

    if accounts.is_empty() {
        output.push_str("No staff accounts.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<4} {} {} {} {} Code\n",
        "ID",
        fit_to_width("Name", NAME_COL_WIDTH, ""),
        fit_to_width("Position", POSITION_COL_WIDTH, ""),
        fit_to_width("Email", EMAIL_COL_WIDTH, ""),
        fit_to_width("Status", STATUS_COL_WIDTH, ""),
    ));
    for account in accounts {
        output.push_str(&format!(
            "{:<4} {} {} {} {} {}\n",
            account.id,
            fit_to_width(&account.name, NAME_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&account.position, POSITION_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(&account.email, EMAIL_COL_WIDTH, &box_chars.ellipsis),
            fit_to_width(account.status.name(), STATUS_COL_WIDTH, ""),
            account.access_code
        ));
    }
    output
}

pub async fn run(provider: &dyn LeagueDataProvider, session: &SessionContext, config: &Config) -> Result<()> {
    authorize(session, &[Page::UserManagement])?;
    let accounts = provider
        .staff_accounts()
        .await
        .context("Failed to load staff accounts")?;
    print!("{}", format_staff(&accounts, &config.box_chars()));
    Ok(())
}
