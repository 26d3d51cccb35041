pub mod analytics;
pub mod announcements;
pub mod coaches;
pub mod events;
pub mod screening;
pub mod seasons;
pub mod session;
pub mod sports;
pub mod staff;
pub mod support;
pub mod teams;
pub mod timeline;

use anyhow::{bail, Result};

use crate::error::LeagueError;
use crate::session::{menu_for, Page, Role, SessionContext};

/// Check that the logged-in role has `pages` (any of them) in its menu
///
/// Returns the role so commands can tailor their output.
pub fn authorize(session: &SessionContext, pages: &[Page]) -> Result<Role> {
    let role = session.role().ok_or(LeagueError::NotLoggedIn)?;
    if !menu_for(role).iter().any(|p| pages.contains(p)) {
        let names: Vec<&str> = pages.iter().map(|p| p.title()).collect();
        bail!("{} is not available to the {} role", names.join(" / "), role);
    }
    Ok(role)
}
