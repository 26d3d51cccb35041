use anyhow::{Context, Result};

use crate::session::{Role, SessionContext};

pub fn format_whoami(session: &SessionContext) -> String {
    match session.current() {
        Some(current) => {
            let menu: Vec<&str> = session.menu().iter().map(|p| p.title()).collect();
            format!(
                "Logged in as {} ({})\nMenu: {}\n",
                current.email,
                current.role,
                menu.join(", ")
            )
        }
        None => "Not logged in\n".to_string(),
    }
}

pub fn login(session: &mut SessionContext, email: &str, password: &str, role: Role) -> Result<()> {
    session
        .login(email, password, role)
        .with_context(|| format!("Login failed for '{}'", email.trim()))?;
    print!("{}", format_whoami(session));
    Ok(())
}

pub fn logout(session: &mut SessionContext) -> Result<()> {
    let was_logged_in = session.is_logged_in();
    session.logout().context("Failed to clear session")?;
    if was_logged_in {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

pub fn whoami(session: &SessionContext) -> Result<()> {
    print!("{}", format_whoami(session));
    Ok(())
}
