//! Login session shared by the CLI and the dashboard
//!
//! The session is a small TOML file in the XDG state directory. There is no
//! credential check: any well-formed email with a non-empty password logs in
//! with the chosen role.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use xdg::BaseDirectories;

use crate::error::{LeagueError, LeagueResult};
use crate::types::is_valid_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    School,
    Staff,
    Coach,
}

impl Role {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::School => "school",
            Self::Staff => "staff",
            Self::Coach => "coach",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Admin, Self::School, Self::Staff, Self::Coach]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Dashboard pages reachable from the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Admin landing page: announcement management
    Home,
    Registrations,
    Screening,
    Events,
    Sports,
    Analytics,
    Seasons,
    UserManagement,
    Announcements,
    Coaches,
    Schedules,
    Support,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Registrations => "Team Registration",
            Self::Screening => "Player Screening",
            Self::Events => "Events",
            Self::Sports => "Sports",
            Self::Analytics => "Analytics",
            Self::Seasons => "Past Seasons",
            Self::UserManagement => "User Management",
            Self::Announcements => "Announcements",
            Self::Coaches => "Coaches",
            Self::Schedules => "Schedules",
            Self::Support => "Support",
        }
    }

    /// Menu label as a role sees it; admins manage events rather than browse them
    pub fn label_for(&self, role: Option<Role>) -> &'static str {
        match (self, role) {
            (Self::Events, Some(Role::Admin)) => "Event Management",
            _ => self.title(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

const ADMIN_MENU: &[Page] = &[
    Page::Home,
    Page::Events,
    Page::Sports,
    Page::Registrations,
    Page::Screening,
    Page::Analytics,
    Page::Seasons,
    Page::UserManagement,
    Page::Support,
];
const SCHOOL_MENU: &[Page] = &[
    Page::Announcements,
    Page::Events,
    Page::Coaches,
    Page::Screening,
    Page::Registrations,
    Page::Support,
];
const STAFF_MENU: &[Page] = &[Page::Announcements, Page::Events, Page::Support];
const COACH_MENU: &[Page] = &[Page::Announcements, Page::Schedules, Page::Support];

static NAV_MENU: phf::Map<&'static str, &'static [Page]> = phf_map! {
    "admin" => ADMIN_MENU,
    "school" => SCHOOL_MENU,
    "staff" => STAFF_MENU,
    "coach" => COACH_MENU,
};

/// Side menu for a role, in display order
pub fn menu_for(role: Role) -> &'static [Page] {
    NAV_MENU.get(role.key()).copied().unwrap_or(&[])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub is_authenticated: bool,
}

pub fn get_session_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let state_home = xdg_dirs.get_state_home()?;
    Some(state_home.join("session.toml"))
}

/// Process-wide login state, loaded once at start-up
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    path: Option<PathBuf>,
    session: Option<Session>,
}

impl SessionContext {
    /// Load the session from the XDG state directory
    pub fn init() -> Self {
        match get_session_path() {
            Some(path) => Self::init_at(path),
            None => {
                warn!("SESSION: Unable to determine state directory; session will not persist");
                Self::default()
            }
        }
    }

    /// Load the session from a specific file
    ///
    /// A missing or unreadable file, or one that is not authenticated, gives a
    /// logged-out context.
    pub fn init_at(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let session = read_session(&path).filter(|s| s.is_authenticated);
        debug!(
            "SESSION: Loaded from {} (logged in: {})",
            path.display(),
            session.is_some()
        );
        Self {
            path: Some(path),
            session,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// Actor name recorded in review timelines
    pub fn actor(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.email.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn login(&mut self, email: &str, password: &str, role: Role) -> LeagueResult<&Session> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LeagueError::MissingField("Email"));
        }
        if !is_valid_email(email) {
            return Err(LeagueError::InvalidEmail(email.to_string()));
        }
        if password.is_empty() {
            return Err(LeagueError::MissingField("Password"));
        }

        let session = Session {
            email: email.to_string(),
            role,
            is_authenticated: true,
        };
        if let Some(path) = &self.path {
            write_session(path, &session)?;
        }
        info!("SESSION: {} logged in as {}", session.email, role);
        Ok(&*self.session.insert(session))
    }

    pub fn logout(&mut self) -> LeagueResult<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path).map_err(|e| LeagueError::Session(e.to_string()))?;
            }
        }
        if let Some(session) = self.session.take() {
            info!("SESSION: {} logged out", session.email);
        }
        Ok(())
    }

    /// The current session, if it carries `role`
    pub fn require_role(&self, role: Role) -> LeagueResult<&Session> {
        let session = self.session.as_ref().ok_or(LeagueError::NotLoggedIn)?;
        if session.role != role {
            return Err(LeagueError::WrongRole {
                required: role,
                actual: session.role,
            });
        }
        Ok(session)
    }

    pub fn menu(&self) -> &'static [Page] {
        self.role().map(menu_for).unwrap_or(&[])
    }
}

fn read_session(path: &Path) -> Option<Session> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("SESSION: Ignoring malformed session file {}: {}", path.display(), e);
            None
        }
    }
}

fn write_session(path: &Path, session: &Session) -> LeagueResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LeagueError::Session(e.to_string()))?;
    }
    let content = toml::to_string(session).map_err(|e| LeagueError::Session(e.to_string()))?;
    fs::write(path, content).map_err(|e| LeagueError::Session(e.to_string()))
}
