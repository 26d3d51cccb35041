use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;

use crate::analytics::{SalesReport, TrendRange};
use crate::announcement::{AnnouncementBoard, Audience};
use crate::coach::CoachRoster;
use crate::config::Config;
use crate::drilldown::DrillDown;
use crate::event::{EventSchedule, ALL_SPORTS};
use crate::registration::RegistrationForms;
use crate::season::Season;
use crate::session::{menu_for, Page, Role};
use crate::sports::SportRegistry;
use crate::staff::StaffDirectory;
use crate::support::SupportDesk;
use crate::types::SportGroup;

use super::types::Prompt;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub data: DataState,
    pub ui: UiState,
    pub system: SystemState,
}

impl AppState {
    /// Initial state for a logged-in user: first menu page, menu focused
    pub fn for_role(role: Role, actor: impl Into<String>, config: Config) -> Self {
        let mut state = Self::default();
        state.system.role = Some(role);
        state.system.actor = actor.into();
        state.ui.analytics.range = config.trend_range();
        state.system.config = config;
        if let Some(first) = menu_for(role).first() {
            state.navigation.current_page = *first;
        }
        state.system.reset_status_message();
        state
    }

    /// Pages in the side menu for the current role
    pub fn menu(&self) -> &'static [Page] {
        self.system.role.map(menu_for).unwrap_or(&[])
    }

    pub fn is_admin(&self) -> bool {
        self.system.role == Some(Role::Admin)
    }

    /// Whether the current role may change the data shown on `page`
    ///
    /// Admins manage everything on their menu; schools manage their
    /// announcements and coaches. Other roles only read.
    pub fn can_manage(&self, page: Page) -> bool {
        match self.system.role {
            Some(Role::Admin) => true,
            Some(Role::School) => matches!(page, Page::Announcements | Page::Coaches),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current_page: Page,
    /// Whether focus is on the page content (true) or the side menu (false)
    pub content_focused: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: Page::Home,
            content_focused: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // Wrapped in Arc to avoid deep clones on every reducer call
    pub sports: Arc<Vec<SportGroup>>,
    pub forms: Arc<RegistrationForms>,
    pub seasons: Arc<Vec<Season>>,
    pub announcements: Arc<AnnouncementBoard>,
    pub coaches: Arc<CoachRoster>,
    pub events: Arc<EventSchedule>,
    pub sales: Arc<Option<SalesReport>>,
    pub registry: Arc<SportRegistry>,
    pub staff: Arc<StaffDirectory>,
    pub tickets: Arc<SupportDesk>,

    pub loading: HashSet<LoadingKey>,
    pub errors: HashMap<LoadingKey, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingKey {
    Sports,
    Forms,
    Seasons,
    Announcements,
    Coaches,
    Events,
    Sales,
    /// Sport definitions behind the Sports page
    Registry,
    Staff,
    Tickets,
}

impl LoadingKey {
    pub fn all() -> [Self; 10] {
        [
            Self::Sports,
            Self::Forms,
            Self::Seasons,
            Self::Announcements,
            Self::Coaches,
            Self::Events,
            Self::Sales,
            Self::Registry,
            Self::Staff,
            Self::Tickets,
        ]
    }
}

/// Drill-down position plus the highlighted row at the current level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillState {
    pub drill: DrillDown,
    pub selected: usize,
}

impl DrillState {
    pub fn new(drill: DrillDown) -> Self {
        Self { drill, selected: 0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CoachesUiState {
    pub list: ListCursor,
    pub query: String,
    pub sport: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EventsUiState {
    pub list: ListCursor,
    pub sport: String,
}

impl Default for EventsUiState {
    fn default() -> Self {
        Self {
            list: ListCursor::default(),
            sport: ALL_SPORTS.to_string(),
        }
    }
}

/// Admin home: announcements narrowed by audience
#[derive(Debug, Clone, Default)]
pub struct HomeUiState {
    pub list: ListCursor,
    /// `None` shows every audience
    pub audience: Option<Audience>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsUiState {
    pub range: TrendRange,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub home: HomeUiState,
    pub registrations: DrillState,
    pub screening: DrillState,
    pub seasons: ListCursor,
    pub announcements: ListCursor,
    pub coaches: CoachesUiState,
    pub events: EventsUiState,
    pub analytics: AnalyticsUiState,
    pub sports: ListCursor,
    pub staff: ListCursor,
    pub support: ListCursor,
    /// Open modal form, if any; it captures all keys while open
    pub prompt: Option<Prompt>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            home: HomeUiState::default(),
            registrations: DrillState::new(DrillDown::registration()),
            screening: DrillState::new(DrillDown::screening()),
            seasons: ListCursor::default(),
            announcements: ListCursor::default(),
            coaches: CoachesUiState::default(),
            events: EventsUiState::default(),
            analytics: AnalyticsUiState::default(),
            sports: ListCursor::default(),
            staff: ListCursor::default(),
            support: ListCursor::default(),
            prompt: None,
        }
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ↑↓ move | → / Enter open | ESC back | 1-9 jump to page | r refresh | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub role: Option<Role>,
    /// Email recorded on timeline entries and announcements
    pub actor: String,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_role_starts_on_first_menu_page() {
        let state = AppState::for_role(Role::Staff, "staff@bucal.ph", Config::default());

        assert_eq!(state.navigation.current_page, Page::Announcements);
        assert_eq!(state.menu(), &[Page::Announcements, Page::Events, Page::Support]);
        assert!(!state.is_admin());
        assert_eq!(state.system.actor, "staff@bucal.ph");
    }

    #[test]
    fn test_can_manage_by_role() {
        let school = AppState::for_role(Role::School, "school@ncf.edu.ph", Config::default());
        assert!(school.can_manage(Page::Coaches));
        assert!(!school.can_manage(Page::Registrations));

        let staff = AppState::for_role(Role::Staff, "staff@bucal.ph", Config::default());
        assert!(!staff.can_manage(Page::Announcements));
        assert!(!staff.can_manage(Page::Support));

        let admin = AppState::for_role(Role::Admin, "bucaladmin@gmail.com", Config::default());
        assert_eq!(admin.navigation.current_page, Page::Home);
        assert!(admin.can_manage(Page::Home));
        assert!(admin.can_manage(Page::UserManagement));
    }

    #[test]
    fn test_for_role_uses_configured_trend_range() {
        let config = Config {
            trend_range: "7d".to_string(),
            ..Config::default()
        };
        let state = AppState::for_role(Role::Admin, "bucaladmin@gmail.com", config);
        assert_eq!(state.ui.analytics.range, TrendRange::SevenDays);
    }

    #[test]
    fn test_set_status_message_overwrites_error_flag() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        assert!(state.status_is_error);

        state.set_status_message("Normal message".to_string());
        assert_eq!(state.status_message, Some("Normal message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_reset_status_message_clears_error_flag() {
        let mut state = SystemState::default();
        state.set_status_error_message("Error".to_string());

        state.reset_status_message();

        assert_eq!(
            state.status_message,
            Some(DEFAULT_STATUS_MESSAGE.to_string())
        );
        assert!(!state.status_is_error);
    }
}
