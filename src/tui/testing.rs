//! General test utilities for TUI tests.
//!
//! For widget rendering helpers, see `crate::tui::widgets::testing`.

use std::sync::Arc;

use crate::announcement::AnnouncementBoard;
use crate::coach::CoachRoster;
use crate::config::Config;
use crate::event::EventSchedule;
use crate::fixtures;
use crate::registration::RegistrationForms;
use crate::session::Role;
use crate::sports::SportRegistry;
use crate::staff::StaffDirectory;
use crate::support::SupportDesk;
use crate::store::{InMemoryProvider, LeagueStore};

use super::effects::DataEffects;
use super::state::AppState;

/// Email used as the acting user in tests
pub const TEST_ACTOR: &str = "bucaladmin@gmail.com";

/// State for `role` with every fixture already loaded, menu focused
pub fn seeded_state(role: Role) -> AppState {
    let mut state = AppState::for_role(role, TEST_ACTOR, Config::default());
    state.data.sports = Arc::new(fixtures::create_sport_groups());
    state.data.forms = Arc::new(RegistrationForms::new(fixtures::create_registration_forms()));
    state.data.seasons = Arc::new(fixtures::create_seasons());
    state.data.announcements = Arc::new(AnnouncementBoard::new(fixtures::create_announcements()));
    state.data.coaches = Arc::new(CoachRoster::new(fixtures::create_coaches()));
    state.data.events = Arc::new(EventSchedule::new(fixtures::create_events()));
    state.data.sales = Arc::new(Some(fixtures::create_sales_report()));
    state.data.registry = Arc::new(SportRegistry::new(fixtures::create_sport_definitions()));
    state.data.staff = Arc::new(StaffDirectory::new(fixtures::create_staff_accounts()));
    state.data.tickets = Arc::new(SupportDesk::new(fixtures::create_support_tickets()));
    state
}

/// Same as [`seeded_state`] with focus already in the page content
pub fn focused_state(role: Role) -> AppState {
    let mut state = seeded_state(role);
    state.navigation.content_focused = true;
    state
}

/// Effects handler backed by a fresh seeded in-memory store
pub fn create_data_effects() -> Arc<DataEffects> {
    let provider = Arc::new(InMemoryProvider::new(LeagueStore::seeded()));
    Arc::new(DataEffects::new(provider, TEST_ACTOR))
}
