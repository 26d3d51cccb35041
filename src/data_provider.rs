/// Trait for league data access, so the in-memory store can be swapped for a
/// real backend without touching the front-ends
use async_trait::async_trait;

use crate::analytics::SalesReport;
use crate::announcement::{Announcement, AnnouncementDraft};
use crate::coach::{Coach, CoachDraft};
use crate::error::LeagueResult;
use crate::event::{Event, EventDraft, NewEvent};
use crate::registration::RegistrationForm;
use crate::review::Decision;
use crate::season::{Season, SeasonDraft, SeasonStatus};
use crate::sports::{SportDefinition, SportDraft};
use crate::staff::{StaffAccount, StaffDraft};
use crate::support::SupportTicket;
use crate::types::{Player, SportGroup, Team};

#[async_trait]
pub trait LeagueDataProvider: Send + Sync {
    /// The full registration tree
    async fn sport_groups(&self) -> LeagueResult<Vec<SportGroup>>;

    /// Sport groups that have an open registration form
    async fn registration_groups(&self) -> LeagueResult<Vec<SportGroup>>;

    async fn registration_forms(&self) -> LeagueResult<Vec<RegistrationForm>>;

    async fn team(&self, team_id: &str) -> LeagueResult<Team>;

    /// Approve or decline a team; the decision is appended to its timeline
    async fn review_team(&self, team_id: &str, decision: Decision, actor: &str)
        -> LeagueResult<Team>;

    async fn review_player(&self, player_id: &str, decision: Decision) -> LeagueResult<Player>;

    /// Returns `false` when the sport already had a form
    async fn create_registration_form(&self, sport: &str, deadline: &str) -> LeagueResult<bool>;

    async fn seasons(&self) -> LeagueResult<Vec<Season>>;

    async fn create_season(&self, draft: SeasonDraft) -> LeagueResult<Season>;

    async fn edit_season(&self, id: u32, draft: SeasonDraft) -> LeagueResult<Season>;

    async fn set_season_status(&self, id: u32, status: SeasonStatus) -> LeagueResult<()>;

    /// Ended -> Upcoming, anything else -> Ended
    async fn toggle_season_ended(&self, id: u32) -> LeagueResult<SeasonStatus>;

    async fn delete_season(&self, id: u32) -> LeagueResult<Season>;

    /// Newest first
    async fn announcements(&self) -> LeagueResult<Vec<Announcement>>;

    async fn create_announcement(
        &self,
        draft: AnnouncementDraft,
        author: &str,
    ) -> LeagueResult<Announcement>;

    async fn edit_announcement(
        &self,
        id: u32,
        draft: AnnouncementDraft,
    ) -> LeagueResult<Announcement>;

    async fn delete_announcement(&self, id: u32) -> LeagueResult<Announcement>;

    async fn toggle_announcement_pin(&self, id: u32) -> LeagueResult<bool>;

    async fn coaches(&self) -> LeagueResult<Vec<Coach>>;

    async fn add_coach(&self, draft: CoachDraft) -> LeagueResult<Coach>;

    async fn edit_coach(&self, id: u32, draft: CoachDraft) -> LeagueResult<Coach>;

    async fn assign_coach_sports(&self, id: u32, sports: Vec<String>) -> LeagueResult<Coach>;

    async fn remove_coach(&self, id: u32) -> LeagueResult<Coach>;

    async fn events(&self) -> LeagueResult<Vec<Event>>;

    async fn create_event(&self, draft: NewEvent) -> LeagueResult<Event>;

    async fn edit_event(&self, id: u32, draft: EventDraft) -> LeagueResult<Event>;

    async fn change_event_venue(&self, id: u32, venue: &str) -> LeagueResult<Event>;

    async fn record_event_result(&self, id: u32, result: &str) -> LeagueResult<Event>;

    async fn sales_report(&self) -> LeagueResult<SalesReport>;

    async fn sport_definitions(&self) -> LeagueResult<Vec<SportDefinition>>;

    async fn create_sport(&self, draft: SportDraft) -> LeagueResult<SportDefinition>;

    async fn edit_sport(&self, id: u32, draft: SportDraft) -> LeagueResult<SportDefinition>;

    async fn delete_sport(&self, id: u32) -> LeagueResult<SportDefinition>;

    async fn staff_accounts(&self) -> LeagueResult<Vec<StaffAccount>>;

    /// New accounts are always Active
    async fn add_staff_account(&self, draft: StaffDraft) -> LeagueResult<StaffAccount>;

    async fn edit_staff_account(&self, id: u32, draft: StaffDraft) -> LeagueResult<StaffAccount>;

    async fn remove_staff_account(&self, id: u32) -> LeagueResult<StaffAccount>;

    async fn support_tickets(&self) -> LeagueResult<Vec<SupportTicket>>;

    async fn reply_to_ticket(&self, id: &str, text: &str) -> LeagueResult<SupportTicket>;
}
