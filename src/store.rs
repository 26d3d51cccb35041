//! In-memory league store and the provider that serves it
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::analytics::SalesReport;
use crate::announcement::{Announcement, AnnouncementBoard, AnnouncementDraft};
use crate::coach::{Coach, CoachDraft, CoachRoster};
use crate::config::Config;
use crate::data_provider::LeagueDataProvider;
use crate::error::{EntityKind, LeagueError, LeagueResult};
use crate::event::{Event, EventDraft, EventSchedule, NewEvent};
use crate::fixtures;
use crate::registration::{RegistrationForm, RegistrationForms};
use crate::review::Decision;
use crate::season::{Season, SeasonArchive, SeasonDraft, SeasonStatus};
use crate::sports::{SportDefinition, SportDraft, SportRegistry};
use crate::staff::{StaffAccount, StaffDirectory, StaffDraft};
use crate::support::{SupportDesk, SupportTicket};
use crate::types::{find_player_mut, find_team, find_team_mut, Player, SportGroup, Team, TimelineEntry};

/// Everything the dashboard edits, held in process memory
#[derive(Debug, Clone, Default)]
pub struct LeagueStore {
    pub sports: Vec<SportGroup>,
    pub forms: RegistrationForms,
    pub seasons: SeasonArchive,
    pub announcements: AnnouncementBoard,
    pub coaches: CoachRoster,
    pub events: EventSchedule,
    pub sales: SalesReport,
    pub registry: SportRegistry,
    pub staff: StaffDirectory,
    pub support: SupportDesk,
}

impl LeagueStore {
    pub fn seeded() -> Self {
        Self {
            sports: fixtures::create_sport_groups(),
            forms: RegistrationForms::new(fixtures::create_registration_forms()),
            seasons: SeasonArchive::new(fixtures::create_seasons()),
            announcements: AnnouncementBoard::new(fixtures::create_announcements()),
            coaches: CoachRoster::new(fixtures::create_coaches()),
            events: EventSchedule::new(fixtures::create_events()),
            sales: fixtures::create_sales_report(),
            registry: SportRegistry::new(fixtures::create_sport_definitions()),
            staff: StaffDirectory::new(fixtures::create_staff_accounts()),
            support: SupportDesk::new(fixtures::create_support_tickets()),
        }
    }

    pub fn review_team(
        &mut self,
        team_id: &str,
        decision: Decision,
        actor: &str,
        timestamp: String,
    ) -> LeagueResult<Team> {
        let team = find_team_mut(&mut self.sports, team_id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Team, team_id))?;
        let remarks = match &decision {
            Decision::Approve => None,
            Decision::Decline(reason) => Some(reason.as_str().to_string()),
        };
        team.review.apply(decision);
        team.timeline.push(TimelineEntry {
            status: team.review.status.into(),
            timestamp,
            actor: actor.to_string(),
            remarks,
        });
        Ok(team.clone())
    }

    pub fn review_player(&mut self, player_id: &str, decision: Decision) -> LeagueResult<Player> {
        let player = find_player_mut(&mut self.sports, player_id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Player, player_id))?;
        player.review.apply(decision);
        Ok(player.clone())
    }
}

/// [`LeagueDataProvider`] over a [`LeagueStore`] behind a lock
pub struct InMemoryProvider {
    store: RwLock<LeagueStore>,
    latency: Duration,
    timestamp_format: String,
}

impl InMemoryProvider {
    pub fn new(store: LeagueStore) -> Self {
        Self {
            store: RwLock::new(store),
            latency: Duration::ZERO,
            timestamp_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }

    /// Seeded store with latency and timestamp format from config
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Creating InMemoryProvider (latency: {}ms)",
            config.simulated_latency_ms
        );
        Self::new(LeagueStore::seeded())
            .with_latency(Duration::from_millis(config.simulated_latency_ms))
            .with_timestamp_format(&config.timestamp_format)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn now(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }
}

#[async_trait]
impl LeagueDataProvider for InMemoryProvider {
    async fn sport_groups(&self) -> LeagueResult<Vec<SportGroup>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.sports.clone())
    }

    async fn registration_groups(&self) -> LeagueResult<Vec<SportGroup>> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        Ok(store
            .forms
            .visible_groups(&store.sports)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn registration_forms(&self) -> LeagueResult<Vec<RegistrationForm>> {
        Ok(self.store.read().await.forms.all().to_vec())
    }

    async fn team(&self, team_id: &str) -> LeagueResult<Team> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        find_team(&store.sports, team_id)
            .cloned()
            .ok_or_else(|| LeagueError::not_found(EntityKind::Team, team_id))
    }

    async fn review_team(
        &self,
        team_id: &str,
        decision: Decision,
        actor: &str,
    ) -> LeagueResult<Team> {
        self.simulate_latency().await;
        let status = decision.resulting_status();
        let team = self
            .store
            .write()
            .await
            .review_team(team_id, decision, actor, self.now())?;
        info!("Team {} marked {} by {}", team_id, status, actor);
        Ok(team)
    }

    async fn review_player(&self, player_id: &str, decision: Decision) -> LeagueResult<Player> {
        self.simulate_latency().await;
        let player = self.store.write().await.review_player(player_id, decision)?;
        info!("Player {} marked {}", player_id, player.review.status);
        Ok(player)
    }

    async fn create_registration_form(&self, sport: &str, deadline: &str) -> LeagueResult<bool> {
        let mut guard = self.store.write().await;
        let store = &mut *guard;
        let created = store.forms.create(sport, deadline, &store.sports)?;
        if created {
            info!("Registration form opened for {} (deadline {})", sport, deadline);
        }
        Ok(created)
    }

    async fn seasons(&self) -> LeagueResult<Vec<Season>> {
        Ok(self.store.read().await.seasons.seasons().to_vec())
    }

    async fn create_season(&self, draft: SeasonDraft) -> LeagueResult<Season> {
        let season = self.store.write().await.seasons.create(draft)?.clone();
        info!("Season {} created ({})", season.title, season.status);
        Ok(season)
    }

    async fn edit_season(&self, id: u32, draft: SeasonDraft) -> LeagueResult<Season> {
        let season = self.store.write().await.seasons.edit(id, draft)?.clone();
        info!("Season {} updated ({})", season.title, season.status);
        Ok(season)
    }

    async fn set_season_status(&self, id: u32, status: SeasonStatus) -> LeagueResult<()> {
        self.store.write().await.seasons.set_status(id, status)?;
        info!("Season {} set to {}", id, status);
        Ok(())
    }

    async fn toggle_season_ended(&self, id: u32) -> LeagueResult<SeasonStatus> {
        let status = self.store.write().await.seasons.toggle_ended(id)?;
        info!("Season {} toggled to {}", id, status);
        Ok(status)
    }

    async fn delete_season(&self, id: u32) -> LeagueResult<Season> {
        let season = self.store.write().await.seasons.remove(id)?;
        info!("Season {} deleted", season.title);
        Ok(season)
    }

    async fn announcements(&self) -> LeagueResult<Vec<Announcement>> {
        Ok(self
            .store
            .read()
            .await
            .announcements
            .list()
            .into_iter()
            .cloned()
            .collect())
    }

    async fn create_announcement(
        &self,
        draft: AnnouncementDraft,
        author: &str,
    ) -> LeagueResult<Announcement> {
        let now = Local::now().naive_local();
        let item = self
            .store
            .write()
            .await
            .announcements
            .create(draft, author, now)?
            .clone();
        info!("Announcement {} posted by {}", item.id, author);
        Ok(item)
    }

    async fn edit_announcement(
        &self,
        id: u32,
        draft: AnnouncementDraft,
    ) -> LeagueResult<Announcement> {
        let item = self
            .store
            .write()
            .await
            .announcements
            .edit(id, draft)?
            .clone();
        info!("Announcement {} edited", id);
        Ok(item)
    }

    async fn delete_announcement(&self, id: u32) -> LeagueResult<Announcement> {
        let item = self.store.write().await.announcements.remove(id)?;
        info!("Announcement {} deleted", id);
        Ok(item)
    }

    async fn toggle_announcement_pin(&self, id: u32) -> LeagueResult<bool> {
        let pinned = self.store.write().await.announcements.toggle_pin(id)?;
        debug!("Announcement {} pinned: {}", id, pinned);
        Ok(pinned)
    }

    async fn coaches(&self) -> LeagueResult<Vec<Coach>> {
        Ok(self.store.read().await.coaches.all().to_vec())
    }

    async fn add_coach(&self, draft: CoachDraft) -> LeagueResult<Coach> {
        let coach = self.store.write().await.coaches.add(draft)?.clone();
        info!("Coach {} added ({})", coach.name, coach.id);
        Ok(coach)
    }

    async fn edit_coach(&self, id: u32, draft: CoachDraft) -> LeagueResult<Coach> {
        let coach = self.store.write().await.coaches.edit(id, draft)?.clone();
        info!("Coach {} updated", id);
        Ok(coach)
    }

    async fn assign_coach_sports(&self, id: u32, sports: Vec<String>) -> LeagueResult<Coach> {
        let coach = self
            .store
            .write()
            .await
            .coaches
            .assign_sports(id, sports)?
            .clone();
        info!("Coach {} assigned to {:?}", id, coach.sports);
        Ok(coach)
    }

    async fn remove_coach(&self, id: u32) -> LeagueResult<Coach> {
        let coach = self.store.write().await.coaches.remove(id)?;
        info!("Coach {} removed", coach.name);
        Ok(coach)
    }

    async fn events(&self) -> LeagueResult<Vec<Event>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.events.all().to_vec())
    }

    async fn create_event(&self, draft: NewEvent) -> LeagueResult<Event> {
        self.simulate_latency().await;
        let event = self.store.write().await.events.create(draft)?.clone();
        info!("Event {} scheduled on {} ({})", event.name, event.date, event.id);
        Ok(event)
    }

    async fn edit_event(&self, id: u32, draft: EventDraft) -> LeagueResult<Event> {
        let event = self.store.write().await.events.edit(id, draft)?.clone();
        info!("Event {} updated", id);
        Ok(event)
    }

    async fn change_event_venue(&self, id: u32, venue: &str) -> LeagueResult<Event> {
        let event = self
            .store
            .write()
            .await
            .events
            .change_venue(id, venue)?
            .clone();
        info!("Event {} moved to {}", id, event.venue);
        Ok(event)
    }

    async fn record_event_result(&self, id: u32, result: &str) -> LeagueResult<Event> {
        let event = self
            .store
            .write()
            .await
            .events
            .record_result(id, result)?
            .clone();
        info!("Event {} result recorded: {}", id, result);
        Ok(event)
    }

    async fn sales_report(&self) -> LeagueResult<SalesReport> {
        self.simulate_latency().await;
        Ok(self.store.read().await.sales.clone())
    }

    async fn sport_definitions(&self) -> LeagueResult<Vec<SportDefinition>> {
        Ok(self.store.read().await.registry.all().to_vec())
    }

    async fn create_sport(&self, draft: SportDraft) -> LeagueResult<SportDefinition> {
        let sport = self.store.write().await.registry.create(draft)?.clone();
        info!("Sport {} added ({})", sport.name, sport.id);
        Ok(sport)
    }

    async fn edit_sport(&self, id: u32, draft: SportDraft) -> LeagueResult<SportDefinition> {
        let sport = self.store.write().await.registry.edit(id, draft)?.clone();
        info!("Sport {} updated", id);
        Ok(sport)
    }

    async fn delete_sport(&self, id: u32) -> LeagueResult<SportDefinition> {
        let sport = self.store.write().await.registry.remove(id)?;
        info!("Sport {} deleted", sport.name);
        Ok(sport)
    }

    async fn staff_accounts(&self) -> LeagueResult<Vec<StaffAccount>> {
        Ok(self.store.read().await.staff.all().to_vec())
    }

    async fn add_staff_account(&self, draft: StaffDraft) -> LeagueResult<StaffAccount> {
        let account = self.store.write().await.staff.add(draft)?.clone();
        info!("Staff account {} added ({})", account.email, account.id);
        Ok(account)
    }

    async fn edit_staff_account(&self, id: u32, draft: StaffDraft) -> LeagueResult<StaffAccount> {
        let account = self.store.write().await.staff.edit(id, draft)?.clone();
        info!("Staff account {} updated ({})", id, account.status);
        Ok(account)
    }

    async fn remove_staff_account(&self, id: u32) -> LeagueResult<StaffAccount> {
        let account = self.store.write().await.staff.remove(id)?;
        info!("Staff account {} removed", account.email);
        Ok(account)
    }

    async fn support_tickets(&self) -> LeagueResult<Vec<SupportTicket>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.support.all().to_vec())
    }

    async fn reply_to_ticket(&self, id: &str, text: &str) -> LeagueResult<SupportTicket> {
        let ticket = self
            .store
            .write()
            .await
            .support
            .reply(id, text, self.now())?
            .clone();
        info!("Replied to ticket {}", id);
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewStatus;
    use crate::types::TimelineStatus;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::new(LeagueStore::seeded())
    }

    #[test]
    fn test_store_review_team_appends_timeline() {
        let mut store = LeagueStore::seeded();
        let before = find_team(&store.sports, "b-ncf-001").unwrap().timeline.len();

        let team = store
            .review_team(
                "b-ncf-001",
                Decision::decline("  roster incomplete  ").unwrap(),
                "bucaladmin@gmail.com",
                "2025-08-13 10:00".to_string(),
            )
            .unwrap();

        assert_eq!(team.review.status, ReviewStatus::Rejected);
        assert_eq!(team.timeline.len(), before + 1);
        let entry = team.timeline.last().unwrap();
        assert_eq!(entry.status, TimelineStatus::Rejected);
        assert_eq!(entry.actor, "bucaladmin@gmail.com");
        assert_eq!(entry.remarks.as_deref(), Some("roster incomplete"));
    }

    #[test]
    fn test_store_review_unknown_team_is_not_found() {
        let mut store = LeagueStore::seeded();
        let before = store.sports.clone();

        let result = store.review_team("b-999", Decision::Approve, "a@b.c", String::new());

        assert_eq!(result.err(), Some(LeagueError::not_found(EntityKind::Team, "b-999")));
        assert_eq!(store.sports, before);
    }

    #[tokio::test]
    async fn test_provider_review_player() {
        let provider = provider();

        let player = provider
            .review_player("p-002", Decision::decline("medical certificate missing").unwrap())
            .await
            .unwrap();
        assert_eq!(player.review.status, ReviewStatus::Rejected);

        let player = provider.review_player("p-002", Decision::Approve).await.unwrap();
        assert_eq!(player.review.status, ReviewStatus::Approved);
        assert!(player.review.note.is_none());
    }

    #[tokio::test]
    async fn test_provider_review_team_persists() {
        let provider = provider();

        provider
            .review_team("v-usi-001", Decision::Approve, "bucaladmin@gmail.com")
            .await
            .unwrap();

        let team = provider.team("v-usi-001").await.unwrap();
        assert_eq!(team.review.status, ReviewStatus::Approved);
        assert_eq!(team.timeline.last().unwrap().status, TimelineStatus::Approved);
    }

    #[tokio::test]
    async fn test_provider_season_single_active() {
        let provider = provider();

        provider
            .create_season(SeasonDraft::new("Season 8", SeasonStatus::Active))
            .await
            .unwrap();

        let seasons = provider.seasons().await.unwrap();
        let active: Vec<u32> = seasons
            .iter()
            .filter(|s| s.status == SeasonStatus::Active)
            .map(|s| s.id)
            .collect();
        assert_eq!(active, vec![8]);
    }

    #[tokio::test]
    async fn test_registration_groups_follow_forms() {
        let provider = provider();
        assert_eq!(provider.registration_groups().await.unwrap().len(), 2);

        assert!(provider
            .create_registration_form("Cheer and Dance", "2025-09-30")
            .await
            .unwrap());
        assert_eq!(provider.registration_groups().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_provider_create_event_persists() {
        use crate::event::TicketRow;

        let provider = provider();
        let draft = NewEvent {
            name: "UNC vs ADNU".to_string(),
            sport: "Volleyball".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 2, 8),
            time: "1:00PM - 3:00PM".to_string(),
            venue: "UNC Gym".to_string(),
            location: "J. Hernandez Ave, Naga City".to_string(),
            team_a: "UNC".to_string(),
            team_b: "ADNU".to_string(),
            participants: Vec::new(),
            tickets: vec![TicketRow::new("Bleachers", "", "300", "80")],
        };

        let created = provider.create_event(draft.clone()).await.unwrap();
        assert_eq!(provider.events().await.unwrap().len(), 5);
        assert_eq!(created.location, "J. Hernandez Ave, Naga City");

        let rejected = provider
            .create_event(NewEvent { tickets: Vec::new(), ..draft })
            .await;
        assert_eq!(rejected.err(), Some(LeagueError::NoTicketSections));
        assert_eq!(provider.events().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_provider_staff_and_sports_registry() {
        let provider = provider();

        let account = provider
            .add_staff_account(StaffDraft::new("Ana Lim", "Scorer", "ana@bucal.ph", "K7P3QZ9M"))
            .await
            .unwrap();
        assert_eq!(provider.staff_accounts().await.unwrap().len(), 3);
        provider.remove_staff_account(account.id).await.unwrap();
        assert_eq!(provider.staff_accounts().await.unwrap().len(), 2);

        provider
            .edit_sport(3, SportDraft::new("Cheer & Dance", "Routine showcase"))
            .await
            .unwrap();
        let sports = provider.sport_definitions().await.unwrap();
        assert_eq!(sports[2].description, "Routine showcase");
        assert!(provider.delete_sport(9).await.is_err());
    }

    #[tokio::test]
    async fn test_provider_ticket_reply_is_timestamped() {
        let provider = provider().with_timestamp_format("fixed");

        let ticket = provider.reply_to_ticket("T-1002", "Refund approved").await.unwrap();

        assert_eq!(ticket.updated_at, "fixed");
        assert_eq!(provider.support_tickets().await.unwrap()[1].messages.len(), 2);
    }

    #[tokio::test]
    async fn test_simulated_latency_still_returns_data() {
        let provider = provider().with_latency(Duration::from_millis(5));
        assert_eq!(provider.events().await.unwrap().len(), 4);
    }
}
