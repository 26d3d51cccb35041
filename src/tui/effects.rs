use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::action::{Action, Mutation};
use super::state::LoadingKey;
use crate::cache;
use crate::data_provider::LeagueDataProvider;
use crate::error::LeagueResult;

/// Side effects returned by the reducer
///
/// `Fetch` and `Mutate` are plain data so the reducer stays pure; the runtime
/// turns them into `Async` effects through [`DataEffects`].
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    Fetch(LoadingKey),
    Mutate(Mutation),
}

/// Effect handler for repository reads and writes
///
/// Each method returns an Effect that dispatches the matching result action
/// when complete.
pub struct DataEffects {
    provider: Arc<dyn LeagueDataProvider>,
    actor: String,
}

impl DataEffects {
    pub fn new(provider: Arc<dyn LeagueDataProvider>, actor: impl Into<String>) -> Self {
        Self {
            provider,
            actor: actor.into(),
        }
    }

    /// Load one dataset. The sales report skips the cache so a manual
    /// refresh sees new numbers.
    pub fn fetch(&self, key: LoadingKey) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let p = provider.as_ref();
            match key {
                LoadingKey::Sports => Action::SportsLoaded(stringify(p.sport_groups().await)),
                LoadingKey::Forms => Action::FormsLoaded(stringify(p.registration_forms().await)),
                LoadingKey::Seasons => Action::SeasonsLoaded(stringify(p.seasons().await)),
                LoadingKey::Announcements => {
                    Action::AnnouncementsLoaded(stringify(p.announcements().await))
                }
                LoadingKey::Coaches => Action::CoachesLoaded(stringify(p.coaches().await)),
                LoadingKey::Events => Action::EventsLoaded(stringify(p.events().await)),
                LoadingKey::Sales => {
                    Action::SalesLoaded(stringify(cache::refresh_sales_report(p).await))
                }
                LoadingKey::Registry => {
                    Action::RegistryLoaded(stringify(p.sport_definitions().await))
                }
                LoadingKey::Staff => Action::StaffLoaded(stringify(p.staff_accounts().await)),
                LoadingKey::Tickets => Action::TicketsLoaded(stringify(p.support_tickets().await)),
            }
        }))
    }

    /// Run a write and report back with a status line
    pub fn mutate(&self, mutation: Mutation) -> Effect {
        let provider = self.provider.clone();
        let actor = self.actor.clone();
        Effect::Async(Box::pin(async move {
            let reload = mutation.reloads();
            debug!("EFFECT: Running {:?}", mutation);
            let result = run_mutation(provider.as_ref(), mutation, &actor).await;
            Action::MutationCompleted {
                reload,
                result: stringify(result),
            }
        }))
    }
}

fn stringify<T>(result: LeagueResult<T>) -> Result<T, String> {
    result.map_err(|e| e.to_string())
}

async fn run_mutation(
    p: &dyn LeagueDataProvider,
    mutation: Mutation,
    actor: &str,
) -> LeagueResult<String> {
    match mutation {
        Mutation::ReviewTeam { team_id, decision } => {
            let team = p.review_team(&team_id, decision, actor).await?;
            Ok(format!("{} is now {}", team.team_name, team.review.status))
        }
        Mutation::ReviewPlayer {
            player_id,
            decision,
        } => {
            let player = p.review_player(&player_id, decision).await?;
            Ok(format!("{} is now {}", player.name, player.review.status))
        }
        Mutation::CreateSeason(draft) => {
            let season = p.create_season(draft).await?;
            Ok(format!("Created {} ({})", season.title, season.status))
        }
        Mutation::EditSeason { id, draft } => {
            let season = p.edit_season(id, draft).await?;
            Ok(format!("Updated {}", season.title))
        }
        Mutation::SetSeasonStatus { id, status } => {
            p.set_season_status(id, status).await?;
            Ok(format!("Season {} set to {}", id, status))
        }
        Mutation::ToggleSeasonEnded(id) => {
            let status = p.toggle_season_ended(id).await?;
            Ok(format!("Season {} marked {}", id, status))
        }
        Mutation::DeleteSeason(id) => {
            let season = p.delete_season(id).await?;
            Ok(format!("Deleted {}", season.title))
        }
        Mutation::CreateAnnouncement(draft) => {
            let item = p.create_announcement(draft, actor).await?;
            Ok(format!("Posted \"{}\"", item.title))
        }
        Mutation::EditAnnouncement { id, draft } => {
            let item = p.edit_announcement(id, draft).await?;
            Ok(format!("Updated \"{}\"", item.title))
        }
        Mutation::DeleteAnnouncement(id) => {
            let item = p.delete_announcement(id).await?;
            Ok(format!("Deleted \"{}\"", item.title))
        }
        Mutation::ToggleAnnouncementPin(id) => {
            let pinned = p.toggle_announcement_pin(id).await?;
            Ok(if pinned { "Pinned" } else { "Unpinned" }.to_string())
        }
        Mutation::AddCoach(draft) => {
            let coach = p.add_coach(draft).await?;
            Ok(format!("Added coach {} ({})", coach.name, coach.access_code))
        }
        Mutation::EditCoach { id, draft } => {
            let coach = p.edit_coach(id, draft).await?;
            Ok(format!("Updated coach {}", coach.name))
        }
        Mutation::AssignCoachSports { id, sports } => {
            let coach = p.assign_coach_sports(id, sports).await?;
            Ok(format!("{} now coaches {}", coach.name, coach.sports.join(", ")))
        }
        Mutation::RemoveCoach(id) => {
            let coach = p.remove_coach(id).await?;
            Ok(format!("Removed coach {}", coach.name))
        }
        Mutation::CreateEvent(draft) => {
            let event = p.create_event(draft).await?;
            Ok(format!("Scheduled {} on {}", event.name, event.date))
        }
        Mutation::EditEvent { id, draft } => {
            let event = p.edit_event(id, draft).await?;
            Ok(format!("Updated {}", event.name))
        }
        Mutation::ChangeEventVenue { id, venue } => {
            let event = p.change_event_venue(id, &venue).await?;
            Ok(format!("{} moved to {}", event.name, event.venue))
        }
        Mutation::RecordEventResult { id, result } => {
            let event = p.record_event_result(id, &result).await?;
            Ok(format!("{} completed", event.name))
        }
        Mutation::CreateRegistrationForm { sport, deadline } => {
            if p.create_registration_form(&sport, &deadline).await? {
                Ok(format!("Registration form opened for {}", sport))
            } else {
                Ok(format!("{} already has a registration form", sport))
            }
        }
        Mutation::CreateSport(draft) => {
            let sport = p.create_sport(draft).await?;
            Ok(format!("Added sport {}", sport.name))
        }
        Mutation::EditSport { id, draft } => {
            let sport = p.edit_sport(id, draft).await?;
            Ok(format!("Updated sport {}", sport.name))
        }
        Mutation::DeleteSport(id) => {
            let sport = p.delete_sport(id).await?;
            Ok(format!("Deleted sport {}", sport.name))
        }
        Mutation::AddStaff(draft) => {
            let account = p.add_staff_account(draft).await?;
            Ok(format!("Added staff {} ({})", account.name, account.access_code))
        }
        Mutation::EditStaff { id, draft } => {
            let account = p.edit_staff_account(id, draft).await?;
            Ok(format!("{} is {}", account.name, account.status))
        }
        Mutation::RemoveStaff(id) => {
            let account = p.remove_staff_account(id).await?;
            Ok(format!("Removed staff {}", account.name))
        }
        Mutation::ReplyToTicket { id, text } => {
            let ticket = p.reply_to_ticket(&id, &text).await?;
            Ok(format!("Replied on {} ({})", ticket.id, ticket.status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::event::{NewEvent, TicketRow};
    use crate::review::Decision;
    use crate::tui::testing::create_data_effects;

    async fn resolve(effect: Effect) -> Action {
        match effect {
            Effect::Async(future) => future.await,
            _ => panic!("Expected async effect"),
        }
    }

    #[tokio::test]
    async fn test_fetch_sports_loads_tree() {
        let effects = create_data_effects();
        match resolve(effects.fetch(LoadingKey::Sports)).await {
            Action::SportsLoaded(Ok(sports)) => assert_eq!(sports.len(), 3),
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutate_reports_success_and_reload() {
        let effects = create_data_effects();
        let action = resolve(effects.mutate(Mutation::ReviewTeam {
            team_id: "b-ncf-001".to_string(),
            decision: Decision::Approve,
        }))
        .await;

        match action {
            Action::MutationCompleted { reload, result } => {
                assert_eq!(reload, LoadingKey::Sports);
                assert_eq!(result.unwrap(), "NCF Tigers is now Approved");
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_event_reloads_schedule() {
        let effects = create_data_effects();
        let draft = NewEvent {
            name: "Finals".to_string(),
            sport: "Basketball".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 20),
            time: "3:00PM".to_string(),
            venue: "Coliseum".to_string(),
            location: "Naga City".to_string(),
            team_a: "NCF Tigers".to_string(),
            team_b: "ADNU Blue Knights".to_string(),
            ..Default::default()
        };
        // Without a ticket section the form is rejected before anything is stored
        match resolve(effects.mutate(Mutation::CreateEvent(draft.clone()))).await {
            Action::MutationCompleted { reload, result } => {
                assert_eq!(reload, LoadingKey::Events);
                assert_eq!(result.unwrap_err(), "At least one ticket section is required");
            }
            other => panic!("Unexpected action {:?}", other),
        }

        let draft = NewEvent {
            tickets: vec![TicketRow::new("Lower Box", "A", "100", "250")],
            ..draft
        };
        match resolve(effects.mutate(Mutation::CreateEvent(draft))).await {
            Action::MutationCompleted { result, .. } => {
                assert_eq!(result.unwrap(), "Scheduled Finals on 2025-09-20");
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_staff_accounts() {
        let effects = create_data_effects();
        match resolve(effects.fetch(LoadingKey::Staff)).await {
            Action::StaffLoaded(Ok(accounts)) => assert_eq!(accounts.len(), 2),
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutate_reports_errors_as_strings() {
        let effects = create_data_effects();
        let action = resolve(effects.mutate(Mutation::DeleteSeason(99))).await;

        match action {
            Action::MutationCompleted { result, .. } => {
                assert_eq!(result.unwrap_err(), "No season with id '99'");
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }
}
