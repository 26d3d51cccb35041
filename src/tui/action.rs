use crate::analytics::SalesReport;
use crate::announcement::{Announcement, AnnouncementDraft};
use crate::coach::{Coach, CoachDraft};
use crate::event::{Event, EventDraft, NewEvent};
use crate::registration::RegistrationForm;
use crate::review::Decision;
use crate::season::{Season, SeasonDraft, SeasonStatus};
use crate::session::Page;
use crate::sports::{SportDefinition, SportDraft};
use crate::staff::{StaffAccount, StaffDraft};
use crate::support::SupportTicket;
use crate::types::SportGroup;

use super::state::LoadingKey;
use super::types::Prompt;

/// Global actions - like Redux actions
///
/// All state changes in the dashboard happen through actions. They come from
/// key events and from effects completing.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigatePage(Page),
    NavigateMenuUp,
    NavigateMenuDown,
    EnterContentFocus,
    ExitContentFocus,
    /// ESC: close one drill-down level, else return focus to the menu
    NavigateUp,

    // Lists
    SelectNext,
    SelectPrevious,
    /// Enter: open the selected row one level deeper
    ActivateSelection,

    // Review
    ApproveSelected,
    OpenDeclinePrompt,

    // Prompts
    OpenPrompt(Prompt),
    PromptInput(char),
    PromptBackspace,
    PromptNextField,
    PromptSubmit,
    PromptCancel,

    // Page commands
    ToggleSeasonEnded,
    SetSeasonActive,
    DeleteSelectedSeason,
    TogglePin,
    DeleteSelectedAnnouncement,
    RemoveSelectedCoach,
    ClearCoachSearch,
    CycleEventSport,
    CycleTrendRange,
    /// Admin home: show all, then "All" items, then schools & coaches items
    CycleAudienceFilter,
    DeleteSelectedSport,
    RemoveSelectedStaff,

    // Data
    RefreshData,
    SportsLoaded(Result<Vec<SportGroup>, String>),
    FormsLoaded(Result<Vec<RegistrationForm>, String>),
    SeasonsLoaded(Result<Vec<Season>, String>),
    AnnouncementsLoaded(Result<Vec<Announcement>, String>),
    CoachesLoaded(Result<Vec<Coach>, String>),
    EventsLoaded(Result<Vec<Event>, String>),
    SalesLoaded(Result<SalesReport, String>),
    RegistryLoaded(Result<Vec<SportDefinition>, String>),
    StaffLoaded(Result<Vec<StaffAccount>, String>),
    TicketsLoaded(Result<Vec<SupportTicket>, String>),
    /// A repository write finished; `reload` names the data to fetch again
    MutationCompleted {
        reload: LoadingKey,
        result: Result<String, String>,
    },

    // System
    Quit,
    Error(String),
    SetStatusMessage { message: String, is_error: bool },
}

/// A repository write requested by the reducer and run by the effects layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ReviewTeam { team_id: String, decision: Decision },
    ReviewPlayer { player_id: String, decision: Decision },
    CreateSeason(SeasonDraft),
    EditSeason { id: u32, draft: SeasonDraft },
    SetSeasonStatus { id: u32, status: SeasonStatus },
    ToggleSeasonEnded(u32),
    DeleteSeason(u32),
    CreateAnnouncement(AnnouncementDraft),
    EditAnnouncement { id: u32, draft: AnnouncementDraft },
    DeleteAnnouncement(u32),
    ToggleAnnouncementPin(u32),
    AddCoach(CoachDraft),
    EditCoach { id: u32, draft: CoachDraft },
    AssignCoachSports { id: u32, sports: Vec<String> },
    RemoveCoach(u32),
    CreateEvent(NewEvent),
    EditEvent { id: u32, draft: EventDraft },
    ChangeEventVenue { id: u32, venue: String },
    RecordEventResult { id: u32, result: String },
    CreateRegistrationForm { sport: String, deadline: String },
    CreateSport(SportDraft),
    EditSport { id: u32, draft: SportDraft },
    DeleteSport(u32),
    AddStaff(StaffDraft),
    EditStaff { id: u32, draft: StaffDraft },
    RemoveStaff(u32),
    ReplyToTicket { id: String, text: String },
}

impl Mutation {
    /// Data that is stale once this mutation succeeds
    pub fn reloads(&self) -> LoadingKey {
        match self {
            Self::ReviewTeam { .. } | Self::ReviewPlayer { .. } => LoadingKey::Sports,
            Self::CreateSeason(_)
            | Self::EditSeason { .. }
            | Self::SetSeasonStatus { .. }
            | Self::ToggleSeasonEnded(_)
            | Self::DeleteSeason(_) => LoadingKey::Seasons,
            Self::CreateAnnouncement(_)
            | Self::EditAnnouncement { .. }
            | Self::DeleteAnnouncement(_)
            | Self::ToggleAnnouncementPin(_) => LoadingKey::Announcements,
            Self::AddCoach(_)
            | Self::EditCoach { .. }
            | Self::AssignCoachSports { .. }
            | Self::RemoveCoach(_) => LoadingKey::Coaches,
            Self::CreateEvent(_)
            | Self::EditEvent { .. }
            | Self::ChangeEventVenue { .. }
            | Self::RecordEventResult { .. } => LoadingKey::Events,
            Self::CreateRegistrationForm { .. } => LoadingKey::Forms,
            Self::CreateSport(_) | Self::EditSport { .. } | Self::DeleteSport(_) => {
                LoadingKey::Registry
            }
            Self::AddStaff(_) | Self::EditStaff { .. } | Self::RemoveStaff(_) => LoadingKey::Staff,
            Self::ReplyToTicket { .. } => LoadingKey::Tickets,
        }
    }
}

impl Action {
    /// Returns true if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Error(_))
    }
}
