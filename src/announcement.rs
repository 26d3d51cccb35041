//! League announcements board

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{EntityKind, LeagueError, LeagueResult};
use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Audience {
    #[default]
    All,
    SchoolsCoaches,
}

impl Audience {
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::SchoolsCoaches => "Schools & Coaches",
        }
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        match self {
            Self::All => true,
            Self::SchoolsCoaches => role != Role::Staff,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub audience: Audience,
    pub is_pinned: bool,
}

/// Author shown on announcements posted from the admin home page
pub const ADMIN_AUTHOR: &str = "Admin";

/// Title, body and audience typed into the announcement form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnouncementDraft {
    pub title: String,
    pub description: String,
    pub audience: Option<Audience>,
    /// Only read on edit; `None` keeps the current pin
    pub pinned: Option<bool>,
    /// Overrides the signed-in user as author on create
    pub author: Option<String>,
}

impl AnnouncementDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn for_audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = Some(pinned);
        self
    }

    pub fn signed(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    fn validated(&self) -> LeagueResult<(String, String)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LeagueError::MissingField("Announcement title"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LeagueError::MissingField("Announcement description"));
        }
        Ok((title.to_string(), description.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementBoard {
    items: Vec<Announcement>,
}

impl AnnouncementBoard {
    pub fn new(items: Vec<Announcement>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Announcement> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Every announcement, newest first
    pub fn list(&self) -> Vec<&Announcement> {
        let mut items: Vec<&Announcement> = self.items.iter().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        items
    }

    /// Announcements a role may read, newest first
    pub fn visible_to(&self, role: Role) -> Vec<&Announcement> {
        self.list()
            .into_iter()
            .filter(|a| a.audience.is_visible_to(role))
            .collect()
    }

    /// Newest first, narrowed to one audience when `audience` is set
    pub fn filter_by_audience(&self, audience: Option<Audience>) -> Vec<&Announcement> {
        self.list()
            .into_iter()
            .filter(|a| audience.map_or(true, |wanted| a.audience == wanted))
            .collect()
    }

    /// Pinned items for schools and coaches; pins on "All" items stay off the rail
    pub fn pinned_rail(&self) -> Vec<&Announcement> {
        self.list()
            .into_iter()
            .filter(|a| a.is_pinned && a.audience != Audience::All)
            .collect()
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.items
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Announcement, id.to_string()))
    }

    pub fn create(
        &mut self,
        draft: AnnouncementDraft,
        author: &str,
        now: NaiveDateTime,
    ) -> LeagueResult<&Announcement> {
        let (title, description) = draft.validated()?;
        let id = self.items.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        self.items.insert(
            0,
            Announcement {
                id,
                title,
                description,
                author: draft.author.clone().unwrap_or_else(|| author.to_string()),
                created_at: now,
                audience: draft.audience.unwrap_or_default(),
                is_pinned: false,
            },
        );
        Ok(&self.items[0])
    }

    pub fn edit(&mut self, id: u32, draft: AnnouncementDraft) -> LeagueResult<&Announcement> {
        let (title, description) = draft.validated()?;
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.title = title;
        item.description = description;
        if let Some(audience) = draft.audience {
            item.audience = audience;
        }
        // Announcements for everyone cannot stay pinned
        item.is_pinned = item.audience != Audience::All && draft.pinned.unwrap_or(item.is_pinned);
        Ok(&self.items[index])
    }

    pub fn remove(&mut self, id: u32) -> LeagueResult<Announcement> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Flip the pin; returns the new pinned state
    pub fn toggle_pin(&mut self, id: u32) -> LeagueResult<bool> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.is_pinned = !item.is_pinned;
        Ok(item.is_pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn board() -> AnnouncementBoard {
        AnnouncementBoard::new(fixtures::create_announcements())
    }

    #[test]
    fn test_create_lists_newest_first() {
        let mut board = board();
        let created = board
            .create(
                AnnouncementDraft::new("Venue update", "Finals move to the Civic Center"),
                "bucaladmin@gmail.com",
                at(1, 8),
            )
            .unwrap()
            .id;

        assert_eq!(board.list()[0].id, created);
        assert_eq!(board.get(created).unwrap().audience, Audience::All);
    }

    #[test]
    fn test_create_requires_title_and_description() {
        let mut board = board();
        let before = board.len();

        assert_eq!(
            board
                .create(AnnouncementDraft::new("  ", "body"), "a@b.c", at(1, 8))
                .err(),
            Some(LeagueError::MissingField("Announcement title"))
        );
        assert_eq!(
            board
                .create(AnnouncementDraft::new("Title", " \n"), "a@b.c", at(1, 8))
                .err(),
            Some(LeagueError::MissingField("Announcement description"))
        );
        assert_eq!(board.len(), before);
    }

    #[test]
    fn test_staff_cannot_see_schools_and_coaches_items() {
        let mut board = AnnouncementBoard::default();
        board
            .create(AnnouncementDraft::new("Everyone", "All hands"), "a@b.c", at(1, 8))
            .unwrap();
        board
            .create(
                AnnouncementDraft::new("Coaches only", "Roster deadline")
                    .for_audience(Audience::SchoolsCoaches),
                "a@b.c",
                at(2, 8),
            )
            .unwrap();

        assert_eq!(board.visible_to(Role::Staff).len(), 1);
        assert_eq!(board.visible_to(Role::Coach).len(), 2);
        assert_eq!(board.visible_to(Role::School).len(), 2);
        assert_eq!(board.visible_to(Role::Admin).len(), 2);
    }

    #[test]
    fn test_toggle_pin_and_remove() {
        let mut board = board();
        let id = board.list()[0].id;
        let was_pinned = board.get(id).unwrap().is_pinned;

        assert_eq!(board.toggle_pin(id).unwrap(), !was_pinned);
        board.remove(id).unwrap();
        assert!(board.get(id).is_none());
        assert!(matches!(board.toggle_pin(id), Err(LeagueError::NotFound { .. })));
    }

    #[test]
    fn test_edit_unpins_when_audience_is_all() {
        let mut board = board();
        let edited = board
            .edit(
                2,
                AnnouncementDraft::new("Screening", "Updated requirements")
                    .for_audience(Audience::SchoolsCoaches)
                    .pinned(true),
            )
            .unwrap();
        assert!(edited.is_pinned);
        assert_eq!(board.pinned_rail().len(), 1);

        let edited = board
            .edit(
                2,
                AnnouncementDraft::new("Screening", "For everyone now")
                    .for_audience(Audience::All)
                    .pinned(true),
            )
            .unwrap();
        assert!(!edited.is_pinned);
        assert!(board.pinned_rail().is_empty());
    }

    #[test]
    fn test_audience_filter_and_admin_author() {
        let mut board = board();
        let created = board
            .create(
                AnnouncementDraft::new("Coaches meeting", "Friday 3PM")
                    .for_audience(Audience::SchoolsCoaches)
                    .signed(ADMIN_AUTHOR),
                "bucaladmin@gmail.com",
                at(20, 8),
            )
            .unwrap()
            .id;

        assert_eq!(board.get(created).unwrap().author, "Admin");
        assert_eq!(board.filter_by_audience(None).len(), board.len());
        let schools = board.filter_by_audience(Some(Audience::SchoolsCoaches));
        assert_eq!(schools[0].id, created);
        assert!(schools.iter().all(|a| a.audience == Audience::SchoolsCoaches));
        // pinned "All" items never reach the rail
        assert!(board.get(1).unwrap().is_pinned);
        assert!(board.pinned_rail().iter().all(|a| a.id != 1));
    }

    #[test]
    fn test_edit_keeps_audience_when_not_given() {
        let mut board = AnnouncementBoard::default();
        let id = board
            .create(
                AnnouncementDraft::new("Old", "Old body").for_audience(Audience::SchoolsCoaches),
                "a@b.c",
                at(1, 8),
            )
            .unwrap()
            .id;

        let edited = board.edit(id, AnnouncementDraft::new(" New ", "New body")).unwrap();

        assert_eq!(edited.title, "New");
        assert_eq!(edited.audience, Audience::SchoolsCoaches);
    }
}
