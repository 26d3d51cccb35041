//! Registry of sports the league offers and what their rosters must include
use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportDefinition {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub require_jersey_number: bool,
    pub require_position: bool,
}

impl SportDefinition {
    /// Roster columns a registration form asks for, e.g. "Jersey #, Position"
    pub fn roster_requirements(&self) -> String {
        let mut columns = Vec::new();
        if self.require_jersey_number {
            columns.push("Jersey #");
        }
        if self.require_position {
            columns.push("Position");
        }
        if columns.is_empty() {
            "Name only".to_string()
        } else {
            columns.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SportDraft {
    pub name: String,
    pub description: String,
    pub require_jersey_number: bool,
    pub require_position: bool,
}

impl SportDraft {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            require_jersey_number: false,
            require_position: false,
        }
    }

    pub fn requiring(mut self, jersey_number: bool, position: bool) -> Self {
        self.require_jersey_number = jersey_number;
        self.require_position = position;
        self
    }

    fn validated(&self) -> LeagueResult<(String, String)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LeagueError::MissingField("Sport name"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LeagueError::MissingField("Sport description"));
        }
        Ok((name.to_string(), description.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportRegistry {
    sports: Vec<SportDefinition>,
}

impl SportRegistry {
    pub fn new(sports: Vec<SportDefinition>) -> Self {
        Self { sports }
    }

    pub fn all(&self) -> &[SportDefinition] {
        &self.sports
    }

    pub fn get(&self, id: u32) -> Option<&SportDefinition> {
        self.sports.iter().find(|s| s.id == id)
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.sports
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Sport, id.to_string()))
    }

    pub fn create(&mut self, draft: SportDraft) -> LeagueResult<&SportDefinition> {
        let (name, description) = draft.validated()?;
        let id = self.sports.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        debug!("SPORTS: Adding {} ({})", name, id);
        self.sports.push(SportDefinition {
            id,
            name,
            description,
            require_jersey_number: draft.require_jersey_number,
            require_position: draft.require_position,
        });
        Ok(&self.sports[self.sports.len() - 1])
    }

    pub fn edit(&mut self, id: u32, draft: SportDraft) -> LeagueResult<&SportDefinition> {
        let (name, description) = draft.validated()?;
        let index = self.position(id)?;
        let sport = &mut self.sports[index];
        sport.name = name;
        sport.description = description;
        sport.require_jersey_number = draft.require_jersey_number;
        sport.require_position = draft.require_position;
        Ok(&self.sports[index])
    }

    pub fn remove(&mut self, id: u32) -> LeagueResult<SportDefinition> {
        let index = self.position(id)?;
        Ok(self.sports.remove(index))
    }
}
