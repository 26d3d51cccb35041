//! Staff login accounts managed by the league admin
use std::fmt;

use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffAccount {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub email: String,
    pub access_code: String,
    pub status: StaffStatus,
}

/// Fields of the add and edit forms. `status` is ignored on add.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaffDraft {
    pub name: String,
    pub position: String,
    pub email: String,
    pub access_code: String,
    pub status: StaffStatus,
}

impl StaffDraft {
    pub fn new(name: &str, position: &str, email: &str, access_code: &str) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            email: email.to_string(),
            access_code: access_code.to_string(),
            status: StaffStatus::Active,
        }
    }

    pub fn with_status(mut self, status: StaffStatus) -> Self {
        self.status = status;
        self
    }

    /// Every field is required; codes are kept as typed
    fn validate(&self) -> LeagueResult<[String; 4]> {
        let required = [
            ("Staff name", &self.name),
            ("Position", &self.position),
            ("Email", &self.email),
            ("Access code", &self.access_code),
        ];
        let mut values: [String; 4] = Default::default();
        for (slot, (field, value)) in values.iter_mut().zip(required) {
            let value = value.trim();
            if value.is_empty() {
                return Err(LeagueError::MissingField(field));
            }
            *slot = value.to_string();
        }
        Ok(values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffDirectory {
    accounts: Vec<StaffAccount>,
}

impl StaffDirectory {
    pub fn new(accounts: Vec<StaffAccount>) -> Self {
        Self { accounts }
    }

    pub fn all(&self) -> &[StaffAccount] {
        &self.accounts
    }

    pub fn get(&self, id: u32) -> Option<&StaffAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.accounts
            .iter()
            .filter(|a| a.status == StaffStatus::Active)
            .count()
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::StaffAccount, id.to_string()))
    }

    /// New accounts always start Active
    pub fn add(&mut self, draft: StaffDraft) -> LeagueResult<&StaffAccount> {
        let [name, position, email, access_code] = draft.validate()?;
        let id = self.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        debug!("STAFF: Adding {} ({})", name, id);
        self.accounts.push(StaffAccount {
            id,
            name,
            position,
            email,
            access_code,
            status: StaffStatus::Active,
        });
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn edit(&mut self, id: u32, draft: StaffDraft) -> LeagueResult<&StaffAccount> {
        let [name, position, email, access_code] = draft.validate()?;
        let index = self.position(id)?;
        self.accounts[index] = StaffAccount {
            id,
            name,
            position,
            email,
            access_code,
            status: draft.status,
        };
        Ok(&self.accounts[index])
    }

    pub fn remove(&mut self, id: u32) -> LeagueResult<StaffAccount> {
        let index = self.position(id)?;
        Ok(self.accounts.remove(index))
    }
}
