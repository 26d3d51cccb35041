//! Coach roster with access codes
use rand::Rng;
use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};
use crate::types::is_valid_email;

pub const ACCESS_CODE_LEN: usize = 8;

/// Upper-case letters and digits without the look-alikes I, O, 0 and 1
const ACCESS_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub access_code: String,
    pub sports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoachDraft {
    pub name: String,
    pub email: String,
    pub access_code: String,
    pub sports: Vec<String>,
}

struct ValidCoach {
    name: String,
    email: String,
    access_code: String,
}

impl CoachDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        access_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            access_code: access_code.into(),
            sports: Vec::new(),
        }
    }

    pub fn with_sports(mut self, sports: Vec<String>) -> Self {
        self.sports = sports;
        self
    }

    fn validate(&self) -> LeagueResult<ValidCoach> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LeagueError::MissingField("Coach name"));
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(LeagueError::InvalidEmail(email.to_string()));
        }
        let access_code = normalize_access_code(&self.access_code)?;
        Ok(ValidCoach {
            name: name.to_string(),
            email: email.to_string(),
            access_code,
        })
    }
}

/// Trim and upper-case a code, requiring exactly 8 letters or digits
pub fn normalize_access_code(raw: &str) -> LeagueResult<String> {
    let code = raw.trim().to_uppercase();
    let valid = code.chars().count() == ACCESS_CODE_LEN
        && code.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(LeagueError::InvalidAccessCode(raw.trim().to_string()));
    }
    Ok(code)
}

/// Random 8-character code for coach and staff logins
pub fn generate_access_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ACCESS_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ACCESS_CODE_CHARSET.len());
            ACCESS_CODE_CHARSET[idx] as char
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachRoster {
    coaches: Vec<Coach>,
}

impl CoachRoster {
    pub fn new(coaches: Vec<Coach>) -> Self {
        Self { coaches }
    }

    pub fn all(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn get(&self, id: u32) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.id == id)
    }

    fn position(&self, id: u32) -> LeagueResult<usize> {
        self.coaches
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LeagueError::not_found(EntityKind::Coach, id.to_string()))
    }

    pub fn add(&mut self, draft: CoachDraft) -> LeagueResult<&Coach> {
        let valid = draft.validate()?;
        let id = self.coaches.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        debug!("COACH: Adding {} ({})", valid.name, id);
        self.coaches.push(Coach {
            id,
            name: valid.name,
            email: valid.email,
            access_code: valid.access_code,
            sports: draft.sports,
        });
        Ok(&self.coaches[self.coaches.len() - 1])
    }

    pub fn edit(&mut self, id: u32, draft: CoachDraft) -> LeagueResult<&Coach> {
        let valid = draft.validate()?;
        let index = self.position(id)?;
        let coach = &mut self.coaches[index];
        coach.name = valid.name;
        coach.email = valid.email;
        coach.access_code = valid.access_code;
        coach.sports = draft.sports;
        Ok(&self.coaches[index])
    }

    pub fn assign_sports(&mut self, id: u32, sports: Vec<String>) -> LeagueResult<&Coach> {
        let index = self.position(id)?;
        self.coaches[index].sports = sports;
        Ok(&self.coaches[index])
    }

    pub fn remove(&mut self, id: u32) -> LeagueResult<Coach> {
        let index = self.position(id)?;
        Ok(self.coaches.remove(index))
    }

    /// Case-insensitive search over name, email, code and sports, optionally
    /// narrowed to coaches assigned to exactly `sport`
    pub fn search(&self, query: &str, sport: Option<&str>) -> Vec<&Coach> {
        let query = query.trim().to_lowercase();
        let sport = sport
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && s != "all");

        self.coaches
            .iter()
            .filter(|coach| query.is_empty() || coach_matches(coach, &query))
            .filter(|coach| match &sport {
                Some(sport) => coach.sports.iter().any(|s| s.to_lowercase() == *sport),
                None => true,
            })
            .collect()
    }
}

fn coach_matches(coach: &Coach, query: &str) -> bool {
    coach.name.to_lowercase().contains(query)
        || coach.email.to_lowercase().contains(query)
        || coach.access_code.to_lowercase().contains(query)
        || coach.sports.iter().any(|s| s.to_lowercase().contains(query))
}
