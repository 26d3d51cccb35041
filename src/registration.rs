//! Open registration forms
//!
//! A sport only shows up in the registration review grid once a form has been
//! opened for it.
use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EntityKind, LeagueError, LeagueResult};
use crate::types::{find_sport, SportGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub sport: String,
    /// Teams can submit until this date
    pub deadline: NaiveDate,
}

/// Parse a `YYYY-MM-DD` deadline
pub fn parse_deadline(raw: &str) -> LeagueResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LeagueError::MissingField("Deadline"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| LeagueError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForms {
    forms: Vec<RegistrationForm>,
}

impl RegistrationForms {
    pub fn new(forms: Vec<RegistrationForm>) -> Self {
        Self { forms }
    }

    pub fn all(&self) -> &[RegistrationForm] {
        &self.forms
    }

    pub fn is_open(&self, sport: &str) -> bool {
        self.forms.iter().any(|f| f.sport == sport)
    }

    /// Open a form for a sport in the tree
    ///
    /// Returns `false` without changing anything if the sport already has one.
    pub fn create(
        &mut self,
        sport: &str,
        deadline: &str,
        sports: &[SportGroup],
    ) -> LeagueResult<bool> {
        let sport = sport.trim();
        if sport.is_empty() {
            return Err(LeagueError::MissingField("Sport"));
        }
        if find_sport(sports, sport).is_none() {
            return Err(LeagueError::not_found(EntityKind::Sport, sport));
        }
        let deadline = parse_deadline(deadline)?;
        if self.is_open(sport) {
            debug!("REGISTRATION: Form for {} already open", sport);
            return Ok(false);
        }
        self.forms.push(RegistrationForm {
            sport: sport.to_string(),
            deadline,
        });
        Ok(true)
    }

    /// Sport groups that have an open form, in tree order
    pub fn visible_groups<'a>(&self, sports: &'a [SportGroup]) -> Vec<&'a SportGroup> {
        sports.iter().filter(|g| self.is_open(&g.sport)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_only_sports_with_forms_are_visible() {
        let sports = fixtures::create_sport_groups();
        let forms = RegistrationForms::new(fixtures::create_registration_forms());

        let visible: Vec<&str> = forms
            .visible_groups(&sports)
            .iter()
            .map(|g| g.sport.as_str())
            .collect();

        assert_eq!(visible, vec!["Basketball", "Volleyball"]);
    }

    #[test]
    fn test_create_form_for_new_sport() {
        let sports = fixtures::create_sport_groups();
        let mut forms = RegistrationForms::new(fixtures::create_registration_forms());

        assert!(forms.create("Cheer and Dance", "2025-09-30", &sports).unwrap());
        assert_eq!(forms.visible_groups(&sports).len(), 3);
    }

    #[test]
    fn test_create_duplicate_is_noop() {
        let sports = fixtures::create_sport_groups();
        let mut forms = RegistrationForms::new(fixtures::create_registration_forms());
        let before = forms.clone();

        assert!(!forms.create("Basketball", "2025-12-01", &sports).unwrap());
        assert_eq!(forms, before);
    }

    #[test]
    fn test_create_validates_sport_and_deadline() {
        let sports = fixtures::create_sport_groups();
        let mut forms = RegistrationForms::default();

        assert!(matches!(
            forms.create("Chess", "2025-09-30", &sports),
            Err(LeagueError::NotFound { .. })
        ));
        assert_eq!(
            forms.create("Basketball", "09/30/2025", &sports).err(),
            Some(LeagueError::InvalidDate("09/30/2025".to_string()))
        );
        assert_eq!(
            forms.create("Basketball", "", &sports).err(),
            Some(LeagueError::MissingField("Deadline"))
        );
        assert!(forms.all().is_empty());
    }
}
