//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::TeamValidationError;
use crate::domain::validation::require_text;

/// Team identifier - positive integer assigned by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    /// Wrap an allocated identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a raw form value such as `" 3 "`
    pub fn parse(raw: &str) -> Result<Self, TeamValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TeamValidationError::MissingId);
        }

        match trimmed.parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(TeamValidationError::InvalidId(trimmed.to_string())),
        }
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, trimmed team fields awaiting an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraft {
    name: String,
    captain_name: String,
    contact: String,
}

impl TeamDraft {
    /// Validate raw field values
    pub fn new(
        name: &str,
        captain_name: &str,
        contact: &str,
    ) -> Result<Self, TeamValidationError> {
        Ok(Self {
            name: require_text(name, TeamValidationError::EmptyName)?,
            captain_name: require_text(captain_name, TeamValidationError::EmptyCaptainName)?,
            contact: require_text(contact, TeamValidationError::EmptyContact)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach an allocated id, producing the stored entity
    pub fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            captain_name: self.captain_name,
            contact: self.contact,
            created_at: Utc::now(),
        }
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Display name
    name: String,
    /// Name of the team captain
    captain_name: String,
    /// Phone or messaging contact
    contact: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Team {
    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn captain_name(&self) -> &str {
        &self.captain_name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_parse() {
        assert_eq!(TeamId::parse("1").unwrap(), TeamId::new(1));
        assert_eq!(TeamId::parse(" 42 ").unwrap().value(), 42);
    }

    #[test]
    fn test_team_id_parse_missing() {
        assert_eq!(TeamId::parse(""), Err(TeamValidationError::MissingId));
        assert_eq!(TeamId::parse("   "), Err(TeamValidationError::MissingId));
    }

    #[test]
    fn test_team_id_parse_invalid() {
        assert_eq!(
            TeamId::parse("abc"),
            Err(TeamValidationError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            TeamId::parse("0"),
            Err(TeamValidationError::InvalidId("0".to_string()))
        );
        assert_eq!(
            TeamId::parse("-3"),
            Err(TeamValidationError::InvalidId("-3".to_string()))
        );
        assert!(TeamId::parse("1.5").is_err());
    }

    #[test]
    fn test_team_id_display_and_serde() {
        let id = TeamId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_draft_trims_fields() {
        let draft = TeamDraft::new("  Alpha ", " Cap1", "999  ").unwrap();
        let team = draft.into_team(TeamId::new(1));

        assert_eq!(team.id(), TeamId::new(1));
        assert_eq!(team.name(), "Alpha");
        assert_eq!(team.captain_name(), "Cap1");
        assert_eq!(team.contact(), "999");
    }

    #[test]
    fn test_draft_rejects_empty_fields() {
        assert_eq!(
            TeamDraft::new(" ", "Cap1", "999"),
            Err(TeamValidationError::EmptyName)
        );
        assert_eq!(
            TeamDraft::new("Alpha", "", "999"),
            Err(TeamValidationError::EmptyCaptainName)
        );
        assert_eq!(
            TeamDraft::new("Alpha", "Cap1", "\t"),
            Err(TeamValidationError::EmptyContact)
        );
    }
}
