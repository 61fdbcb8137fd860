use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Team {team_id} already has {capacity} players registered")]
    CapacityExceeded { team_id: u64, capacity: usize },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn capacity_exceeded(team_id: u64, capacity: usize) -> Self {
        Self::CapacityExceeded { team_id, capacity }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Team 42 not found");
        assert_eq!(error.to_string(), "Not found: Team 42 not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Team name cannot be empty");
        assert_eq!(
            error.to_string(),
            "Validation error: Team name cannot be empty"
        );
    }

    #[test]
    fn test_capacity_exceeded_error() {
        let error = DomainError::capacity_exceeded(1, 5);
        assert_eq!(error.to_string(), "Team 1 already has 5 players registered");
    }

    #[test]
    fn test_unauthorized_error() {
        let error = DomainError::unauthorized("Invalid username or password");
        assert_eq!(error.to_string(), "Unauthorized: Invalid username or password");
    }
}
