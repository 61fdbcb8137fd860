//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Captain name cannot be empty")]
    EmptyCaptainName,

    #[error("Team contact cannot be empty")]
    EmptyContact,

    #[error("Team ID is required")]
    MissingId,

    #[error("Team ID must be a positive integer, got '{0}'")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TeamValidationError::InvalidId("abc".to_string()).to_string(),
            "Team ID must be a positive integer, got 'abc'"
        );
        assert_eq!(
            TeamValidationError::EmptyCaptainName.to_string(),
            "Captain name cannot be empty"
        );
    }
}
