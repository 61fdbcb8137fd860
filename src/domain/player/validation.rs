//! Player validation

use thiserror::Error;

/// Errors that can occur during player validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlayerValidationError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Player nickname cannot be empty")]
    EmptyNickname,

    #[error("Role must be one of Top, Jungle, Mid, Carry, Support; got '{0}'")]
    InvalidRole(String),

    #[error(
        "Rank must be one of Iron, Bronze, Silver, Gold, Platinum, Diamond, Master, \
         Grandmaster, Challenger; got '{0}'"
    )]
    InvalidRank(String),

    #[error("Gender must be one of Male, Female, Other, Undisclosed; got '{0}'")]
    InvalidGender(String),
}
