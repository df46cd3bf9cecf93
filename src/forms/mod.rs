//! Input forms validated before they reach the domain layer.

use thiserror::Error;
use validator::ValidationErrors;

pub mod member;
pub mod team;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid username")]
    InvalidUsername,

    #[error("invalid team name")]
    InvalidTeamName,

    #[error("invalid age")]
    InvalidAge,
}
