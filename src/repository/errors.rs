use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::pagination::PageRequestError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// Rejected before any query ran.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row or query input broke a value object invariant.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The pool or the underlying connection could not serve the query.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

fn from_database_error(
    kind: DatabaseErrorKind,
    info: &(dyn DatabaseErrorInformation + Send + Sync),
) -> RepositoryError {
    let message = info.message().to_string();
    let constraint = match kind {
        DatabaseErrorKind::UniqueViolation => "unique",
        DatabaseErrorKind::ForeignKeyViolation => "foreign key",
        DatabaseErrorKind::NotNullViolation => "not null",
        DatabaseErrorKind::CheckViolation => "check",
        DatabaseErrorKind::ClosedConnection => return RepositoryError::StoreUnavailable(message),
        _ => return RepositoryError::DatabaseError(message),
    };
    RepositoryError::ConstraintViolation(format!("{constraint}: {message}"))
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => from_database_error(kind, info.as_ref()),
            DieselError::QueryBuilderError(e) => {
                RepositoryError::ValidationError(format!("query builder: {e}"))
            }
            DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(format!("row deserialization: {e}"))
            }
            DieselError::RollbackTransaction => {
                RepositoryError::DatabaseError("transaction rolled back".to_string())
            }
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::StoreUnavailable(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::StoreUnavailable(format!("pool checkout: {err}"))
    }
}

impl From<PageRequestError> for RepositoryError {
    fn from(err: PageRequestError) -> Self {
        RepositoryError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        assert!(matches!(
            RepositoryError::from(DieselError::NotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn unique_violation_is_a_constraint_violation() {
        let err = RepositoryError::from(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("UNIQUE constraint failed: teams.name".to_string()),
        ));
        match err {
            RepositoryError::ConstraintViolation(message) => {
                assert!(message.starts_with("unique"));
                assert!(message.contains("teams.name"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn closed_connection_means_store_unavailable() {
        let err = RepositoryError::from(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_string()),
        ));
        assert!(matches!(err, RepositoryError::StoreUnavailable(_)));
    }

    #[test]
    fn page_errors_are_invalid_arguments() {
        let err = RepositoryError::from(PageRequestError::NonPositiveLimit(0));
        match err {
            RepositoryError::InvalidArgument(message) => assert!(message.contains("limit")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
