use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Failure of a service operation; handlers turn it into a status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input was rejected. The message is safe to show.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    /// The write collided with existing data, e.g. a taken email.
    #[error("{0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(msg) => ServiceError::Conflict(msg),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
