//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions out of [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for crate::services::ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        crate::services::ServiceError::Validation(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_row_violation_is_a_repository_validation_error() {
        let err = RepositoryError::from(TypeConstraintError::NonPositiveId);
        assert!(matches!(err, RepositoryError::ValidationError(msg) if msg.contains("id")));
    }

    #[cfg(feature = "server")]
    #[test]
    fn constraint_violation_is_a_service_validation_error() {
        let err = crate::services::ServiceError::from(TypeConstraintError::InvalidAmount);
        assert!(matches!(err, crate::services::ServiceError::Validation(_)));
    }
}
