//! Service layer: request-level operations generic over repository traits.

use crate::domain::types::TypeConstraintError;

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod errors;
pub mod listing;
pub mod patients;
pub mod reports;

pub use errors::{ServiceError, ServiceResult};

/// Turns a path id into a typed id. Ids that cannot exist are reported as
/// missing records rather than bad input.
pub(crate) fn record_id<T>(
    raw: i32,
    parse: fn(i32) -> Result<T, TypeConstraintError>,
) -> ServiceResult<T> {
    parse(raw).map_err(|_| ServiceError::NotFound)
}
