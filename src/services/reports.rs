use crate::domain::report::{ReportRange, SummaryReport};
use crate::dto::api::ReportQuery;
use crate::repository::ReportReader;
use crate::services::{ServiceError, ServiceResult};

/// Aggregates patients, appointments and billing. The date range only
/// applies when both bounds are given.
pub fn summary<R>(repo: &R, query: ReportQuery) -> ServiceResult<SummaryReport>
where
    R: ReportReader + ?Sized,
{
    let range = ReportRange::new(query.start_date, query.end_date);
    repo.summary(range).map_err(ServiceError::from)
}
