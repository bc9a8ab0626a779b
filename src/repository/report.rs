use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::report::{
    AppointmentTotals, BillingTotals, PatientTotals, ReportRange, SummaryReport,
};
use crate::domain::types::{AppointmentStatus, BillStatus, PatientStatus};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReportReader};
use crate::schema::{appointments, bills, patients};

fn to_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or_default()
}

/// Appointment count, optionally restricted to a status, within the range.
fn appointment_count(
    range: Option<&ReportRange>,
    status: Option<AppointmentStatus>,
) -> appointments::BoxedQuery<'static, Sqlite, BigInt> {
    let mut query = appointments::table.count().into_boxed();
    if let Some(range) = range {
        query = query.filter(appointments::date.between(range.start.clone(), range.end.clone()));
    }
    if let Some(status) = status {
        query = query.filter(appointments::status.eq(String::from(status)));
    }
    query
}

fn bill_count(
    range: Option<&ReportRange>,
    status: Option<BillStatus>,
) -> bills::BoxedQuery<'static, Sqlite, BigInt> {
    let mut query = bills::table.count().into_boxed();
    if let Some(range) = range {
        query = query.filter(bills::date.between(range.start.clone(), range.end.clone()));
    }
    if let Some(status) = status {
        query = query.filter(bills::status.eq(String::from(status)));
    }
    query
}

/// Sum of `amount` over bills in `status` within the range; NULL when empty.
fn bill_revenue(
    range: Option<&ReportRange>,
    status: BillStatus,
) -> bills::BoxedQuery<'static, Sqlite, Nullable<Double>> {
    let mut query = bills::table
        .select(sum(bills::amount))
        .filter(bills::status.eq(String::from(status)))
        .into_boxed();
    if let Some(range) = range {
        query = query.filter(bills::date.between(range.start.clone(), range.end.clone()));
    }
    query
}

impl ReportReader for DieselRepository {
    /// Patient totals ignore the range; everything is read in one transaction.
    fn summary(&self, range: Option<ReportRange>) -> RepositoryResult<SummaryReport> {
        let mut conn = self.conn()?;
        let range = range.as_ref();

        let report = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let patients_total = patients::table.count().get_result::<i64>(conn)?;
            let patients_active = patients::table
                .filter(patients::status.eq(String::from(PatientStatus::Active)))
                .count()
                .get_result::<i64>(conn)?;

            let appointments_total = appointment_count(range, None).get_result::<i64>(conn)?;
            let appointments_completed =
                appointment_count(range, Some(AppointmentStatus::Confirmed))
                    .get_result::<i64>(conn)?;

            let total_bills = bill_count(range, None).get_result::<i64>(conn)?;
            let paid_bills = bill_count(range, Some(BillStatus::Paid)).get_result::<i64>(conn)?;
            let total_revenue = bill_revenue(range, BillStatus::Paid)
                .get_result::<Option<f64>>(conn)?
                .unwrap_or_default();
            let pending_revenue = bill_revenue(range, BillStatus::Pending)
                .get_result::<Option<f64>>(conn)?
                .unwrap_or_default();

            Ok(SummaryReport {
                patients: PatientTotals {
                    total: to_count(patients_total),
                    active: to_count(patients_active),
                },
                appointments: AppointmentTotals {
                    total: to_count(appointments_total),
                    completed: to_count(appointments_completed),
                },
                billing: BillingTotals {
                    total_bills: to_count(total_bills),
                    paid_bills: to_count(paid_bills),
                    total_revenue,
                    pending_revenue,
                },
            })
        })?;

        Ok(report)
    }
}
