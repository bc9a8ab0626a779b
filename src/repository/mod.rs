use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::account::{Account, NewAccount};
use crate::domain::appointment::{
    Appointment, AppointmentListQuery, NewAppointment, UpdateAppointment,
};
use crate::domain::bill::{Bill, BillListQuery, NewBill, UpdateBill};
use crate::domain::patient::{NewPatient, Patient, PatientListQuery, UpdatePatient};
use crate::domain::report::{ReportRange, SummaryReport};
use crate::domain::types::{AccountEmail, AccountId, AppointmentId, BillId, PatientId};
use crate::repository::errors::RepositoryResult;

pub mod account;
pub mod appointment;
pub mod bill;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod patient;
pub mod report;

/// Diesel-backed store shared by every handler. Cloning shares the pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

diesel::define_sql_function! {
    /// Unicode lowercase. SQLite's own `lower` and `LIKE` only fold ASCII.
    fn unicode_lower(x: Nullable<Text>) -> Nullable<Text>;
}

/// Registers the Rust side of the custom SQL functions on a fresh connection.
pub fn register_sql_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |value: Option<String>| {
        value.map(|v| v.to_lowercase())
    })
}

/// Runs the filtered count and the filtered page inside one read
/// transaction so both observe the same snapshot.
fn count_and_load<T, C, L>(
    conn: &mut SqliteConnection,
    count: C,
    load: L,
) -> RepositoryResult<(usize, Vec<T>)>
where
    C: FnOnce(&mut SqliteConnection) -> QueryResult<i64>,
    L: FnOnce(&mut SqliteConnection) -> QueryResult<Vec<T>>,
{
    let (total, items) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let total = count(conn)?;
        let items = load(conn)?;
        Ok((total, items))
    })?;

    Ok((usize::try_from(total).unwrap_or_default(), items))
}

/// Applies the primary sort column in the requested direction to a boxed query.
macro_rules! order_by {
    ($query:expr, $column:expr, $order:expr) => {
        match $order {
            $crate::domain::listing::SortOrder::Asc => $query.order_by($column.asc()),
            $crate::domain::listing::SortOrder::Desc => $query.order_by($column.desc()),
        }
    };
}
pub(crate) use order_by;

pub trait PatientReader {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
    fn list_patients(&self, query: &PatientListQuery) -> RepositoryResult<(usize, Vec<Patient>)>;
}

pub trait PatientWriter {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
    fn update_patient(&self, id: PatientId, updates: &UpdatePatient) -> RepositoryResult<Patient>;
    fn delete_patient(&self, id: PatientId) -> RepositoryResult<()>;
}

pub trait AppointmentReader {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
    fn list_appointments(
        &self,
        query: &AppointmentListQuery,
    ) -> RepositoryResult<(usize, Vec<Appointment>)>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, new_appointment: &NewAppointment)
    -> RepositoryResult<Appointment>;
    fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment>;
    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
}

pub trait BillReader {
    fn get_bill_by_id(&self, id: BillId) -> RepositoryResult<Option<Bill>>;
    fn list_bills(&self, query: &BillListQuery) -> RepositoryResult<(usize, Vec<Bill>)>;
}

pub trait BillWriter {
    fn create_bill(&self, new_bill: &NewBill) -> RepositoryResult<Bill>;
    fn update_bill(&self, id: BillId, updates: &UpdateBill) -> RepositoryResult<Bill>;
    fn delete_bill(&self, id: BillId) -> RepositoryResult<()>;
}

pub trait AccountReader {
    fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>>;
    fn get_account_by_email(&self, email: &AccountEmail) -> RepositoryResult<Option<Account>>;
}

pub trait AccountWriter {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
}

pub trait ReportReader {
    fn summary(&self, range: Option<ReportRange>) -> RepositoryResult<SummaryReport>;
}
