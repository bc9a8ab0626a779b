//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::account::{Account, NewAccount};
use crate::domain::appointment::{
    Appointment, AppointmentListQuery, NewAppointment, UpdateAppointment,
};
use crate::domain::bill::{Bill, BillListQuery, NewBill, UpdateBill};
use crate::domain::patient::{NewPatient, Patient, PatientListQuery, UpdatePatient};
use crate::domain::report::{ReportRange, SummaryReport};
use crate::domain::types::{AccountEmail, AccountId, AppointmentId, BillId, PatientId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccountReader, AccountWriter, AppointmentReader, AppointmentWriter, BillReader, BillWriter,
    PatientReader, PatientWriter, ReportReader,
};

mock! {
    pub Repository {}

    impl PatientReader for Repository {
        fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
        fn list_patients(&self, query: &PatientListQuery) -> RepositoryResult<(usize, Vec<Patient>)>;
    }

    impl PatientWriter for Repository {
        fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
        fn update_patient(&self, id: PatientId, updates: &UpdatePatient) -> RepositoryResult<Patient>;
        fn delete_patient(&self, id: PatientId) -> RepositoryResult<()>;
    }

    impl AppointmentReader for Repository {
        fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
        fn list_appointments(
            &self,
            query: &AppointmentListQuery,
        ) -> RepositoryResult<(usize, Vec<Appointment>)>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(&self, new_appointment: &NewAppointment) -> RepositoryResult<Appointment>;
        fn update_appointment(
            &self,
            id: AppointmentId,
            updates: &UpdateAppointment,
        ) -> RepositoryResult<Appointment>;
        fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
    }

    impl BillReader for Repository {
        fn get_bill_by_id(&self, id: BillId) -> RepositoryResult<Option<Bill>>;
        fn list_bills(&self, query: &BillListQuery) -> RepositoryResult<(usize, Vec<Bill>)>;
    }

    impl BillWriter for Repository {
        fn create_bill(&self, new_bill: &NewBill) -> RepositoryResult<Bill>;
        fn update_bill(&self, id: BillId, updates: &UpdateBill) -> RepositoryResult<Bill>;
        fn delete_bill(&self, id: BillId) -> RepositoryResult<()>;
    }

    impl AccountReader for Repository {
        fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>>;
        fn get_account_by_email(&self, email: &AccountEmail) -> RepositoryResult<Option<Account>>;
    }

    impl AccountWriter for Repository {
        fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
    }

    impl ReportReader for Repository {
        fn summary(&self, range: Option<ReportRange>) -> RepositoryResult<SummaryReport>;
    }
}
