use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::types::AppointmentId;
use crate::dto::api::{ListEnvelope, ListParams};
use crate::forms::appointments::{AddAppointmentForm, UpdateAppointmentForm};
use crate::repository::{AppointmentReader, AppointmentWriter};
use crate::services::listing::{build_list_query, envelope};
use crate::services::{ServiceError, ServiceResult, record_id};

/// Returns one page of appointments; honours the exact `date` filter.
pub fn list_appointments<R>(
    repo: &R,
    params: &ListParams,
) -> ServiceResult<ListEnvelope<Appointment>>
where
    R: AppointmentReader + ?Sized,
{
    let query = build_list_query::<Appointment>(params)?;
    let (total, appointments) = repo
        .list_appointments(&query)
        .map_err(ServiceError::from)?;
    Ok(envelope(query.window, total, appointments))
}

pub fn get_appointment<R>(repo: &R, appointment_id: i32) -> ServiceResult<Appointment>
where
    R: AppointmentReader + ?Sized,
{
    let appointment_id = record_id(appointment_id, AppointmentId::new)?;
    repo.get_appointment_by_id(appointment_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Books a new appointment in the `Pending` state.
pub fn create_appointment<R>(repo: &R, form: AddAppointmentForm) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    let new_appointment = NewAppointment::try_from(form)?;
    repo.create_appointment(&new_appointment)
        .map_err(ServiceError::from)
}

pub fn update_appointment<R>(
    repo: &R,
    appointment_id: i32,
    form: UpdateAppointmentForm,
) -> ServiceResult<Appointment>
where
    R: AppointmentWriter + ?Sized,
{
    let appointment_id = record_id(appointment_id, AppointmentId::new)?;
    let updates = UpdateAppointment::try_from(form)?;
    repo.update_appointment(appointment_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_appointment<R>(repo: &R, appointment_id: i32) -> ServiceResult<()>
where
    R: AppointmentWriter + ?Sized,
{
    let appointment_id = record_id(appointment_id, AppointmentId::new)?;
    repo.delete_appointment(appointment_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AppointmentStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use serde_json::json;

    #[test]
    fn list_forwards_date_and_status() {
        let mut repo = MockRepository::new();
        repo.expect_list_appointments()
            .withf(|query| {
                query.filter.date.as_deref() == Some("2024-11-28")
                    && query.filter.status.as_deref() == Some("Confirmed")
            })
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let params = ListParams {
            date: Some("2024-11-28".into()),
            status: Some("Confirmed".into()),
            ..ListParams::default()
        };
        let page = list_appointments(&repo, &params).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn store_failure_is_opaque() {
        let mut repo = MockRepository::new();
        repo.expect_list_appointments()
            .returning(|_| Err(RepositoryError::DatabaseError("locked".into())));

        assert!(matches!(
            list_appointments(&repo, &ListParams::default()),
            Err(ServiceError::Repository(_))
        ));
    }

    #[test]
    fn created_appointments_are_pending() {
        let mut repo = MockRepository::new();
        repo.expect_create_appointment()
            .withf(|new| new.status == AppointmentStatus::Pending)
            .times(1)
            .returning(|_| Err(RepositoryError::Unexpected("stop here".into())));

        let form: AddAppointmentForm = serde_json::from_value(json!({
            "patientName": "Ann",
            "doctorName": "Dr. Rao",
            "date": "2024-11-28",
            "time": "09:30"
        }))
        .unwrap();
        assert!(create_appointment(&repo, form).is_err());
    }

    #[test]
    fn deleting_a_missing_appointment_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_appointment()
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            delete_appointment(&repo, 404),
            Err(ServiceError::NotFound)
        ));
    }
}
