use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::domain::types::PatientId;
use crate::dto::api::{ListEnvelope, ListParams};
use crate::forms::patients::{AddPatientForm, UpdatePatientForm};
use crate::repository::{PatientReader, PatientWriter};
use crate::services::listing::{build_list_query, envelope};
use crate::services::{ServiceError, ServiceResult, record_id};

/// Returns one page of patients matching the query parameters.
pub fn list_patients<R>(repo: &R, params: &ListParams) -> ServiceResult<ListEnvelope<Patient>>
where
    R: PatientReader + ?Sized,
{
    let query = build_list_query::<Patient>(params)?;
    let (total, patients) = repo.list_patients(&query).map_err(ServiceError::from)?;
    Ok(envelope(query.window, total, patients))
}

pub fn get_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<Patient>
where
    R: PatientReader + ?Sized,
{
    let patient_id = record_id(patient_id, PatientId::new)?;
    repo.get_patient_by_id(patient_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_patient<R>(repo: &R, form: AddPatientForm) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    let new_patient = NewPatient::try_from(form)?;
    repo.create_patient(&new_patient).map_err(ServiceError::from)
}

/// Applies a partial update; fields absent from the form keep their values.
pub fn update_patient<R>(repo: &R, patient_id: i32, form: UpdatePatientForm) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    let patient_id = record_id(patient_id, PatientId::new)?;
    let updates = UpdatePatient::try_from(form)?;
    repo.update_patient(patient_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<()>
where
    R: PatientWriter + ?Sized,
{
    let patient_id = record_id(patient_id, PatientId::new)?;
    repo.delete_patient(patient_id).map_err(ServiceError::from)
}
