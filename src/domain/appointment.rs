use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::listing::{ListQuery, ListResource, SortField, SortOrder};
use crate::domain::types::{
    AppointmentId, AppointmentStatus, AppointmentType, PersonName, RecordDate, RecordTime,
};

/// A scheduled visit. Patient and doctor are free-text names, not references.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAppointment {
    pub patient_name: PersonName,
    pub doctor_name: PersonName,
    pub date: RecordDate,
    pub time: RecordTime,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl NewAppointment {
    /// New appointments always start out pending.
    #[must_use]
    pub fn new(
        patient_name: PersonName,
        doctor_name: PersonName,
        date: RecordDate,
        time: RecordTime,
        appointment_type: AppointmentType,
        notes: Option<String>,
    ) -> Self {
        Self {
            patient_name,
            doctor_name,
            date,
            time,
            appointment_type,
            status: AppointmentStatus::Pending,
            notes,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateAppointment {
    pub patient_name: Option<PersonName>,
    pub doctor_name: Option<PersonName>,
    pub date: Option<RecordDate>,
    pub time: Option<RecordTime>,
    pub appointment_type: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<Option<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentSortField {
    PatientName,
    DoctorName,
    Date,
    Time,
    Type,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField for AppointmentSortField {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("patientName", Self::PatientName),
        ("doctorName", Self::DoctorName),
        ("date", Self::Date),
        ("time", Self::Time),
        ("type", Self::Type),
        ("status", Self::Status),
        ("createdAt", Self::CreatedAt),
        ("updatedAt", Self::UpdatedAt),
    ];
}

/// Searches `patientName` and `doctorName`; filters on `status` and `date`.
impl ListResource for Appointment {
    type SortField = AppointmentSortField;

    const COLLECTION: &'static str = "appointments";
    const DEFAULT_SORT: AppointmentSortField = AppointmentSortField::Date;
    const DEFAULT_ORDER: SortOrder = SortOrder::Desc;
    const DATE_FILTER: bool = true;
}

pub type AppointmentListQuery = ListQuery<AppointmentSortField>;
