use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::listing::{ListQuery, ListResource, SortField, SortOrder};
use crate::domain::types::{Age, PatientId, PatientStatus, PersonName, PhoneNumber};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: PatientStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPatient {
    pub name: PersonName,
    pub age: Option<Age>,
    pub gender: Option<String>,
    pub phone: PhoneNumber,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: PatientStatus,
}

impl NewPatient {
    /// Creates an active patient with only the required fields set.
    #[must_use]
    pub fn new(name: PersonName, phone: PhoneNumber) -> Self {
        Self {
            name,
            age: None,
            gender: None,
            phone,
            email: None,
            address: None,
            status: PatientStatus::default(),
        }
    }
}

/// Partial update; `None` leaves a column untouched, `Some(None)` clears an
/// optional column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdatePatient {
    pub name: Option<PersonName>,
    pub age: Option<Option<Age>>,
    pub gender: Option<Option<String>>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub status: Option<PatientStatus>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatientSortField {
    Name,
    Age,
    Gender,
    Phone,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField for PatientSortField {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("age", Self::Age),
        ("gender", Self::Gender),
        ("phone", Self::Phone),
        ("email", Self::Email),
        ("status", Self::Status),
        ("createdAt", Self::CreatedAt),
        ("updatedAt", Self::UpdatedAt),
    ];
}

/// Searches `name`, `phone` and `email`; filters on `status`.
impl ListResource for Patient {
    type SortField = PatientSortField;

    const COLLECTION: &'static str = "patients";
    const DEFAULT_SORT: PatientSortField = PatientSortField::Name;
    const DEFAULT_ORDER: SortOrder = SortOrder::Asc;
}

pub type PatientListQuery = ListQuery<PatientSortField>;
