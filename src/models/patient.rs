use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::patient::{
    NewPatient as DomainNewPatient, Patient as DomainPatient, UpdatePatient as DomainUpdatePatient,
};
use crate::domain::types::{PatientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::patients)]
/// Diesel model for [`crate::domain::patient::Patient`].
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::patients)]
/// Insertable form of [`Patient`].
pub struct NewPatient<'a> {
    pub name: &'a str,
    pub age: Option<i32>,
    pub gender: Option<&'a str>,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::patients)]
/// Partial changeset for a [`Patient`]; `None` fields are skipped.
pub struct UpdatePatient<'a> {
    pub name: Option<&'a str>,
    pub age: Option<Option<i32>>,
    pub gender: Option<Option<&'a str>>,
    pub phone: Option<&'a str>,
    pub email: Option<Option<&'a str>>,
    pub address: Option<Option<&'a str>>,
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Patient> for DomainPatient {
    type Error = TypeConstraintError;

    fn try_from(patient: Patient) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PatientId::try_from(patient.id)?,
            name: patient.name,
            age: patient.age,
            gender: patient.gender,
            phone: patient.phone,
            email: patient.email,
            address: patient.address,
            status: patient.status.into(),
            created_at: patient.created_at,
            updated_at: patient.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPatient> for NewPatient<'a> {
    fn from(patient: &'a DomainNewPatient) -> Self {
        Self {
            name: patient.name.as_str(),
            age: patient.age.map(|age| age.get()),
            gender: patient.gender.as_deref(),
            phone: patient.phone.as_str(),
            email: patient.email.as_deref(),
            address: patient.address.as_deref(),
            status: patient.status.as_str(),
        }
    }
}

impl<'a> UpdatePatient<'a> {
    pub fn from_domain(updates: &'a DomainUpdatePatient, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_ref().map(|name| name.as_str()),
            age: updates.age.map(|age| age.map(|age| age.get())),
            gender: updates.gender.as_ref().map(|gender| gender.as_deref()),
            phone: updates.phone.as_ref().map(|phone| phone.as_str()),
            email: updates.email.as_ref().map(|email| email.as_deref()),
            address: updates.address.as_ref().map(|address| address.as_deref()),
            status: updates.status.as_ref().map(|status| status.as_str()),
            updated_at,
        }
    }
}
