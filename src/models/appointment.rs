use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::appointment::{
    Appointment as DomainAppointment, NewAppointment as DomainNewAppointment,
    UpdateAppointment as DomainUpdateAppointment,
};
use crate::domain::types::{AppointmentId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::appointments)]
/// Diesel model for [`crate::domain::appointment::Appointment`].
pub struct Appointment {
    pub id: i32,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::appointments)]
pub struct NewAppointment<'a> {
    pub patient_name: &'a str,
    pub doctor_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub appointment_type: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::appointments)]
pub struct UpdateAppointment<'a> {
    pub patient_name: Option<&'a str>,
    pub doctor_name: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
    pub appointment_type: Option<&'a str>,
    pub status: Option<&'a str>,
    pub notes: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Appointment> for DomainAppointment {
    type Error = TypeConstraintError;

    fn try_from(appointment: Appointment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AppointmentId::try_from(appointment.id)?,
            patient_name: appointment.patient_name,
            doctor_name: appointment.doctor_name,
            date: appointment.date,
            time: appointment.time,
            appointment_type: appointment.appointment_type.into(),
            status: appointment.status.into(),
            notes: appointment.notes,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewAppointment> for NewAppointment<'a> {
    fn from(appointment: &'a DomainNewAppointment) -> Self {
        Self {
            patient_name: appointment.patient_name.as_str(),
            doctor_name: appointment.doctor_name.as_str(),
            date: appointment.date.as_str(),
            time: appointment.time.as_str(),
            appointment_type: appointment.appointment_type.as_str(),
            status: appointment.status.as_str(),
            notes: appointment.notes.as_deref(),
        }
    }
}

impl<'a> UpdateAppointment<'a> {
    pub fn from_domain(updates: &'a DomainUpdateAppointment, updated_at: NaiveDateTime) -> Self {
        Self {
            patient_name: updates.patient_name.as_ref().map(|name| name.as_str()),
            doctor_name: updates.doctor_name.as_ref().map(|name| name.as_str()),
            date: updates.date.as_ref().map(|date| date.as_str()),
            time: updates.time.as_ref().map(|time| time.as_str()),
            appointment_type: updates.appointment_type.as_ref().map(|kind| kind.as_str()),
            status: updates.status.as_ref().map(|status| status.as_str()),
            notes: updates.notes.as_ref().map(|notes| notes.as_deref()),
            updated_at,
        }
    }
}
