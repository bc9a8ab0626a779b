use serde::Deserialize;
use validator::Validate;

use crate::domain::appointment::{NewAppointment, UpdateAppointment};
use crate::domain::types::{
    AppointmentStatus, AppointmentType, PersonName, RecordDate, RecordTime,
};
use crate::forms::{
    FormError, REQUIRED_FIELDS_MISSING, double_option, field, label, non_blank, nullable_text,
};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/appointments`. New appointments always start
/// `Pending`, so no status is read.
pub struct AddAppointmentForm {
    #[validate(length(max = 200))]
    pub patient_name: Option<String>,
    #[validate(length(max = 200))]
    pub doctor_name: Option<String>,
    #[validate(length(max = 20))]
    pub date: Option<String>,
    #[validate(length(max = 20))]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /api/appointments/{id}`.
pub struct UpdateAppointmentForm {
    #[validate(length(max = 200))]
    pub patient_name: Option<String>,
    #[validate(length(max = 200))]
    pub doctor_name: Option<String>,
    #[validate(length(max = 20))]
    pub date: Option<String>,
    #[validate(length(max = 20))]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 2000))]
    pub notes: Option<Option<String>>,
}

impl TryFrom<AddAppointmentForm> for NewAppointment {
    type Error = FormError;

    fn try_from(form: AddAppointmentForm) -> Result<Self, Self::Error> {
        let (Some(patient_name), Some(doctor_name), Some(date), Some(time)) = (
            non_blank(form.patient_name.clone()),
            non_blank(form.doctor_name.clone()),
            non_blank(form.date.clone()),
            non_blank(form.time.clone()),
        ) else {
            return Err(FormError::MissingFields(REQUIRED_FIELDS_MISSING));
        };
        form.validate()?;

        let appointment_type = label("type", form.appointment_type, AppointmentType::parse)?
            .unwrap_or_default();

        Ok(NewAppointment::new(
            field("patientName", PersonName::new(patient_name))?,
            field("doctorName", PersonName::new(doctor_name))?,
            field("date", RecordDate::new(date))?,
            field("time", RecordTime::new(time))?,
            appointment_type,
            non_blank(form.notes),
        ))
    }
}

impl TryFrom<UpdateAppointmentForm> for UpdateAppointment {
    type Error = FormError;

    fn try_from(form: UpdateAppointmentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateAppointment {
            patient_name: form
                .patient_name
                .map(|v| field("patientName", PersonName::new(v)))
                .transpose()?,
            doctor_name: form
                .doctor_name
                .map(|v| field("doctorName", PersonName::new(v)))
                .transpose()?,
            date: form
                .date
                .map(|v| field("date", RecordDate::new(v)))
                .transpose()?,
            time: form
                .time
                .map(|v| field("time", RecordTime::new(v)))
                .transpose()?,
            appointment_type: label("type", form.appointment_type, AppointmentType::parse)?,
            status: label("status", form.status, AppointmentStatus::parse)?,
            notes: nullable_text(form.notes),
        })
    }
}
