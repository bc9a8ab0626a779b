use serde::Deserialize;
use validator::Validate;

use crate::domain::patient::{NewPatient, UpdatePatient};
use crate::domain::types::{PatientStatus, PersonName, PhoneNumber};
use crate::forms::{
    FormError, NumberInput, age, double_option, field, label, non_blank, nullable_text,
};

pub const NAME_AND_PHONE_REQUIRED: &str = "Name and phone are required";

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/patients`.
pub struct AddPatientForm {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    pub age: Option<NumberInput>,
    #[validate(length(max = 50))]
    pub gender: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    /// Initial status; `Active` when absent.
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /api/patients/{id}`. Absent fields are left untouched and
/// `null` clears an optional field.
pub struct UpdatePatientForm {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub age: Option<Option<NumberInput>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 50))]
    pub gender: Option<Option<String>>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 200))]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 500))]
    pub address: Option<Option<String>>,
    pub status: Option<String>,
}

impl TryFrom<AddPatientForm> for NewPatient {
    type Error = FormError;

    fn try_from(form: AddPatientForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(phone)) = (non_blank(form.name.clone()), non_blank(form.phone.clone()))
        else {
            return Err(FormError::MissingFields(NAME_AND_PHONE_REQUIRED));
        };
        form.validate()?;

        let mut patient = NewPatient::new(
            field("name", PersonName::new(name))?,
            field("phone", PhoneNumber::new(phone))?,
        );
        patient.age = age(form.age.as_ref())?;
        patient.gender = non_blank(form.gender);
        patient.email = non_blank(form.email);
        patient.address = non_blank(form.address);
        if let Some(status) = label("status", form.status, PatientStatus::parse)? {
            patient.status = status;
        }
        Ok(patient)
    }
}

impl TryFrom<UpdatePatientForm> for UpdatePatient {
    type Error = FormError;

    fn try_from(form: UpdatePatientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let age = match form.age {
            Some(value) => Some(age(value.as_ref())?),
            None => None,
        };

        Ok(UpdatePatient {
            name: form
                .name
                .map(|name| field("name", PersonName::new(name)))
                .transpose()?,
            age,
            gender: nullable_text(form.gender),
            phone: form
                .phone
                .map(|phone| field("phone", PhoneNumber::new(phone)))
                .transpose()?,
            email: nullable_text(form.email),
            address: nullable_text(form.address),
            status: label("status", form.status, PatientStatus::parse)?,
        })
    }
}
