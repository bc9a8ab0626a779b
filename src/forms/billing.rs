use serde::Deserialize;
use validator::Validate;

use crate::domain::bill::{NewBill, UpdateBill};
use crate::domain::types::{BillStatus, PaymentMethod, PersonName, RecordDate, ServiceList};
use crate::forms::{FormError, NumberInput, REQUIRED_FIELDS_MISSING, amount, field, label, non_blank};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/billing`. New bills always start `Pending`.
pub struct AddBillForm {
    #[validate(length(max = 200))]
    pub patient_name: Option<String>,
    #[validate(length(max = 2000))]
    pub services: Option<String>,
    pub amount: Option<NumberInput>,
    #[validate(length(max = 20))]
    pub date: Option<String>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /api/billing/{id}`. A blank `amount` leaves it unchanged.
pub struct UpdateBillForm {
    #[validate(length(max = 200))]
    pub patient_name: Option<String>,
    #[validate(length(max = 2000))]
    pub services: Option<String>,
    pub amount: Option<NumberInput>,
    #[validate(length(max = 20))]
    pub date: Option<String>,
    pub status: Option<String>,
    pub payment_method: Option<String>,
}

impl TryFrom<AddBillForm> for NewBill {
    type Error = FormError;

    fn try_from(form: AddBillForm) -> Result<Self, Self::Error> {
        let (Some(patient_name), Some(services), Some(date)) = (
            non_blank(form.patient_name.clone()),
            non_blank(form.services.clone()),
            non_blank(form.date.clone()),
        ) else {
            return Err(FormError::MissingFields(REQUIRED_FIELDS_MISSING));
        };
        // A blank amount counts as missing; only a present one is parsed.
        let Some(amount) = amount(form.amount.as_ref())? else {
            return Err(FormError::MissingFields(REQUIRED_FIELDS_MISSING));
        };
        form.validate()?;

        let payment_method =
            label("paymentMethod", form.payment_method, PaymentMethod::parse)?.unwrap_or_default();

        Ok(NewBill::new(
            field("patientName", PersonName::new(patient_name))?,
            field("services", ServiceList::new(services))?,
            amount,
            field("date", RecordDate::new(date))?,
            payment_method,
        ))
    }
}

impl TryFrom<UpdateBillForm> for UpdateBill {
    type Error = FormError;

    fn try_from(form: UpdateBillForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateBill {
            patient_name: form
                .patient_name
                .map(|v| field("patientName", PersonName::new(v)))
                .transpose()?,
            services: form
                .services
                .map(|v| field("services", ServiceList::new(v)))
                .transpose()?,
            amount: amount(form.amount.as_ref())?,
            date: form
                .date
                .map(|v| field("date", RecordDate::new(v)))
                .transpose()?,
            status: label("status", form.status, BillStatus::parse)?,
            payment_method: label("paymentMethod", form.payment_method, PaymentMethod::parse)?,
        })
    }
}
