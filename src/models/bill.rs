use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::bill::{
    Bill as DomainBill, NewBill as DomainNewBill, UpdateBill as DomainUpdateBill,
};
use crate::domain::types::{BillId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bills)]
/// Diesel model for [`crate::domain::bill::Bill`].
pub struct Bill {
    pub id: i32,
    pub patient_name: String,
    pub services: String,
    pub amount: f64,
    pub date: String,
    pub status: String,
    pub payment_method: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bills)]
pub struct NewBill<'a> {
    pub patient_name: &'a str,
    pub services: &'a str,
    pub amount: f64,
    pub date: &'a str,
    pub status: &'a str,
    pub payment_method: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::bills)]
pub struct UpdateBill<'a> {
    pub patient_name: Option<&'a str>,
    pub services: Option<&'a str>,
    pub amount: Option<f64>,
    pub date: Option<&'a str>,
    pub status: Option<&'a str>,
    pub payment_method: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Bill> for DomainBill {
    type Error = TypeConstraintError;

    fn try_from(bill: Bill) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BillId::try_from(bill.id)?,
            patient_name: bill.patient_name,
            services: bill.services,
            amount: bill.amount,
            date: bill.date,
            status: bill.status.into(),
            payment_method: bill.payment_method.into(),
            created_at: bill.created_at,
            updated_at: bill.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewBill> for NewBill<'a> {
    fn from(bill: &'a DomainNewBill) -> Self {
        Self {
            patient_name: bill.patient_name.as_str(),
            services: bill.services.as_str(),
            amount: bill.amount.get(),
            date: bill.date.as_str(),
            status: bill.status.as_str(),
            payment_method: bill.payment_method.as_str(),
        }
    }
}

impl<'a> UpdateBill<'a> {
    pub fn from_domain(updates: &'a DomainUpdateBill, updated_at: NaiveDateTime) -> Self {
        Self {
            patient_name: updates.patient_name.as_ref().map(|name| name.as_str()),
            services: updates.services.as_ref().map(|services| services.as_str()),
            amount: updates.amount.map(|amount| amount.get()),
            date: updates.date.as_ref().map(|date| date.as_str()),
            status: updates.status.as_ref().map(|status| status.as_str()),
            payment_method: updates.payment_method.as_ref().map(|method| method.as_str()),
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        Amount, BillStatus, PaymentMethod, PersonName, RecordDate, ServiceList,
    };

    #[test]
    fn from_domain_new_bill() {
        let domain = DomainNewBill::new(
            PersonName::new("John Doe").unwrap(),
            ServiceList::new("Consultation, Lab Tests").unwrap(),
            Amount::new(450.0).unwrap(),
            RecordDate::new("2024-11-20").unwrap(),
            PaymentMethod::BankTransfer,
        );
        let new: NewBill = (&domain).into();
        assert_eq!(new.amount, 450.0);
        assert_eq!(new.status, "Pending");
        assert_eq!(new.payment_method, "Bank Transfer");
    }

    #[test]
    fn update_bill_skips_absent_fields() {
        let domain = DomainUpdateBill {
            status: Some(BillStatus::Paid),
            ..DomainUpdateBill::default()
        };
        let update = UpdateBill::from_domain(&domain, chrono::Utc::now().naive_utc());
        assert_eq!(update.status, Some("Paid"));
        assert_eq!(update.amount, None);
        assert_eq!(update.payment_method, None);
    }
}
