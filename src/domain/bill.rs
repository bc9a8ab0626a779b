use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::listing::{ListQuery, ListResource, SortField, SortOrder};
use crate::domain::types::{
    Amount, BillId, BillStatus, PaymentMethod, PersonName, RecordDate, ServiceList,
};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    pub patient_name: String,
    pub services: String,
    pub amount: f64,
    pub date: String,
    pub status: BillStatus,
    pub payment_method: PaymentMethod,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewBill {
    pub patient_name: PersonName,
    pub services: ServiceList,
    pub amount: Amount,
    pub date: RecordDate,
    pub status: BillStatus,
    pub payment_method: PaymentMethod,
}

impl NewBill {
    /// New bills always start out pending.
    #[must_use]
    pub fn new(
        patient_name: PersonName,
        services: ServiceList,
        amount: Amount,
        date: RecordDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            patient_name,
            services,
            amount,
            date,
            status: BillStatus::Pending,
            payment_method,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateBill {
    pub patient_name: Option<PersonName>,
    pub services: Option<ServiceList>,
    pub amount: Option<Amount>,
    pub date: Option<RecordDate>,
    pub status: Option<BillStatus>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillSortField {
    PatientName,
    Amount,
    Date,
    Status,
    PaymentMethod,
    CreatedAt,
    UpdatedAt,
}

impl SortField for BillSortField {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("patientName", Self::PatientName),
        ("amount", Self::Amount),
        ("date", Self::Date),
        ("status", Self::Status),
        ("paymentMethod", Self::PaymentMethod),
        ("createdAt", Self::CreatedAt),
        ("updatedAt", Self::UpdatedAt),
    ];
}

/// Searches `patientName`; filters on `status`.
impl ListResource for Bill {
    type SortField = BillSortField;

    const COLLECTION: &'static str = "bills";
    const DEFAULT_SORT: BillSortField = BillSortField::Date;
    const DEFAULT_ORDER: SortOrder = SortOrder::Desc;
}

pub type BillListQuery = ListQuery<BillSortField>;
