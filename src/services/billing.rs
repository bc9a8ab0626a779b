use crate::domain::bill::{Bill, NewBill, UpdateBill};
use crate::domain::types::BillId;
use crate::dto::api::{ListEnvelope, ListParams};
use crate::forms::billing::{AddBillForm, UpdateBillForm};
use crate::repository::{BillReader, BillWriter};
use crate::services::listing::{build_list_query, envelope};
use crate::services::{ServiceError, ServiceResult, record_id};

pub fn list_bills<R>(repo: &R, params: &ListParams) -> ServiceResult<ListEnvelope<Bill>>
where
    R: BillReader + ?Sized,
{
    let query = build_list_query::<Bill>(params)?;
    let (total, bills) = repo.list_bills(&query).map_err(ServiceError::from)?;
    Ok(envelope(query.window, total, bills))
}

pub fn get_bill<R>(repo: &R, bill_id: i32) -> ServiceResult<Bill>
where
    R: BillReader + ?Sized,
{
    let bill_id = record_id(bill_id, BillId::new)?;
    repo.get_bill_by_id(bill_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Issues a new bill in the `Pending` state.
pub fn create_bill<R>(repo: &R, form: AddBillForm) -> ServiceResult<Bill>
where
    R: BillWriter + ?Sized,
{
    let new_bill = NewBill::try_from(form)?;
    repo.create_bill(&new_bill).map_err(ServiceError::from)
}

pub fn update_bill<R>(repo: &R, bill_id: i32, form: UpdateBillForm) -> ServiceResult<Bill>
where
    R: BillWriter + ?Sized,
{
    let bill_id = record_id(bill_id, BillId::new)?;
    let updates = UpdateBill::try_from(form)?;
    repo.update_bill(bill_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_bill<R>(repo: &R, bill_id: i32) -> ServiceResult<()>
where
    R: BillWriter + ?Sized,
{
    let bill_id = record_id(bill_id, BillId::new)?;
    repo.delete_bill(bill_id).map_err(ServiceError::from)
}
