use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::bill::{Bill, BillListQuery, BillSortField, NewBill, UpdateBill};
use crate::domain::listing::{LIKE_ESCAPE, ListFilter};
use crate::domain::types::BillId;
use crate::models::bill::{Bill as DbBill, NewBill as DbNewBill, UpdateBill as DbUpdateBill};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BillReader, BillWriter, DieselRepository, count_and_load, order_by, unicode_lower};
use crate::schema::bills;

/// Search on patient name; exact status.
fn filtered(filter: &ListFilter) -> bills::BoxedQuery<'static, Sqlite> {
    let mut items = bills::table.into_boxed();

    if let Some(pattern) = filter.search_pattern() {
        items = items.filter(
            unicode_lower(bills::patient_name.nullable())
                .like(pattern)
                .escape(LIKE_ESCAPE)
                .assume_not_null(),
        );
    }
    if let Some(status) = &filter.status {
        items = items.filter(bills::status.eq(status.clone()));
    }
    items
}

fn sorted(query: &BillListQuery) -> bills::BoxedQuery<'static, Sqlite> {
    let items = filtered(&query.filter);
    let order = query.sort.order;
    let items = match query.sort.field {
        BillSortField::PatientName => order_by!(items, bills::patient_name, order),
        BillSortField::Amount => order_by!(items, bills::amount, order),
        BillSortField::Date => order_by!(items, bills::date, order),
        BillSortField::Status => order_by!(items, bills::status, order),
        BillSortField::PaymentMethod => order_by!(items, bills::payment_method, order),
        BillSortField::CreatedAt => order_by!(items, bills::created_at, order),
        BillSortField::UpdatedAt => order_by!(items, bills::updated_at, order),
    };
    items
        .then_order_by(bills::created_at.asc())
        .then_order_by(bills::id.asc())
}

fn into_domain(row: DbBill) -> RepositoryResult<Bill> {
    Bill::try_from(row).map_err(RepositoryError::from)
}

impl BillReader for DieselRepository {
    fn get_bill_by_id(&self, id: BillId) -> RepositoryResult<Option<Bill>> {
        let mut conn = self.conn()?;
        let bill = bills::table
            .find(id.get())
            .first::<DbBill>(&mut conn)
            .optional()?;

        bill.map(into_domain).transpose()
    }

    fn list_bills(&self, query: &BillListQuery) -> RepositoryResult<(usize, Vec<Bill>)> {
        let mut conn = self.conn()?;

        let (total, rows) = count_and_load(
            &mut conn,
            |conn| filtered(&query.filter).count().get_result::<i64>(conn),
            |conn| {
                sorted(query)
                    .offset(query.window.offset())
                    .limit(query.window.take())
                    .load::<DbBill>(conn)
            },
        )?;

        let items = rows
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, items))
    }
}

impl BillWriter for DieselRepository {
    fn create_bill(&self, new_bill: &NewBill) -> RepositoryResult<Bill> {
        let mut conn = self.conn()?;
        let insertable: DbNewBill = new_bill.into();

        let created = diesel::insert_into(bills::table)
            .values(&insertable)
            .get_result::<DbBill>(&mut conn)?;

        into_domain(created)
    }

    fn update_bill(&self, id: BillId, updates: &UpdateBill) -> RepositoryResult<Bill> {
        let mut conn = self.conn()?;
        let changes = DbUpdateBill::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(bills::table.find(id.get()))
            .set(&changes)
            .get_result::<DbBill>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_bill(&self, id: BillId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(bills::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
