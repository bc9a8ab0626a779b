use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::listing::{LIKE_ESCAPE, ListFilter};
use crate::domain::patient::{
    NewPatient, Patient, PatientListQuery, PatientSortField, UpdatePatient,
};
use crate::domain::types::PatientId;
use crate::models::patient::{
    NewPatient as DbNewPatient, Patient as DbPatient, UpdatePatient as DbUpdatePatient,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, PatientReader, PatientWriter, count_and_load, order_by, unicode_lower,
};
use crate::schema::patients;

/// Search on name, phone and email; exact status.
fn filtered(filter: &ListFilter) -> patients::BoxedQuery<'static, Sqlite> {
    let mut items = patients::table.into_boxed();

    if let Some(pattern) = filter.search_pattern() {
        items = items.filter(
            unicode_lower(patients::name.nullable())
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(unicode_lower(patients::phone.nullable())
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE))
                .or(unicode_lower(patients::email)
                    .like(pattern)
                    .escape(LIKE_ESCAPE))
                .assume_not_null(),
        );
    }
    if let Some(status) = &filter.status {
        items = items.filter(patients::status.eq(status.clone()));
    }
    items
}

fn sorted(query: &PatientListQuery) -> patients::BoxedQuery<'static, Sqlite> {
    let items = filtered(&query.filter);
    let order = query.sort.order;
    let items = match query.sort.field {
        PatientSortField::Name => order_by!(items, patients::name, order),
        PatientSortField::Age => order_by!(items, patients::age, order),
        PatientSortField::Gender => order_by!(items, patients::gender, order),
        PatientSortField::Phone => order_by!(items, patients::phone, order),
        PatientSortField::Email => order_by!(items, patients::email, order),
        PatientSortField::Status => order_by!(items, patients::status, order),
        PatientSortField::CreatedAt => order_by!(items, patients::created_at, order),
        PatientSortField::UpdatedAt => order_by!(items, patients::updated_at, order),
    };
    items
        .then_order_by(patients::created_at.asc())
        .then_order_by(patients::id.asc())
}

fn into_domain(row: DbPatient) -> RepositoryResult<Patient> {
    Patient::try_from(row).map_err(RepositoryError::from)
}

impl PatientReader for DieselRepository {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>> {
        let mut conn = self.conn()?;
        let patient = patients::table
            .find(id.get())
            .first::<DbPatient>(&mut conn)
            .optional()?;

        patient.map(into_domain).transpose()
    }

    fn list_patients(&self, query: &PatientListQuery) -> RepositoryResult<(usize, Vec<Patient>)> {
        let mut conn = self.conn()?;

        let (total, rows) = count_and_load(
            &mut conn,
            |conn| filtered(&query.filter).count().get_result::<i64>(conn),
            |conn| {
                sorted(query)
                    .offset(query.window.offset())
                    .limit(query.window.take())
                    .load::<DbPatient>(conn)
            },
        )?;

        let items = rows
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, items))
    }
}

impl PatientWriter for DieselRepository {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient> {
        let mut conn = self.conn()?;
        let insertable: DbNewPatient = new_patient.into();

        let created = diesel::insert_into(patients::table)
            .values(&insertable)
            .get_result::<DbPatient>(&mut conn)?;

        into_domain(created)
    }

    fn update_patient(&self, id: PatientId, updates: &UpdatePatient) -> RepositoryResult<Patient> {
        let mut conn = self.conn()?;
        let changes = DbUpdatePatient::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(patients::table.find(id.get()))
            .set(&changes)
            .get_result::<DbPatient>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_patient(&self, id: PatientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(patients::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
