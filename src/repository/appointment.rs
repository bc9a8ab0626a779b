use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::appointment::{
    Appointment, AppointmentListQuery, AppointmentSortField, NewAppointment, UpdateAppointment,
};
use crate::domain::listing::{LIKE_ESCAPE, ListFilter};
use crate::domain::types::AppointmentId;
use crate::models::appointment::{
    Appointment as DbAppointment, NewAppointment as DbNewAppointment,
    UpdateAppointment as DbUpdateAppointment,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AppointmentReader, AppointmentWriter, DieselRepository, count_and_load, order_by,
    unicode_lower,
};
use crate::schema::appointments;

/// Search on patient and doctor name; exact status and date.
fn filtered(filter: &ListFilter) -> appointments::BoxedQuery<'static, Sqlite> {
    let mut items = appointments::table.into_boxed();

    if let Some(pattern) = filter.search_pattern() {
        items = items.filter(
            unicode_lower(appointments::patient_name.nullable())
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(unicode_lower(appointments::doctor_name.nullable())
                    .like(pattern)
                    .escape(LIKE_ESCAPE))
                .assume_not_null(),
        );
    }
    if let Some(status) = &filter.status {
        items = items.filter(appointments::status.eq(status.clone()));
    }
    if let Some(date) = &filter.date {
        items = items.filter(appointments::date.eq(date.clone()));
    }
    items
}

fn sorted(query: &AppointmentListQuery) -> appointments::BoxedQuery<'static, Sqlite> {
    let items = filtered(&query.filter);
    let order = query.sort.order;
    let items = match query.sort.field {
        AppointmentSortField::PatientName => order_by!(items, appointments::patient_name, order),
        AppointmentSortField::DoctorName => order_by!(items, appointments::doctor_name, order),
        AppointmentSortField::Date => order_by!(items, appointments::date, order),
        AppointmentSortField::Time => order_by!(items, appointments::time, order),
        AppointmentSortField::Type => order_by!(items, appointments::appointment_type, order),
        AppointmentSortField::Status => order_by!(items, appointments::status, order),
        AppointmentSortField::CreatedAt => order_by!(items, appointments::created_at, order),
        AppointmentSortField::UpdatedAt => order_by!(items, appointments::updated_at, order),
    };
    items
        .then_order_by(appointments::created_at.asc())
        .then_order_by(appointments::id.asc())
}

fn into_domain(row: DbAppointment) -> RepositoryResult<Appointment> {
    Appointment::try_from(row).map_err(RepositoryError::from)
}

impl AppointmentReader for DieselRepository {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>> {
        let mut conn = self.conn()?;
        let appointment = appointments::table
            .find(id.get())
            .first::<DbAppointment>(&mut conn)
            .optional()?;

        appointment.map(into_domain).transpose()
    }

    fn list_appointments(
        &self,
        query: &AppointmentListQuery,
    ) -> RepositoryResult<(usize, Vec<Appointment>)> {
        let mut conn = self.conn()?;

        let (total, rows) = count_and_load(
            &mut conn,
            |conn| filtered(&query.filter).count().get_result::<i64>(conn),
            |conn| {
                sorted(query)
                    .offset(query.window.offset())
                    .limit(query.window.take())
                    .load::<DbAppointment>(conn)
            },
        )?;

        let items = rows
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, items))
    }
}

impl AppointmentWriter for DieselRepository {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        let mut conn = self.conn()?;
        let insertable: DbNewAppointment = new_appointment.into();

        let created = diesel::insert_into(appointments::table)
            .values(&insertable)
            .get_result::<DbAppointment>(&mut conn)?;

        into_domain(created)
    }

    fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment> {
        let mut conn = self.conn()?;
        let changes = DbUpdateAppointment::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(appointments::table.find(id.get()))
            .set(&changes)
            .get_result::<DbAppointment>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(appointments::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
