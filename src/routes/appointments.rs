use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::{ListParams, MessageResponse};
use crate::forms::appointments::{AddAppointmentForm, UpdateAppointmentForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::appointments as service;

pub(crate) const NOT_FOUND: &str = "Appointment not found";

#[get("/appointments")]
pub async fn list_appointments(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match service::list_appointments(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch appointments"),
    }
}

#[get("/appointments/{appointment_id}")]
pub async fn get_appointment(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    appointment_id: web::Path<i32>,
) -> impl Responder {
    match service::get_appointment(repo.get_ref(), appointment_id.into_inner()) {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch appointment"),
    }
}

#[post("/appointments")]
pub async fn create_appointment(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddAppointmentForm>,
) -> impl Responder {
    match service::create_appointment(repo.get_ref(), form) {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(e) => error_response(e, NOT_FOUND, "Failed to create appointment"),
    }
}

#[put("/appointments/{appointment_id}")]
pub async fn update_appointment(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    appointment_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateAppointmentForm>,
) -> impl Responder {
    match service::update_appointment(repo.get_ref(), appointment_id.into_inner(), form) {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => error_response(e, NOT_FOUND, "Failed to update appointment"),
    }
}

#[delete("/appointments/{appointment_id}")]
pub async fn delete_appointment(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    appointment_id: web::Path<i32>,
) -> impl Responder {
    match service::delete_appointment(repo.get_ref(), appointment_id.into_inner()) {
        Ok(()) => {
            HttpResponse::Ok().json(MessageResponse::new("Appointment deleted successfully"))
        }
        Err(e) => error_response(e, NOT_FOUND, "Failed to delete appointment"),
    }
}
