use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::{ListParams, MessageResponse};
use crate::forms::patients::{AddPatientForm, UpdatePatientForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::patients as service;

pub(crate) const NOT_FOUND: &str = "Patient not found";

#[get("/patients")]
pub async fn list_patients(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match service::list_patients(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch patients"),
    }
}

#[get("/patients/{patient_id}")]
pub async fn get_patient(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
) -> impl Responder {
    match service::get_patient(repo.get_ref(), patient_id.into_inner()) {
        Ok(patient) => HttpResponse::Ok().json(patient),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch patient"),
    }
}

#[post("/patients")]
pub async fn create_patient(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddPatientForm>,
) -> impl Responder {
    match service::create_patient(repo.get_ref(), form) {
        Ok(patient) => HttpResponse::Created().json(patient),
        Err(e) => error_response(e, NOT_FOUND, "Failed to create patient"),
    }
}

#[put("/patients/{patient_id}")]
pub async fn update_patient(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
    web::Json(form): web::Json<UpdatePatientForm>,
) -> impl Responder {
    match service::update_patient(repo.get_ref(), patient_id.into_inner(), form) {
        Ok(patient) => HttpResponse::Ok().json(patient),
        Err(e) => error_response(e, NOT_FOUND, "Failed to update patient"),
    }
}

#[delete("/patients/{patient_id}")]
pub async fn delete_patient(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
) -> impl Responder {
    match service::delete_patient(repo.get_ref(), patient_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Patient deleted successfully")),
        Err(e) => error_response(e, NOT_FOUND, "Failed to delete patient"),
    }
}
