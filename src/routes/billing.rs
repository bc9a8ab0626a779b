use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::{ListParams, MessageResponse};
use crate::forms::billing::{AddBillForm, UpdateBillForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::billing as service;

pub(crate) const NOT_FOUND: &str = "Bill not found";

#[get("/billing")]
pub async fn list_bills(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match service::list_bills(repo.get_ref(), &params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch bills"),
    }
}

#[get("/billing/{bill_id}")]
pub async fn get_bill(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bill_id: web::Path<i32>,
) -> impl Responder {
    match service::get_bill(repo.get_ref(), bill_id.into_inner()) {
        Ok(bill) => HttpResponse::Ok().json(bill),
        Err(e) => error_response(e, NOT_FOUND, "Failed to fetch bill"),
    }
}

#[post("/billing")]
pub async fn create_bill(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddBillForm>,
) -> impl Responder {
    match service::create_bill(repo.get_ref(), form) {
        Ok(bill) => HttpResponse::Created().json(bill),
        Err(e) => error_response(e, NOT_FOUND, "Failed to create bill"),
    }
}

#[put("/billing/{bill_id}")]
pub async fn update_bill(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bill_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateBillForm>,
) -> impl Responder {
    match service::update_bill(repo.get_ref(), bill_id.into_inner(), form) {
        Ok(bill) => HttpResponse::Ok().json(bill),
        Err(e) => error_response(e, NOT_FOUND, "Failed to update bill"),
    }
}

#[delete("/billing/{bill_id}")]
pub async fn delete_bill(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bill_id: web::Path<i32>,
) -> impl Responder {
    match service::delete_bill(repo.get_ref(), bill_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Bill deleted successfully")),
        Err(e) => error_response(e, NOT_FOUND, "Failed to delete bill"),
    }
}
