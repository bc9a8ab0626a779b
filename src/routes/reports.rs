use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ReportQuery;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::reports as service;

#[get("/reports/summary")]
pub async fn summary(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    query: web::Query<ReportQuery>,
) -> impl Responder {
    match service::summary(repo.get_ref(), query.into_inner()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(e, "Report not found", "Failed to generate report"),
    }
}
