//! HTTP handlers. Each one extracts, calls a service and maps the outcome.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::{ErrorResponse, MessageResponse};
use crate::services::ServiceError;

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod patients;
pub mod reports;

/// Maps a service failure to a status and `{"error": ...}` body.
///
/// `not_found` is the message for a missing record, `failure` the generic
/// message for anything the caller cannot act on; the detail of the latter
/// is only logged.
pub fn error_response(err: ServiceError, not_found: &str, failure: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid credentials"))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(not_found)),
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(ErrorResponse::new(message))
        }
        other => {
            error!("{failure}: {other}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(failure))
        }
    }
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}

/// Malformed JSON bodies answer `400 {"error": ...}`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

/// Malformed query strings answer `400 {"error": ...}`.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

/// Missing-record message for the resource a request path names.
fn record_not_found(path: &str) -> &'static str {
    match path.trim_start_matches("/api/").split('/').next() {
        Some("patients") => patients::NOT_FOUND,
        Some("appointments") => appointments::NOT_FOUND,
        Some("billing") => billing::NOT_FOUND,
        _ => "Not found",
    }
}

/// A record id that is not a number cannot name a record: `404 {"error": ...}`.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse::new(record_not_found(req.path())));
    InternalError::from_response(err, response).into()
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("Healio API is running"))
}

/// Registers every handler together with the JSON, query and path error
/// handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(index)
        .service(
            web::scope("/api")
                .service(auth::signup)
                .service(auth::login)
                .service(auth::me)
                .service(patients::list_patients)
                .service(patients::get_patient)
                .service(patients::create_patient)
                .service(patients::update_patient)
                .service(patients::delete_patient)
                .service(appointments::list_appointments)
                .service(appointments::get_appointment)
                .service(appointments::create_appointment)
                .service(appointments::update_appointment)
                .service(appointments::delete_appointment)
                .service(billing::list_bills)
                .service(billing::get_bill)
                .service(billing::create_bill)
                .service(billing::update_bill)
                .service(billing::delete_bill)
                .service(reports::summary),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn internal_errors_hide_detail() {
        let response = error_response(
            ServiceError::Internal("disk full at /var/lib".into()),
            "Patient not found",
            "Failed to fetch patients",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Failed to fetch patients"})
        );
    }

    #[actix_web::test]
    async fn not_found_uses_resource_message() {
        let response = error_response(ServiceError::NotFound, "Bill not found", "Failed");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Bill not found"})
        );
    }

    #[test]
    fn unparsable_ids_name_their_resource() {
        assert_eq!(record_not_found("/api/patients/abc"), "Patient not found");
        assert_eq!(
            record_not_found("/api/appointments/x1"),
            "Appointment not found"
        );
        assert_eq!(record_not_found("/api/billing/1.5"), "Bill not found");
        assert_eq!(record_not_found("/elsewhere"), "Not found");
    }

    #[actix_web::test]
    async fn validation_and_conflict_statuses() {
        let validation = error_response(ServiceError::Validation("bad".into()), "", "");
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        let conflict = error_response(ServiceError::Conflict("taken".into()), "", "");
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        let credentials = error_response(ServiceError::InvalidCredentials, "", "");
        assert_eq!(credentials.status(), StatusCode::UNAUTHORIZED);
    }
}
