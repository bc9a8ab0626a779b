use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::auth::{LoginForm, SignupForm};
use crate::middleware::TokenKeys;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as service;

#[post("/auth/signup")]
pub async fn signup(
    repo: web::Data<DieselRepository>,
    keys: web::Data<TokenKeys>,
    web::Json(form): web::Json<SignupForm>,
) -> impl Responder {
    match service::signup(repo.get_ref(), keys.get_ref(), form) {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => error_response(e, "User not found", "Failed to create user"),
    }
}

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    keys: web::Data<TokenKeys>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    match service::login(repo.get_ref(), keys.get_ref(), form) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => error_response(e, "User not found", "Failed to log in"),
    }
}

#[get("/auth/me")]
pub async fn me(user: AuthenticatedUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match service::current_account(repo.get_ref(), &user) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => error_response(e, "User not found", "Failed to fetch user"),
    }
}
