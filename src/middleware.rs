//! Bearer-token authentication for the API.
//!
//! [`AuthenticatedUser`] is an actix extractor: any handler that takes it is
//! rejected with [`AuthError`] before its body runs, so an unauthenticated
//! request never reaches the store.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::error;
use thiserror::Error;

use crate::domain::account::Account;
use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Authentication is not configured")]
    Misconfigured(String),
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AuthError::Misconfigured(detail) = self {
            error!("Authentication failure: {detail}");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// HS256 keys and token lifetime shared by signup, login and the extractor.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Signs a token for `account` expiring after the configured lifetime.
    pub fn issue(&self, account: &Account) -> Result<String, AuthError> {
        let exp = (Utc::now() + self.ttl).timestamp();
        self.encode(&AuthenticatedUser::for_account(account, exp))
    }

    pub fn encode(&self, claims: &AuthenticatedUser) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Misconfigured(format!("Failed to sign token: {e}")))
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        decode::<AuthenticatedUser>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AuthError> {
    let keys = req.app_data::<web::Data<TokenKeys>>().ok_or_else(|| {
        AuthError::Misconfigured("TokenKeys are not registered as app data".to_string())
    })?;
    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
    keys.verify(token)
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
