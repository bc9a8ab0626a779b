//! Account signup, login and lookup.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use log::{info, warn};

use crate::domain::account::{Account, NewAccount};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::AccountId;
use crate::dto::api::AuthResponse;
use crate::forms::auth::{Credentials, LoginForm, Signup, SignupForm};
use crate::middleware::TokenKeys;
use crate::repository::{AccountReader, AccountWriter};
use crate::services::{ServiceError, ServiceResult};

pub const USER_EXISTS: &str = "User already exists";

/// Argon2id PHC string for `password`.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {e}")))
}

/// Constant-time check of `password` against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ServiceError::Internal(format!("Invalid password hash format: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ServiceError::Internal(format!(
            "Password verification failed: {e}"
        ))),
    }
}

fn respond(keys: &TokenKeys, account: Account) -> ServiceResult<AuthResponse> {
    let token = keys
        .issue(&account)
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(AuthResponse {
        token,
        user: account,
    })
}

/// Creates a `staff` account and signs a token for it.
pub fn signup<R>(repo: &R, keys: &TokenKeys, form: SignupForm) -> ServiceResult<AuthResponse>
where
    R: AccountReader + AccountWriter + ?Sized,
{
    let signup = Signup::try_from(form)?;

    if repo
        .get_account_by_email(&signup.email)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict(USER_EXISTS.to_string()));
    }

    let password_hash = hash_password(&signup.password)?;
    let new_account = NewAccount::new(signup.email, password_hash, signup.name);
    let account = repo
        .create_account(&new_account)
        .map_err(|e| match ServiceError::from(e) {
            ServiceError::Conflict(_) => ServiceError::Conflict(USER_EXISTS.to_string()),
            other => other,
        })?;

    info!("Account {} signed up", account.id);
    respond(keys, account)
}

/// Verifies credentials. Unknown accounts and wrong passwords are
/// indistinguishable to the caller.
pub fn login<R>(repo: &R, keys: &TokenKeys, form: LoginForm) -> ServiceResult<AuthResponse>
where
    R: AccountReader + ?Sized,
{
    let credentials = Credentials::try_from(form)?;

    let Some(account) = repo
        .get_account_by_email(&credentials.email)
        .map_err(ServiceError::from)?
    else {
        warn!("Login attempt for unknown account {}", credentials.email);
        return Err(ServiceError::InvalidCredentials);
    };

    if !verify_password(&credentials.password, &account.password_hash)? {
        warn!("Wrong password for account {}", account.id);
        return Err(ServiceError::InvalidCredentials);
    }

    respond(keys, account)
}

/// Account behind the caller's token.
pub fn current_account<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Account>
where
    R: AccountReader + ?Sized,
{
    let account_id = user
        .account_id()
        .and_then(|id| AccountId::new(id).ok())
        .ok_or(ServiceError::NotFound)?;
    repo.get_account_by_id(account_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
