//! Identity of the caller attached to every gated request.

use serde::{Deserialize, Serialize};

use crate::domain::account::Account;

/// Claims carried by a bearer token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Account id as a string.
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl AuthenticatedUser {
    pub fn for_account(account: &Account, exp: i64) -> Self {
        Self {
            sub: account.id.to_string(),
            email: account.email.to_string(),
            name: account.name.clone(),
            role: account.role.clone(),
            exp,
        }
    }

    /// Parses `sub` back into the raw account id.
    pub fn account_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
