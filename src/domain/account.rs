use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountEmail, AccountId};

/// Role assigned to accounts created through signup.
pub const DEFAULT_ROLE: &str = "staff";

/// Staff member able to sign in to the front office.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub email: AccountEmail,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAccount {
    pub email: AccountEmail,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: String,
}

impl NewAccount {
    #[must_use]
    pub fn new(email: AccountEmail, password_hash: String, name: Option<String>) -> Self {
        Self {
            email,
            password_hash,
            name: name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}
