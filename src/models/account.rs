//! Diesel models representing staff accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::account::{Account as DomainAccount, NewAccount as DomainNewAccount};
use crate::domain::types::{AccountEmail, AccountId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::accounts)]
/// Diesel model for [`crate::domain::account::Account`].
pub struct Account {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::accounts)]
/// Insertable form of [`Account`].
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub name: Option<&'a str>,
    pub role: &'a str,
}

impl TryFrom<Account> for DomainAccount {
    type Error = TypeConstraintError;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AccountId::try_from(account.id)?,
            email: AccountEmail::new(account.email)?,
            password_hash: account.password_hash,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewAccount> for NewAccount<'a> {
    fn from(account: &'a DomainNewAccount) -> Self {
        Self {
            email: account.email.as_str(),
            password_hash: account.password_hash.as_str(),
            name: account.name.as_deref(),
            role: account.role.as_str(),
        }
    }
}
