//! Repository implementation for staff accounts.

use diesel::prelude::*;

use crate::domain::account::{Account, NewAccount};
use crate::domain::types::{AccountEmail, AccountId};
use crate::models::account::{Account as DbAccount, NewAccount as DbNewAccount};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AccountReader, AccountWriter, DieselRepository};
use crate::schema::accounts;

fn into_domain(row: DbAccount) -> RepositoryResult<Account> {
    Account::try_from(row).map_err(RepositoryError::from)
}

impl AccountReader for DieselRepository {
    fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>> {
        let mut conn = self.conn()?;
        let account = accounts::table
            .find(id.get())
            .first::<DbAccount>(&mut conn)
            .optional()?;

        account.map(into_domain).transpose()
    }

    fn get_account_by_email(&self, email: &AccountEmail) -> RepositoryResult<Option<Account>> {
        let mut conn = self.conn()?;
        let account = accounts::table
            .filter(accounts::email.eq(email.as_str()))
            .first::<DbAccount>(&mut conn)
            .optional()?;

        account.map(into_domain).transpose()
    }
}

impl AccountWriter for DieselRepository {
    /// Fails with a constraint violation when the email is already taken.
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account> {
        let mut conn = self.conn()?;
        let insertable: DbNewAccount = new_account.into();

        let created = diesel::insert_into(accounts::table)
            .values(&insertable)
            .get_result::<DbAccount>(&mut conn)?;

        into_domain(created)
    }
}
