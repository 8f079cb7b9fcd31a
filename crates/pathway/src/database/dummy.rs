use crate::{
    models::{Account, Profile},
    Error, Result, Success,
};

use futures::lock::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::definition::AbstractDatabase;

#[derive(Default, Clone)]
pub struct DummyDb {
    pub accounts: Arc<Mutex<HashMap<String, Account>>>,
    pub session: Arc<Mutex<Option<Profile>>>,
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Find account by email
    async fn find_account(&self, email: &str) -> Result<Account> {
        let accounts = self.accounts.lock().await;
        accounts.get(email).cloned().ok_or(Error::UnknownUser)
    }

    /// Find account by email, if one exists
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.get(email).cloned())
    }

    /// List every registered account
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.values().cloned().collect())
    }

    /// Insert or replace an account, keyed by its email
    async fn save_account(&self, account: &Account) -> Success {
        let mut accounts = self.accounts.lock().await;
        accounts.insert(account.profile.email.to_string(), account.clone());
        Ok(())
    }

    /// Read the persisted session snapshot
    async fn load_session(&self) -> Result<Option<Profile>> {
        let session = self.session.lock().await;
        Ok(session.clone())
    }

    /// Persist the session snapshot
    async fn save_session(&self, profile: &Profile) -> Success {
        let mut session = self.session.lock().await;
        session.replace(profile.clone());
        Ok(())
    }

    /// Remove the persisted session snapshot
    async fn clear_session(&self) -> Success {
        let mut session = self.session.lock().await;
        session.take();
        Ok(())
    }
}
