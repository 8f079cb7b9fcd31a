use crate::{
    models::{Account, Profile},
    Result, Success,
};

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync {
    /// Find account by email
    async fn find_account(&self, email: &str) -> Result<Account>;

    /// Find account by email, if one exists
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// List every registered account
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Insert or replace an account, keyed by its email
    async fn save_account(&self, account: &Account) -> Success;

    /// Read the persisted session snapshot
    async fn load_session(&self) -> Result<Option<Profile>>;

    /// Persist the session snapshot
    async fn save_session(&self, profile: &Profile) -> Success;

    /// Remove the persisted session snapshot
    async fn clear_session(&self) -> Success;
}
