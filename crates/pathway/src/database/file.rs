use crate::{
    models::{Account, Profile},
    Error, Result, Success,
};

use futures::lock::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::definition::AbstractDatabase;

/// On-disk document holding the store's two logical records
#[derive(Serialize, Default)]
struct StoreDocument {
    /// Every registered account, in sign-up order
    users: Vec<Account>,

    /// Active session snapshot, absent while signed out
    #[serde(rename = "currentUser", skip_serializing_if = "Option::is_none")]
    current_user: Option<Profile>,
}

/// JSON key-value file store
///
/// The whole document is cached in process and rewritten on every
/// mutation. Concurrent processes writing the same file are not
/// coordinated: the last writer wins.
#[derive(Clone)]
pub struct FileDb {
    path: PathBuf,
    document: Arc<Mutex<StoreDocument>>,
}

impl FileDb {
    /// Open a store file, creating an empty store if the file is missing
    ///
    /// A file that cannot be parsed never fails the open: corrupt values
    /// are discarded with a logged warning and the store starts in their
    /// absence.
    pub async fn open(path: impl Into<PathBuf>) -> FileDb {
        let path = path.into();

        let document = match async_std::fs::read_to_string(&path).await {
            Ok(raw) => parse_document(&raw, &path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(err) => {
                warn!("Failed to read store {}: {}", path.display(), err);
                StoreDocument::default()
            }
        };

        FileDb {
            path,
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Rewrite the whole document on disk
    async fn commit(&self, document: &StoreDocument) -> Success {
        let json = serde_json::to_string_pretty(document).map_err(|_| Error::DatabaseError {
            operation: "serialize",
            with: "store",
        })?;

        async_std::fs::write(&self.path, json)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "write",
                with: "store",
            })
    }
}

/// Parse a store document, discarding corrupt values key by key
fn parse_document(raw: &str, path: &Path) -> StoreDocument {
    let mut value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("Discarding unreadable store {}: {}", path.display(), err);
            return StoreDocument::default();
        }
    };

    let users = match value.get_mut("users") {
        Some(users) if !users.is_null() => {
            match serde_json::from_value::<Vec<Account>>(users.take()) {
                Ok(users) => users,
                Err(err) => {
                    warn!(
                        "Discarding corrupt account collection in {}: {}",
                        path.display(),
                        err
                    );
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };

    let current_user = match value.get_mut("currentUser") {
        Some(snapshot) if !snapshot.is_null() => {
            match serde_json::from_value::<Profile>(snapshot.take()) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    warn!(
                        "Discarding corrupt session snapshot in {}: {}",
                        path.display(),
                        err
                    );
                    None
                }
            }
        }
        _ => None,
    };

    StoreDocument {
        users,
        current_user,
    }
}

#[async_trait]
impl AbstractDatabase for FileDb {
    /// Find account by email
    async fn find_account(&self, email: &str) -> Result<Account> {
        self.find_account_by_email(email)
            .await?
            .ok_or(Error::UnknownUser)
    }

    /// Find account by email, if one exists
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let document = self.document.lock().await;
        Ok(document
            .users
            .iter()
            .find(|account| account.profile.email == email)
            .cloned())
    }

    /// List every registered account
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let document = self.document.lock().await;
        Ok(document.users.clone())
    }

    /// Insert or replace an account, keyed by its email
    async fn save_account(&self, account: &Account) -> Success {
        let mut document = self.document.lock().await;

        match document
            .users
            .iter()
            .position(|existing| existing.profile.email == account.profile.email)
        {
            Some(index) => document.users[index] = account.clone(),
            None => document.users.push(account.clone()),
        }

        self.commit(&document).await
    }

    /// Read the persisted session snapshot
    async fn load_session(&self) -> Result<Option<Profile>> {
        let document = self.document.lock().await;
        Ok(document.current_user.clone())
    }

    /// Persist the session snapshot
    async fn save_session(&self, profile: &Profile) -> Success {
        let mut document = self.document.lock().await;
        document.current_user = Some(profile.clone());
        self.commit(&document).await
    }

    /// Remove the persisted session snapshot
    async fn clear_session(&self) -> Success {
        let mut document = self.document.lock().await;
        document.current_user = None;
        self.commit(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::definition::AbstractDatabase;
    use super::*;
    use crate::test::*;

    #[async_std::test]
    async fn opens_empty_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let db = FileDb::open(dir.path().join("store.json")).await;

        assert_eq!(db.list_accounts().await.unwrap().len(), 0);
        assert!(db.load_session().await.unwrap().is_none());
    }

    #[async_std::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let db = FileDb::open(&path).await;
        db.save_account(&test_account("a@x.com")).await.unwrap();
        db.save_account(&test_account("b@x.com")).await.unwrap();
        db.save_session(&test_account("a@x.com").profile)
            .await
            .unwrap();

        let db = FileDb::open(&path).await;
        let accounts = db.list_accounts().await.unwrap();

        // Sign-up order is preserved across reloads
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].profile.email, "a@x.com");
        assert_eq!(accounts[1].profile.email, "b@x.com");
        assert_eq!(
            db.load_session().await.unwrap().unwrap().email,
            "a@x.com"
        );
    }

    #[async_std::test]
    async fn upsert_replaces_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let db = FileDb::open(dir.path().join("store.json")).await;

        db.save_account(&test_account("a@x.com")).await.unwrap();

        let mut account = test_account("a@x.com");
        account.profile.progress = 80;
        db.save_account(&account).await.unwrap();

        let accounts = db.list_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].profile.progress, 80);
    }

    #[async_std::test]
    async fn discards_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let db = FileDb::open(&path).await;

        assert_eq!(db.list_accounts().await.unwrap().len(), 0);
        assert!(db.load_session().await.unwrap().is_none());
    }

    #[async_std::test]
    async fn discards_corrupt_snapshot_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let db = FileDb::open(&path).await;
        db.save_account(&test_account("a@x.com")).await.unwrap();

        // Corrupt just the session snapshot
        let mut value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        value["currentUser"] = json!({ "unexpected": true });
        std::fs::write(&path, value.to_string()).unwrap();

        let db = FileDb::open(&path).await;

        assert!(db.load_session().await.unwrap().is_none());
        assert_eq!(db.list_accounts().await.unwrap().len(), 1);
    }

    #[async_std::test]
    async fn full_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let pathway = Pathway {
            database: crate::Database::File(FileDb::open(&path).await),
            ..Default::default()
        };

        Account::create(&pathway, new_account("asha@x.com"))
            .await
            .unwrap();

        pathway
            .update_profile(ProfilePatch {
                about_me: Some("Aspiring data engineer.".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let updated = pathway
            .update_profile(ProfilePatch {
                progress: Some(55),
                ..Default::default()
            })
            .await
            .unwrap();

        // Reload from disk, as a fresh process would
        let reloaded = Pathway {
            database: crate::Database::File(FileDb::open(&path).await),
            ..Default::default()
        };
        let restored = reloaded
            .restore_session()
            .await
            .unwrap()
            .expect("a session");
        assert_eq!(restored, updated);

        // Repeated updates never leak a password into the snapshot
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["currentUser"].get("password").is_none());

        // And the collection still authenticates the student
        reloaded.sign_out().await.unwrap();
        reloaded.sign_in("asha@x.com", PASSWORD).await.unwrap();
    }

    #[async_std::test]
    async fn snapshot_never_stores_a_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let db = FileDb::open(&path).await;
        let account = test_account("a@x.com");
        db.save_account(&account).await.unwrap();
        db.save_session(&account.profile).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert!(value["users"][0].get("password").is_some());
        assert!(value["currentUser"].get("password").is_none());
        assert_eq!(value["currentUser"]["email"], "a@x.com");
    }
}
