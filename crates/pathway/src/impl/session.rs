use chrono::Utc;

use crate::{
    models::{Profile, ProfilePatch},
    util::initials_avatar,
    Error, Pathway, PathwayEvent, Result, Success,
};

impl Pathway {
    /// The active session record, if signed in
    pub async fn current(&self) -> Option<Profile> {
        self.session.lock().await.clone()
    }

    /// Whether a session is active
    pub async fn is_signed_in(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Adopt a profile as the active session and persist the snapshot
    pub(crate) async fn adopt_session(&self, profile: Profile) -> Success {
        self.database.save_session(&profile).await?;

        let mut session = self.session.lock().await;
        session.replace(profile);

        Ok(())
    }

    /// Sign in with an email and password
    ///
    /// The email lookup is exact and case-sensitive. An unknown email
    /// and a wrong password are indistinguishable to the caller.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile> {
        let mut account = self
            .database
            .find_account_by_email(email)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        account.verify_password(password)?;

        account.record_login(Utc::now().date_naive());

        // Backfill avatars for profiles created before generation existed
        if account.profile.avatar_url.is_none() {
            account.profile.avatar_url = Some(initials_avatar(&account.profile.name));
        }

        self.database.save_account(&account).await?;

        let profile = Profile::from(account);
        self.adopt_session(profile.clone()).await?;

        self.publish_event(PathwayEvent::CreateSession {
            profile: profile.clone(),
        })
        .await;

        Ok(profile)
    }

    /// Sign out, clearing the session and its persisted snapshot
    ///
    /// The account collection is untouched. Signing out while already
    /// signed out is a no-op.
    pub async fn sign_out(&self) -> Success {
        let mut session = self.session.lock().await;

        if let Some(profile) = session.take() {
            self.database.clear_session().await?;
            drop(session);

            self.publish_event(PathwayEvent::DeleteSession {
                email: profile.email,
            })
            .await;
        }

        Ok(())
    }

    /// Apply a patch to the active session
    ///
    /// The merged profile replaces the persisted snapshot and is written
    /// through to the backing account, which keeps its stored password
    /// hash.
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<Profile> {
        let mut session = self.session.lock().await;

        // Merge onto a copy so a failed write leaves the session as-is
        let mut profile = session.clone().ok_or(Error::InvalidSession)?;
        patch.apply(&mut profile);

        let mut account = self.database.find_account(&profile.email).await?;
        account.profile = profile.clone();

        self.database.save_account(&account).await?;
        self.database.save_session(&profile).await?;

        session.replace(profile.clone());
        drop(session);

        self.publish_event(PathwayEvent::UpdateProfile {
            profile: profile.clone(),
        })
        .await;

        Ok(profile)
    }

    /// Record a job application on the active session
    ///
    /// Applying twice to the same job is a no-op.
    pub async fn apply_to_job(&self, job_id: u32) -> Result<Profile> {
        let profile = self.current().await.ok_or(Error::InvalidSession)?;

        if profile.has_applied(job_id) {
            return Ok(profile);
        }

        let mut applied_jobs = profile.applied_jobs;
        applied_jobs.push(job_id);

        self.update_profile(ProfilePatch {
            applied_jobs: Some(applied_jobs),
            ..Default::default()
        })
        .await
    }

    /// Save a job for later, or un-save it if already saved
    pub async fn toggle_saved_job(&self, job_id: u32) -> Result<Profile> {
        let profile = self.current().await.ok_or(Error::InvalidSession)?;

        let mut saved_jobs = profile.saved_jobs;
        if saved_jobs.contains(&job_id) {
            saved_jobs.retain(|id| *id != job_id);
        } else {
            saved_jobs.push(job_id);
        }

        self.update_profile(ProfilePatch {
            saved_jobs: Some(saved_jobs),
            ..Default::default()
        })
        .await
    }

    /// Restore the persisted session at process start
    ///
    /// The snapshot is adopted without re-validating it against the
    /// account collection. A missing snapshot leaves the store signed
    /// out; an unreadable one was already discarded when the database
    /// was opened.
    pub async fn restore_session(&self) -> Result<Option<Profile>> {
        match self.database.load_session().await? {
            Some(mut profile) => {
                if profile.avatar_url.is_none() {
                    profile.avatar_url = Some(initials_avatar(&profile.name));
                    self.database.save_session(&profile).await?;
                }

                let mut session = self.session.lock().await;
                session.replace(profile.clone());

                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}
