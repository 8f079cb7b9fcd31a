use chrono::{NaiveDate, Utc};

use crate::{
    models::{Account, NewAccount, Profile, Skills},
    util::{hash_password, initials_avatar},
    Error, Pathway, PathwayEvent, Result, Success,
};

/// Streak value for a sign-in on `today`
///
/// Only a login on exactly the next calendar day extends the streak; any
/// other gap, including a first-ever login, starts over at 1.
fn next_streak(last_login: Option<NaiveDate>, today: NaiveDate, streak: u32) -> u32 {
    match last_login {
        Some(last) if last.succ_opt() == Some(today) => streak + 1,
        _ => 1,
    }
}

impl Account {
    /// Create a new account and adopt it as the active session
    pub async fn create(pathway: &Pathway, data: NewAccount) -> Result<Profile> {
        // Refuse duplicate registrations up front
        if pathway
            .database
            .find_account_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(Error::EmailInUse);
        }

        // Hash the student's password
        let password = hash_password(data.password)?;

        let seeds = &pathway.config.seeds;
        let today = Utc::now().date_naive();

        let account = Account {
            password,

            profile: Profile {
                avatar_url: Some(initials_avatar(&data.name)),
                name: data.name,
                email: data.email,
                education: data.education,

                progress: seeds.initial_progress,
                badges: seeds.badges.clone(),
                streak: 1,
                last_login: Some(today),

                applied_jobs: Vec::new(),
                saved_jobs: Vec::new(),
                tasks: Vec::new(),
                skills: Skills {
                    technical: seeds.technical_skills.clone(),
                    soft: seeds.soft_skills.clone(),
                },
                achievements: Vec::new(),
                certificates: Vec::new(),
                internships: Vec::new(),
                social_links: Vec::new(),
                about_me: seeds.about_me.clone(),
                interests: Vec::new(),
                hobbies: Vec::new(),
            },
        };

        pathway.database.save_account(&account).await?;

        let profile = account.profile;
        pathway.adopt_session(profile.clone()).await?;

        pathway
            .publish_event(PathwayEvent::CreateAccount {
                profile: profile.clone(),
            })
            .await;

        Ok(profile)
    }

    /// Verify a student's password is correct
    pub fn verify_password(&self, plaintext_password: &str) -> Success {
        argon2::verify_encoded(&self.password, plaintext_password.as_bytes())
            .map(|v| {
                if v {
                    Ok(())
                } else {
                    Err(Error::InvalidCredentials)
                }
            })
            // To prevent user enumeration, we should ignore
            // the error and pretend the password is wrong.
            .map_err(|_| Error::InvalidCredentials)?
    }

    /// Record a sign-in on the given calendar day
    ///
    /// A repeat sign-in on the same day leaves both the streak and the
    /// last-login date untouched.
    pub fn record_login(&mut self, today: NaiveDate) {
        if self.profile.last_login != Some(today) {
            self.profile.streak = next_streak(self.profile.last_login, today, self.profile.streak);
            self.profile.last_login = Some(today);
        }
    }
}
