pub use crate::database::DummyDb;
pub use crate::models::*;
pub use crate::{Database, Error, Pathway, PathwayEvent};

use async_std::channel::{unbounded, Receiver};

pub const PASSWORD: &str = "password_insecure";

pub async fn for_test(_test: &str) -> (Pathway, Receiver<PathwayEvent>) {
    let (sender, receiver) = unbounded();

    let pathway = Pathway {
        database: Database::Dummy(DummyDb::default()),
        event_channel: Some(sender),
        ..Default::default()
    };

    (pathway, receiver)
}

pub async fn for_test_authenticated(test: &str) -> (Pathway, Receiver<PathwayEvent>, Profile) {
    let (pathway, receiver) = for_test(test).await;

    let profile = Account::create(&pathway, new_account("student@example.com"))
        .await
        .expect("sign-up should succeed");

    receiver.try_recv().expect("an event");

    (pathway, receiver, profile)
}

pub fn new_account(email: &str) -> NewAccount {
    NewAccount {
        name: "Asha Sharma".to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        education: Education {
            level: EducationLevel::Diploma,
            institution_name: Some("Government Polytechnic".to_string()),
            institution_location: Some("Pune".to_string()),
        },
    }
}

pub fn test_account(email: &str) -> Account {
    Account {
        password: crate::util::hash_password(PASSWORD.to_string()).unwrap(),

        profile: Profile {
            name: "Asha Sharma".to_string(),
            email: email.to_string(),
            avatar_url: None,
            education: Education {
                level: EducationLevel::SecondarySchool,
                institution_name: None,
                institution_location: None,
            },
            progress: 15,
            badges: Vec::new(),
            streak: 1,
            last_login: None,
            applied_jobs: Vec::new(),
            saved_jobs: Vec::new(),
            tasks: Vec::new(),
            skills: Skills::default(),
            achievements: Vec::new(),
            certificates: Vec::new(),
            internships: Vec::new(),
            social_links: Vec::new(),
            about_me: String::new(),
            interests: Vec::new(),
            hobbies: Vec::new(),
        },
    }
}
