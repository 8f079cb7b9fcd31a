/// Run example with `cargo run --example demo`
use pathway::database::FileDb;
use pathway::models::{Account, Education, EducationLevel, NewAccount};
use pathway::{Database, Pathway};

#[async_std::main]
async fn main() {
    let database = Database::File(FileDb::open("pathway.json").await);
    let pathway = Pathway {
        database,
        ..Default::default()
    };

    let profile = match pathway.restore_session().await.unwrap() {
        Some(profile) => {
            println!("Welcome back, {}!", profile.name);
            profile
        }
        None => {
            let profile = match Account::create(
                &pathway,
                NewAccount {
                    name: "Asha Sharma".to_string(),
                    email: "asha@example.com".to_string(),
                    password: "password_insecure".to_string(),
                    education: Education {
                        level: EducationLevel::Diploma,
                        institution_name: Some("Government Polytechnic".to_string()),
                        institution_location: Some("Pune".to_string()),
                    },
                },
            )
            .await
            {
                Ok(profile) => profile,
                Err(_) => pathway
                    .sign_in("asha@example.com", "password_insecure")
                    .await
                    .unwrap(),
            };

            println!("Signed in as {}", profile.name);
            profile
        }
    };

    println!(
        "Streak: {} day(s), progress {}%",
        profile.streak, profile.progress
    );
}
