use crate::models::Profile;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event_type")]
pub enum PathwayEvent {
    CreateAccount { profile: Profile },
    CreateSession { profile: Profile },
    DeleteSession { email: String },
    UpdateProfile { profile: Profile },
}
