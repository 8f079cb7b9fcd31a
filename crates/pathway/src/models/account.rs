use super::{Education, Profile};

/// Account model
///
/// The persisted record backing one student: the stored credential plus
/// the flattened [`Profile`]. Only the account collection ever sees the
/// password hash; everything handed to callers is a `Profile`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Account {
    /// Argon2 hashed password
    pub password: String,

    /// Everything else known about the student
    #[serde(flatten)]
    pub profile: Profile,
}

/// # Sign-up Data
#[derive(Debug, Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct NewAccount {
    /// Display name
    pub name: String,

    /// Email
    pub email: String,

    /// Password
    pub password: String,

    /// Education details
    pub education: Education,
}
