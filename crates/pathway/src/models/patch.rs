use super::{
    Achievement, CertificateFile, Education, Internship, Skills, SocialLink, Task,
};

/// # Profile Patch
///
/// Partial profile update with named optional fields. A field left as
/// `None` keeps the current value. The identity key (`email`) and the
/// sign-in derived fields (`streak`, `last_login`) are deliberately not
/// part of the patch, and neither is the password: the backing account
/// always keeps its stored hash.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct ProfilePatch {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar data-URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Education details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,

    /// Completion progress percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,

    /// Earned badge names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,

    /// Ids of jobs applied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_jobs: Option<Vec<u32>>,

    /// Ids of jobs saved for later
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_jobs: Option<Vec<u32>>,

    /// Planner tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,

    /// Tracked skills
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,

    /// Listed achievements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,

    /// Uploaded certificates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<CertificateFile>>,

    /// Listed internships
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internships: Option<Vec<Internship>>,

    /// Social links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,

    /// Free-text introduction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,

    /// Interest tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,

    /// Hobby tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<String>>,
}
