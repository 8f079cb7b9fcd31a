use chrono::NaiveDate;

/// Level of education a student has completed
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    SecondarySchool,
    Diploma,
}

/// Education details supplied at sign-up
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Education {
    /// Completed level of education
    pub level: EducationLevel,

    /// Institution name, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,

    /// Institution location, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_location: Option<String>,
}

/// Technical and soft skills tracked on a profile
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// Planner task category
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Learning,
    Work,
    JobApplication,
    Personal,
}

/// Task scheduled on the planner calendar
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Task {
    /// Unique Id
    pub id: String,

    /// Day the task is scheduled for
    pub date: NaiveDate,

    /// Short description
    pub title: String,

    /// Task category
    pub category: TaskCategory,

    /// Whether the task has been completed
    pub completed: bool,
}

/// Achievement listed on a profile
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Achievement {
    /// Unique Id
    pub id: String,

    /// Achievement title
    pub title: String,

    /// What was achieved
    pub description: String,

    /// Day it was earned
    pub date: NaiveDate,
}

/// Uploaded course-completion certificate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct CertificateFile {
    /// File name as uploaded
    pub name: String,

    /// Where the file is hosted
    pub url: String,

    /// Whether the certificate passed verification
    pub verified: bool,
}

/// Internship listed on a profile
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Internship {
    /// Unique Id
    pub id: String,

    /// Company the internship was at
    pub company: String,

    /// Role held during the internship
    pub role: String,

    /// Free-text start, e.g. "May 2023"
    pub start_date: String,

    /// Free-text end, e.g. "July 2023"
    pub end_date: String,

    /// What the internship involved
    pub description: String,
}

/// Platform a social link points at
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Twitter,
    Portfolio,
    Other,
}

/// Social link shown on a profile
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct SocialLink {
    /// Unique Id
    pub id: String,

    /// Platform the link points at
    pub platform: SocialPlatform,

    /// Link target
    pub url: String,
}

/// Profile model
///
/// This is the session record: everything known about a student except
/// their credentials. The [`Account`](super::Account) wraps it together
/// with the stored password hash, so a `Profile` can never carry one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Profile {
    /// Display name
    pub name: String,

    /// Student's email, the unique identity key
    pub email: String,

    /// Generated avatar data-URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Education details
    pub education: Education,

    /// Completion progress percentage (0 to 100)
    pub progress: u8,

    /// Names of earned badges
    pub badges: Vec<String>,

    /// Consecutive-day login counter
    pub streak: u32,

    /// Calendar day of the most recent sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDate>,

    /// Ids of jobs applied to
    pub applied_jobs: Vec<u32>,

    /// Ids of jobs saved for later
    pub saved_jobs: Vec<u32>,

    /// Planner tasks
    pub tasks: Vec<Task>,

    /// Tracked skills
    pub skills: Skills,

    /// Listed achievements
    pub achievements: Vec<Achievement>,

    /// Uploaded certificates
    pub certificates: Vec<CertificateFile>,

    /// Listed internships
    pub internships: Vec<Internship>,

    /// Social links
    pub social_links: Vec<SocialLink>,

    /// Free-text introduction
    pub about_me: String,

    /// Interest tags
    pub interests: Vec<String>,

    /// Hobby tags
    pub hobbies: Vec<String>,
}
