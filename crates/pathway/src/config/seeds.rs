/// Profile content seeded into every new account
///
/// New students start with a small set of placeholder skills and badges
/// so their dashboard is not empty on first sign-in. Collections they
/// build themselves (tasks, achievements, certificates, internships,
/// social links) always start empty.
#[derive(Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Seeds {
    /// Starter technical skills
    pub technical_skills: Vec<String>,

    /// Starter soft skills
    pub soft_skills: Vec<String>,

    /// Completion progress granted for finishing sign-up
    pub initial_progress: u8,

    /// Badges attached to every new account
    pub badges: Vec<String>,

    /// Introduction shown until the student writes their own
    pub about_me: String,
}

impl Default for Seeds {
    fn default() -> Seeds {
        Seeds {
            technical_skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "SQL".to_string(),
            ],
            soft_skills: vec![
                "Teamwork".to_string(),
                "Problem Solving".to_string(),
                "Communication".to_string(),
            ],
            initial_progress: 15,
            badges: vec![
                "Fast Learner".to_string(),
                "Problem Solver".to_string(),
                "Tech Guru".to_string(),
            ],
            about_me: "I am a passionate and results-oriented student eager \
                to apply my skills to solve real-world problems."
                .to_string(),
        }
    }
}
