use crate::models::{Profile, ProfilePatch};

impl ProfilePatch {
    /// Apply this patch on top of a profile
    ///
    /// Pure merge with field-level precedence: a `Some` field wins over
    /// the current value, a `None` field keeps it. Identity and sign-in
    /// derived state are untouchable because the patch has no fields for
    /// them.
    pub fn apply(self, profile: &mut Profile) {
        let ProfilePatch {
            name,
            avatar_url,
            education,
            progress,
            badges,
            applied_jobs,
            saved_jobs,
            tasks,
            skills,
            achievements,
            certificates,
            internships,
            social_links,
            about_me,
            interests,
            hobbies,
        } = self;

        if let Some(name) = name {
            profile.name = name;
        }

        if let Some(avatar_url) = avatar_url {
            profile.avatar_url = Some(avatar_url);
        }

        if let Some(education) = education {
            profile.education = education;
        }

        if let Some(progress) = progress {
            profile.progress = progress;
        }

        if let Some(badges) = badges {
            profile.badges = badges;
        }

        if let Some(applied_jobs) = applied_jobs {
            profile.applied_jobs = applied_jobs;
        }

        if let Some(saved_jobs) = saved_jobs {
            profile.saved_jobs = saved_jobs;
        }

        if let Some(tasks) = tasks {
            profile.tasks = tasks;
        }

        if let Some(skills) = skills {
            profile.skills = skills;
        }

        if let Some(achievements) = achievements {
            profile.achievements = achievements;
        }

        if let Some(certificates) = certificates {
            profile.certificates = certificates;
        }

        if let Some(internships) = internships {
            profile.internships = internships;
        }

        if let Some(social_links) = social_links {
            profile.social_links = social_links;
        }

        if let Some(about_me) = about_me {
            profile.about_me = about_me;
        }

        if let Some(interests) = interests {
            profile.interests = interests;
        }

        if let Some(hobbies) = hobbies {
            profile.hobbies = hobbies;
        }
    }
}
