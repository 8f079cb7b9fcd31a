use chrono::NaiveDate;

use crate::models::{Account, CertificateFile, Profile, Task, TaskCategory};

impl From<Account> for Profile {
    fn from(account: Account) -> Profile {
        account.profile
    }
}

impl Profile {
    /// Whether the student has applied to the given job
    pub fn has_applied(&self, job_id: u32) -> bool {
        self.applied_jobs.contains(&job_id)
    }

    /// Whether the student has saved the given job
    pub fn has_saved(&self, job_id: u32) -> bool {
        self.saved_jobs.contains(&job_id)
    }

    /// Schedule a task on the planner, returning its id
    pub fn add_task(&mut self, date: NaiveDate, title: String, category: TaskCategory) -> String {
        let id = nanoid!(10);

        self.tasks.push(Task {
            id: id.clone(),
            date,
            title,
            category,
            completed: false,
        });

        id
    }

    /// Mark a task complete or incomplete, returning whether it exists
    pub fn set_task_completed(&mut self, task_id: &str, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task from the planner, returning whether it existed
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        self.tasks.len() != before
    }

    /// Attach an uploaded certificate
    pub fn add_certificate(&mut self, certificate: CertificateFile) {
        self.certificates.push(certificate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::*;

    fn planner_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn tasks_can_be_scheduled_and_completed() {
        let mut profile = test_account("a@x.com").profile;

        let id = profile.add_task(
            planner_day(),
            "Finish SQL module".to_string(),
            TaskCategory::Learning,
        );

        assert_eq!(profile.tasks.len(), 1);
        assert!(!profile.tasks[0].completed);

        assert!(profile.set_task_completed(&id, true));
        assert!(profile.tasks[0].completed);

        assert!(!profile.set_task_completed("missing", true));
    }

    #[test]
    fn tasks_can_be_removed() {
        let mut profile = test_account("a@x.com").profile;

        let id = profile.add_task(
            planner_day(),
            "Mock interview".to_string(),
            TaskCategory::JobApplication,
        );

        assert!(profile.remove_task(&id));
        assert!(profile.tasks.is_empty());
        assert!(!profile.remove_task(&id));
    }

    #[test]
    fn certificates_append() {
        let mut profile = test_account("a@x.com").profile;

        profile.add_certificate(CertificateFile {
            name: "sql-basics.pdf".to_string(),
            url: "https://files.example.com/sql-basics.pdf".to_string(),
            verified: false,
        });

        assert_eq!(profile.certificates.len(), 1);
        assert!(!profile.certificates[0].verified);
    }
}
