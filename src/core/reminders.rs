// Reminders attached to the student's own assignments.

use crate::core::parse;
use crate::db::{Database, ReminderDetail};
use crate::error::{HubError, Result};
use std::sync::Arc;
use tracing::info;

pub struct ReminderScheduler {
    db: Arc<Database>,
}

impl ReminderScheduler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Add a reminder to one of the student's assignments
    ///
    /// # Returns
    /// * `Ok(i64)` - The reminder ID
    /// * `Err(HubError::AssignmentNotFound)` - Unknown id, or another student's assignment
    pub async fn create(&self, student_id: i64, assignment_id: &str, date: &str) -> Result<i64> {
        let assignment_id = parse::parse_id(assignment_id)?;
        let date = parse::parse_date(date)?;

        if self.db.get_assignment(assignment_id, student_id).await?.is_none() {
            return Err(HubError::AssignmentNotFound(assignment_id));
        }

        let id = self.db.insert_reminder(assignment_id, date).await?;

        info!(reminder_id = id, assignment_id, "Reminder added");
        Ok(id)
    }

    /// Reminders on the student's assignments, earliest first
    pub async fn list(&self, student_id: i64) -> Result<Vec<ReminderDetail>> {
        self.db.list_reminders(student_id).await
    }

    /// Delete one of the student's reminders
    pub async fn delete(&self, id: i64, student_id: i64) -> Result<()> {
        if !self.db.delete_reminder(id, student_id).await? {
            return Err(HubError::ReminderNotFound(id));
        }

        info!(reminder_id = id, "Reminder deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::NewAssignment;
    use chrono::NaiveDate;

    async fn setup() -> (ReminderScheduler, Arc<Database>, i64, i64) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let student = db.insert_student("Alex", "a@x.com").await.unwrap();
        let assignment_id = db
            .insert_assignment(&NewAssignment {
                task_name: "Essay".to_string(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                subject: "History".to_string(),
                priority_level: 3,
                student_id: student.id,
            })
            .await
            .unwrap();

        (
            ReminderScheduler::new(Arc::clone(&db)),
            db,
            student.id,
            assignment_id,
        )
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (scheduler, _, student_id, assignment_id) = setup().await;

        let id = scheduler
            .create(student_id, &assignment_id.to_string(), "2024-05-30")
            .await
            .unwrap();

        let listed = scheduler.list(student_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].task_name, "Essay");
        assert_eq!(listed[0].date.to_string(), "2024-05-30");
    }

    #[tokio::test]
    async fn test_unknown_assignment_rejected() {
        let (scheduler, db, student_id, _) = setup().await;

        let result = scheduler.create(student_id, "999", "2024-05-30").await;
        assert!(matches!(result, Err(HubError::AssignmentNotFound(999))));
        assert_eq!(db.stats().await.unwrap().reminders, 0);
    }

    #[tokio::test]
    async fn test_other_students_assignment_rejected() {
        let (scheduler, db, _, assignment_id) = setup().await;
        let other = db.insert_student("Sam", "s@x.com").await.unwrap();

        let result = scheduler
            .create(other.id, &assignment_id.to_string(), "2024-05-30")
            .await;
        assert!(matches!(result, Err(HubError::AssignmentNotFound(_))));
        assert_eq!(db.stats().await.unwrap().reminders, 0);
    }

    #[tokio::test]
    async fn test_invalid_input_rejected() {
        let (scheduler, db, student_id, assignment_id) = setup().await;

        assert!(matches!(
            scheduler.create(student_id, "one", "2024-05-30").await,
            Err(HubError::InvalidId(_))
        ));
        assert!(matches!(
            scheduler
                .create(student_id, &assignment_id.to_string(), "30/05/2024")
                .await,
            Err(HubError::InvalidDate(_))
        ));
        assert_eq!(db.stats().await.unwrap().reminders, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_reminder() {
        let (scheduler, db, student_id, assignment_id) = setup().await;
        scheduler
            .create(student_id, &assignment_id.to_string(), "2024-05-30")
            .await
            .unwrap();

        let result = scheduler.delete(42, student_id).await;
        assert!(matches!(result, Err(HubError::ReminderNotFound(42))));
        assert_eq!(db.stats().await.unwrap().reminders, 1);
    }

    #[tokio::test]
    async fn test_delete_reminder() {
        let (scheduler, db, student_id, assignment_id) = setup().await;
        let id = scheduler
            .create(student_id, &assignment_id.to_string(), "2024-05-30")
            .await
            .unwrap();

        scheduler.delete(id, student_id).await.unwrap();
        assert_eq!(db.stats().await.unwrap().reminders, 0);
    }
}
