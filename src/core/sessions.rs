// Study session log for the current student.

use crate::core::parse;
use crate::db::{Database, NewStudySession, StudySession};
use crate::error::{HubError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Raw study session fields as typed by the student
#[derive(Debug, Clone, Default)]
pub struct StudySessionForm {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

pub struct StudyLogger {
    db: Arc<Database>,
}

impl StudyLogger {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Log a study session, returning its id
    ///
    /// An end time before the start time is stored as given.
    pub async fn log(&self, student_id: i64, form: StudySessionForm) -> Result<i64> {
        let input = NewStudySession {
            subject: parse::required("Subject", &form.subject)?,
            start_time: parse::parse_timestamp(&form.start_time)?,
            end_time: parse::parse_timestamp(&form.end_time)?,
            notes: parse::optional(&form.notes),
            student_id,
        };

        if input.end_time < input.start_time {
            warn!(start = %input.start_time, end = %input.end_time, "Study session ends before it starts");
        }

        let id = self.db.insert_study_session(&input).await?;

        info!(session_id = id, student_id, "Study session logged");
        Ok(id)
    }

    /// The student's study sessions, earliest first
    pub async fn list(&self, student_id: i64) -> Result<Vec<StudySession>> {
        self.db.list_study_sessions(student_id).await
    }

    /// Delete one of the student's study sessions
    pub async fn delete(&self, id: i64, student_id: i64) -> Result<()> {
        if !self.db.delete_study_session(id, student_id).await? {
            return Err(HubError::StudySessionNotFound(id));
        }

        info!(session_id = id, "Study session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (StudyLogger, Arc<Database>, i64) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let student = db.insert_student("Alex", "a@x.com").await.unwrap();
        (StudyLogger::new(Arc::clone(&db)), db, student.id)
    }

    fn form(start: &str, end: &str, notes: &str) -> StudySessionForm {
        StudySessionForm {
            subject: "Math".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            notes: notes.to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_and_list() {
        let (logger, _, student_id) = setup().await;

        logger
            .log(student_id, form("2024-03-10 09:00:00", "2024-03-10 10:30:00", "Ch. 4"))
            .await
            .unwrap();
        logger
            .log(student_id, form("2024-03-09 18:00:00", "2024-03-09 19:00:00", ""))
            .await
            .unwrap();

        let sessions = logger.list(student_id).await.unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].start_time.to_string(), "2024-03-09 18:00:00");
        assert_eq!(sessions[0].notes, None);
        assert_eq!(sessions[1].notes.as_deref(), Some("Ch. 4"));
        assert_eq!(sessions[1].duration_minutes(), 90);
    }

    #[tokio::test]
    async fn test_end_before_start_accepted() {
        let (logger, db, student_id) = setup().await;

        logger
            .log(student_id, form("2024-03-10 10:00:00", "2024-03-10 09:00:00", ""))
            .await
            .unwrap();
        assert_eq!(db.stats().await.unwrap().study_sessions, 1);
    }

    #[tokio::test]
    async fn test_bad_timestamp_writes_nothing() {
        let (logger, db, student_id) = setup().await;

        let result = logger
            .log(student_id, form("2024-03-10 09:00", "2024-03-10 10:00:00", ""))
            .await;
        assert!(matches!(result, Err(HubError::InvalidTimestamp(_))));

        let result = logger
            .log(student_id, form("2024-03-10 09:00:00", "later", ""))
            .await;
        assert!(matches!(result, Err(HubError::InvalidTimestamp(_))));

        assert_eq!(db.stats().await.unwrap().study_sessions, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_session() {
        let (logger, db, student_id) = setup().await;
        logger
            .log(student_id, form("2024-03-10 09:00:00", "2024-03-10 10:00:00", ""))
            .await
            .unwrap();

        let result = logger.delete(7, student_id).await;
        assert!(matches!(result, Err(HubError::StudySessionNotFound(7))));
        assert_eq!(db.stats().await.unwrap().study_sessions, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_private() {
        let (logger, db, student_id) = setup().await;
        let other = db.insert_student("Sam", "s@x.com").await.unwrap();

        let id = logger
            .log(student_id, form("2024-03-10 09:00:00", "2024-03-10 10:00:00", ""))
            .await
            .unwrap();

        assert!(logger.list(other.id).await.unwrap().is_empty());
        assert!(logger.delete(id, other.id).await.is_err());
        logger.delete(id, student_id).await.unwrap();
        assert_eq!(db.stats().await.unwrap().study_sessions, 0);
    }
}
