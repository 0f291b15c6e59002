/// SQL query functions for database operations
///
/// Every query touching assignments, reminders, or study sessions is scoped
/// to the owning student.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use sqlx::Row;
use tracing::{debug, info, instrument};

impl Database {
    /// Find a student by email
    #[instrument(skip(self, email))]
    pub async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM student WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool())
            .await?;

        Ok(student)
    }

    /// Insert a new student
    ///
    /// # Returns
    /// * `Ok(Student)` - The stored row with its generated id
    /// * `Err(HubError)` - If the email is already taken or the insert fails
    #[instrument(skip(self, full_name, email))]
    pub async fn insert_student(&self, full_name: &str, email: &str) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO student (full_name, email) VALUES (?, ?) RETURNING *",
        )
        .bind(full_name)
        .bind(email)
        .fetch_one(self.pool())
        .await?;

        info!(student_id = student.id, "Registered student");
        Ok(student)
    }

    /// Insert an assignment
    ///
    /// # Returns
    /// * `Ok(i64)` - The assignment ID
    #[instrument(skip(self))]
    pub async fn insert_assignment(&self, input: &NewAssignment) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO assignment (task_name, due_date, subject, priority_level, student_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING assignment_id
            "#,
        )
        .bind(&input.task_name)
        .bind(input.due_date)
        .bind(&input.subject)
        .bind(input.priority_level)
        .bind(input.student_id)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get an assignment by id, only if the student owns it
    pub async fn get_assignment(&self, id: i64, student_id: i64) -> Result<Option<Assignment>> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignment WHERE assignment_id = ? AND student_id = ?",
        )
        .bind(id)
        .bind(student_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(assignment)
    }

    /// All assignments of a student, soonest due first
    ///
    /// Equal due dates keep creation order (assignment id).
    pub async fn list_assignments(&self, student_id: i64) -> Result<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignment WHERE student_id = ? ORDER BY due_date ASC, assignment_id ASC",
        )
        .bind(student_id)
        .fetch_all(self.pool())
        .await?;

        Ok(assignments)
    }

    /// Overwrite every editable column of an owned assignment
    ///
    /// # Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No such assignment for this student
    #[instrument(skip(self))]
    pub async fn update_assignment(&self, assignment: &Assignment) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE assignment
            SET task_name = ?, due_date = ?, subject = ?, priority_level = ?
            WHERE assignment_id = ? AND student_id = ?
            "#,
        )
        .bind(&assignment.task_name)
        .bind(assignment.due_date)
        .bind(&assignment.subject)
        .bind(assignment.priority_level)
        .bind(assignment.id)
        .bind(assignment.student_id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an owned assignment together with its reminders
    ///
    /// Runs in one transaction: either the reminders and the assignment are
    /// all gone, or nothing changed.
    ///
    /// # Returns
    /// * `Ok(Some(n))` - Deleted, along with `n` reminders
    /// * `Ok(None)` - No such assignment for this student
    #[instrument(skip(self))]
    pub async fn delete_assignment(&self, id: i64, student_id: i64) -> Result<Option<u64>> {
        let mut tx = self.pool().begin().await?;

        let owned: Option<(i64,)> = sqlx::query_as(
            "SELECT assignment_id FROM assignment WHERE assignment_id = ? AND student_id = ?",
        )
        .bind(id)
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?;

        if owned.is_none() {
            // Dropping the transaction rolls it back
            return Ok(None);
        }

        let reminders = sqlx::query("DELETE FROM reminder WHERE assignment_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM assignment WHERE assignment_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(reminders, "Deleted assignment and reminders");
        Ok(Some(reminders))
    }

    /// Insert a reminder
    ///
    /// The foreign key rejects an assignment id that doesn't exist.
    #[instrument(skip(self))]
    pub async fn insert_reminder(
        &self,
        assignment_id: i64,
        date: chrono::NaiveDate,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO reminder (date, assignment_id) VALUES (?, ?) RETURNING reminder_id",
        )
        .bind(date)
        .bind(assignment_id)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Reminders on a student's assignments, with the task name
    pub async fn list_reminders(&self, student_id: i64) -> Result<Vec<ReminderDetail>> {
        let reminders = sqlx::query_as::<_, ReminderDetail>(
            r#"
            SELECT r.reminder_id, r.date, r.assignment_id, a.task_name
            FROM reminder r
            JOIN assignment a ON a.assignment_id = r.assignment_id
            WHERE a.student_id = ?
            ORDER BY r.date ASC, r.reminder_id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool())
        .await?;

        Ok(reminders)
    }

    /// Delete a reminder if it belongs to one of the student's assignments
    ///
    /// # Returns
    /// * `Ok(true)` - Deleted
    /// * `Ok(false)` - Not found for this student
    #[instrument(skip(self))]
    pub async fn delete_reminder(&self, id: i64, student_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reminder
            WHERE reminder_id = ?
              AND assignment_id IN (SELECT assignment_id FROM assignment WHERE student_id = ?)
            "#,
        )
        .bind(id)
        .bind(student_id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a study session
    #[instrument(skip(self))]
    pub async fn insert_study_session(&self, input: &NewStudySession) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO study_session (start_time, end_time, notes, subject, student_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING session_id
            "#,
        )
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(&input.notes)
        .bind(&input.subject)
        .bind(input.student_id)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// A student's study sessions, earliest first
    pub async fn list_study_sessions(&self, student_id: i64) -> Result<Vec<StudySession>> {
        let sessions = sqlx::query_as::<_, StudySession>(
            "SELECT * FROM study_session WHERE student_id = ? ORDER BY start_time ASC, session_id ASC",
        )
        .bind(student_id)
        .fetch_all(self.pool())
        .await?;

        Ok(sessions)
    }

    /// Delete an owned study session
    #[instrument(skip(self))]
    pub async fn delete_study_session(&self, id: i64, student_id: i64) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM study_session WHERE session_id = ? AND student_id = ?")
                .bind(id)
                .bind(student_id)
                .execute(self.pool())
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
