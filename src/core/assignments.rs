// Create, list, edit and delete a student's assignments.
//
// Input arrives as raw text; nothing is written unless every field parses.

use crate::core::parse;
use crate::db::{Assignment, AssignmentUpdate, Database, NewAssignment};
use crate::error::{HubError, Result};
use std::sync::Arc;
use tracing::info;

/// Raw assignment fields as typed by the student
#[derive(Debug, Clone, Default)]
pub struct AssignmentForm {
    pub task_name: String,
    pub due_date: String,
    pub subject: String,
    pub priority_level: String,
}

impl AssignmentForm {
    /// Every field is required when creating
    fn into_new(self, student_id: i64) -> Result<NewAssignment> {
        Ok(NewAssignment {
            task_name: parse::required("Task name", &self.task_name)?,
            due_date: parse::parse_date(&self.due_date)?,
            subject: parse::required("Subject", &self.subject)?,
            priority_level: parse::parse_priority(&self.priority_level)?,
            student_id,
        })
    }

    /// Blank fields keep the stored value when editing
    fn into_update(self) -> Result<AssignmentUpdate> {
        let due_date = match parse::optional(&self.due_date) {
            Some(text) => Some(parse::parse_date(&text)?),
            None => None,
        };
        let priority_level = match parse::optional(&self.priority_level) {
            Some(text) => Some(parse::parse_priority(&text)?),
            None => None,
        };

        Ok(AssignmentUpdate {
            task_name: parse::optional(&self.task_name),
            due_date,
            subject: parse::optional(&self.subject),
            priority_level,
        })
    }
}

pub struct AssignmentTracker {
    db: Arc<Database>,
}

impl AssignmentTracker {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Add an assignment for the student, returning its id
    pub async fn create(&self, student_id: i64, form: AssignmentForm) -> Result<i64> {
        let input = form.into_new(student_id)?;
        let id = self.db.insert_assignment(&input).await?;

        info!(assignment_id = id, student_id, "Assignment added");
        Ok(id)
    }

    /// The student's assignments, soonest due first
    pub async fn list(&self, student_id: i64) -> Result<Vec<Assignment>> {
        self.db.list_assignments(student_id).await
    }

    /// One of the student's assignments
    pub async fn get(&self, id: i64, student_id: i64) -> Result<Assignment> {
        self.db
            .get_assignment(id, student_id)
            .await?
            .ok_or(HubError::AssignmentNotFound(id))
    }

    /// Edit an assignment the student owns.
    ///
    /// Returns the row as stored after the edit. An all-blank form is a no-op.
    pub async fn edit(&self, id: i64, student_id: i64, form: AssignmentForm) -> Result<Assignment> {
        let mut assignment = self.get(id, student_id).await?;
        let update = form.into_update()?;

        if update.is_empty() {
            return Ok(assignment);
        }

        update.apply(&mut assignment);
        if !self.db.update_assignment(&assignment).await? {
            return Err(HubError::AssignmentNotFound(id));
        }

        info!(assignment_id = id, "Assignment updated");
        Ok(assignment)
    }

    /// Delete an assignment and its reminders. Returns how many reminders went with it.
    pub async fn delete(&self, id: i64, student_id: i64) -> Result<u64> {
        let reminders = self
            .db
            .delete_assignment(id, student_id)
            .await?
            .ok_or(HubError::AssignmentNotFound(id))?;

        info!(assignment_id = id, reminders, "Assignment deleted");
        Ok(reminders)
    }
}
