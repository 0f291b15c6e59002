/// Data models for database entities
///
/// All models map to database tables and use sqlx for type-safe queries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered student, identified by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    #[sqlx(rename = "student_id")]
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// A homework task owned by one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    #[sqlx(rename = "assignment_id")]
    pub id: i64,
    pub task_name: String,
    pub due_date: NaiveDate,
    pub subject: String,
    pub priority_level: i64,
    pub student_id: i64,
}

/// Input for creating an assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub task_name: String,
    pub due_date: NaiveDate,
    pub subject: String,
    pub priority_level: i64,
    pub student_id: i64,
}

/// Field-by-field changes to an assignment. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentUpdate {
    pub task_name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub subject: Option<String>,
    pub priority_level: Option<i64>,
}

impl AssignmentUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the changes on top of an existing row
    pub fn apply(self, assignment: &mut Assignment) {
        if let Some(task_name) = self.task_name {
            assignment.task_name = task_name;
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(subject) = self.subject {
            assignment.subject = subject;
        }
        if let Some(priority_level) = self.priority_level {
            assignment.priority_level = priority_level;
        }
    }
}

/// A reminder date attached to an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    #[sqlx(rename = "reminder_id")]
    pub id: i64,
    pub date: NaiveDate,
    pub assignment_id: i64,
}

/// Reminder joined with its assignment's task name, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReminderDetail {
    #[sqlx(rename = "reminder_id")]
    pub id: i64,
    pub date: NaiveDate,
    pub assignment_id: i64,
    pub task_name: String,
}

/// Logged interval of study time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudySession {
    #[sqlx(rename = "session_id")]
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
    pub subject: String,
    pub student_id: i64,
}

impl StudySession {
    /// Length of the session in whole minutes. Negative if end precedes start.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Input for logging a study session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudySession {
    pub subject: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
    pub student_id: i64,
}
