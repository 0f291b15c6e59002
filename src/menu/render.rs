// One-line text renderings of stored rows.

use crate::db::{Assignment, ReminderDetail, StudySession};

pub fn assignment(a: &Assignment) -> String {
    format!(
        "- {} | Due: {} | Subject: {} | Priority: {}",
        a.task_name, a.due_date, a.subject, a.priority_level
    )
}

/// With the id, for picking a row to edit or delete
pub fn assignment_with_id(a: &Assignment) -> String {
    format!(
        "ID: {} | Task: {} | Due Date: {} | Subject: {} | Priority: {}",
        a.id, a.task_name, a.due_date, a.subject, a.priority_level
    )
}

pub fn reminder(r: &ReminderDetail) -> String {
    format!("- Reminder for '{}' | Date: {}", r.task_name, r.date)
}

pub fn reminder_with_id(r: &ReminderDetail) -> String {
    format!(
        "Reminder ID: {} | Assignment: {} | Date: {}",
        r.id, r.task_name, r.date
    )
}

pub fn study_session(s: &StudySession) -> String {
    format!(
        "- Subject: {} | Start: {} | End: {} | Duration: {} min | Notes: {}",
        s.subject,
        s.start_time,
        s.end_time,
        s.duration_minutes(),
        s.notes.as_deref().unwrap_or("")
    )
}

pub fn study_session_with_id(s: &StudySession) -> String {
    format!(
        "Session ID: {} | Subject: {} | Start: {} | End: {} | Notes: {}",
        s.id,
        s.subject,
        s.start_time,
        s.end_time,
        s.notes.as_deref().unwrap_or("")
    )
}
