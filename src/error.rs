/// Error types for homework-hub
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for homework-hub operations
#[derive(Error, Debug)]
pub enum HubError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (terminal, database file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Date not in YYYY-MM-DD form
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Timestamp not in YYYY-MM-DD HH:MM:SS form
    #[error("Invalid timestamp '{0}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp(String),

    /// Priority is not an integer between 1 and 5
    #[error("Invalid priority level '{0}', expected a whole number from 1 to 5")]
    InvalidPriority(String),

    /// Id is not a whole number
    #[error("Invalid ID '{0}'")]
    InvalidId(String),

    /// A required field was left blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// No assignment with this id for the current student
    #[error("Assignment not found: {0}")]
    AssignmentNotFound(i64),

    /// No reminder with this id for the current student
    #[error("Reminder not found: {0}")]
    ReminderNotFound(i64),

    /// No study session with this id for the current student
    #[error("Study session not found: {0}")]
    StudySessionNotFound(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Result type alias for homework-hub operations
pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    /// Convert HubError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            HubError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            HubError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            HubError::InvalidDate(value) => {
                format!("'{}' is not a valid date. Use YYYY-MM-DD.", value)
            }
            HubError::InvalidTimestamp(value) => {
                format!(
                    "'{}' is not a valid time. Use YYYY-MM-DD HH:MM:SS.",
                    value
                )
            }
            HubError::InvalidPriority(value) => {
                format!("'{}' is not a valid priority. Enter a number from 1 to 5.", value)
            }
            HubError::InvalidId(value) => format!("'{}' is not a valid ID.", value),
            HubError::EmptyField(field) => format!("{} cannot be blank.", field),
            HubError::AssignmentNotFound(id) => {
                format!("No assignment found with ID {} for the current user.", id)
            }
            HubError::ReminderNotFound(id) => {
                format!("No reminder found with ID {} for the current user.", id)
            }
            HubError::StudySessionNotFound(id) => {
                format!("No study session found with ID {} for the current user.", id)
            }
            HubError::Config(msg) => format!("Configuration issue: {}", msg),
            HubError::Serialization(e) => format!("Data format error: {}", e),
            HubError::InputClosed => "Input closed.".to_string(),
        }
    }

    /// True for lookups that matched no row owned by the current student.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HubError::AssignmentNotFound(_)
                | HubError::ReminderNotFound(_)
                | HubError::StudySessionNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = HubError::AssignmentNotFound(7);
        assert!(err.user_message().contains("ID 7"));

        let err = HubError::InvalidDate("06/01/2024".to_string());
        assert!(err.user_message().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_error_display() {
        let err = HubError::EmptyField("Task name");
        assert_eq!(err.to_string(), "Task name must not be empty");
    }

    #[test]
    fn test_is_not_found() {
        assert!(HubError::ReminderNotFound(1).is_not_found());
        assert!(HubError::StudySessionNotFound(1).is_not_found());
        assert!(!HubError::InvalidPriority("9".to_string()).is_not_found());
    }
}
