// Maps an email to a student, registering new ones on first sight.

use crate::core::parse;
use crate::db::{Database, Student};
use crate::error::Result;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Outcome of a login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Email was already registered
    Returning(Student),
    /// A new student row was created
    Registered(Student),
}

impl Identity {
    pub fn student(&self) -> &Student {
        match self {
            Identity::Returning(student) | Identity::Registered(student) => student,
        }
    }
}

pub struct IdentityResolver {
    db: Arc<Database>,
}

impl IdentityResolver {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Find the student for `email`, or register one.
    ///
    /// `full_name` is only awaited when the email is unknown, so the caller
    /// can prompt for the name lazily.
    pub async fn resolve<F, Fut>(&self, email: &str, full_name: F) -> Result<Identity>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let email = parse::required("Email", email)?;

        if let Some(student) = self.db.find_student_by_email(&email).await? {
            info!(student_id = student.id, "Returning student");
            return Ok(Identity::Returning(student));
        }

        let name = parse::required("Full name", &full_name().await?)?;
        let student = self.db.insert_student(&name, &email).await?;

        Ok(Identity::Registered(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;

    async fn resolver() -> (IdentityResolver, Arc<Database>) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        (IdentityResolver::new(Arc::clone(&db)), db)
    }

    #[tokio::test]
    async fn test_register_then_return() {
        let (resolver, db) = resolver().await;

        let first = resolver
            .resolve("a@x.com", || async { Ok::<_, HubError>("Alex".to_string()) })
            .await
            .unwrap();
        assert!(matches!(first, Identity::Registered(_)));
        assert_eq!(first.student().id, 1);
        assert_eq!(first.student().full_name, "Alex");

        let second = resolver
            // Asking for the name again would fail the login
            .resolve("a@x.com", || async { Err::<String, _>(HubError::InputClosed) })
            .await
            .unwrap();
        assert!(matches!(second, Identity::Returning(_)));
        assert_eq!(second.student().id, first.student().id);

        assert_eq!(db.stats().await.unwrap().students, 1);
    }

    #[tokio::test]
    async fn test_email_is_trimmed() {
        let (resolver, db) = resolver().await;

        let first = resolver
            .resolve(" a@x.com ", || async { Ok::<_, HubError>("Alex".to_string()) })
            .await
            .unwrap();
        assert_eq!(first.student().email, "a@x.com");

        let found = db.find_student_by_email("a@x.com").await.unwrap();
        assert_eq!(found.as_ref(), Some(first.student()));
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected() {
        let (resolver, db) = resolver().await;

        let result = resolver
            .resolve("  ", || async { Ok::<_, HubError>("Alex".to_string()) })
            .await;
        assert!(matches!(result, Err(HubError::EmptyField("Email"))));

        let result = resolver
            .resolve("a@x.com", || async { Ok::<_, HubError>(String::new()) })
            .await;
        assert!(matches!(result, Err(HubError::EmptyField("Full name"))));

        assert_eq!(db.stats().await.unwrap().students, 0);
    }
}
