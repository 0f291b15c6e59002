/// Database connection management
///
/// Holds the single SQLite connection shared by every operation.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// One connection for the whole process. Operations never overlap, and an
/// in-memory store only lives as long as its connection.
const MAX_CONNECTIONS: u32 = 1;

/// Database wrapper around the connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (or create) the database file and apply the schema
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Successfully opened database
    /// * `Err(HubError)` - If the directory, connection, or schema fails
    ///
    /// # Examples
    /// ```no_run
    /// use homework_hub_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("/tmp/homework.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .disable_statement_logging();

        let db = Self::connect(options, db_path).await?;
        info!(path = %db.db_path.display(), "Opened database");

        Ok(db)
    }

    /// Open a private in-memory database
    ///
    /// Every call returns a fresh, empty store. Used by tests.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .foreign_keys(true)
            .disable_statement_logging();

        Self::connect(options, PathBuf::from(":memory:")).await
    }

    async fn connect(options: SqliteConnectOptions, db_path: PathBuf) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .min_connections(MAX_CONNECTIONS)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Initialize database schema
    ///
    /// Creates all required tables and indexes if they don't exist.
    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("../../database/schema.sql");

        // One statement per execute
        for statement in schema.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool.as_ref()).await?;
            }
        }

        debug!("Schema initialized");
        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close the connection
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Row counts for every table
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (students,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM student")
            .fetch_one(self.pool())
            .await?;

        let (assignments,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assignment")
            .fetch_one(self.pool())
            .await?;

        let (reminders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reminder")
            .fetch_one(self.pool())
            .await?;

        let (study_sessions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM study_session")
            .fetch_one(self.pool())
            .await?;

        Ok(DatabaseStats {
            students,
            assignments,
            reminders,
            study_sessions,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DatabaseStats {
    pub students: i64,
    pub assignments: i64,
    pub reminders: i64,
    pub study_sessions: i64,
}

impl DatabaseStats {
    /// Pretty-printed JSON, for scripts
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::in_memory().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_database_stats_empty() {
        let db = Database::in_memory().await.unwrap();
        let stats = db.stats().await.unwrap();

        assert_eq!(
            stats,
            DatabaseStats {
                students: 0,
                assignments: 0,
                reminders: 0,
                study_sessions: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();

        // Second pass over the same connection must not fail
        db.initialize_schema().await.unwrap();
        assert_eq!(db.stats().await.unwrap().students, 0);
    }

    #[tokio::test]
    async fn test_stats_json() {
        let db = Database::in_memory().await.unwrap();
        let json = db.stats().await.unwrap().to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["assignments"], 0);
        assert_eq!(value["study_sessions"], 0);
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let db = Database::in_memory().await.unwrap();

        let result = sqlx::query("INSERT INTO reminder (date, assignment_id) VALUES ('2024-01-01', 99)")
            .execute(db.pool())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("homework.db");

        let db = Database::new(&path).await.unwrap();
        sqlx::query("INSERT INTO student (full_name, email) VALUES ('Alex', 'a@x.com')")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;

        let reopened = Database::new(&path).await.unwrap();
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(reopened.stats().await.unwrap().students, 1);
    }
}
