//! Runtime configuration
//!
//! Resolved once at startup from CLI flags and the environment:
//!   --db / HOMEWORK_HUB_DB     Database file (default: ~/.homework-hub/homework.db)
//!   --email / HOMEWORK_HUB_EMAIL  Skip the email prompt
//!   --debug                    Debug logging to stderr

use crate::error::{HubError, Result};
use std::path::PathBuf;

const DATA_DIR: &str = ".homework-hub";
const DB_FILE: &str = "homework.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub email: Option<String>,
    pub debug: bool,
}

impl Config {
    /// Build the config, falling back to the default database location
    pub fn resolve(db_path: Option<PathBuf>, email: Option<String>, debug: bool) -> Result<Self> {
        let db_path = match db_path {
            Some(path) => path,
            None => default_db_path()?,
        };

        let email = email.filter(|e| !e.trim().is_empty());

        Ok(Self {
            db_path,
            email,
            debug,
        })
    }
}

/// `~/.homework-hub/homework.db`
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| HubError::Config("Could not find home directory".to_string()))?;
    Ok(home.join(DATA_DIR).join(DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/hw.db")), None, false).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/hw.db"));
        assert_eq!(config.email, None);
    }

    #[test]
    fn test_blank_email_ignored() {
        let config = Config::resolve(
            Some(PathBuf::from("hw.db")),
            Some("  ".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(config.email, None);
        assert!(config.debug);
    }

    #[test]
    fn test_default_path_layout() {
        // Only meaningful where a home directory exists
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with(".homework-hub/homework.db"));
        }
    }
}
