//! Fixed runtime configuration.
//!
//! No flags, files or environment variables are read; every value is derived
//! from the working directory and build mode.

use std::io;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "student_db.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding the `students` table.
    pub db_path: PathBuf,
    /// Absolute directory for rolling diagnostic logs.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Builds the configuration rooted at the process working directory.
    pub fn resolve() -> io::Result<Self> {
        Ok(Self::rooted_at(&std::env::current_dir()?))
    }

    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            db_path: dir.join(DB_FILE_NAME),
            log_dir: dir.join(LOG_DIR_NAME),
            log_level: student_core::default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::Path;

    #[test]
    fn paths_are_rooted_at_given_directory() {
        let config = AppConfig::rooted_at(Path::new("/srv/school"));
        assert_eq!(config.db_path, Path::new("/srv/school/student_db.sqlite3"));
        assert_eq!(config.log_dir, Path::new("/srv/school/logs"));
    }

    #[test]
    fn resolve_yields_absolute_log_dir() {
        let config = AppConfig::resolve().unwrap();
        assert!(config.log_dir.is_absolute());
        assert_eq!(config.log_level, student_core::default_log_level());
    }
}
