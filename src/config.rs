//! Configuration
//!
//! Resolves where the flight database lives. Values come from the built-in
//! default, an optional TOML file and `REYS_*` environment variables, and the
//! `--db` command-line flag is applied last with [`ReysConfig::with_db_path`].

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{ReysError, Result};

/// File name of the default database, placed in the user's home directory
pub const DEFAULT_DB_FILE_NAME: &str = "reys.db";

/// File name of the optional configuration file in the user's home directory
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".reys.toml";

/// Resolved reys settings
#[derive(Debug, Clone)]
pub struct ReysConfig {
    /// Path to the SQLite file holding destinations and flights
    pub db_path: PathBuf,
}

/// Values read from the configuration sources before defaults are applied
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    db_path: Option<String>,
}

impl Default for ReysConfig {
    fn default() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            db_path: home_dir.join(DEFAULT_DB_FILE_NAME),
        }
    }
}

impl ReysConfig {
    /// Load the configuration
    ///
    /// Sources, later ones winning: the built-in default (`~/reys.db`), the
    /// TOML file at `path` (or `~/.reys.toml` when it exists), then `REYS_*`
    /// environment variables such as `REYS_DB_PATH`.
    pub fn load(path: Option<&Path>) -> Result<ReysConfig> {
        let mut builder = Config::builder();

        match path {
            Some(p) => {
                // An explicitly requested file must exist
                builder = builder.add_source(
                    File::new(&p.to_string_lossy(), FileFormat::Toml).required(true),
                );
            }
            None => {
                if let Some(p) = Self::config_file_path() {
                    builder = builder.add_source(
                        File::new(&p.to_string_lossy(), FileFormat::Toml).required(false),
                    );
                }
            }
        }

        // E.g., `REYS_DB_PATH=/tmp/flights.db reys display` reads another file
        builder = builder.add_source(Environment::with_prefix("REYS"));

        let settings = builder
            .build()
            .map_err(|e| ReysError::Config(format!("Failed to build configuration: {}", e)))?;

        let raw = settings
            .try_deserialize::<RawConfig>()
            .map_err(|e| {
                ReysError::Config(format!("Failed to deserialize configuration: {}", e))
            })?;

        let db_path = match raw.db_path {
            Some(p) => expand_home(&p)?,
            None => {
                let home = dirs::home_dir().ok_or_else(|| {
                    ReysError::Config("Could not find home directory".to_string())
                })?;
                home.join(DEFAULT_DB_FILE_NAME)
            }
        };

        Ok(ReysConfig { db_path })
    }

    /// Replace the database path when one was given on the command line
    pub fn with_db_path(mut self, db_path: Option<PathBuf>) -> Self {
        if let Some(p) = db_path {
            self.db_path = p;
        }
        self
    }

    /// Get the default configuration file path, `~/.reys.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(DEFAULT_CONFIG_FILE_NAME))
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        let exists = if self.db_path.exists() {
            "exists"
        } else {
            "will be created"
        };
        format!("Database Path:      {} ({})", self.db_path.display(), exists)
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = dirs::home_dir()
                .ok_or_else(|| ReysError::Config("Could not find home directory".to_string()))?;
            Ok(home.join(rest.trim_start_matches('/')))
        }
        _ => Ok(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_path() {
        let config = ReysConfig::default();
        assert!(config.db_path.ends_with(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("db_path = \"/tmp/flights-test.db\"\n");
        let config = ReysConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/flights-test.db"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = ReysConfig::load(Some(&path));
        assert!(matches!(result, Err(ReysError::Config(_))));
    }

    #[test]
    fn test_cli_override_wins() {
        let file = write_config("db_path = \"/tmp/flights-test.db\"\n");
        let config = ReysConfig::load(Some(file.path()))
            .unwrap()
            .with_db_path(Some(PathBuf::from("/tmp/override.db")));
        assert_eq!(config.db_path, PathBuf::from("/tmp/override.db"));
    }

    #[test]
    fn test_no_override_keeps_path() {
        let config = ReysConfig {
            db_path: PathBuf::from("/tmp/kept.db"),
        }
        .with_db_path(None);
        assert_eq!(config.db_path, PathBuf::from("/tmp/kept.db"));
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~/reys.db").unwrap(), home.join("reys.db"));
        assert_eq!(expand_home("~").unwrap(), home);
        assert_eq!(
            expand_home("/var/reys.db").unwrap(),
            PathBuf::from("/var/reys.db")
        );
        assert_eq!(expand_home("~other/x").unwrap(), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_debug_shows_db_path() {
        let config = ReysConfig {
            db_path: PathBuf::from("/tmp/debug.db"),
        };
        let debug = format!("{:?}", config.clone());
        assert!(debug.starts_with("ReysConfig"));
        assert!(debug.contains("/tmp/debug.db"));
    }

    #[test]
    fn test_summary_mentions_path() {
        let config = ReysConfig {
            db_path: PathBuf::from("/nonexistent/reys.db"),
        };
        let summary = config.summary();
        assert!(summary.contains("/nonexistent/reys.db"));
        assert!(summary.contains("will be created"));
    }
}
