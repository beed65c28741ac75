//! Portal settings taken from the global command line flags.

use std::path::PathBuf;
use chrono::NaiveDate;

/// Default location of the session file.
pub const DEFAULT_SESSION_FILE: &str = ".adminview/session.json";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Where the logged-in user is remembered between runs
    pub session_file: PathBuf,

    /// Reference date for report ranges and new notes
    pub today: NaiveDate,

    /// Print JSON instead of tables
    pub json: bool,
}

impl PortalConfig {
    /// Build the config, falling back to the local date when `today` is unset.
    pub fn new(session_file: PathBuf, today: Option<NaiveDate>, json: bool) -> Self {
        Self {
            session_file,
            today: today.unwrap_or_else(|| chrono::Local::now().date_naive()),
            json,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_SESSION_FILE), None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_today_wins() {
        let day = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let config = PortalConfig::new(PathBuf::from("s.json"), Some(day), true);
        assert_eq!(config.today, day);
        assert!(config.json);
    }

    #[test]
    fn test_default_session_file() {
        let config = PortalConfig::default();
        assert_eq!(config.session_file, PathBuf::from(".adminview/session.json"));
        assert!(!config.json);
    }
}
