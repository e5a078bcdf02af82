use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the per-project settings file, discovered by walking ancestors.
pub const SETTINGS_FILENAME: &str = ".buildrunner.json";

/// User settings for buildrunner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// SDK install path; when set the command runs `<sdk_path>/bin/dart`
    /// instead of relying on `dart` being on PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_path: Option<String>,
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse settings: {e}")))?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk ancestor directories for a settings file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(SETTINGS_FILENAME);
            if config_path.exists() {
                return Some(config_path);
            }
            current = current.parent()?;
        }
    }

    /// Load the nearest settings file, falling back to defaults when none
    /// exists or the file cannot be parsed.
    pub fn discover(start_path: &Path) -> Self {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path).unwrap_or_else(|e| {
                debug!("ignoring unreadable settings at {}: {e}", path.display());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// The command prefix for build_runner invocations.
    pub fn command_prefix(&self) -> String {
        match &self.sdk_path {
            Some(sdk_path) => format!("{sdk_path}/bin/dart"),
            None => "dart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_prefix_is_bare_dart() {
        assert_eq!(Settings::default().command_prefix(), "dart");
    }

    #[test]
    fn test_sdk_path_prefix() {
        let settings = Settings {
            sdk_path: Some("/opt/flutter".to_string()),
        };
        assert_eq!(settings.command_prefix(), "/opt/flutter/bin/dart");
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let settings = Settings {
            sdk_path: Some("/opt/flutter".to_string()),
        };
        settings.save_to_file(&path).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_discover_walks_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lib").join("models");
        fs::create_dir_all(&nested).unwrap();

        let settings = Settings {
            sdk_path: Some("/sdk".to_string()),
        };
        settings
            .save_to_file(&dir.path().join(SETTINGS_FILENAME))
            .unwrap();

        assert_eq!(Settings::discover(&nested), settings);
    }

    #[test]
    fn test_discover_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::discover(dir.path()), Settings::default());
    }
}
