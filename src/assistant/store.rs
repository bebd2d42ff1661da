/// Drive mode persistence
///
/// Saves and loads the selected drive mode under the `assistantDriveMode` key.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::mode::DriveMode;
use crate::config::app_config_dir;
use crate::error::{ConfigError, PersistError};

/// Key the mode is stored under
pub const DRIVE_MODE_KEY: &str = "assistantDriveMode";

/// File name of the assistant settings inside the app config dir
pub const SETTINGS_FILE_NAME: &str = "assistant.json";

/// Where the selected mode lives between runs
pub trait ModeStore {
    /// Saved mode, if any
    fn load(&self) -> Result<Option<DriveMode>, PersistError>;

    fn save(&mut self, mode: DriveMode) -> Result<(), PersistError>;
}

/// Persisted assistant settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AssistantSettings {
    #[serde(rename = "assistantDriveMode", default, skip_serializing_if = "Option::is_none")]
    drive_mode: Option<String>,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(app_config_dir()?.join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_failed(&self, source: impl std::error::Error + Send + Sync + 'static) -> PersistError {
        PersistError::ReadFailed {
            key: DRIVE_MODE_KEY,
            path: self.path.display().to_string(),
            source: Box::new(source),
        }
    }

    fn write_failed(&self, source: impl std::error::Error + Send + Sync + 'static) -> PersistError {
        PersistError::WriteFailed {
            key: DRIVE_MODE_KEY,
            path: self.path.display().to_string(),
            source: Box::new(source),
        }
    }
}

impl ModeStore for FileModeStore {
    fn load(&self) -> Result<Option<DriveMode>, PersistError> {
        if !self.path.exists() {
            tracing::debug!("No saved drive mode at {}", self.path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| self.read_failed(e))?;
        let settings: AssistantSettings =
            serde_json::from_str(&json).map_err(|e| self.read_failed(e))?;

        match settings.drive_mode {
            None => Ok(None),
            Some(value) => match DriveMode::parse(&value) {
                Some(mode) => {
                    tracing::debug!("Loaded drive mode {} from {}", value, self.path.display());
                    Ok(Some(mode))
                }
                None => Err(PersistError::UnknownValue {
                    key: DRIVE_MODE_KEY,
                    value,
                }),
            },
        }
    }

    fn save(&mut self, mode: DriveMode) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_failed(e))?;
        }

        let settings = AssistantSettings {
            drive_mode: Some(mode.as_str().to_string()),
        };
        let json = serde_json::to_string_pretty(&settings).map_err(|e| self.write_failed(e))?;
        fs::write(&self.path, json).map_err(|e| self.write_failed(e))?;

        tracing::debug!("Saved drive mode to: {}", self.path.display());
        Ok(())
    }
}

/// Store that keeps the mode in memory, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryModeStore {
    mode: Option<DriveMode>,
    saves: usize,
}

impl MemoryModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: DriveMode) -> Self {
        Self {
            mode: Some(mode),
            saves: 0,
        }
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Result<Option<DriveMode>, PersistError> {
        Ok(self.mode)
    }

    fn save(&mut self, mode: DriveMode) -> Result<(), PersistError> {
        self.mode = Some(mode);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileModeStore::new(dir.path().join("assistant.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_writes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("assistant.json");
        let mut store = FileModeStore::new(&path);

        store.save(DriveMode::AgentDriven).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"assistantDriveMode\": \"agent_driven\""));
        assert_eq!(store.load().unwrap(), Some(DriveMode::AgentDriven));
    }

    #[test]
    fn test_unknown_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assistant.json");
        fs::write(&path, r#"{ "assistantDriveMode": "autopilot" }"#).unwrap();

        let err = FileModeStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistError::UnknownValue { .. }));
        assert!(err.to_string().contains("autopilot"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assistant.json");
        fs::write(&path, "not json").unwrap();

        let err = FileModeStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistError::ReadFailed { .. }));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryModeStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(DriveMode::ReviewDriven).unwrap();
        assert_eq!(store.load().unwrap(), Some(DriveMode::ReviewDriven));
        assert_eq!(store.saves(), 1);
    }
}
