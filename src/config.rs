use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "hr-assist";

/// Most approvals the dashboard can list, one per digit key
pub const MAX_LISTED_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Cadence of the simulated processing stages
    pub stage_interval_ms: u64,

    /// Pause between the last processing tick and the review step
    pub settle_delay_ms: u64,

    /// Lowest confidence percentage a stage can report
    pub confidence_min: u8,

    /// Highest confidence percentage a stage can report
    pub confidence_max: u8,

    /// Removal animation length for approval items and toasts
    pub removal_delay_ms: u64,

    /// Delay before a rejected item comes back reprocessed
    pub reprocess_delay_ms: u64,

    /// How long a toast stays fully visible
    pub toast_duration_ms: u64,

    /// Delay before the dashboard progress bars animate in
    pub progress_delay_ms: u64,

    /// Visible approvals in agent-driven mode
    pub agent_driven_cap: usize,

    /// Visible approvals in review-driven mode
    pub review_driven_cap: usize,

    /// Skip mode selection when a saved mode exists
    pub restore_saved_mode: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            stage_interval_ms: 1500,
            settle_delay_ms: 800,
            confidence_min: 95,
            confidence_max: 98,
            removal_delay_ms: 300,
            reprocess_delay_ms: 2000,
            toast_duration_ms: 3000,
            progress_delay_ms: 300,
            agent_driven_cap: 2,
            review_driven_cap: 10,
            restore_saved_mode: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from an explicit path, or from the platform config
    /// directory when no path is given. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let config: DemoConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(app_config_dir()?.join("config.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "stage_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.confidence_min > self.confidence_max || self.confidence_max > 100 {
            return Err(ConfigError::Invalid(format!(
                "confidence range {}..={} is not a valid percentage range",
                self.confidence_min, self.confidence_max
            )));
        }
        if self.agent_driven_cap == 0 || self.review_driven_cap == 0 {
            return Err(ConfigError::Invalid(
                "approval caps must be at least 1".to_string(),
            ));
        }
        if self.agent_driven_cap > MAX_LISTED_ITEMS || self.review_driven_cap > MAX_LISTED_ITEMS {
            return Err(ConfigError::Invalid(format!(
                "approval caps must be at most {}",
                MAX_LISTED_ITEMS
            )));
        }
        Ok(())
    }

    pub fn stage_interval(&self) -> Duration {
        Duration::from_millis(self.stage_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn confidence_range(&self) -> RangeInclusive<u8> {
        self.confidence_min..=self.confidence_max
    }

    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }

    pub fn reprocess_delay(&self) -> Duration {
        Duration::from_millis(self.reprocess_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_delay_ms)
    }
}

/// Platform config directory for this application
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}
