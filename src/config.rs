use crate::error::{McuError, Result};
use crate::logging::LogFormat;
use mcu_dashboard_common::upload::{DEFAULT_STEP_PERCENT, DEFAULT_TICK_MS};
use mcu_dashboard_common::{ParticipantKind, ResultFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the config file location
pub const CONFIG_ENV: &str = "MCU_DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_tab: ParticipantKind,
    pub default_result_filter: String,
    pub upload_tick_ms: u64,
    pub upload_step_percent: u8,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tab: ParticipantKind::Individual,
            default_result_filter: ResultFilter::ALL_LABEL.to_string(),
            upload_tick_ms: DEFAULT_TICK_MS,
            upload_step_percent: DEFAULT_STEP_PERCENT,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file → defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| McuError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("mcu-dashboard").join("config.json"))
    }

    pub fn result_filter(&self) -> Result<ResultFilter> {
        self.default_result_filter
            .parse::<ResultFilter>()
            .map_err(McuError::Config)
    }

    fn validate(&self) -> Result<()> {
        self.result_filter()?;
        if self.upload_step_percent == 0 || self.upload_step_percent > 100 {
            return Err(McuError::Config(format!(
                "upload_step_percent must be 1-100, got {}",
                self.upload_step_percent
            )));
        }
        if self.upload_tick_ms == 0 {
            return Err(McuError::Config("upload_tick_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn set_default_tab(&mut self, tab: ParticipantKind) {
        self.default_tab = tab;
    }

    pub fn set_log_format(&mut self, format: LogFormat) {
        self.log_format = format;
    }
}
