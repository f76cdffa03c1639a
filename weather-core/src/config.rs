use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::model::Unit;

pub const DEFAULT_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
pub const DEFAULT_ICON_URL: &str = "https://openweathermap.org/img/wn/{icon}@2x.png";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// OpenWeatherMap credentials and endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub current_url: String,
    pub forecast_url: String,
    /// Image URL template; `{icon}` is replaced by the icon code.
    pub icon_url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            current_url: DEFAULT_CURRENT_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub units: Unit,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [provider]
/// api_key = "..."
///
/// [display]
/// units = "imperial"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// The configured API key, or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.provider
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeatherMap API key configured.\n\
                     Hint: run `weather configure` and enter your API key."
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.provider.api_key = Some(api_key.trim().to_string());
    }

    pub fn set_default_units(&mut self, unit: Unit) {
        self.display.units = unit;
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeatherMap API key configured"));
        assert!(err.to_string().contains("weather configure"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());

        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn set_api_key_trims_input() {
        let mut cfg = Config::default();
        cfg.set_api_key(" KEY \n".into());

        assert_eq!(cfg.api_key().unwrap(), "KEY");
    }

    #[test]
    fn defaults_match_provider_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.provider.current_url, DEFAULT_CURRENT_URL);
        assert_eq!(cfg.provider.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(cfg.provider.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.provider.read_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.display.units, Unit::Metric);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let cfg = Config::from_toml(
            r#"
            [provider]
            api_key = "OPEN_KEY"

            [display]
            units = "imperial"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.api_key().unwrap(), "OPEN_KEY");
        assert_eq!(cfg.display.units, Unit::Imperial);
        assert_eq!(cfg.provider.icon_url, DEFAULT_ICON_URL);
        assert_eq!(cfg.provider.read_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn saved_toml_reads_back() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        cfg.set_default_units(Unit::Imperial);

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn unknown_units_fail_to_parse() {
        let err = Config::from_toml("[display]\nunits = \"kelvin\"\n").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
