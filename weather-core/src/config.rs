use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CITY: &str = "Bengaluru";

/// Value shipped in sample configs; treated the same as a missing key.
const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timezone = "Asia/Kolkata"
/// default_city = "Bengaluru"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// IANA zone name used for day boundaries and the noon window.
    /// When absent, the searched city's own UTC offset is used.
    pub timezone: Option<String>,

    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timezone: None,
            default_city: default_city(),
        }
    }
}

/// Which clock decides calendar days and local noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSetting {
    /// The UTC offset reported for the searched city.
    CityOffset,
    Named(Tz),
}

impl ZoneSetting {
    pub fn parse(name: &str) -> Result<Self> {
        let tz = name
            .trim()
            .parse::<Tz>()
            .map_err(|e| anyhow!("Unknown time zone '{name}': {e}"))?;
        Ok(ZoneSetting::Named(tz))
    }
}

impl Config {
    /// Returns the API key, rejecting blanks and the sample placeholder.
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(anyhow!(
                "API key not configured.\n\
                 Hint: run `weather configure` and enter your OpenWeather API key."
            )),
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    pub fn zone(&self) -> Result<ZoneSetting> {
        match self.timezone.as_deref() {
            Some(name) if !name.trim().is_empty() => ZoneSetting::parse(name),
            _ => Ok(ZoneSetting::CityOffset),
        }
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
