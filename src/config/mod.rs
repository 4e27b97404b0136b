use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

/// Environment variable that points to an alternative configuration file.
pub const CONFIG_ENV: &str = "SLEEPY_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_ms: u64,
    /// Reject unparseable times instead of falling back to midnight.
    #[serde(default)]
    pub strict_time: bool,
    #[serde(default = "default_recent_first")]
    pub recent_first: bool,
    /// Flips which entry parity counts as asleep.
    #[serde(default)]
    pub start_parity: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_api_url() -> String {
    "http://localhost:17425".to_string()
}
fn default_timeout() -> u64 {
    5000
}
fn default_recent_first() -> bool {
    true
}
fn default_chart_width() -> usize {
    48
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_ms: default_timeout(),
            strict_time: false,
            recent_first: default_recent_first(),
            start_parity: 0,
            chart_width: default_chart_width(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AppError::Config(format!(
            "'{}' expects true/false, got '{}'",
            key, value
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .parse()
        .map_err(|_| AppError::Config(format!("'{}' expects a number, got '{}'", key, value)))
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sleepy")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".sleepy")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sleepy.conf")
    }

    /// Pick the config file: explicit override, then `SLEEPY_CONFIG`, then
    /// the platform default.
    pub fn resolve_path(cli_override: Option<&str>) -> PathBuf {
        match cli_override {
            Some(p) => expand_tilde(p),
            None => match env::var(CONFIG_ENV) {
                Ok(p) if !p.trim().is_empty() => expand_tilde(&p),
                _ => Self::config_file(),
            },
        }
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Write a default configuration file. Existing files are kept unless
    /// `force` is set. Returns whether a file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.chart_width == 0 {
            return Err(AppError::Config("chart_width must be positive".into()));
        }
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "api_url" => self.api_url = value.trim_end_matches('/').to_string(),
            "request_timeout_ms" => self.request_timeout_ms = parse_number(key, value)?,
            "strict_time" => self.strict_time = parse_bool(key, value)?,
            "recent_first" => self.recent_first = parse_bool(key, value)?,
            "start_parity" => self.start_parity = parse_number(key, value)?,
            "chart_width" => self.chart_width = parse_number(key, value)?,
            other => return Err(AppError::Config(format!("unknown key '{}'", other))),
        }
        self.validate()
    }
}
