//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the assistant binaries
#[derive(Debug, Clone)]
pub struct Config {
    /// Wake word a command may be prefixed with, lowercased
    pub assistant_name: String,
    pub openweather_api_key: Option<String>,
    pub openweather_base_url: String,
    pub default_city: String,
    pub country_code: String,
    pub wikipedia_base_url: String,
    pub notes_path: PathBuf,
    pub reminders_path: PathBuf,
    pub sites_config_path: PathBuf,
    pub http_bind: String,
    pub sweep_interval: Duration,
    /// External text-to-speech program, e.g. `say` or `espeak`
    pub tts_command: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Build the configuration from environment variables
    ///
    /// Call `dotenvy::dotenv()` first so values from `.env` are visible.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let wikipedia_lang = env_or("WIKIPEDIA_LANG", "en");
        let sweep_secs = match env::var("SWEEP_INTERVAL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SWEEP_INTERVAL_SECS must be a whole number, got '{raw}'"))?,
            Err(_) => defaults.sweep_interval.as_secs(),
        };
        if sweep_secs == 0 {
            anyhow::bail!("SWEEP_INTERVAL_SECS must be greater than zero");
        }

        Ok(Config {
            assistant_name: env_or("ASSISTANT_NAME", &defaults.assistant_name)
                .trim()
                .to_lowercase(),
            openweather_api_key: env_opt("OPENWEATHER_API_KEY"),
            openweather_base_url: env_or("OPENWEATHER_BASE_URL", &defaults.openweather_base_url),
            default_city: env_or("CITY", &defaults.default_city),
            country_code: env_or("COUNTRY_CODE", &defaults.country_code),
            wikipedia_base_url: env_opt("WIKIPEDIA_BASE_URL")
                .unwrap_or_else(|| format!("https://{wikipedia_lang}.wikipedia.org")),
            notes_path: env_opt("NOTES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.notes_path),
            reminders_path: env_opt("REMINDERS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.reminders_path),
            sites_config_path: env_opt("SITES_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.sites_config_path),
            http_bind: env_or("HTTP_BIND", &defaults.http_bind),
            sweep_interval: Duration::from_secs(sweep_secs),
            tts_command: env_opt("TTS_COMMAND"),
            log_level: env_or("LOG_LEVEL", &defaults.log_level),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assistant_name: "jarvis".to_string(),
            openweather_api_key: None,
            openweather_base_url: "https://api.openweathermap.org".to_string(),
            default_city: "Mumbai".to_string(),
            country_code: "IN".to_string(),
            wikipedia_base_url: "https://en.wikipedia.org".to_string(),
            notes_path: PathBuf::from("notes.txt"),
            reminders_path: PathBuf::from("reminders.jsonl"),
            sites_config_path: PathBuf::from("sites.yaml"),
            http_bind: "127.0.0.1:5000".to_string(),
            sweep_interval: Duration::from_secs(30),
            tts_command: None,
            log_level: "info".to_string(),
        }
    }
}

/// Read a variable, treating blank values as unset
fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.assistant_name, "jarvis");
        assert_eq!(config.default_city, "Mumbai");
        assert_eq!(config.country_code, "IN");
        assert_eq!(config.sweep_interval, Duration::from_secs(30));
        assert!(config.openweather_api_key.is_none());
        assert!(config.tts_command.is_none());
    }

    #[test]
    fn test_env_opt_ignores_unset_keys() {
        assert!(env_opt("JARVIS_TEST_KEY_THAT_IS_NEVER_SET").is_none());
        assert_eq!(env_or("JARVIS_TEST_KEY_THAT_IS_NEVER_SET", "fallback"), "fallback");
    }
}
