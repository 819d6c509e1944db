//! Command-line and environment configuration

use std::path::PathBuf;

use crate::api::{ApiConfig, DEFAULT_BASE_URL};
use crate::state::STARTUP_CITY;

const DEFAULT_LOG_FILE: &str = "weather-panel.log";

/// Panel settings, read from flags or the environment
#[derive(clap::Args, Debug, Clone)]
pub struct Config {
    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// City searched when the panel opens
    #[arg(long, short, default_value = STARTUP_CITY)]
    pub city: String,

    /// Where to write diagnostics (defaults to the temp directory)
    #[arg(long, env = "WEATHER_PANEL_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "weather-panel",
            "--api-key",
            "KEY",
            "--base-url",
            "http://localhost:8080",
            "-c",
            "Oslo",
            "--log-file",
            "/tmp/panel.log",
        ]);

        assert_eq!(cli.config.city, "Oslo");
        assert_eq!(cli.config.log_path(), PathBuf::from("/tmp/panel.log"));
        assert_eq!(
            cli.config.api_config(),
            ApiConfig {
                api_key: "KEY".into(),
                base_url: "http://localhost:8080".into(),
            }
        );
    }

    #[test]
    fn test_city_defaults_to_london() {
        let cli = TestCli::parse_from(["weather-panel", "--api-key", "KEY"]);
        assert_eq!(cli.config.city, "London");
    }
}
