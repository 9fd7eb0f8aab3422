use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
const DEFAULT_SETTLE_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// HTTP client limits for talking to the remote door controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller {
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Controller {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    /// Debounce delay between the most recent read and the next poll
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Assumed travel time of the door after a toggle
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Timing {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessory {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub controller: Controller,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("GARAGESYNC").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 51826

        [logger]
        level = "debug"

        [controller]
        request_timeout_ms = 2000
        connect_timeout_ms = 500

        [[accessories]]
        name = "Garage Door"
        url = "http://10.0.0.12"

        [[accessories]]
        name = "Barn"
        url = "http://10.0.0.13/"
    "#;

    #[test]
    fn test_parse_settings() {
        let settings = Settings::from_toml(SAMPLE).unwrap();

        assert_eq!(settings.server.port, 51826);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.controller.request_timeout(), Duration::from_secs(2));
        assert_eq!(settings.accessories.len(), 2);
        assert_eq!(settings.accessories[1].name, "Barn");
    }

    #[test]
    fn test_timing_defaults_when_missing() {
        let settings = Settings::from_toml(SAMPLE).unwrap();

        assert_eq!(settings.timing.poll_interval(), Duration::from_millis(3000));
        assert_eq!(settings.timing.settle_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_timing_section() {
        let source = format!("{SAMPLE}\n[timing]\nsettle_delay_ms = 12000\n");
        let settings = Settings::from_toml(&source).unwrap();

        assert_eq!(settings.timing.poll_interval_ms, 3000);
        assert_eq!(settings.timing.settle_delay_ms, 12000);
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(Settings::from_toml("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }
}
