use std::env;
use std::error::Error;
use std::fs;

use garagesync_api::models::DoorPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    pub host: String,
    pub port: u16,
    pub initial_position: DoorPosition,
    /// Time the simulated door takes to travel after a toggle
    pub travel_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub mock: Mock,
}

impl Settings {
    /// Loads the bundled defaults, or the file named by `MOCK_CONFIG` when set.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings = match env::var("MOCK_CONFIG") {
            Ok(path) => toml::from_str(&fs::read_to_string(path)?)?,
            Err(_) => toml::from_str(include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../",
                "configs/mock.toml"
            )))?,
        };

        Ok(settings)
    }
}
