pub mod settings;

pub use settings::{Accessory, Controller, Logger, Server, Settings, Timing};
