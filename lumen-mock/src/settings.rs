use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::condition::Thresholds;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub address: String,
    pub sender_id: String,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default = "default_time_to_live")]
    pub time_to_live: u32,
}

fn default_time_to_live() -> u32 {
    lumen_api::PushRequest::DEFAULT_TIME_TO_LIVE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    /// Seconds between two sensor readings
    pub interval_secs: u64,
    /// Readings in one simulated day
    pub day_length_ticks: u32,
    pub variance: i32,
    pub threshold0: i32,
    pub threshold1: i32,
    pub d1: i32,
    pub d2: i32,
    pub d3: i32,
}

impl Mock {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            variance: self.variance,
            threshold0: self.threshold0,
            threshold1: self.threshold1,
            d1: self.d1,
            d2: self.d2,
            d3: self.d3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub gateway: Gateway,
    pub mock: Mock,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        Ok(settings)
    }
}
