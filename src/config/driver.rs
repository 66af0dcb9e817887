use super::traits::ConfigSection;
use crate::error::BlobError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings owned by whatever decides when a generation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub alpha_start: f64,
    pub alpha_decay: f64,
    pub tick_interval_ms: u64,
    /// Stop after this many generations; 0 runs forever
    pub max_generations: u64,
    pub report_every: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            alpha_start: 0.3,
            alpha_decay: 0.001,
            tick_interval_ms: 100,
            max_generations: 1000,
            report_every: 50,
        }
    }
}

impl DriverConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn generation_limit(&self) -> Option<u64> {
        match self.max_generations {
            0 => None,
            limit => Some(limit),
        }
    }
}

impl ConfigSection for DriverConfig {
    fn section_name() -> &'static str {
        "driver"
    }

    fn validate(&self) -> Result<(), BlobError> {
        if !self.alpha_start.is_finite() {
            return Err(BlobError::Configuration(
                "Alpha start must be a finite number".to_string()
            ));
        }
        if !(self.alpha_decay >= 0.0) {
            return Err(BlobError::Configuration(
                "Alpha decay must be non-negative".to_string()
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(BlobError::Configuration(
                "Tick interval must be positive".to_string()
            ));
        }
        if self.report_every == 0 {
            return Err(BlobError::Configuration(
                "Report interval must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
