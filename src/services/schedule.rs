use crate::config::DriverConfig;

/// Linearly decaying mutation intensity.
///
/// The value is allowed to go below zero; the decaying mutation operator clips
/// it, so a spent schedule simply stops mutating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSchedule {
    start: f64,
    step: f64,
    current: f64,
}

impl AlphaSchedule {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            current: start,
        }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.alpha_start, config.alpha_decay)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Decay by one step, returning the new value
    pub fn advance(&mut self) -> f64 {
        self.current -= self.step;
        self.current
    }

    pub fn reset(&mut self) {
        self.current = self.start;
    }
}

impl Default for AlphaSchedule {
    fn default() -> Self {
        Self::from_config(&DriverConfig::default())
    }
}
