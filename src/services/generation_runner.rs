use super::schedule::AlphaSchedule;
use crate::config::AppConfig;
use crate::engines::fitness::FitnessStrategy;
use crate::engines::generation::{GenerationObserver, GenerationReport, PopulationEngine};
use crate::error::Result;
use crate::types::Member;
use std::time::{Duration, Instant};

/// Drives a `PopulationEngine` either on a fixed tick or on demand.
///
/// Owns the state the engine deliberately does not: the decaying alpha and the
/// time of the last periodic step.
pub struct GenerationRunner {
    engine: PopulationEngine,
    fitness: Box<dyn FitnessStrategy + Send>,
    schedule: AlphaSchedule,
    interval: Duration,
    last_tick: Instant,
    observer: Option<Box<dyn GenerationObserver>>,
}

impl GenerationRunner {
    pub fn new(
        engine: PopulationEngine,
        fitness: Box<dyn FitnessStrategy + Send>,
        schedule: AlphaSchedule,
        interval: Duration,
        started: Instant,
    ) -> Self {
        Self {
            engine,
            fitness,
            schedule,
            interval,
            last_tick: started,
            observer: None,
        }
    }

    /// Seeded engine, strategy, schedule and interval from a full app config
    pub fn from_config(config: &AppConfig, started: Instant) -> Result<Self> {
        config.validate()?;
        let engine = PopulationEngine::from_config(&config.evolution)?;
        Ok(Self::new(
            engine,
            config.evolution.fitness.strategy(),
            AlphaSchedule::from_config(&config.driver),
            config.driver.tick_interval(),
            started,
        ))
    }

    pub fn with_observer(mut self, observer: Box<dyn GenerationObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Periodic step: advances only when more than `interval` has passed since
    /// the last periodic step.
    pub fn tick(&mut self, now: Instant) -> Result<Option<GenerationReport>> {
        if now.saturating_duration_since(self.last_tick) <= self.interval {
            return Ok(None);
        }
        self.last_tick = now;
        self.forward().map(Some)
    }

    /// Immediate step, e.g. on a pointer click. Does not reset the tick timer.
    pub fn trigger(&mut self) -> Result<GenerationReport> {
        self.forward()
    }

    fn forward(&mut self) -> Result<GenerationReport> {
        let report = self
            .engine
            .advance_generation(self.fitness.as_ref(), self.schedule.current())?;
        self.schedule.advance();

        if let Some(observer) = self.observer.as_mut() {
            observer.on_generation_complete(&report);
        }
        Ok(report)
    }

    pub fn snapshot(&self) -> &[Member] {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &PopulationEngine {
        &self.engine
    }

    pub fn alpha(&self) -> f64 {
        self.schedule.current()
    }

    pub fn fitness_name(&self) -> &str {
        self.fitness.name()
    }
}
