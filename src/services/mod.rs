pub mod generation_runner;
pub mod schedule;

pub use generation_runner::GenerationRunner;
pub use schedule::AlphaSchedule;
