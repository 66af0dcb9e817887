pub mod evolution_engine;
pub mod operators;
pub mod progress;

pub use evolution_engine::{least_fit_index, EngineState, GenerationReport, PopulationEngine};
pub use operators::{crossover, mutate, mutate_symmetric, Mutation};
pub use progress::{ChannelObserver, GenerationObserver, LogObserver};
