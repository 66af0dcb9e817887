pub mod config;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use engines::fitness::{FitnessKind, FitnessStrategy};
pub use engines::generation::{GenerationReport, Mutation, PopulationEngine};
pub use error::{BlobError, Result};
pub use types::{clip, Member};
