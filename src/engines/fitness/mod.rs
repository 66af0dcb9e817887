pub mod hsl;
pub mod strategy;

pub use hsl::{rgb_to_hsl, Hsl};
pub use strategy::{
    ChannelSpread, FitnessKind, FitnessStrategy, PopulationHslDeviation, SumPlusSpread,
};
