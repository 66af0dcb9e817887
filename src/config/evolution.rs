use super::traits::ConfigSection;
use crate::engines::fitness::FitnessKind;
use crate::engines::generation::Mutation;
use crate::error::BlobError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub capacity: usize,
    pub initial_population: usize,
    pub mutation: Mutation,
    pub fitness: FitnessKind,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            initial_population: 2,
            mutation: Mutation::Decaying,
            fitness: FitnessKind::SumPlusSpread,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), BlobError> {
        if self.capacity == 0 {
            return Err(BlobError::Configuration(
                "Capacity must be at least 1".to_string()
            ));
        }
        if self.initial_population == 0 {
            return Err(BlobError::Configuration(
                "Initial population must be at least 1".to_string()
            ));
        }
        if self.initial_population > self.capacity {
            return Err(BlobError::Configuration(format!(
                "Initial population ({}) exceeds capacity ({})",
                self.initial_population, self.capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_seed_over_capacity() {
        let config = EvolutionConfig {
            capacity: 3,
            initial_population: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BlobError::Configuration(_))));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = EvolutionConfig {
            capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
