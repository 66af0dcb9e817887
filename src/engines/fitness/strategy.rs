use super::hsl::{rgb_to_hsl, Hsl};
use crate::types::Member;
use serde::{Deserialize, Serialize};

/// Scores a member of a population. Higher is fitter.
pub trait FitnessStrategy {
    /// Score of the member at `index`. `index` must be in bounds.
    fn score(&self, population: &[Member], index: usize) -> f64;

    /// Scores for every member, in population order.
    fn score_all(&self, population: &[Member]) -> Vec<f64> {
        (0..population.len())
            .map(|i| self.score(population, i))
            .collect()
    }

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> FitnessStrategy for F
where
    F: Fn(&[Member], usize) -> f64,
{
    fn score(&self, population: &[Member], index: usize) -> f64 {
        self(population, index)
    }
}

/// `r + g + b + 5 * (max - min)`: rewards bright, saturated members
#[derive(Debug, Clone, Copy, Default)]
pub struct SumPlusSpread;

impl FitnessStrategy for SumPlusSpread {
    fn score(&self, population: &[Member], index: usize) -> f64 {
        let m = &population[index];
        let bonus = m.max_channel() - m.min_channel();
        m.r + m.g + m.b + bonus * 5.0
    }

    fn name(&self) -> &str {
        "sum_plus_spread"
    }
}

/// `max - min` of the member's own channels
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelSpread;

impl FitnessStrategy for ChannelSpread {
    fn score(&self, population: &[Member], index: usize) -> f64 {
        let m = &population[index];
        m.max_channel() - m.min_channel()
    }

    fn name(&self) -> &str {
        "channel_spread"
    }
}

/// Population-wide HSL statistic.
///
/// Every member's colour is converted to HSL and the population means are taken.
/// The score is `sqrt(mean_h^2 / N)`, or `sqrt((mean_h^2 + mean_s^2 + mean_l^2) / N)`
/// with `include_saturation_lightness`.
///
/// The result does not depend on `index`: every member of a population receives
/// the same score, so ranking under this strategy degenerates to ties and the
/// engine's first-occurrence eviction and stable sort decide the order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationHslDeviation {
    pub include_saturation_lightness: bool,
}

impl PopulationHslDeviation {
    pub fn hue_only() -> Self {
        Self { include_saturation_lightness: false }
    }

    pub fn full() -> Self {
        Self { include_saturation_lightness: true }
    }

    /// Mean hue, saturation and lightness of the population
    pub fn mean_hsl(population: &[Member]) -> Hsl {
        if population.is_empty() {
            return Hsl::default();
        }

        let n = population.len() as f64;
        let sum = population.iter().fold(Hsl::default(), |acc, m| {
            let hsl = rgb_to_hsl(m.r * 255.0, m.g * 255.0, m.b * 255.0);
            Hsl {
                h: acc.h + hsl.h,
                s: acc.s + hsl.s,
                l: acc.l + hsl.l,
            }
        });

        Hsl {
            h: sum.h / n,
            s: sum.s / n,
            l: sum.l / n,
        }
    }

    fn population_score(&self, population: &[Member]) -> f64 {
        if population.is_empty() {
            return 0.0;
        }

        let mean = Self::mean_hsl(population);
        let mut total = mean.h * mean.h;
        if self.include_saturation_lightness {
            total += mean.s * mean.s + mean.l * mean.l;
        }

        (total / population.len() as f64).sqrt()
    }
}

impl FitnessStrategy for PopulationHslDeviation {
    fn score(&self, population: &[Member], _index: usize) -> f64 {
        self.population_score(population)
    }

    fn score_all(&self, population: &[Member]) -> Vec<f64> {
        vec![self.population_score(population); population.len()]
    }

    fn name(&self) -> &str {
        if self.include_saturation_lightness {
            "population_hsl"
        } else {
            "population_hue"
        }
    }
}

/// Selectable fitness strategy, as named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessKind {
    #[default]
    SumPlusSpread,
    ChannelSpread,
    PopulationHue,
    PopulationHsl,
}

impl FitnessKind {
    pub fn strategy(&self) -> Box<dyn FitnessStrategy + Send> {
        match self {
            FitnessKind::SumPlusSpread => Box::new(SumPlusSpread),
            FitnessKind::ChannelSpread => Box::new(ChannelSpread),
            FitnessKind::PopulationHue => Box::new(PopulationHslDeviation::hue_only()),
            FitnessKind::PopulationHsl => Box::new(PopulationHslDeviation::full()),
        }
    }
}
