use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::fitness::FitnessStrategy;
use crate::engines::generation::operators::{crossover, random_selection, seed_population, Mutation};
use crate::error::{BlobError, Result};
use crate::types::Member;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Empty,
    Seeded,
    Steady,
}

/// Outcome of one `advance_generation` call
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub generation: u64,
    pub parents: (usize, usize),
    pub child: Member,
    pub evicted: Option<Member>,
    pub best_fitness: f64,
    pub population_size: usize,
}

/// Capacity-bounded steady-state population.
///
/// Every generation appends one child, evicts the least-fit member once the
/// population is over capacity, and re-sorts by descending fitness.
pub struct PopulationEngine {
    members: Vec<Member>,
    capacity: usize,
    mutation: Mutation,
    generation: u64,
    rng: StdRng,
}

impl PopulationEngine {
    pub fn new(capacity: usize, mutation: Mutation, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(capacity, mutation, rng)
    }

    pub fn with_rng(capacity: usize, mutation: Mutation, rng: StdRng) -> Self {
        Self {
            members: Vec::new(),
            capacity,
            mutation,
            generation: 0,
            rng,
        }
    }

    /// Engine built and seeded with zeroed members from a validated config
    pub fn from_config(config: &EvolutionConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::new(config.capacity, config.mutation, config.seed);
        engine.seed_zeroed(config.initial_population);
        Ok(engine)
    }

    /// Replace the population with `count` members built by `factory`.
    pub fn seed<F>(&mut self, count: usize, factory: F)
    where
        F: FnMut(usize) -> Member,
    {
        self.members = seed_population(count, factory);
        self.generation = 0;
        log::info!("Seeded population with {} members (capacity {})", count, self.capacity);
    }

    pub fn seed_zeroed(&mut self, count: usize) {
        self.seed(count, |_| Member::zeroed());
    }

    /// Run one generation: select, breed, insert, evict if over capacity, re-sort.
    pub fn advance_generation<S>(&mut self, fitness: &S, alpha: f64) -> Result<GenerationReport>
    where
        S: FitnessStrategy + ?Sized,
    {
        let parent1 = random_selection(&self.members, &mut self.rng);
        let parent2 = random_selection(&self.members, &mut self.rng);
        let (Some(parent1), Some(parent2)) = (parent1, parent2) else {
            log::warn!("Refusing to advance generation {}: population is empty", self.generation + 1);
            return Err(BlobError::InvalidState(
                "cannot advance an empty population; seed it first".to_string(),
            ));
        };

        let mut child = crossover(&self.members[parent1], &self.members[parent2], &mut self.rng);
        self.mutation.apply(&mut child, alpha, &mut self.rng);
        self.members.push(child);

        let evicted = if self.members.len() > self.capacity {
            let scores = fitness.score_all(&self.members);
            least_fit_index(&scores).map(|idx| self.members.remove(idx))
        } else {
            None
        };

        let best_fitness = self.sort_by_fitness(fitness);
        self.generation += 1;

        log::debug!(
            "Generation {}: parents ({}, {}) -> child {}, evicted {:?}, best {:.4}, size {}",
            self.generation,
            parent1,
            parent2,
            child.hex(),
            evicted.map(|m| m.hex()),
            best_fitness,
            self.members.len()
        );

        Ok(GenerationReport {
            generation: self.generation,
            parents: (parent1, parent2),
            child,
            evicted,
            best_fitness,
            population_size: self.members.len(),
        })
    }

    /// Stable sort by descending fitness. Returns the best score.
    fn sort_by_fitness<S>(&mut self, fitness: &S) -> f64
    where
        S: FitnessStrategy + ?Sized,
    {
        let scores = fitness.score_all(&self.members);
        let mut ranked: Vec<(f64, Member)> = scores.into_iter().zip(self.members.drain(..)).collect();
        ranked.sort_by(|a, b| rank_key(b.0).total_cmp(&rank_key(a.0)));

        let best = ranked.first().map(|(score, _)| *score).unwrap_or(0.0);
        self.members = ranked.into_iter().map(|(_, member)| member).collect();
        best
    }

    /// Read-only view, ordered by fitness as of the last generation
    pub fn snapshot(&self) -> &[Member] {
        &self.members
    }

    pub fn best(&self) -> Option<&Member> {
        self.members.first()
    }

    pub fn state(&self) -> EngineState {
        if self.members.is_empty() {
            EngineState::Empty
        } else if self.generation == 0 {
            EngineState::Seeded
        } else {
            EngineState::Steady
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mutation(&self) -> Mutation {
        self.mutation
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordering key for a score: NaN ranks below every number, `-0.0` ties with `0.0`.
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

/// Index of the lowest score, first occurrence on ties. NaN counts as least fit.
pub fn least_fit_index(scores: &[f64]) -> Option<usize> {
    let mut iter = scores.iter().map(|&s| rank_key(s)).enumerate();
    let (mut min_idx, mut min_score) = iter.next()?;

    for (i, score) in iter {
        if score < min_score {
            min_idx = i;
            min_score = score;
        }
    }

    Some(min_idx)
}
