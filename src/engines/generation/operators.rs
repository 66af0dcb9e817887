use crate::types::{clip, Member};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform parent pick (with replacement)
pub fn random_selection<R: Rng>(population: &[Member], rng: &mut R) -> Option<usize> {
    if population.is_empty() {
        return None;
    }
    Some(rng.gen_range(0..population.len()))
}

/// Channel blend crossover.
///
/// Builds a three-value palette, one candidate per channel from the same channel
/// of both parents, then draws each of the child's channels from that palette
/// with replacement. The child sits at `parent1`'s position with zero velocity.
pub fn crossover<R: Rng>(parent1: &Member, parent2: &Member, rng: &mut R) -> Member {
    let a = parent1.channels();
    let b = parent2.channels();

    let mut palette = [0.0; 3];
    for i in 0..3 {
        palette[i] = clip(a[i] + b[i] * (rng.gen::<f64>() * 0.6 - 0.3));
    }

    let r = palette[rng.gen_range(0..3)];
    let g = palette[rng.gen_range(0..3)];
    let b = palette[rng.gen_range(0..3)];

    Member::new(parent1.x, parent1.y, r, g, b, 0.0, 0.0)
}

/// Decaying mutation: each channel gets `uniform(0,1) * clip(alpha)` added.
/// A negative alpha clips to zero and leaves the member unchanged.
pub fn mutate<R: Rng>(member: &mut Member, alpha: f64, rng: &mut R) {
    let intensity = clip(alpha);
    let [r, g, b] = member.channels();
    member.set_channels([
        r + rng.gen::<f64>() * intensity,
        g + rng.gen::<f64>() * intensity,
        b + rng.gen::<f64>() * intensity,
    ]);
}

/// Symmetric mutation: each channel moves by `uniform(-0.05, 0.05)`.
pub fn mutate_symmetric<R: Rng>(member: &mut Member, rng: &mut R) {
    let [r, g, b] = member.channels();
    member.set_channels([
        r + rng.gen::<f64>() * 0.1 - 0.05,
        g + rng.gen::<f64>() * 0.1 - 0.05,
        b + rng.gen::<f64>() * 0.1 - 0.05,
    ]);
}

/// Which mutation operator the engine applies to each child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    /// `mutate`, scaled by the caller's alpha
    #[default]
    Decaying,
    /// `mutate_symmetric`, alpha is ignored
    Symmetric,
}

impl Mutation {
    pub fn apply<R: Rng>(&self, member: &mut Member, alpha: f64, rng: &mut R) {
        match self {
            Mutation::Decaying => mutate(member, alpha, rng),
            Mutation::Symmetric => mutate_symmetric(member, rng),
        }
    }
}

/// `count` members built by `factory`, called with each index in turn
pub fn seed_population<F>(count: usize, mut factory: F) -> Vec<Member>
where
    F: FnMut(usize) -> Member,
{
    (0..count).map(|i| factory(i)).collect()
}
