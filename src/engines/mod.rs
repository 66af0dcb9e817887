pub mod fitness;
pub mod generation;
