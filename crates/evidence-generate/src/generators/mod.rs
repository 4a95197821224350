//! Row builders for each table. All draws come from the caller's RNG so the
//! draw order, and therefore the output, is fixed for a given seed.

mod dimensions;
mod facts;

pub use dimensions::{experiment_arms, teams, users};
pub use facts::{TaskRows, tasks_and_interactions};

use rand::Rng;

/// Uniformly pick one element of a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

pub(crate) fn team_id(index: u32) -> String {
    format!("team_{index}")
}
