// src/tableau/seeds.rs
use std::sync::LazyLock;

use regex::Regex;

static SEED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([0-9]+)\)").expect("seed prefix pattern"));

/// Does the cell open with a `(<seed>)` marker?
pub fn has_seed(cell: &str) -> bool {
    SEED_PREFIX.is_match(cell)
}

/// Seed number of an entrant cell. `None` for non-entrant cells and seeds
/// too large to be a bracket rank.
pub fn seed_of(cell: &str) -> Option<u32> {
    SEED_PREFIX
        .captures(cell)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// The entrant cells of one column, in order. Drops the interleaved score,
/// referee and spacer rows.
pub fn seeded_entries(column: &[String]) -> Vec<&str> {
    column
        .iter()
        .map(String::as_str)
        .filter(|c| has_seed(c))
        .collect()
}
