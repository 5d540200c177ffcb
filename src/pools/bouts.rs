// src/pools/bouts.rs
//
// Pool matrices are read pairwise over the upper triangle. Row i, column j
// holds fencer i's result against fencer j; the mirrored cell holds j's.

use serde::Deserialize;
use tracing::debug;

use crate::config::consts::POOL_LABEL_PREFIX;
use crate::data::Record;

use super::cell::PoolCell;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Competitor {
    pub name: String,
    #[serde(default)]
    pub nationality: String,
}

/// One captured pool: competitors in row order and the N×N result matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub number: Option<String>,
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub results: Vec<Vec<String>>,
}

impl Pool {
    /// The pool's own label, else `Pool #<position>` (1-based).
    pub fn label(&self, position: usize) -> String {
        match self.number.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => s!(n),
            _ => format!("{POOL_LABEL_PREFIX}{position}"),
        }
    }

    fn cell(&self, row: usize, col: usize) -> Option<PoolCell> {
        self.results.get(row)?.get(col).and_then(|c| PoolCell::parse(c))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolBout {
    pub pool: String,
    pub fencer1: Competitor,
    pub fencer1_score: u32,
    pub fencer2: Competitor,
    pub fencer2_score: u32,
    pub winner: Side,
}

impl PoolBout {
    /// `i_score-j_score`, in matrix order rather than winner first.
    pub fn score(&self) -> String {
        format!("{}-{}", self.fencer1_score, self.fencer2_score)
    }

    pub fn winner_name(&self) -> &str {
        match self.winner {
            Side::First => &self.fencer1.name,
            Side::Second => &self.fencer2.name,
        }
    }
}

impl Record for PoolBout {
    const HEADERS: &'static [&'static str] = &[
        "PoolNumber",
        "Fencer1_Name",
        "Fencer1_Nationality",
        "Fencer1_Score",
        "Fencer2_Name",
        "Fencer2_Nationality",
        "Fencer2_Score",
        "Score",
        "Winner",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.pool.clone(),
            self.fencer1.name.clone(),
            self.fencer1.nationality.clone(),
            self.fencer1_score.to_string(),
            self.fencer2.name.clone(),
            self.fencer2.nationality.clone(),
            self.fencer2_score.to_string(),
            self.score(),
            s!(self.winner_name()),
        ]
    }
}

/// Every bout that was actually fenced in `pool`. Pairs with a blank or
/// off-grammar cell on either side are skipped.
pub fn pool_bouts(pool: &Pool, label: &str) -> Vec<PoolBout> {
    let n = pool.competitors.len();
    let mut out = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let (Some(ij), Some(ji)) = (pool.cell(i, j), pool.cell(j, i)) else {
                continue;
            };
            let winner = if ij.is_victory() { Side::First } else { Side::Second };
            out.push(PoolBout {
                pool: s!(label),
                fencer1: pool.competitors[i].clone(),
                fencer1_score: ij.touches(),
                fencer2: pool.competitors[j].clone(),
                fencer2_score: ji.touches(),
                winner,
            });
        }
    }
    debug!(pool = %label, competitors = n, bouts = out.len(), "pool parsed");
    out
}
