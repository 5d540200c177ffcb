// src/pools/mod.rs
//! Pool (poule) round-robin results: matrix → bouts → per-fencer summary.
//!
//! Independent of the tableau side; the two share no state.

pub mod bouts;
pub mod cell;
pub mod summary;

use tracing::{info, warn};

use crate::error::{Diagnostic, ExtractError, Phase};

pub use bouts::{Competitor, Pool, PoolBout, Side, pool_bouts};
pub use cell::PoolCell;
pub use summary::{PoolSummaryRow, summarize};

#[derive(Clone, Debug, Default)]
pub struct PoolOutcome {
    pub bouts: Vec<PoolBout>,
    pub summary: Vec<PoolSummaryRow>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse every pool and rank all fencers across them.
///
/// A pool without competitors is skipped with a diagnostic. The phase fails
/// only when there is no pool with competitors at all.
pub fn aggregate(pools: &[Pool]) -> Result<PoolOutcome, ExtractError> {
    if pools.is_empty() {
        return Err(ExtractError::MissingTable { phase: Phase::Pools, what: "pool table" });
    }

    let mut out = PoolOutcome::default();
    let mut parsed = 0usize;
    for (ix, pool) in pools.iter().enumerate() {
        let label = pool.label(ix + 1);
        if pool.competitors.is_empty() {
            warn!(pool = %label, "pool has no competitor rows; skipping");
            out.diagnostics.push(Diagnostic::EmptyPool { pool: label });
            continue;
        }
        out.bouts.extend(pool_bouts(pool, &label));
        parsed += 1;
    }

    if parsed == 0 {
        return Err(ExtractError::EmptyTable {
            phase: Phase::Pools,
            what: format!("all {} pools", pools.len()),
        });
    }

    out.summary = summarize(&out.bouts);
    info!(pools = parsed, bouts = out.bouts.len(), fencers = out.summary.len(), "pools aggregated");
    Ok(out)
}
