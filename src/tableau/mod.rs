// src/tableau/mod.rs
//! # Tableau (elimination bracket) reconstruction
//!
//! Turns captured snapshots of the bracket page into the matches table and
//! the fencer roster.
//!
//! ## Pipeline
//! ```text
//! [RawTable; n] ─ table::UnifiedTable::merge ─▶ UnifiedTable
//!      ├─ bracket::rounds_from_table (seeds::seeded_entries per column)
//!      │     └─ bracket::reconstruct ─▶ Vec<Match>
//!      ├─ scores::extract_scores ─ scores::assign_scores ─▶ Match.score
//!      └─ fencers::FencerRegistry ─▶ Vec<FencerRecord>, Vec<MatchRow>
//! ```
//!
//! ## Invariants
//! - The merge never overwrites a column that already holds data.
//! - Every match winner is one of its two fencers (empty only when both
//!   slots are byes).
//! - Count disagreements (odd rounds, scores vs. matches) are recovered and
//!   reported as [`Diagnostic`]s; only a missing bracket is an error.

pub mod bracket;
pub mod fencers;
pub mod scores;
pub mod seeds;
pub mod table;

use tracing::info;

use crate::error::{Diagnostic, ExtractError, Phase};

pub use bracket::{Match, Round};
pub use fencers::{Entrant, FencerRecord, FencerRegistry, MatchRow};
pub use table::{RawTable, UnifiedTable};

/// Everything the tableau phase produces.
#[derive(Clone, Debug, Default)]
pub struct TableauOutcome {
    pub table: UnifiedTable,
    pub matches: Vec<MatchRow>,
    pub fencers: Vec<FencerRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the whole bracket side over the captured snapshots.
pub fn reconstruct(snapshots: &[RawTable]) -> Result<TableauOutcome, ExtractError> {
    let table = UnifiedTable::merge(snapshots).ok_or(ExtractError::MissingTable {
        phase: Phase::Tableau,
        what: "bracket table",
    })?;
    info!(
        snapshots = snapshots.len(),
        columns = table.columns().len(),
        rows = table.row_count(),
        "merged tableau snapshots"
    );

    let rounds = bracket::rounds_from_table(&table);
    if rounds.iter().all(|r| r.entries.is_empty()) {
        return Err(ExtractError::EmptyTable {
            phase: Phase::Tableau,
            what: s!("bracket table (no seeded entrants)"),
        });
    }

    let bracket::Bracket { mut matches, mut diagnostics } = bracket::reconstruct(&rounds);
    let scores = scores::extract_scores(&table);
    diagnostics.extend(scores::assign_scores(&mut matches, scores));

    let fencers = FencerRegistry::from_matches(&matches).roster();
    let matches: Vec<MatchRow> = matches.iter().map(MatchRow::from).collect();
    info!(
        rounds = rounds.len(),
        matches = matches.len(),
        fencers = fencers.len(),
        "tableau reconstructed"
    );

    Ok(TableauOutcome { table, matches, fencers, diagnostics })
}
