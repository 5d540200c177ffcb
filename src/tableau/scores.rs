// src/tableau/scores.rs
//
// The page prints a bout's score in the cell right under the entrant who
// advanced, in the next round's column. Reading every column after the first
// therefore yields one score per match, in match order. That alignment is
// best-effort: counts are reconciled by truncating or padding.

use tracing::{debug, warn};

use crate::config::consts::{BYE, REF_MARKER};
use crate::core::sanitize::is_blank;
use crate::error::Diagnostic;

use super::bracket::Match;
use super::seeds::has_seed;
use super::table::UnifiedTable;

/// Drop the referee annotation (`Ref` onward) and surrounding whitespace.
pub fn clean_score(raw: &str) -> String {
    let cut = raw.find(REF_MARKER).map_or(raw, |ix| &raw[..ix]);
    cut.trim().to_string()
}

/// Score tokens of one raw column: the cell after each entrant, or `BYE`
/// when that cell is blank or the entrant sits on the last row.
pub fn column_scores(cells: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < cells.len() {
        if has_seed(&cells[i]) {
            let score = match cells.get(i + 1) {
                Some(next) if !is_blank(next) => clean_score(next),
                _ => s!(BYE),
            };
            out.push(score);
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// Scores of every column but the first, concatenated in column order.
pub fn extract_scores(table: &UnifiedTable) -> Vec<String> {
    table
        .columns()
        .iter()
        .skip(1)
        .flat_map(|c| {
            let scores = column_scores(&c.cells);
            debug!(column = %c.name, count = scores.len(), "score tokens");
            scores
        })
        .collect()
}

/// Assign scores positionally. Bye matches keep `BYE`. Returns a diagnostic
/// when the counts had to be reconciled.
pub fn assign_scores(matches: &mut [Match], mut scores: Vec<String>) -> Option<Diagnostic> {
    let skew = (scores.len() != matches.len()).then(|| {
        warn!(
            scores = scores.len(),
            matches = matches.len(),
            "score count does not match match count; aligning positionally"
        );
        Diagnostic::ScoreCountMismatch { scores: scores.len(), matches: matches.len() }
    });

    scores.resize(matches.len(), s!());
    for (m, score) in matches.iter_mut().zip(scores) {
        m.score = if m.is_bye() { s!(BYE) } else { score };
    }
    skew
}
