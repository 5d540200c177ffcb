// src/tableau/bracket.rs
//
// Pair entrants per round and decide each bout's winner by looking for either
// side's seed in the following round.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::config::consts::{BYE, WINNER_COLUMN};
use crate::core::sanitize::{is_blank, is_placeholder_header};
use crate::error::Diagnostic;

use super::seeds::{seed_of, seeded_entries};
use super::table::UnifiedTable;

static BYE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{}\b", regex::escape(BYE))).expect("bye marker pattern")
});

/// One column of the tableau after seed filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub name: String,
    pub entries: Vec<String>,
    /// The trailing champion column: a successor for the final, never paired.
    pub terminal: bool,
}

impl Round {
    pub fn new(name: impl Into<String>, entries: Vec<String>) -> Self {
        Self { name: name.into(), entries, terminal: false }
    }
}

/// A reconstructed bout. Fencer fields still hold raw entrant tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub round: String,
    pub fencer1: String,
    pub fencer2: String,
    pub winner: String,
    pub score: String,
}

impl Match {
    pub fn is_bye(&self) -> bool {
        is_bye_side(&self.fencer1) || is_bye_side(&self.fencer2)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bracket {
    pub matches: Vec<Match>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Filter every column of the unified table into rounds, in column order.
///
/// A last column without a header of its own is the champion column: it is
/// renamed `Winner` when it holds an entrant and dropped otherwise.
pub fn rounds_from_table(table: &UnifiedTable) -> Vec<Round> {
    let mut rounds: Vec<Round> = table
        .columns()
        .iter()
        .map(|c| {
            let entries = seeded_entries(&c.cells).into_iter().map(String::from).collect();
            Round::new(c.name.clone(), entries)
        })
        .collect();

    let drop_last = matches!(
        rounds.last(),
        Some(last) if is_placeholder_header(&last.name) && last.entries.is_empty()
    );
    if drop_last {
        rounds.pop();
    } else if let Some(last) = rounds.last_mut() {
        if is_placeholder_header(&last.name) {
            last.name = s!(WINNER_COLUMN);
            last.terminal = true;
        } else if last.name.eq_ignore_ascii_case(WINNER_COLUMN) {
            last.terminal = true;
        }
    }
    rounds
}

/// Pair `(2k, 2k+1)` in each round and resolve winners.
pub fn reconstruct(rounds: &[Round]) -> Bracket {
    let mut out = Bracket::default();

    for (i, round) in rounds.iter().enumerate() {
        if round.terminal {
            continue;
        }
        // Spacer columns hold no entrants; the successor is the next round that does.
        let next = rounds[i + 1..].iter().find(|r| !r.entries.is_empty());

        let mut pairs = round.entries.chunks_exact(2);
        for pair in pairs.by_ref() {
            let (f1, f2) = (&pair[0], &pair[1]);
            let winner = resolve_winner(f1, f2, next);
            let score = if is_bye_side(f1) || is_bye_side(f2) { s!(BYE) } else { s!() };
            out.matches.push(Match {
                round: round.name.clone(),
                fencer1: f1.clone(),
                fencer2: f2.clone(),
                winner: s!(winner),
                score,
            });
        }

        if let [odd] = pairs.remainder() {
            warn!(round = %round.name, entry = %odd, "unpaired entry in round; no match produced");
            out.diagnostics.push(Diagnostic::OddRoundEntry {
                round: round.name.clone(),
                entry: odd.clone(),
            });
        }
    }
    out
}

/// First entry of the next round carrying either seed decides; with no
/// successor, or neither side present there, the non-blank side advances.
fn resolve_winner<'a>(f1: &'a str, f2: &'a str, next: Option<&Round>) -> &'a str {
    if let Some(next) = next {
        let (s1, s2) = (seed_of(f1), seed_of(f2));
        for cand in &next.entries {
            let Some(cs) = seed_of(cand) else { continue };
            if Some(cs) == s1 {
                return f1;
            }
            if Some(cs) == s2 {
                return f2;
            }
        }
    }
    advancing_side(f1, f2)
}

fn advancing_side<'a>(f1: &'a str, f2: &'a str) -> &'a str {
    if !is_bye_side(f1) {
        f1
    } else if !is_bye_side(f2) {
        f2
    } else {
        ""
    }
}

/// An absent opponent: a blank slot or one with a standalone `BYE` word.
pub fn is_bye_side(token: &str) -> bool {
    is_blank(token) || BYE_WORD.is_match(token)
}
