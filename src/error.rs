// src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The two independent extraction phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tableau,
    Pools,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Tableau => f.write_str("tableau"),
            Phase::Pools => f.write_str("pools"),
        }
    }
}

/// Structural failure: an expected table is missing from the captured input.
/// Aborts only the phase that raised it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{phase}: no {what} found in the captured input")]
    MissingTable { phase: Phase, what: &'static str },

    #[error("{phase}: {what} has no usable rows")]
    EmptyTable { phase: Phase, what: String },
}

impl ExtractError {
    pub fn phase(&self) -> Phase {
        match self {
            ExtractError::MissingTable { phase, .. } | ExtractError::EmptyTable { phase, .. } => *phase,
        }
    }
}

/// Loading captured input or writing exports.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("{0} contains no header row")]
    NoHeader(PathBuf),
}

/// Non-fatal count disagreement, recovered locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A round had an odd number of seeded entries; the last one formed no match.
    OddRoundEntry { round: String, entry: String },
    /// Extracted score tokens did not line up one-to-one with matches.
    ScoreCountMismatch { scores: usize, matches: usize },
    /// A pool had no competitor rows and was skipped.
    EmptyPool { pool: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OddRoundEntry { round, entry } => {
                write!(f, "round '{round}' has an unpaired entry '{entry}'")
            }
            Diagnostic::ScoreCountMismatch { scores, matches } => {
                write!(f, "{scores} score tokens for {matches} matches")
            }
            Diagnostic::EmptyPool { pool } => write!(f, "{pool} has no competitor rows"),
        }
    }
}
