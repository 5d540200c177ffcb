// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// The four output tables this crate produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Matches,
    Fencers,
    PoolBouts,
    PoolSummary,
}

impl TableKind {
    pub fn file_stem(self) -> &'static str {
        match self {
            TableKind::Matches => MATCHES_FILE,
            TableKind::Fencers => FENCERS_FILE,
            TableKind::PoolBouts => POOL_BOUTS_FILE,
            TableKind::PoolSummary => POOL_SUMMARY_FILE,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableKind::Matches => "Tableau Matches",
            TableKind::Fencers => "Fencers",
            TableKind::PoolBouts => "Poules Bout Data",
            TableKind::PoolSummary => "Poules Summary",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>.<ext>` for one output table.
    pub fn out_path(&self, kind: TableKind) -> PathBuf {
        join_dir_and_stem(&self.out_dir, kind.file_stem(), self.format.ext())
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

fn join_dir_and_stem(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(join!(stem, ".", ext))
}
