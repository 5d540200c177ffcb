// src/file.rs
//
// Filesystem edge of the crate: captured input in, export files out.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::options::{ExportFormat, ExportOptions, TableKind};
use crate::csv::{parse_rows, write_dataset};
use crate::data::DataSet;
use crate::error::FileError;
use crate::pools::Pool;
use crate::tableau::RawTable;

/* ---------------- Input ---------------- */

#[derive(Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    header: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

fn read_text(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Io { path: path.to_path_buf(), source })
}

fn format_of(path: &Path) -> Option<ExportFormat> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "csv" => Some(ExportFormat::Csv),
        "tsv" => Some(ExportFormat::Tsv),
        _ => None,
    }
}

/// Load one tableau snapshot. `.csv`/`.tsv` files carry the header as their
/// first record; anything else is read as JSON `{"header": [..], "rows": [[..]]}`.
pub fn load_snapshot(path: &Path) -> Result<RawTable, FileError> {
    let text = read_text(path)?;
    let table = match format_of(path) {
        Some(format) => {
            let mut rows = parse_rows(&text, format.delim()).into_iter();
            let header = rows.next().ok_or_else(|| FileError::NoHeader(path.to_path_buf()))?;
            RawTable::new(header, rows.collect())
        }
        None => {
            let snap: SnapshotFile = serde_json::from_str(&text)
                .map_err(|source| FileError::Json { path: path.to_path_buf(), source })?;
            RawTable::new(snap.header, snap.rows)
        }
    };
    debug!(path = %path.display(), columns = table.width(), rows = table.row_count(), "snapshot loaded");
    Ok(table)
}

pub fn load_snapshots<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawTable>, FileError> {
    paths.iter().map(|p| load_snapshot(p.as_ref())).collect()
}

/// Load a JSON array of pools.
pub fn load_pools(path: &Path) -> Result<Vec<Pool>, FileError> {
    let text = read_text(path)?;
    let pools: Vec<Pool> = serde_json::from_str(&text)
        .map_err(|source| FileError::Json { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), pools = pools.len(), "pools loaded");
    Ok(pools)
}

/* ---------------- Output ---------------- */

pub fn ensure_directory(dir: &Path) -> Result<(), FileError> {
    if dir.exists() && !dir.is_dir() {
        return Err(FileError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| FileError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Create/truncate `path` and write one table into it.
pub fn write_table(path: &Path, data: &DataSet, include_headers: bool, sep: char) -> Result<(), FileError> {
    let io_err = |source: std::io::Error| FileError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, data, include_headers, sep).map_err(io_err)?;
    out.flush().map_err(io_err)
}

/// Write every produced table under `export.out_dir`. Returns the paths written.
pub fn export_tables(export: &ExportOptions, tables: &[(TableKind, DataSet)]) -> Result<Vec<PathBuf>, FileError> {
    ensure_directory(&export.out_dir)?;
    let mut written = Vec::with_capacity(tables.len());
    for (kind, data) in tables {
        let path = export.out_path(*kind);
        write_table(&path, data, export.include_headers, export.delim())?;
        info!(table = kind.title(), rows = data.len(), path = %path.display(), "exported");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_from_csv_uses_first_record_as_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w1.csv");
        fs::write(&path, ",T8,T4\n,(1) A USA,\n,,(1) A USA\n").unwrap();

        let t = load_snapshot(&path).unwrap();
        assert_eq!(t.header, vec!["", "T8", "T4"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows[1][2], "(1) A USA");
    }

    #[test]
    fn snapshot_from_json_is_padded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w1.json");
        fs::write(&path, r#"{"header": ["R16"], "rows": [["(1)&nbsp;A  USA", "15-2"]]}"#).unwrap();

        let t = load_snapshot(&path).unwrap();
        assert_eq!(t.header, vec!["R16", ""]);
        assert_eq!(t.rows[0], vec!["(1) A USA", "15-2"]);
    }

    #[test]
    fn empty_csv_has_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert!(matches!(load_snapshot(&path), Err(FileError::NoHeader(_))));
    }

    #[test]
    fn bad_json_and_missing_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_pools(&path), Err(FileError::Json { .. })));
        assert!(matches!(load_pools(&dir.path().join("nope.json")), Err(FileError::Io { .. })));
    }

    #[test]
    fn out_dir_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(FileError::NotADirectory(_))));
    }
}
