// src/tableau/table.rs
//
// Stitching of tableau snapshots. The results page only renders a few rounds
// at a time, so each navigation step yields a table that overlaps its
// neighbours. Merging is a key-addressed fold: a column is filled only while
// the unified copy is still blank, never overwritten once it has data.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::core::sanitize::{clean_cell, is_blank};

use super::seeds::has_seed;

/// One captured snapshot: header + rectangular, blank-padded rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cleans every cell and pads rows and header to the widest row.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(header.len());

        let mut header: Vec<String> = header.iter().map(|h| clean_cell(h)).collect();
        header.resize(width, s!());

        let rows = rows
            .into_iter()
            .map(|r| {
                let mut r: Vec<String> = r.iter().map(|c| clean_cell(c)).collect();
                r.resize(width, s!());
                r
            })
            .collect();

        Self { header, rows }
    }

    pub fn width(&self) -> usize { self.header.len() }
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Column `ix` top to bottom; missing cells read as blank.
    pub fn column(&self, ix: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.get(ix).cloned().unwrap_or_default())
            .collect()
    }
}

/// Suffix repeated header names so logically distinct columns don't collide.
/// The first occurrence keeps its name; later ones become `name_1`, `name_2`, ...
pub fn dedup_headers(headers: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    headers
        .iter()
        .map(|h| match seen.get_mut(h.as_str()) {
            Some(n) => {
                *n += 1;
                format!("{h}_{n}")
            }
            None => {
                seen.insert(h, 0);
                h.clone()
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

impl Column {
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| is_blank(c))
    }
}

/// Column-complete table built from all snapshots of one bracket.
/// Column names are unique; every column has `row_count` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnifiedTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl UnifiedTable {
    /// Fold snapshots into one table. `None` when there is nothing to merge.
    ///
    /// Cells are filled in arrival order. Column order is settled once every
    /// snapshot is in, from the left-to-right neighbour pairs seen across all
    /// of them, so it does not depend on which window arrived first.
    pub fn merge<'a, I>(snapshots: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a RawTable>,
    {
        let mut it = snapshots.into_iter();
        let mut base = Self::default();
        let mut adjacent = BTreeSet::new();
        base.absorb(it.next()?, &mut adjacent);
        for snap in it {
            base.absorb(snap, &mut adjacent);
        }
        base.order_columns(&adjacent);
        Some(base)
    }

    fn absorb(&mut self, snap: &RawTable, adjacent: &mut BTreeSet<(String, String)>) {
        if snap.row_count() > self.row_count {
            self.row_count = snap.row_count();
            for col in &mut self.columns {
                col.cells.resize(self.row_count, s!());
            }
        }

        let names = dedup_headers(&snap.header);
        adjacent.extend(names.windows(2).map(|w| (w[0].clone(), w[1].clone())));

        for (pos, name) in names.iter().enumerate() {
            let mut cells = snap.column(pos);
            cells.resize(self.row_count, s!());

            match self.position(name) {
                Some(ix) => {
                    if self.columns[ix].is_blank() && !cells.iter().all(|c| is_blank(c)) {
                        debug!(column = %name, "filling blank column from later snapshot");
                        self.columns[ix].cells = cells;
                    }
                }
                None => {
                    debug!(column = %name, "adding column");
                    self.columns.push(Column { name: name.clone(), cells });
                }
            }
        }
    }

    /// Topological order over the neighbour pairs. Among columns free to go
    /// next, the one with more entrants goes first, then by name. Snapshots
    /// that contradict each other are resolved the same way.
    fn order_columns(&mut self, adjacent: &BTreeSet<(String, String)>) {
        let mut pending = std::mem::take(&mut self.columns);
        let rank = |c: &Column| (Reverse(c.cells.iter().filter(|x| has_seed(x)).count()), c.name.clone());

        while !pending.is_empty() {
            let free: Vec<usize> = (0..pending.len())
                .filter(|&i| {
                    !adjacent
                        .iter()
                        .any(|(l, r)| *r == pending[i].name && pending.iter().any(|p| p.name == *l))
                })
                .collect();
            if free.is_empty() {
                warn!("snapshots disagree on column order; ordering the rest by entrant count");
            }
            let candidates: Vec<usize> = if free.is_empty() { (0..pending.len()).collect() } else { free };
            let Some(next) = candidates.into_iter().min_by_key(|&i| rank(&pending[i])) else {
                break;
            };
            self.columns.push(pending.remove(next));
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn row_count(&self) -> usize { self.row_count }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|ix| self.columns[ix].cells.as_slice())
    }
}
