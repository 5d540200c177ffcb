// src/data.rs
//
// Headers + rows shape shared by every output table. Domain records
// (matches, fencers, bouts, summary rows) flatten into it through `Record`,
// and export (csv.rs / file.rs) only ever sees a `DataSet`.

/// A flat output table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// A typed row that knows its column names and how to stringify itself.
pub trait Record {
    const HEADERS: &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

impl DataSet {
    pub fn from_records<R: Record>(records: &[R]) -> Self {
        Self {
            headers: Some(R::HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: records.iter().map(Record::to_row).collect(),
        }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// All values of one named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let ix = self.headers.as_ref()?.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|r| r.get(ix).map(String::as_str).unwrap_or("")).collect())
    }
}
