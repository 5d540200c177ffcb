// src/pools/summary.rs
use std::collections::HashMap;

use crate::data::Record;

use super::bouts::{PoolBout, Side};

/// Aggregate pool record of one fencer across all pools.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolSummaryRow {
    pub fencer: String,
    pub nationality: String,
    pub victories: u32,
    pub defeats: u32,
    pub touches_scored: u32,
    pub touches_received: u32,
}

impl PoolSummaryRow {
    fn new(fencer: &str, nationality: &str) -> Self {
        Self { fencer: s!(fencer), nationality: s!(nationality), ..Self::default() }
    }

    /// TS − TR
    pub fn difference(&self) -> i64 {
        i64::from(self.touches_scored) - i64::from(self.touches_received)
    }

    pub fn bouts(&self) -> u32 {
        self.victories + self.defeats
    }

    fn tally(&mut self, won: bool, scored: u32, received: u32) {
        if won {
            self.victories += 1;
        } else {
            self.defeats += 1;
        }
        self.touches_scored += scored;
        self.touches_received += received;
    }
}

impl Record for PoolSummaryRow {
    const HEADERS: &'static [&'static str] =
        &["Fencer", "Nationality", "Victories", "Defeats", "TS", "TR", "Difference"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.fencer.clone(),
            self.nationality.clone(),
            self.victories.to_string(),
            self.defeats.to_string(),
            self.touches_scored.to_string(),
            self.touches_received.to_string(),
            self.difference().to_string(),
        ]
    }
}

/// Fold bouts into one row per fencer name, ranked by victories (desc) then
/// name (asc). The first appearance of a name fixes its nationality.
pub fn summarize(bouts: &[PoolBout]) -> Vec<PoolSummaryRow> {
    let mut by_name: HashMap<&str, PoolSummaryRow> = HashMap::new();

    for b in bouts {
        let first_won = b.winner == Side::First;
        by_name
            .entry(b.fencer1.name.as_str())
            .or_insert_with(|| PoolSummaryRow::new(&b.fencer1.name, &b.fencer1.nationality))
            .tally(first_won, b.fencer1_score, b.fencer2_score);
        by_name
            .entry(b.fencer2.name.as_str())
            .or_insert_with(|| PoolSummaryRow::new(&b.fencer2.name, &b.fencer2.nationality))
            .tally(!first_won, b.fencer2_score, b.fencer1_score);
    }

    let mut rows: Vec<PoolSummaryRow> = by_name.into_values().collect();
    rows.sort_by(|a, b| b.victories.cmp(&a.victories).then_with(|| a.fencer.cmp(&b.fencer)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::bouts::Competitor;

    fn bout(a: &str, sa: u32, b: &str, sb: u32, winner: Side) -> PoolBout {
        PoolBout {
            pool: s!("Pool #1"),
            fencer1: Competitor { name: s!(a), nationality: s!("USA") },
            fencer1_score: sa,
            fencer2: Competitor { name: s!(b), nationality: s!("FRA") },
            fencer2_score: sb,
            winner,
        }
    }

    #[test]
    fn folds_wins_and_touches() {
        let rows = summarize(&[
            bout("A", 5, "B", 3, Side::First),
            bout("A", 2, "C", 5, Side::Second),
            bout("B", 5, "C", 4, Side::First),
        ]);
        let a = rows.iter().find(|r| r.fencer == "A").unwrap();
        assert_eq!((a.victories, a.defeats, a.touches_scored, a.touches_received), (1, 1, 7, 8));
        assert_eq!(a.difference(), -1);
        assert_eq!(a.nationality, "USA");

        let b = rows.iter().find(|r| r.fencer == "B").unwrap();
        assert_eq!(b.nationality, "FRA");
        assert_eq!(b.bouts(), 2);

        for r in &rows {
            assert_eq!(r.difference(), i64::from(r.touches_scored) - i64::from(r.touches_received));
        }
    }

    #[test]
    fn ties_on_victories_rank_by_name() {
        let rows = summarize(&[
            bout("Zed", 5, "Amy", 0, Side::First),
            bout("Bob", 5, "Cal", 1, Side::First),
            bout("Amy", 5, "Cal", 4, Side::First),
        ]);
        let order: Vec<&str> = rows.iter().map(|r| r.fencer.as_str()).collect();
        assert_eq!(order, vec!["Amy", "Bob", "Zed", "Cal"]);
        assert_eq!(rows[3].to_row()[6], "-5");
    }
}
