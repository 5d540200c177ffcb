// src/runner.rs
use tracing::{info, warn};

use crate::config::options::TableKind;
use crate::data::DataSet;
use crate::error::{Diagnostic, ExtractError, Phase};
use crate::pools::{self, Pool, PoolOutcome};
use crate::progress::Progress;
use crate::tableau::{self, RawTable, TableauOutcome};

/// Raw input for one run, as handed over by the capture tool.
/// A phase runs only when its input is present.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    pub snapshots: Option<Vec<RawTable>>,
    pub pools: Option<Vec<Pool>>,
}

/// Per-phase results. A failed phase never hides the other one.
#[derive(Debug, Default)]
pub struct Report {
    pub tableau: Option<Result<TableauOutcome, ExtractError>>,
    pub pools: Option<Result<PoolOutcome, ExtractError>>,
}

impl Report {
    /// Output tables of the phases that succeeded, in export order.
    pub fn datasets(&self) -> Vec<(TableKind, DataSet)> {
        let mut out = Vec::new();
        if let Some(Ok(t)) = &self.tableau {
            out.push((TableKind::Matches, DataSet::from_records(&t.matches)));
            out.push((TableKind::Fencers, DataSet::from_records(&t.fencers)));
        }
        if let Some(Ok(p)) = &self.pools {
            out.push((TableKind::PoolBouts, DataSet::from_records(&p.bouts)));
            out.push((TableKind::PoolSummary, DataSet::from_records(&p.summary)));
        }
        out
    }

    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let t = self.tableau.iter().flatten().flat_map(|t| &t.diagnostics);
        let p = self.pools.iter().flatten().flat_map(|p| &p.diagnostics);
        t.chain(p).collect()
    }

    pub fn errors(&self) -> Vec<&ExtractError> {
        let t = self.tableau.iter().filter_map(|r| r.as_ref().err());
        let p = self.pools.iter().filter_map(|r| r.as_ref().err());
        t.chain(p).collect()
    }
}

/// Run every phase that has input. `progress` can be None (no UI updates).
pub fn run(capture: &Capture, mut progress: Option<&mut dyn Progress>) -> Report {
    let total = usize::from(capture.snapshots.is_some()) + usize::from(capture.pools.is_some());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut report = Report::default();

    if let Some(snapshots) = &capture.snapshots {
        info!(snapshots = snapshots.len(), "tableau phase");
        let result = tableau::reconstruct(snapshots);
        note(&mut progress, Phase::Tableau, &result);
        report.tableau = Some(result);
    }

    if let Some(pool_list) = &capture.pools {
        info!(pools = pool_list.len(), "pools phase");
        let result = pools::aggregate(pool_list);
        note(&mut progress, Phase::Pools, &result);
        report.pools = Some(result);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

fn note<T>(progress: &mut Option<&mut dyn Progress>, phase: Phase, result: &Result<T, ExtractError>) {
    let line = match result {
        Ok(_) => format!("{phase} phase done"),
        Err(e) => {
            warn!(%phase, error = %e, "phase failed");
            format!("{phase} phase failed: {e}")
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.log(&line);
        p.item_done(&phase.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::Competitor;

    #[derive(Default)]
    struct Recorder {
        total: usize,
        lines: Vec<String>,
        done: Vec<String>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
        fn item_done(&mut self, label: &str) { self.done.push(s!(label)); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn pool() -> Pool {
        Pool {
            number: None,
            competitors: vec![
                Competitor { name: s!("A"), nationality: s!("USA") },
                Competitor { name: s!("B"), nationality: s!("GBR") },
            ],
            results: vec![vec![s!(""), s!("V5")], vec![s!("D1"), s!("")]],
        }
    }

    #[test]
    fn failed_tableau_does_not_block_pools() {
        let capture = Capture { snapshots: Some(vec![]), pools: Some(vec![pool()]) };
        let mut rec = Recorder::default();
        let report = run(&capture, Some(&mut rec));

        assert!(matches!(report.tableau, Some(Err(_))));
        assert!(matches!(report.pools, Some(Ok(_))));
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].phase(), Phase::Tableau);

        let kinds: Vec<TableKind> = report.datasets().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![TableKind::PoolBouts, TableKind::PoolSummary]);

        assert_eq!(rec.total, 2);
        assert_eq!(rec.done, vec!["tableau", "pools"]);
        assert!(rec.lines[0].starts_with("tableau phase failed"));
        assert!(rec.finished);
    }

    #[test]
    fn absent_input_skips_the_phase() {
        let report = run(&Capture { snapshots: None, pools: Some(vec![pool()]) }, None);
        assert!(report.tableau.is_none());
        assert!(report.diagnostics().is_empty());
        assert_eq!(report.datasets().len(), 2);
    }
}
