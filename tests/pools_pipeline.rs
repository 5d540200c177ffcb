// tests/pools_pipeline.rs
use ftl_scrape::error::{Diagnostic, Phase};
use ftl_scrape::pools::{self, Pool, Side};

const POOLS_JSON: &str = r#"[
  {
    "number": "Pool #1",
    "competitors": [
      {"name": "ADAMS Ann", "nationality": "USA"},
      {"name": "BROWN Ben", "nationality": "FRA"},
      {"name": "CLARK Cy", "nationality": "ITA"},
      {"name": "DAVIS Di", "nationality": "GER"}
    ],
    "results": [
      ["", "V5", "D2", "V5"],
      ["D3", "", "V5", "D4"],
      ["V5", "D1", "", "V5"],
      ["D0", "V5", "D3", ""]
    ]
  },
  {
    "competitors": [
      {"name": "EVANS Ed", "nationality": "KOR"},
      {"name": "FORD Flo", "nationality": "HUN"},
      {"name": "GREEN Gus"}
    ],
    "results": [
      ["", "V5", ""],
      ["D4", "", ""],
      ["", "", ""]
    ]
  },
  {"competitors": [], "results": []}
]"#;

fn load() -> Vec<Pool> {
    serde_json::from_str(POOLS_JSON).unwrap()
}

#[test]
fn bouts_follow_matrix_order() {
    let out = pools::aggregate(&load()).unwrap();
    let bouts: Vec<(&str, &str, &str, String, &str)> = out
        .bouts
        .iter()
        .map(|b| (b.pool.as_str(), b.fencer1.name.as_str(), b.fencer2.name.as_str(), b.score(), b.winner_name()))
        .collect();
    assert_eq!(
        bouts,
        vec![
            ("Pool #1", "ADAMS Ann", "BROWN Ben", "5-3".to_string(), "ADAMS Ann"),
            ("Pool #1", "ADAMS Ann", "CLARK Cy", "2-5".to_string(), "CLARK Cy"),
            ("Pool #1", "ADAMS Ann", "DAVIS Di", "5-0".to_string(), "ADAMS Ann"),
            ("Pool #1", "BROWN Ben", "CLARK Cy", "5-1".to_string(), "BROWN Ben"),
            ("Pool #1", "BROWN Ben", "DAVIS Di", "4-5".to_string(), "DAVIS Di"),
            ("Pool #1", "CLARK Cy", "DAVIS Di", "5-3".to_string(), "CLARK Cy"),
            ("Pool #2", "EVANS Ed", "FORD Flo", "5-4".to_string(), "EVANS Ed"),
        ]
    );
    for b in &out.bouts {
        let first = b.winner_name() == b.fencer1.name;
        assert_eq!(first, b.winner == Side::First);
    }
}

#[test]
fn summary_ranks_by_victories_then_name() {
    let out = pools::aggregate(&load()).unwrap();
    let table: Vec<(&str, u32, u32, u32, u32, i64)> = out
        .summary
        .iter()
        .map(|r| {
            (r.fencer.as_str(), r.victories, r.defeats, r.touches_scored, r.touches_received, r.difference())
        })
        .collect();
    assert_eq!(
        table,
        vec![
            ("ADAMS Ann", 2, 1, 12, 8, 4),
            ("CLARK Cy", 2, 1, 11, 10, 1),
            ("BROWN Ben", 1, 2, 12, 11, 1),
            ("DAVIS Di", 1, 2, 8, 14, -6),
            ("EVANS Ed", 1, 0, 5, 4, 1),
            ("FORD Flo", 0, 1, 4, 5, -1),
        ]
    );

    let fenced: u32 = out.summary.iter().map(|r| r.bouts()).sum();
    assert_eq!(fenced as usize, 2 * out.bouts.len());
}

#[test]
fn empty_pool_is_reported_not_fatal() {
    let out = pools::aggregate(&load()).unwrap();
    assert_eq!(out.diagnostics, vec![Diagnostic::EmptyPool { pool: "Pool #3".into() }]);
    assert!(out.summary.iter().all(|r| r.fencer != "GREEN Gus"));
}

#[test]
fn nothing_to_aggregate_fails_the_phase() {
    let err = pools::aggregate(&[]).unwrap_err();
    assert_eq!(err.phase(), Phase::Pools);
}
