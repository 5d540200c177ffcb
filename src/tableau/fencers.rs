// src/tableau/fencers.rs
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::Record;

use super::bracket::Match;

static WITH_NAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(([0-9]+)\)\s*(.*?)\s+([A-Z]{3})$").expect("entrant-with-nationality pattern")
});
static WITHOUT_NAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([0-9]+)\)\s*(.*)$").expect("entrant pattern"));

/// A parsed `(<seed>) <name> <NAT>?` token. `nationality` is empty when the
/// token carries no trailing three-letter code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entrant {
    pub seed: u32,
    pub name: String,
    pub nationality: String,
}

impl Entrant {
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(c) = WITH_NAT.captures(token) {
            return Some(Self {
                seed: c[1].parse().ok()?,
                name: c[2].trim().to_string(),
                nationality: c[3].to_string(),
            });
        }
        let c = WITHOUT_NAT.captures(token)?;
        Some(Self {
            seed: c[1].parse().ok()?,
            name: c[2].trim().to_string(),
            nationality: s!(),
        })
    }
}

/// Display name and nationality of a match slot. Tokens that are not
/// entrants keep their raw text as the name.
fn display(token: &str) -> (String, String) {
    match Entrant::parse(token) {
        Some(e) => (e.name, e.nationality),
        None => (token.trim().to_string(), s!()),
    }
}

/// One roster line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FencerRecord {
    pub name: String,
    pub nationality: String,
    pub seed: u32,
}

impl Record for FencerRecord {
    const HEADERS: &'static [&'static str] = &["Name", "Nationality", "Seed"];
    fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.nationality.clone(), self.seed.to_string()]
    }
}

/// A match with entrant tokens split into clean names and nationalities.
/// `winner` is the clean name too, not the raw `(seed) NAME NAT` token the
/// page shows, so it compares directly against `fencer1` and `fencer2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRow {
    pub round: String,
    pub fencer1: String,
    pub fencer2: String,
    pub fencer1_nationality: String,
    pub fencer2_nationality: String,
    pub winner: String,
    pub score: String,
}

impl From<&Match> for MatchRow {
    fn from(m: &Match) -> Self {
        let (fencer1, fencer1_nationality) = display(&m.fencer1);
        let (fencer2, fencer2_nationality) = display(&m.fencer2);
        let (winner, _) = display(&m.winner);
        Self {
            round: m.round.clone(),
            fencer1,
            fencer2,
            fencer1_nationality,
            fencer2_nationality,
            winner,
            score: m.score.clone(),
        }
    }
}

impl Record for MatchRow {
    const HEADERS: &'static [&'static str] = &[
        "Round", "Fencer1", "Fencer2", "Fencer1_Nationality", "Fencer2_Nationality", "Winner", "Score",
    ];
    fn to_row(&self) -> Vec<String> {
        vec![
            self.round.clone(),
            self.fencer1.clone(),
            self.fencer2.clone(),
            self.fencer1_nationality.clone(),
            self.fencer2_nationality.clone(),
            self.winner.clone(),
            self.score.clone(),
        ]
    }
}

/// Every competitor seen in the bracket, keyed by (seed, name).
/// The first appearance carrying a nationality code decides it.
#[derive(Clone, Debug, Default)]
pub struct FencerRegistry {
    seen: BTreeMap<(u32, String), String>,
}

impl FencerRegistry {
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut reg = Self::default();
        for m in matches {
            reg.record(&m.fencer1);
            reg.record(&m.fencer2);
        }
        reg
    }

    /// Register one slot. Non-entrant tokens are skipped.
    pub fn record(&mut self, token: &str) {
        if let Some(e) = Entrant::parse(token) {
            let nat = self.seen.entry((e.seed, e.name)).or_default();
            if nat.is_empty() {
                *nat = e.nationality;
            }
        }
    }

    /// Deduplicated roster, seed ascending. Slots without a nationality
    /// (placeholders, byes) are left out.
    pub fn roster(&self) -> Vec<FencerRecord> {
        self.seen
            .iter()
            .filter(|(_, nat)| !nat.trim().is_empty())
            .map(|((seed, name), nat)| FencerRecord {
                name: name.clone(),
                nationality: nat.clone(),
                seed: *seed,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bout(f1: &str, f2: &str, w: &str) -> Match {
        Match { round: s!("T8"), fencer1: s!(f1), fencer2: s!(f2), winner: s!(w), score: s!("15-4") }
    }

    #[test]
    fn parses_entrant_with_nationality() {
        let e = Entrant::parse("(3) Dubois Marie FRA").unwrap();
        assert_eq!(e.name, "Dubois Marie");
        assert_eq!(e.seed, 3);
        assert_eq!(e.nationality, "FRA");
    }

    #[test]
    fn parses_entrant_without_nationality() {
        let e = Entrant::parse("(12) VAN DER BERG Anna").unwrap();
        assert_eq!(e.name, "VAN DER BERG Anna");
        assert_eq!(e.seed, 12);
        assert_eq!(e.nationality, "");
        assert_eq!(Entrant::parse("(7)").unwrap().name, "");
    }

    #[test]
    fn non_entrants_do_not_parse() {
        assert_eq!(Entrant::parse("15-3"), None);
        assert_eq!(Entrant::parse("- BYE -"), None);
        assert_eq!(Entrant::parse(""), None);
    }

    #[test]
    fn match_rows_carry_clean_names() {
        let m = bout("(48) PROKHODOV Kirill KAZ", "(17) LEE Min USA", "(17) LEE Min USA");
        let row = MatchRow::from(&m);
        assert_eq!(row.fencer1, "PROKHODOV Kirill");
        assert_eq!(row.fencer1_nationality, "KAZ");
        assert_eq!(row.fencer2, "LEE Min");
        assert_eq!(row.winner, "LEE Min");
        assert_eq!(row.score, "15-4");
        assert_eq!(row.to_row().len(), MatchRow::HEADERS.len());
    }

    #[test]
    fn roster_is_deduped_filtered_and_seed_sorted() {
        let ms = vec![
            bout("(10) ZED Ann ITA", "(2) BEE Bo GBR", "(2) BEE Bo GBR"),
            bout("(2) BEE Bo GBR", "(1) AY Al USA", "(1) AY Al USA"),
            bout("(1) AY Al USA", "(33) PLACEHOLDER", "(1) AY Al USA"),
            bout("(4) SAME Seed FRA", "(4) OTHER Name GER", "(4) SAME Seed FRA"),
        ];
        let roster = FencerRegistry::from_matches(&ms).roster();
        let got: Vec<(u32, &str, &str)> = roster
            .iter()
            .map(|r| (r.seed, r.name.as_str(), r.nationality.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (1, "AY Al", "USA"),
                (2, "BEE Bo", "GBR"),
                (4, "OTHER Name", "GER"),
                (4, "SAME Seed", "FRA"),
                (10, "ZED Ann", "ITA"),
            ]
        );
    }

    #[test]
    fn later_nationality_fills_an_earlier_bare_entry() {
        let ms = vec![
            bout("(1) AY Al", "(2) B C GBR", "(1) AY Al"),
            bout("(1) AY Al USA", "(9) Z Q FRA", "(1) AY Al USA"),
            bout("(9) Z Q", "(2) B C GBR", "(2) B C GBR"),
        ];
        let roster = FencerRegistry::from_matches(&ms).roster();
        let got: Vec<(u32, &str, &str)> = roster
            .iter()
            .map(|r| (r.seed, r.name.as_str(), r.nationality.as_str()))
            .collect();
        assert_eq!(got, vec![(1, "AY Al", "USA"), (2, "B C", "GBR"), (9, "Z Q", "FRA")]);
    }
}
