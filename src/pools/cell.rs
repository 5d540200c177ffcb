// src/pools/cell.rs
use std::sync::LazyLock;

use regex::Regex;

static RESULT_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([VD])([0-9]{1,2})$").expect("pool cell pattern"));

/// One cell of a pool result matrix, from the row fencer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolCell {
    Victory(u32),
    Defeat(u32),
}

impl PoolCell {
    /// `None` for blanks, the diagonal, and anything off-grammar.
    pub fn parse(raw: &str) -> Option<Self> {
        let c = RESULT_CELL.captures(raw.trim())?;
        let touches = c[2].parse().ok()?;
        match &c[1] {
            "V" => Some(PoolCell::Victory(touches)),
            _ => Some(PoolCell::Defeat(touches)),
        }
    }

    pub fn touches(self) -> u32 {
        match self {
            PoolCell::Victory(t) | PoolCell::Defeat(t) => t,
        }
    }

    pub fn is_victory(self) -> bool {
        matches!(self, PoolCell::Victory(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers() {
        assert_eq!(PoolCell::parse("V5"), Some(PoolCell::Victory(5)));
        assert_eq!(PoolCell::parse(" D12 "), Some(PoolCell::Defeat(12)));
        assert_eq!(PoolCell::parse("V0").map(PoolCell::touches), Some(0));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "V", "X3", "V123", "v5", "D-1", "5", "V 5", "V\u{665}"] {
            assert_eq!(PoolCell::parse(raw), None, "{raw:?}");
        }
    }
}
