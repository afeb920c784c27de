use std::fmt;
use std::str::FromStr;

/// Label of one primer within a pair, as printed by iPCRess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            other => Err(UnknownSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Second level of a table row key.
///
/// The derived ordering (`A < B < Total`) is the presentation order of the three rows
/// that belong to one primer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowKind {
    A,
    B,
    Total,
}

impl RowKind {
    pub fn is_total(self) -> bool {
        self == RowKind::Total
    }
}

impl From<Side> for RowKind {
    fn from(side: Side) -> Self {
        match side {
            Side::A => RowKind::A,
            Side::B => RowKind::B,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::A => f.write_str("A"),
            RowKind::B => f.write_str("B"),
            RowKind::Total => f.write_str("Total"),
        }
    }
}

/// Opaque primer pair identifier (e.g. `SMARCA4_exon24_1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId(String);

impl PairId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PairId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_only_exact_labels() {
        assert_eq!("A".parse::<Side>(), Ok(Side::A));
        assert_eq!("B".parse::<Side>(), Ok(Side::B));
        assert!("|".parse::<Side>().is_err());
        assert!("a".parse::<Side>().is_err());
        assert!("AB".parse::<Side>().is_err());
    }

    #[test]
    fn row_kinds_order_a_then_b_then_total() {
        let mut kinds = vec![RowKind::Total, RowKind::B, RowKind::A];
        kinds.sort();
        assert_eq!(kinds, vec![RowKind::A, RowKind::B, RowKind::Total]);
        assert_eq!(RowKind::from(Side::B), RowKind::B);
        assert!(RowKind::Total.is_total());
    }
}
