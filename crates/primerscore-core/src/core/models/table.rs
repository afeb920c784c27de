use super::histogram::Histogram;
use super::ids::{PairId, RowKind};
use std::cmp::Ordering;

/// Identifies one row of the mismatch table.
///
/// Whether a targeton level is present is decided once, when the table is built or
/// merged, and is carried by the variant rather than re-derived on every access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Pair {
        pair_id: PairId,
        kind: RowKind,
    },
    Grouped {
        group: String,
        pair_id: PairId,
        kind: RowKind,
    },
}

impl RowKey {
    pub fn pair_id(&self) -> &PairId {
        match self {
            RowKey::Pair { pair_id, .. } | RowKey::Grouped { pair_id, .. } => pair_id,
        }
    }

    pub fn kind(&self) -> RowKind {
        match self {
            RowKey::Pair { kind, .. } | RowKey::Grouped { kind, .. } => *kind,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            RowKey::Pair { .. } => None,
            RowKey::Grouped { group, .. } => Some(group),
        }
    }

    /// Files this row under `new_group`, replacing any previous group.
    pub fn set_group(&mut self, new_group: String) {
        match self {
            RowKey::Grouped { group, .. } => *group = new_group,
            RowKey::Pair { pair_id, kind } => {
                *self = RowKey::Grouped {
                    group: new_group,
                    pair_id: pair_id.clone(),
                    kind: *kind,
                };
            }
        }
    }
}

impl Ord for RowKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group()
            .cmp(&other.group())
            .then_with(|| self.pair_id().cmp(other.pair_id()))
            .then_with(|| self.kind().cmp(&other.kind()))
    }
}

impl PartialOrd for RowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchRow {
    pub key: RowKey,
    pub histogram: Histogram,
    /// Only ever set on `Total` rows, and only after scoring.
    pub score: Option<u64>,
}

impl MismatchRow {
    pub fn new(key: RowKey, histogram: Histogram) -> Self {
        Self {
            key,
            histogram,
            score: None,
        }
    }
}

/// The aggregated result of one iPCRess file.
///
/// Built once by the accumulator, then annotated in place by the targeton merger, the
/// scorer and the ranker before being handed read-only to a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchTable {
    tolerance: u32,
    rows: Vec<MismatchRow>,
    grouped: bool,
    scored: bool,
}

impl MismatchTable {
    /// Creates a table from rows, sorting them into key order.
    pub fn new(tolerance: u32, mut rows: Vec<MismatchRow>) -> Self {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        let grouped = rows.first().is_some_and(|r| r.key.group().is_some());
        Self {
            tolerance,
            rows,
            grouped,
            scored: false,
        }
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Number of mismatch buckets in every row.
    pub fn bucket_count(&self) -> usize {
        Histogram::width_for(self.tolerance)
    }

    pub fn rows(&self) -> &[MismatchRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [MismatchRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    pub fn row(&self, pair_id: &str, kind: RowKind) -> Option<&MismatchRow> {
        self.rows
            .iter()
            .find(|r| r.key.pair_id().as_str() == pair_id && r.key.kind() == kind)
    }

    pub fn score_of(&self, pair_id: &str) -> Option<u64> {
        self.row(pair_id, RowKind::Total).and_then(|r| r.score)
    }

    pub(crate) fn mark_grouped(&mut self) {
        self.grouped = true;
    }

    pub(crate) fn mark_scored(&mut self) {
        self.scored = true;
    }

    pub(crate) fn sort_rows_by<F>(&mut self, compare: F)
    where
        F: FnMut(&MismatchRow, &MismatchRow) -> Ordering,
    {
        self.rows.sort_by(compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(pair: &str, kind: RowKind) -> RowKey {
        RowKey::Pair {
            pair_id: PairId::from(pair),
            kind,
        }
    }

    #[test]
    fn new_table_sorts_rows_by_pair_then_kind() {
        let rows = vec![
            MismatchRow::new(key("p2", RowKind::A), Histogram::new(1)),
            MismatchRow::new(key("p1", RowKind::Total), Histogram::new(1)),
            MismatchRow::new(key("p1", RowKind::A), Histogram::new(1)),
            MismatchRow::new(key("p1", RowKind::B), Histogram::new(1)),
        ];
        let table = MismatchTable::new(1, rows);

        let order: Vec<_> = table
            .rows()
            .iter()
            .map(|r| (r.key.pair_id().as_str(), r.key.kind()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("p1", RowKind::A),
                ("p1", RowKind::B),
                ("p1", RowKind::Total),
                ("p2", RowKind::A),
            ]
        );
        assert!(!table.is_grouped());
        assert!(!table.is_scored());
        assert_eq!(table.bucket_count(), 3);
    }

    #[test]
    fn grouped_keys_order_by_group_first() {
        let mut a = key("p1", RowKind::A);
        a.set_group("T2".to_string());
        let mut b = key("p9", RowKind::Total);
        b.set_group("T1".to_string());
        assert_eq!(b.cmp(&a), Ordering::Less);
        assert_eq!(a.group(), Some("T2"));
        assert_eq!(a.pair_id().as_str(), "p1");
        assert_eq!(a.kind(), RowKind::A);
    }

    #[test]
    fn regrouping_replaces_existing_group() {
        let mut k = key("p1", RowKind::B);
        k.set_group("old".to_string());
        k.set_group("new".to_string());
        assert_eq!(k.group(), Some("new"));
    }
}
