use crate::core::io::groups::GroupMapping;
use crate::core::models::table::MismatchTable;
use tracing::{debug, warn};

/// Re-keys every row of `table` under the targeton its pair maps to.
///
/// Pairs missing from the mapping are filed under the empty targeton, which sorts first.
/// The table is re-sorted by `(targeton, pair_id, kind)` afterwards.
pub fn merge_groups(table: &mut MismatchTable, mapping: &GroupMapping) {
    let mut unmapped = 0usize;
    for row in table.rows_mut() {
        let group = match mapping.get(row.key.pair_id()) {
            Some(group) => group.to_string(),
            None => {
                if row.key.kind().is_total() {
                    unmapped += 1;
                }
                String::new()
            }
        };
        row.key.set_group(group);
    }

    if unmapped > 0 {
        warn!(
            pairs = unmapped,
            "Some primer pairs have no targeton; they are listed under an empty targeton."
        );
    }
    table.mark_grouped();
    table.sort_rows_by(|a, b| a.key.cmp(&b.key));
    debug!(rows = table.len(), "Merged targetons into mismatch table.");
}
