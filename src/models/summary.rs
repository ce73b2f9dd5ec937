use std::collections::BTreeMap;

/// Test name excluded from the adjusted total.
pub const ADM_LABEL: &str = "Adm";

/// Aggregate result of one counting run.
///
/// Computed fresh per run from the filtered record set and never mutated
/// after creation. `label_counts` uses a `BTreeMap` so iteration order, and
/// with it the log output, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_count: usize,
    pub adm_count: usize,
    /// `total_count` minus `adm_count`; never negative by construction.
    pub adjusted_count: usize,
    pub label_counts: BTreeMap<String, usize>,
}

impl Summary {
    /// Build a summary from the counts of one run.
    ///
    /// `adm_count` must not exceed `total_count`; the aggregator guarantees
    /// this because the Adm rows are a subset of the counted rows.
    pub fn new(
        total_count: usize,
        adm_count: usize,
        label_counts: BTreeMap<String, usize>,
    ) -> Self {
        Self { total_count, adm_count, adjusted_count: total_count - adm_count, label_counts }
    }
}
