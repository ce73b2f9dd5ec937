//! Date filtering and counting.
//!
//! The aggregator keeps exactly the records whose date falls inside an
//! inclusive [`DateRange`], then counts them into a [`Summary`]: the total,
//! the number of rows labeled `"Adm"`, the per-testname breakdown, and the
//! adjusted total with the Adm rows excluded. Counting is deterministic;
//! wall-clock time never enters the result.
//!
//! Cancellation is polled once per fixed-size batch of records. A set
//! token abandons the run at the next poll point with
//! [`CountError::Cancelled`] and no summary.

mod cancel;

pub use cancel::CancelToken;

use std::collections::BTreeMap;

use crate::error::{CountError, Result};
use crate::models::{ADM_LABEL, DateRange, Record, Summary};

/// Records counted between cancellation polls.
const CANCEL_POLL_BATCH: usize = 10;

/// Filter records to the range and count them into a [`Summary`].
///
/// Both range bounds are inclusive, compared as calendar dates. An inverted
/// range (`start > end`) matches nothing and yields an empty summary.
pub fn aggregate(records: &[Record], range: &DateRange, cancel: &CancelToken) -> Result<Summary> {
    let kept: Vec<&Record> =
        records.iter().filter(|record| range.contains(record.date)).collect();

    let mut total_count = 0usize;
    let mut adm_count = 0usize;
    let mut label_counts: BTreeMap<String, usize> = BTreeMap::new();

    for batch in kept.chunks(CANCEL_POLL_BATCH) {
        if cancel.is_cancelled() {
            return Err(CountError::Cancelled);
        }
        for record in batch {
            total_count += 1;
            if record.label == ADM_LABEL {
                adm_count += 1;
            }
            *label_counts.entry(record.label.clone()).or_insert(0) += 1;
        }
    }

    // A stop request set during the final batch still aborts the run.
    if cancel.is_cancelled() {
        return Err(CountError::Cancelled);
    }

    Ok(Summary::new(total_count, adm_count, label_counts))
}
