use crate::error::{Result, ZapError};
use crate::history::HistoryRepository;
use crate::model::ScanRecord;
use crate::presenter::{index_records, present, DisplayRecord, HistoryFilter};
use crate::store::KeyValueStore;

/// The history as the list screen shows it.
///
/// Indexes count over the unfiltered list so a filtered row keeps the
/// number `view`/`delete` accept for it.
pub fn indexed_records<S: KeyValueStore>(
    repo: &HistoryRepository<S>,
    filter: HistoryFilter,
) -> Vec<DisplayRecord> {
    index_records(present(&repo.load_or_empty(), HistoryFilter::All))
        .into_iter()
        .filter(|dr| filter.matches(dr.record.kind))
        .collect()
}

/// Find the record shown at `index` in the unfiltered list.
pub fn record_at<S: KeyValueStore>(repo: &HistoryRepository<S>, index: usize) -> Result<ScanRecord> {
    indexed_records(repo, HistoryFilter::All)
        .into_iter()
        .find(|dr| dr.index == index)
        .map(|dr| dr.record)
        .ok_or_else(|| ZapError::Api(format!("Index {} not found in history", index)))
}
