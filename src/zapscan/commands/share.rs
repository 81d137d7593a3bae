use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::HistoryRepository;
use crate::result::ShareRequest;
use crate::store::KeyValueStore;

use super::helpers::record_at;

pub fn run<S: KeyValueStore>(store: &S, index: usize) -> Result<CmdResult> {
    let repo = HistoryRepository::new(store);
    let record = record_at(&repo, index)?;
    let share = ShareRequest::from(&record.scan());
    Ok(CmdResult::default()
        .with_share(share)
        .with_affected_records(vec![record]))
}
