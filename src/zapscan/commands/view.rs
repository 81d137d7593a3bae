use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::HistoryRepository;
use crate::result::ResultView;
use crate::store::KeyValueStore;

use super::helpers::record_at;

pub fn run<S: KeyValueStore>(store: &S, index: usize) -> Result<CmdResult> {
    let repo = HistoryRepository::new(store);
    let record = record_at(&repo, index)?;
    let view = ResultView::from(record.scan());
    Ok(CmdResult::default()
        .with_view(view)
        .with_affected_records(vec![record]))
}
