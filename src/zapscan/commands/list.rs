use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::HistoryRepository;
use crate::presenter::HistoryFilter;
use crate::store::KeyValueStore;

use super::helpers::indexed_records;

pub fn run<S: KeyValueStore>(store: &S, filter: HistoryFilter) -> Result<CmdResult> {
    let repo = HistoryRepository::new(store);
    Ok(CmdResult::default().with_listed_records(indexed_records(&repo, filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScanKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first() {
        let fixture = StoreFixture::new()
            .with_url("https://example.com", 1)
            .with_text("hello", 2);
        let result = run(&fixture.store, HistoryFilter::All).unwrap();
        let data: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.data.as_str())
            .collect();
        assert_eq!(data, vec!["hello", "https://example.com"]);
        assert_eq!(result.listed_records[0].index, 1);
    }

    #[test]
    fn filters_by_kind() {
        let fixture = StoreFixture::new()
            .with_url("https://example.com", 1)
            .with_text("hello", 2);
        let result = run(&fixture.store, HistoryFilter::Url).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.kind, ScanKind::Url);
        assert_eq!(result.listed_records[0].index, 2);
    }

    #[test]
    fn corrupt_history_lists_empty() {
        let fixture = StoreFixture::new().with_raw_history("not json");
        let result = run(&fixture.store, HistoryFilter::All).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
