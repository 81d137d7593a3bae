use crate::error::Result;
use crate::history::HistoryRepository;
use crate::model::HistoryList;
use crate::presenter::{present, HistoryFilter};
use crate::store::KeyValueStore;
use crate::swipe::{SwipeController, SwipeEffect, SwipeRegistry};
use log::debug;
use std::time::Duration;

/// History screen state.
///
/// `records` only ever holds what the repository last loaded or wrote; the
/// screen never removes a row on its own.
pub struct HistoryScreen<S: KeyValueStore> {
    repo: HistoryRepository<S>,
    filter: HistoryFilter,
    records: HistoryList,
    rows: SwipeRegistry,
}

impl<S: KeyValueStore> HistoryScreen<S> {
    pub fn new(repo: HistoryRepository<S>, row_width: f32) -> Self {
        Self {
            repo,
            filter: HistoryFilter::All,
            records: Vec::new(),
            rows: SwipeRegistry::new(row_width),
        }
    }

    /// The screen became visible: reload from storage.
    pub fn focus(&mut self) {
        self.records = self.repo.load_or_empty();
        debug!("history screen loaded {} record(s)", self.records.len());
        self.prune_rows();
    }

    pub fn filter(&self) -> HistoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: HistoryFilter) {
        self.filter = filter;
        self.prune_rows();
    }

    pub fn records(&self) -> &HistoryList {
        &self.records
    }

    pub fn visible(&self) -> HistoryList {
        present(&self.records, self.filter)
    }

    /// True when the empty-state view should be shown.
    pub fn is_empty(&self) -> bool {
        !self.records.iter().any(|r| self.filter.matches(r.kind))
    }

    pub fn row(&mut self, timestamp: i64) -> &mut SwipeController {
        self.rows.row(timestamp)
    }

    pub fn row_state(&self, timestamp: i64) -> Option<&SwipeController> {
        self.rows.get(timestamp)
    }

    /// A complete drag on one row.
    pub fn swipe(&mut self, timestamp: i64, dx: f32) -> Option<SwipeEffect> {
        self.rows.row(timestamp).swipe(dx)
    }

    pub fn confirm(&mut self, timestamp: i64) -> bool {
        self.rows.row(timestamp).confirm()
    }

    pub fn cancel(&mut self, timestamp: i64) -> bool {
        self.rows.row(timestamp).cancel()
    }

    /// Run row animations forward and carry out any deletes they finish.
    ///
    /// Returns the timestamps that were deleted. On a write failure the rows
    /// stay as loaded and the error is returned for the user to see.
    pub fn advance(&mut self, dt: Duration) -> Result<Vec<i64>> {
        let mut finished = Vec::new();
        for ts in self.visible().iter().map(|r| r.timestamp) {
            if let Some(SwipeEffect::Delete(id)) = self.rows.row(ts).advance(dt) {
                finished.push(id);
            }
        }

        let mut deleted = Vec::with_capacity(finished.len());
        for (i, &ts) in finished.iter().enumerate() {
            match self.repo.delete(ts) {
                Ok(list) => {
                    self.records = list;
                    self.rows.remove(ts);
                    deleted.push(ts);
                }
                Err(e) => {
                    // Rows not yet deleted come back; a fresh controller starts idle.
                    for &pending in &finished[i..] {
                        self.rows.remove(pending);
                    }
                    return Err(e);
                }
            }
        }
        self.prune_rows();
        Ok(deleted)
    }

    fn prune_rows(&mut self) {
        let visible: Vec<i64> = self.visible().iter().map(|r| r.timestamp).collect();
        self.rows.retain_visible(&visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::swipe::{SwipePhase, DELETE_ANIMATION};

    const WIDTH: f32 = 360.0;

    fn screen(fixture: &StoreFixture) -> HistoryScreen<&crate::store::memory::InMemoryStore> {
        let mut screen = HistoryScreen::new(HistoryRepository::new(&fixture.store), WIDTH);
        screen.focus();
        screen
    }

    fn two_scans() -> StoreFixture {
        StoreFixture::new()
            .with_url("https://example.com", 100)
            .with_text("hello", 200)
    }

    #[test]
    fn empty_storage_shows_empty_state() {
        let fixture = StoreFixture::new();
        let screen = screen(&fixture);
        assert!(screen.is_empty());
        assert!(screen.visible().is_empty());
    }

    #[test]
    fn corrupt_storage_shows_empty_state() {
        let fixture = StoreFixture::new().with_raw_history("[{");
        assert!(screen(&fixture).is_empty());
    }

    #[test]
    fn filter_narrows_visible_rows() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        assert_eq!(screen.visible().len(), 2);
        assert_eq!(screen.visible()[0].data, "hello");

        screen.set_filter(HistoryFilter::Url);
        let shown = screen.visible();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].data, "https://example.com");
        assert!(!screen.is_empty());
    }

    #[test]
    fn confirmed_swipe_deletes_after_animation() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);

        assert_eq!(screen.swipe(100, -200.0), Some(SwipeEffect::ShowConfirm));
        assert!(screen.confirm(100));
        assert!(screen.advance(DELETE_ANIMATION / 2).unwrap().is_empty());
        assert_eq!(screen.advance(DELETE_ANIMATION).unwrap(), vec![100]);

        assert_eq!(screen.records().len(), 1);
        assert!(screen.row_state(100).is_none());
        let stored = HistoryRepository::new(&fixture.store).load().unwrap();
        assert_eq!(&stored, screen.records());
    }

    #[test]
    fn cancelled_swipe_keeps_record() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        screen.swipe(200, -200.0);
        assert!(screen.cancel(200));
        assert!(screen.advance(Duration::from_secs(1)).unwrap().is_empty());
        assert_eq!(screen.records().len(), 2);
        assert_eq!(screen.row_state(200).map(|r| r.phase()), Some(SwipePhase::Idle));
    }

    #[test]
    fn write_failure_keeps_rows_as_loaded() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        screen.swipe(100, -200.0);
        screen.confirm(100);

        fixture.store.set_simulate_write_error(true);
        assert!(screen.advance(DELETE_ANIMATION).is_err());
        assert_eq!(screen.records().len(), 2);
        assert!(screen.row_state(100).is_none());

        fixture.store.set_simulate_write_error(false);
        screen.focus();
        assert_eq!(screen.records().len(), 2);
    }

    #[test]
    fn write_failure_releases_every_finished_row() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        for ts in [100, 200] {
            assert_eq!(screen.swipe(ts, -200.0), Some(SwipeEffect::ShowConfirm));
            assert!(screen.confirm(ts));
        }

        fixture.store.set_simulate_write_error(true);
        assert!(screen.advance(DELETE_ANIMATION).is_err());
        assert!(screen.row_state(100).is_none());
        assert!(screen.row_state(200).is_none());
        assert_eq!(screen.records().len(), 2);

        // Both rows answer to a new swipe once writes work again.
        fixture.store.set_simulate_write_error(false);
        for ts in [100, 200] {
            assert_eq!(screen.swipe(ts, -200.0), Some(SwipeEffect::ShowConfirm));
            assert!(screen.confirm(ts));
        }
        let mut deleted = screen.advance(DELETE_ANIMATION).unwrap();
        deleted.sort_unstable();
        assert_eq!(deleted, vec![100, 200]);
        assert!(screen.records().is_empty());
    }

    #[test]
    fn refocus_picks_up_external_saves() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        HistoryRepository::new(&fixture.store)
            .save_scan(crate::model::ScanData::text("new"))
            .unwrap();
        assert_eq!(screen.records().len(), 2);
        screen.focus();
        assert_eq!(screen.records().len(), 3);
    }

    #[test]
    fn filtering_drops_hidden_row_controllers() {
        let fixture = two_scans();
        let mut screen = screen(&fixture);
        screen.swipe(200, -50.0);
        assert!(screen.row_state(200).is_some());
        screen.set_filter(HistoryFilter::Url);
        assert!(screen.row_state(200).is_none());
    }
}
