use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryRepository;
use crate::model::ScanRecord;
use crate::screen::history::HistoryScreen;
use crate::store::KeyValueStore;
use crate::swipe::{SwipeEffect, DELETE_ANIMATION, RETURN_ANIMATION};

use super::helpers::record_at;

/// Swipe the row at `index` by `dx` pixels.
///
/// A swipe past the threshold asks `confirm`; only a confirmed swipe deletes.
pub fn run<S, F>(store: &S, index: usize, dx: f32, row_width: f32, confirm: F) -> Result<CmdResult>
where
    S: KeyValueStore,
    F: FnOnce(&ScanRecord) -> bool,
{
    let target = record_at(&HistoryRepository::new(store), index)?;
    let ts = target.timestamp;

    let mut screen = HistoryScreen::new(HistoryRepository::new(store), row_width);
    screen.focus();

    let mut result = CmdResult::default();
    match screen.swipe(ts, dx) {
        Some(SwipeEffect::ShowConfirm) => {
            if confirm(&target) {
                screen.confirm(ts);
                let deleted = screen.advance(DELETE_ANIMATION)?;
                if deleted.contains(&ts) {
                    result.add_message(CmdMessage::success(format!(
                        "Deleted ({}): {}",
                        index, target.data
                    )));
                    result.affected_records.push(target);
                }
            } else {
                screen.cancel(ts);
                screen.advance(RETURN_ANIMATION)?;
                result.add_message(CmdMessage::info("Delete cancelled"));
            }
        }
        _ => {
            screen.advance(RETURN_ANIMATION)?;
            result.add_message(CmdMessage::info(format!(
                "Swipe of {}px did not reach the delete threshold",
                dx
            )));
        }
    }
    Ok(result)
}
