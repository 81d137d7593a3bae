use crate::classifier::{BarcodeEvent, ClassifyMode};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryRepository;
use crate::result::ResultView;
use crate::screen::scanner::{ScanChoice, ScannerSession};
use crate::store::KeyValueStore;

/// Handle one scanner detection and the user's answer to the prompt.
///
/// `choice` is `None` when the prompt was dismissed. A failed save is an
/// error unless the scan is also being viewed, in which case the view still
/// happens and the failure is reported as a message.
pub fn run<S: KeyValueStore>(
    store: &S,
    mode: ClassifyMode,
    event: &BarcodeEvent,
    choice: Option<ScanChoice>,
) -> Result<CmdResult> {
    let mut session = ScannerSession::new(mode);
    let mut result = CmdResult::default();
    if session.on_barcode(event).is_none() {
        return Ok(result);
    }

    let Some(choice) = choice else {
        session.reset();
        result.add_message(CmdMessage::info("Scan dismissed"));
        return Ok(result);
    };

    let plan = session.choose(choice);
    if let Some(scan) = plan.save {
        let repo = HistoryRepository::new(store);
        let outcome = repo.save_scan(scan);
        match session.save_finished(&outcome) {
            None => {
                if let Ok(record) = outcome {
                    result.add_message(CmdMessage::success(format!(
                        "Saved {} scan to history",
                        record.kind
                    )));
                    result.affected_records.push(record);
                }
            }
            Some(notice) => {
                if plan.navigate.is_none() {
                    return outcome.map(|_| result);
                }
                result.add_message(CmdMessage::error(format!(
                    "{}: {}",
                    notice.title, notice.message
                )));
            }
        }
    }

    if let Some(nav) = plan.navigate {
        result.view = Some(ResultView::from(nav));
    }
    Ok(result)
}
