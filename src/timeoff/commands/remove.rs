use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimeoffError};
use crate::model::LeaveRecord;
use crate::store::KeyValueStore;

use super::helpers::{load_records, save_records};

/// Remove the record at `index` (0-based, stored order) and persist the
/// collection. Later records shift down one position.
pub fn remove_at<S: KeyValueStore>(
    store: &mut S,
    index: usize,
) -> Result<(LeaveRecord, Vec<LeaveRecord>)> {
    let mut records = load_records(store);
    if index >= records.len() {
        return Err(TimeoffError::IndexOutOfBounds {
            index,
            len: records.len(),
        });
    }
    let removed = records.remove(index);
    save_records(store, &records)?;
    Ok((removed, records))
}

pub fn run<S: KeyValueStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let (removed, _) = remove_at(store, index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Leave application removed ({}): {}",
        index + 1,
        removed.name
    )));
    result.affected.push(removed);
    Ok(result)
}
