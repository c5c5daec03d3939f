use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimeoffError};
use crate::model::{LeaveDraft, LeaveRecord};
use crate::store::KeyValueStore;
use crate::validation::validate;

use super::helpers::{load_records, save_records};

/// Replace the record at `index` (0-based, stored order) and persist the
/// collection. The records around it keep their positions.
pub fn update_at<S: KeyValueStore>(
    store: &mut S,
    index: usize,
    record: LeaveRecord,
) -> Result<Vec<LeaveRecord>> {
    let mut records = load_records(store);
    if index >= records.len() {
        return Err(TimeoffError::IndexOutOfBounds {
            index,
            len: records.len(),
        });
    }
    records[index] = record;
    save_records(store, &records)?;
    Ok(records)
}

pub fn run<S: KeyValueStore>(store: &mut S, index: usize, draft: LeaveDraft) -> Result<CmdResult> {
    let record = validate(&draft)?;
    update_at(store, index, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Leave application updated ({}): {}",
        index + 1,
        record.name
    )));
    result.affected.push(record);
    Ok(result)
}
