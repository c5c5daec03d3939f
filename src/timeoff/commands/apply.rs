use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{LeaveDraft, LeaveRecord};
use crate::store::KeyValueStore;
use crate::validation::validate;

use super::helpers::{load_records, save_records};

/// Append a record to the end of the collection and persist it.
/// Returns the collection as written.
pub fn append<S: KeyValueStore>(store: &mut S, record: LeaveRecord) -> Result<Vec<LeaveRecord>> {
    let mut records = load_records(store);
    records.push(record);
    save_records(store, &records)?;
    Ok(records)
}

pub fn run<S: KeyValueStore>(store: &mut S, draft: LeaveDraft) -> Result<CmdResult> {
    let record = validate(&draft)?;
    let records = append(store, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Leave application recorded ({}): {}, {}",
        records.len(),
        record.name,
        record.leave_type.label()
    )));
    result.affected.push(record);
    Ok(result)
}
