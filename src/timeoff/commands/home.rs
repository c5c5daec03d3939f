use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::LeaveRecord;
use crate::store::KeyValueStore;

use super::helpers::load_records;

/// What the dashboard shows: the overall count and the latest applications,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveSummary {
    pub total: usize,
    pub recent: Vec<LeaveRecord>,
}

pub fn run<S: KeyValueStore>(store: &S, recent_limit: usize) -> Result<CmdResult> {
    let records = load_records(store);
    let summary = LeaveSummary {
        total: records.len(),
        recent: records.iter().rev().take(recent_limit).cloned().collect(),
    };
    Ok(CmdResult::default().with_summary(summary))
}
