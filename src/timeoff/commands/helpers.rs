use crate::error::{Result, TimeoffError};
use crate::model::LeaveRecord;
use crate::store::KeyValueStore;

/// The key the full collection of leave applications is stored under.
pub const STORAGE_KEY: &str = "leaveApplications";

/// Load every leave application on record.
///
/// A missing, unreadable or unparsable blob reads as an empty collection.
/// History must always render, so read-side failures never surface; the
/// next successful write replaces whatever was there.
pub fn load_records<S: KeyValueStore>(store: &S) -> Vec<LeaveRecord> {
    match store.get(STORAGE_KEY) {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_default(),
        Ok(None) | Err(_) => Vec::new(),
    }
}

/// Persist the full collection, replacing the stored blob.
///
/// Unlike reads, write failures are real errors: the caller promised the
/// user their application was saved.
pub fn save_records<S: KeyValueStore>(store: &mut S, records: &[LeaveRecord]) -> Result<()> {
    let blob = serde_json::to_string_pretty(records).map_err(TimeoffError::Serialization)?;
    store.set(STORAGE_KEY, &blob)
}
