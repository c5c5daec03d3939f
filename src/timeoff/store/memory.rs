use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::helpers::STORAGE_KEY;
    use crate::error::TimeoffError;
    use crate::model::{LeaveDraft, LeaveRecord, LeaveType};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, records: &[LeaveRecord]) -> Self {
            let blob = serde_json::to_string(records).unwrap();
            self.store.set(STORAGE_KEY, &blob).unwrap();
            self
        }

        /// Inject a raw blob, bypassing serialization. Used to simulate
        /// corrupt or foreign storage contents.
        pub fn with_blob(mut self, blob: &str) -> Self {
            self.store.set(STORAGE_KEY, blob).unwrap();
            self
        }
    }

    /// A store whose reads or writes fail, for exercising storage error
    /// handling.
    #[derive(Default)]
    pub struct FailingStore {
        pub fail_reads: bool,
        pub fail_writes: bool,
        inner: InMemoryStore,
    }

    impl FailingStore {
        pub fn failing_reads() -> Self {
            Self {
                fail_reads: true,
                ..Self::default()
            }
        }

        pub fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(TimeoffError::Store("injected storage failure".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(TimeoffError::Store("injected storage failure".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    pub fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    pub fn sample_record(name: &str) -> LeaveRecord {
        LeaveRecord {
            name: name.to_string(),
            leave_type: LeaveType::Sick,
            start_date: date("2024-01-10"),
            end_date: date("2024-01-10"),
            reason: "flu".to_string(),
        }
    }

    pub fn valid_draft() -> LeaveDraft {
        LeaveDraft {
            name: Some("Alice".to_string()),
            leave_type: Some("Sick".to_string()),
            start_date: Some("2024-01-10".to_string()),
            end_date: Some("2024-01-12".to_string()),
            reason: Some("flu".to_string()),
        }
    }
}
