use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::KeyValueStore;

use super::helpers::load_records;

/// List every leave application in stored (application) order.
pub fn run<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_records(load_records(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{apply, remove};
    use crate::model::LeaveDraft;
    use crate::store::memory::fixtures::{sample_record, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_records_in_stored_order() {
        let fixture = StoreFixture::new().with_records(&[
            sample_record("Alice"),
            sample_record("Bob"),
            sample_record("Carol"),
        ]);

        let records = run(&fixture.store).unwrap().records;
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().records.is_empty());
    }

    #[test]
    fn corrupt_blob_lists_nothing() {
        let fixture = StoreFixture::new().with_blob("{ definitely not json");
        assert!(run(&fixture.store).unwrap().records.is_empty());
    }

    #[test]
    fn wrong_shape_blob_lists_nothing() {
        let fixture = StoreFixture::new().with_blob(r#"{"a": 1}"#);
        assert!(run(&fixture.store).unwrap().records.is_empty());
    }

    #[test]
    fn apply_then_remove_leaves_an_empty_history() {
        let mut store = InMemoryStore::new();
        let draft = LeaveDraft {
            name: Some("Alice".to_string()),
            leave_type: Some("Sick".to_string()),
            start_date: Some("2024-01-10".to_string()),
            end_date: Some("2024-01-10".to_string()),
            reason: Some("flu".to_string()),
        };

        apply::run(&mut store, draft).unwrap();
        assert_eq!(run(&store).unwrap().records.len(), 1);

        remove::run(&mut store, 0).unwrap();
        assert!(run(&store).unwrap().records.is_empty());
    }
}
