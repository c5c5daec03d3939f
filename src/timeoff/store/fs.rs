use super::KeyValueStore;
use crate::error::{Result, TimeoffError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage. Each key is stored as `{key}.json` inside the
/// data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TimeoffError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(TimeoffError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(TimeoffError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("leaveApplications").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.set("leaveApplications", "[]").unwrap();
        assert_eq!(store.get("leaveApplications").unwrap().as_deref(), Some("[]"));

        store.set("leaveApplications", "[{}]").unwrap();
        assert_eq!(store.get("leaveApplications").unwrap().as_deref(), Some("[{}]"));
    }

    #[test]
    fn set_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.set("leaveApplications", "[]").unwrap();
        assert!(root.join("leaveApplications.json").exists());
    }
}
