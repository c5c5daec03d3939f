//! # API Facade
//!
//! The API layer is a thin facade over the command layer. It is the single
//! entry point for all timeoff operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and holds no business logic; that belongs in
//! `commands/*.rs`. It never prints; presentation stays in the binary.
//!
//! ## Generic Over KeyValueStore
//!
//! `TimeoffApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `TimeoffApi<FileStore>`
//! - Testing: `TimeoffApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{LeaveDraft, LeaveRecord};
use crate::store::KeyValueStore;
use crate::validation::{validate, ValidationErrors};

/// The main API facade for timeoff operations.
///
/// Generic over `KeyValueStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct TimeoffApi<S: KeyValueStore> {
    store: S,
    paths: commands::TimeoffPaths,
}

impl<S: KeyValueStore> TimeoffApi<S> {
    pub fn new(store: S, paths: commands::TimeoffPaths) -> Self {
        Self { store, paths }
    }

    /// Check a draft against the application rules without persisting
    /// anything.
    pub fn validate(&self, draft: &LeaveDraft) -> std::result::Result<LeaveRecord, ValidationErrors> {
        validate(draft)
    }

    pub fn apply(&mut self, draft: LeaveDraft) -> Result<commands::CmdResult> {
        commands::apply::run(&mut self.store, draft)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.store)
    }

    pub fn edit(&mut self, index: usize, draft: LeaveDraft) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, index, draft)
    }

    pub fn remove(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, index)
    }

    pub fn home(&self, recent_limit: usize) -> Result<commands::CmdResult> {
        commands::home::run(&self.store, recent_limit)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::TimeoffPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::home::LeaveSummary;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, TimeoffPaths};
pub use crate::validation::Field;
