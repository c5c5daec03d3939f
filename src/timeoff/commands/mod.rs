use crate::config::TimeoffConfig;
use crate::model::LeaveRecord;
use std::path::PathBuf;

pub mod apply;
pub mod config;
pub mod edit;
pub mod helpers;
pub mod history;
pub mod home;
pub mod remove;

#[derive(Debug, Clone)]
pub struct TimeoffPaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<LeaveRecord>,
    pub affected: Vec<LeaveRecord>,
    pub summary: Option<home::LeaveSummary>,
    pub config: Option<TimeoffConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<LeaveRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_summary(mut self, summary: home::LeaveSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: TimeoffConfig) -> Self {
        self.config = Some(config);
        self
    }
}
