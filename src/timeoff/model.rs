use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The categories a leave application can fall into.
///
/// The serialized form is the capitalized variant name ("Sick", "Casual",
/// "Earned"), which is also what the persisted blob contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    Sick,
    Casual,
    Earned,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Sick, LeaveType::Casual, LeaveType::Earned];

    /// Canonical stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
            LeaveType::Earned => "Earned",
        }
    }

    /// Human-facing label, as shown in listings.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
            LeaveType::Earned => "Earned Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    // Accepts any casing; the canonical capitalized value is what gets stored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sick" => Ok(LeaveType::Sick),
            "casual" => Ok(LeaveType::Casual),
            "earned" => Ok(LeaveType::Earned),
            _ => Err(format!("Invalid leave type: {}", s.trim())),
        }
    }
}

/// One submitted leave application.
///
/// Field names are camelCased on the wire so the persisted blob reads
/// `name` / `leaveType` / `startDate` / `endDate` / `reason`, with dates as
/// ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveRecord {
    /// Length of the leave in days, inclusive of both endpoints.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A candidate application as collected from a form: every field may still
/// be missing, and dates are raw text until validation parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveDraft {
    pub name: Option<String>,
    pub leave_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
}

impl From<&LeaveRecord> for LeaveDraft {
    /// Prefills a draft from an existing record, for edit flows.
    fn from(record: &LeaveRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            leave_type: Some(record.leave_type.to_string()),
            start_date: Some(record.start_date.to_string()),
            end_date: Some(record.end_date.to_string()),
            reason: Some(record.reason.clone()),
        }
    }
}
