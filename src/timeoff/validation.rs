//! Form validation for candidate leave applications.
//!
//! Every rule is evaluated independently so a form can mark all violated
//! fields at once, keyed by the same field names the persisted blob uses.

use crate::model::{LeaveDraft, LeaveRecord, LeaveType};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// A field of the leave form. Ordering follows the form layout, which is
/// also the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    LeaveType,
    StartDate,
    EndDate,
    Reason,
}

impl Field {
    /// The field's name as it appears in the persisted blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::LeaveType => "leaveType",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Reason => "reason",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The violated rules of a rejected candidate, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a candidate application against every rule and, when all pass,
/// produces the record that would be persisted (name and reason trimmed,
/// dates parsed, leave type canonicalized).
pub fn validate(draft: &LeaveDraft) -> std::result::Result<LeaveRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        errors.insert(Field::Name, "Name cannot be empty");
    }

    let leave_type = parse_leave_type(&mut errors, draft.leave_type.as_deref());
    let start_date = parse_date(&mut errors, Field::StartDate, draft.start_date.as_deref(), "Start date");
    let end_date = parse_date(&mut errors, Field::EndDate, draft.end_date.as_deref(), "End date");

    // Only checked when both dates are present and well-formed.
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.insert(Field::EndDate, "End date cannot be before start date");
        }
    }

    let reason = draft.reason.as_deref().map(str::trim).unwrap_or("");
    if reason.is_empty() {
        errors.insert(Field::Reason, "Reason cannot be empty");
    }

    match (leave_type, start_date, end_date) {
        (Some(leave_type), Some(start_date), Some(end_date)) if errors.is_empty() => {
            Ok(LeaveRecord {
                name: name.to_string(),
                leave_type,
                start_date,
                end_date,
                reason: reason.to_string(),
            })
        }
        _ => Err(errors),
    }
}

fn parse_leave_type(errors: &mut ValidationErrors, raw: Option<&str>) -> Option<LeaveType> {
    match raw.map(str::trim).filter(|s| !s.is_empty()).map(str::parse) {
        Some(Ok(leave_type)) => Some(leave_type),
        _ => {
            errors.insert(Field::LeaveType, "Leave type must be Sick, Casual or Earned");
            None
        }
    }
}

fn parse_date(
    errors: &mut ValidationErrors,
    field: Field,
    raw: Option<&str>,
    label: &str,
) -> Option<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()).map(str::parse) {
        Some(Ok(date)) => Some(date),
        _ => {
            errors.insert(field, format!("{} must be a valid date (YYYY-MM-DD)", label));
            None
        }
    }
}
