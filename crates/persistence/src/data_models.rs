// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable data carriers and column conversion helpers.
//!
//! Dates are stored as ISO 8601 calendar dates (`YYYY-MM-DD`) and UUIDs
//! as their hyphenated text form so the schema stays identical across
//! backends.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use uuid::Uuid;

use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Serializable representation of a licence row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceData {
    pub licence_id: Uuid,
    pub licence_ref: String,
    pub water_undertaker: bool,
    pub include_in_sroc_billing: bool,
}

/// Serializable representation of a bill run row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRunData {
    pub bill_run_id: Uuid,
    pub region: String,
    pub status: String,
    pub scheme: String,
}

/// Formats a date for text column storage.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a date from its text column form.
///
/// # Errors
///
/// Returns an error if the value is not a valid calendar date.
pub(crate) fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| {
        PersistenceError::SerializationError(format!("invalid date '{value}': {e}"))
    })
}

/// Narrows a day count for integer column storage.
///
/// # Errors
///
/// Returns an error if the count exceeds the column range.
pub(crate) fn day_count_to_column(days: u32) -> Result<i32, PersistenceError> {
    days.to_i32().ok_or_else(|| {
        PersistenceError::SerializationError(format!("day count {days} exceeds column range"))
    })
}

/// Widens a day count read from an integer column.
///
/// # Errors
///
/// Returns an error if the stored value is negative.
pub(crate) fn day_count_from_column(value: i32) -> Result<u32, PersistenceError> {
    value.to_u32().ok_or_else(|| {
        PersistenceError::SerializationError(format!("invalid day count {value}"))
    })
}

/// Parses a UUID from its text column form.
///
/// # Errors
///
/// Returns an error if the value is not a valid UUID.
pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, PersistenceError> {
    Uuid::parse_str(value).map_err(|e| {
        PersistenceError::SerializationError(format!("invalid uuid '{value}': {e}"))
    })
}
