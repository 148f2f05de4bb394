// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and date derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Abstraction period month is outside 1-12.
    InvalidAbstractionMonth {
        /// The invalid month value.
        month: u8,
    },
    /// Abstraction period day is invalid for its month.
    InvalidAbstractionDay {
        /// The invalid day value.
        day: u8,
        /// The month the day was paired with.
        month: u8,
    },
    /// A period's start date falls after its end date.
    InvalidPeriod {
        /// The period start date.
        start_date: time::Date,
        /// The period end date.
        end_date: time::Date,
    },
    /// Financial year ending value cannot form a valid 1 Apr - 31 Mar window.
    InvalidFinancialYearEnding(i32),
    /// Water source string is not recognized.
    InvalidSource(String),
    /// Loss category string is not recognized.
    InvalidLoss(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAbstractionMonth { month } => {
                write!(
                    f,
                    "Invalid abstraction period month: {month}. Must be between 1 and 12"
                )
            }
            Self::InvalidAbstractionDay { day, month } => {
                write!(
                    f,
                    "Invalid abstraction period day: {day} is not a valid day in month {month}"
                )
            }
            Self::InvalidPeriod {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid period: start date {start_date} falls after end date {end_date}"
                )
            }
            Self::InvalidFinancialYearEnding(year) => {
                write!(f, "Invalid financial year ending: {year}")
            }
            Self::InvalidSource(msg) => write!(f, "Invalid water source: {msg}"),
            Self::InvalidLoss(msg) => write!(f, "Invalid loss category: {msg}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
