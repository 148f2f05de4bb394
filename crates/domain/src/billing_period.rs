// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Billing period resolution.
//!
//! A billing period is a UK financial year window, 1 April to 31 March.
//! The resolver walks back from the financial year containing a reference
//! date, up to six years, never earlier than the first SROC financial
//! year (ending 2023).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// The first financial year ending in which the SROC charge scheme applies.
pub const SROC_FIRST_FIN_YEAR_ENDING: u16 = 2023;

/// Maximum number of financial years a supplementary bill run looks back.
const LOOK_BACK_YEARS: u16 = 6;

/// Represents a UK financial-year billing period.
///
/// A billing period always runs from 1 April to 31 March. It is created
/// by the resolver and treated as an immutable value everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// The start date of the billing period (always 1 April, inclusive).
    start_date: Date,
    /// The end date of the billing period (always 31 March, inclusive).
    end_date: Date,
}

impl BillingPeriod {
    /// Creates the billing period for the financial year ending in the
    /// given calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year cannot form a valid calendar window.
    pub fn from_financial_year_ending(financial_year_ending: u16) -> Result<Self, DomainError> {
        let end_year = i32::from(financial_year_ending);
        let start_date = Date::from_calendar_date(end_year - 1, Month::April, 1)
            .map_err(|_| DomainError::InvalidFinancialYearEnding(end_year))?;
        let end_date = Date::from_calendar_date(end_year, Month::March, 31)
            .map_err(|_| DomainError::InvalidFinancialYearEnding(end_year))?;

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the start date of the billing period.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the billing period.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the calendar year in which the financial year ends.
    #[must_use]
    pub const fn financial_year_ending(&self) -> i32 {
        self.end_date.year()
    }

    /// Returns the number of calendar days in the billing period,
    /// inclusive of both boundary dates.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns true if the given date falls inside the billing period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Determines the billing periods under consideration for a supplementary
/// bill run anchored at the given reference date.
///
/// The financial year containing the reference date is included, along
/// with up to five preceding years, floored at the first SROC financial
/// year. Periods are ordered earliest-first. A reference date before the
/// SROC scheme began yields an empty list.
///
/// # Errors
///
/// Returns an error if a window cannot be constructed for a year in range.
pub fn determine_billing_periods(
    reference_date: Date,
) -> Result<Vec<BillingPeriod>, DomainError> {
    let current_year = financial_year_ending_for(reference_date);
    if current_year < i32::from(SROC_FIRST_FIN_YEAR_ENDING) {
        return Ok(Vec::new());
    }

    let current = u16::try_from(current_year)
        .map_err(|_| DomainError::InvalidFinancialYearEnding(current_year))?;
    let earliest = SROC_FIRST_FIN_YEAR_ENDING.max(current.saturating_sub(LOOK_BACK_YEARS - 1));

    let mut periods = Vec::with_capacity(usize::from(current - earliest + 1));
    for year in earliest..=current {
        periods.push(BillingPeriod::from_financial_year_ending(year)?);
    }

    Ok(periods)
}

/// Returns the calendar year in which the financial year containing the
/// given date ends. Dates from 1 April onward belong to the financial
/// year ending the following calendar year.
const fn financial_year_ending_for(date: Date) -> i32 {
    if (date.month() as u8) >= (Month::April as u8) {
        date.year() + 1
    } else {
        date.year()
    }
}
