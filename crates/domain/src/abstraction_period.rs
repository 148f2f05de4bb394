// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Annual abstraction periods and their concrete calendar windows.
//!
//! A charge element's abstraction period is a recurring day/month
//! window with no year (e.g. 1 November to 31 March). To count days
//! against a billing period it is concretized into two candidate
//! calendar windows: one anchored so its end falls in the billing
//! period's final calendar year, and the same window shifted back one
//! year. Between them the candidates cover every day of the financial
//! year the recurring window permits.
//!
//! ## Invariants
//!
//! - A window whose end month/day precedes its start month/day wraps
//!   the calendar year end (e.g. 1 Nov - 28 Feb).
//! - 29 February in a non-leap year is clamped to 28 February.

use crate::billing_period::BillingPeriod;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// An annual recurring abstraction window, day/month only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractionPeriod {
    /// The day the window opens (inclusive).
    start_day: u8,
    /// The month the window opens (1-12).
    start_month: u8,
    /// The day the window closes (inclusive).
    end_day: u8,
    /// The month the window closes (1-12).
    end_month: u8,
}

/// A concrete calendar window derived from an annual abstraction period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbstractionWindow {
    /// The window start date (inclusive).
    start_date: Date,
    /// The window end date (inclusive).
    end_date: Date,
}

impl AbstractionWindow {
    /// Returns the window start date.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the window end date.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }
}

impl AbstractionPeriod {
    /// Creates a new abstraction period.
    ///
    /// # Arguments
    ///
    /// * `start_day` - The day the window opens (inclusive)
    /// * `start_month` - The month the window opens (1-12)
    /// * `end_day` - The day the window closes (inclusive)
    /// * `end_month` - The month the window closes (1-12)
    ///
    /// # Errors
    ///
    /// Returns an error if a month is outside 1-12 or a day is not valid
    /// for its month. 29 February is accepted; it is clamped to 28
    /// February when concretized into a non-leap year.
    pub fn new(
        start_day: u8,
        start_month: u8,
        end_day: u8,
        end_month: u8,
    ) -> Result<Self, DomainError> {
        validate_day_month(start_day, start_month)?;
        validate_day_month(end_day, end_month)?;

        Ok(Self {
            start_day,
            start_month,
            end_day,
            end_month,
        })
    }

    /// Returns the day the window opens.
    #[must_use]
    pub const fn start_day(&self) -> u8 {
        self.start_day
    }

    /// Returns the month the window opens.
    #[must_use]
    pub const fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Returns the day the window closes.
    #[must_use]
    pub const fn end_day(&self) -> u8 {
        self.end_day
    }

    /// Returns the month the window closes.
    #[must_use]
    pub const fn end_month(&self) -> u8 {
        self.end_month
    }

    /// Returns true if the window wraps the calendar year end, i.e. its
    /// end month/day precedes its start month/day.
    #[must_use]
    pub const fn wraps_year_end(&self) -> bool {
        self.end_month < self.start_month
            || (self.end_month == self.start_month && self.end_day < self.start_day)
    }

    /// Concretizes the recurring window into its two candidate calendar
    /// windows for the given billing period: one anchored so its end
    /// falls in the billing period's final calendar year, and the same
    /// window one year earlier.
    ///
    /// # Errors
    ///
    /// Returns an error if a concrete date cannot be constructed.
    pub fn concrete_windows(
        &self,
        billing_period: &BillingPeriod,
    ) -> Result<[AbstractionWindow; 2], DomainError> {
        let end_year = billing_period.end_date().year();
        let start_year = if self.wraps_year_end() {
            end_year - 1
        } else {
            end_year
        };

        let anchored = AbstractionWindow {
            start_date: clamped_date(start_year, self.start_month, self.start_day)?,
            end_date: clamped_date(end_year, self.end_month, self.end_day)?,
        };
        let previous = AbstractionWindow {
            start_date: clamped_date(start_year - 1, self.start_month, self.start_day)?,
            end_date: clamped_date(end_year - 1, self.end_month, self.end_day)?,
        };

        Ok([previous, anchored])
    }
}

fn validate_day_month(day: u8, month: u8) -> Result<(), DomainError> {
    let month_value =
        Month::try_from(month).map_err(|_| DomainError::InvalidAbstractionMonth { month })?;

    // Validate against a leap year so 29 February is accepted.
    if day == 0 || day > month_value.length(2000) {
        return Err(DomainError::InvalidAbstractionDay { day, month });
    }

    Ok(())
}

/// Builds a date from year/month/day, clamping the day to the month's
/// length (29 February in a non-leap year becomes 28 February).
fn clamped_date(year: i32, month: u8, day: u8) -> Result<Date, DomainError> {
    let month_value =
        Month::try_from(month).map_err(|_| DomainError::InvalidAbstractionMonth { month })?;
    let clamped = day.min(month_value.length(year));

    Date::from_calendar_date(year, month_value, clamped).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("constructing abstraction window date {year}-{month:02}-{day:02}"),
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_abstraction_period_new_valid() {
        let period = AbstractionPeriod::new(1, 11, 31, 3).unwrap();
        assert_eq!(period.start_day(), 1);
        assert_eq!(period.start_month(), 11);
        assert_eq!(period.end_day(), 31);
        assert_eq!(period.end_month(), 3);
    }

    #[test]
    fn test_abstraction_period_new_invalid_month() {
        let result = AbstractionPeriod::new(1, 13, 31, 3);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::InvalidAbstractionMonth { month: 13 }
        ));
    }

    #[test]
    fn test_abstraction_period_new_invalid_day() {
        let result = AbstractionPeriod::new(31, 4, 30, 9);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::InvalidAbstractionDay { day: 31, month: 4 }
        ));
    }

    #[test]
    fn test_abstraction_period_accepts_leap_day() {
        assert!(AbstractionPeriod::new(1, 11, 29, 2).is_ok());
    }

    #[test]
    fn test_wraps_year_end() {
        assert!(AbstractionPeriod::new(1, 11, 28, 2).unwrap().wraps_year_end());
        assert!(!AbstractionPeriod::new(1, 1, 31, 12).unwrap().wraps_year_end());
        assert!(!AbstractionPeriod::new(1, 4, 31, 10).unwrap().wraps_year_end());
    }

    #[test]
    fn test_concrete_windows_all_year() {
        let period = AbstractionPeriod::new(1, 1, 31, 12).unwrap();
        let billing_period = BillingPeriod::from_financial_year_ending(2023).unwrap();
        let [previous, anchored] = period.concrete_windows(&billing_period).unwrap();

        assert_eq!(anchored.start_date(), date!(2023 - 01 - 01));
        assert_eq!(anchored.end_date(), date!(2023 - 12 - 31));
        assert_eq!(previous.start_date(), date!(2022 - 01 - 01));
        assert_eq!(previous.end_date(), date!(2022 - 12 - 31));
    }

    #[test]
    fn test_concrete_windows_wrapping() {
        let period = AbstractionPeriod::new(1, 11, 28, 2).unwrap();
        let billing_period = BillingPeriod::from_financial_year_ending(2023).unwrap();
        let [previous, anchored] = period.concrete_windows(&billing_period).unwrap();

        assert_eq!(anchored.start_date(), date!(2022 - 11 - 01));
        assert_eq!(anchored.end_date(), date!(2023 - 02 - 28));
        assert_eq!(previous.start_date(), date!(2021 - 11 - 01));
        assert_eq!(previous.end_date(), date!(2022 - 02 - 28));
    }

    #[test]
    fn test_concrete_windows_clamps_leap_day() {
        let period = AbstractionPeriod::new(1, 11, 29, 2).unwrap();

        // FY2023/24 ends in 2024, a leap year: 29 February stands.
        let leap = BillingPeriod::from_financial_year_ending(2024).unwrap();
        let [previous, anchored] = period.concrete_windows(&leap).unwrap();
        assert_eq!(anchored.end_date(), date!(2024 - 02 - 29));
        assert_eq!(previous.end_date(), date!(2023 - 02 - 28));

        // FY2022/23 ends in 2023, not a leap year: clamped to the 28th.
        let plain = BillingPeriod::from_financial_year_ending(2023).unwrap();
        let [_, anchored] = period.concrete_windows(&plain).unwrap();
        assert_eq!(anchored.end_date(), date!(2023 - 02 - 28));
    }
}
