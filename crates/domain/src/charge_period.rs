// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Charge period derivation.
//!
//! A charge period is the overlap of a charge version's validity window
//! and a financial-year billing period. It is derived, never persisted.

use crate::billing_period::BillingPeriod;
use crate::charge::ChargeVersion;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// The date range during which a charge version is actually in effect
/// within a billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePeriod {
    /// The charge period start date (inclusive).
    start_date: Date,
    /// The charge period end date (inclusive).
    end_date: Date,
}

impl ChargePeriod {
    /// Creates a new charge period.
    ///
    /// # Errors
    ///
    /// Returns an error if the start date falls after the end date.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidPeriod {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the charge period start date.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the charge period end date.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the number of calendar days in the charge period,
    /// inclusive of both boundary dates.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }
}

/// Determines the charge period for a charge version within the
/// financial year ending in the given calendar year.
///
/// The period runs from the later of the financial year start and the
/// version start to the earlier of the financial year end and the
/// version end (an open-ended version runs to the financial year end).
/// Returns `None` when the version's validity window is disjoint from
/// the financial year.
///
/// # Errors
///
/// Returns an error if the financial year window cannot be constructed.
pub fn determine_charge_period(
    charge_version: &ChargeVersion,
    financial_year_ending: u16,
) -> Result<Option<ChargePeriod>, DomainError> {
    let billing_period = BillingPeriod::from_financial_year_ending(financial_year_ending)?;

    let start_date = billing_period.start_date().max(charge_version.start_date());
    let end_date = billing_period
        .end_date()
        .min(charge_version.end_date().unwrap_or_else(|| billing_period.end_date()));

    if start_date > end_date {
        return Ok(None);
    }

    Ok(Some(ChargePeriod::new(start_date, end_date)?))
}
