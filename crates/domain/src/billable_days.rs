// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorised and billable day calculation.
//!
//! For each charge element on a reference, the annual abstraction
//! window is concretized into candidate calendar windows relative to
//! the billing period. Days where a window overlaps the billing period
//! are authorised; days where it overlaps the charge period are
//! billable. Counts are inclusive of both boundary dates and summed
//! across the reference's elements.
//!
//! ## Invariants
//!
//! - `billable_days <= authorised_days` (the charge period never
//!   extends outside the billing period).
//! - An abstraction window fully outside the charge period yields zero
//!   billable days.

use crate::billing_period::BillingPeriod;
use crate::charge::ChargeReference;
use crate::charge_period::ChargePeriod;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Day counts for a charge reference within a billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Days of the billing period inside the abstraction windows.
    pub authorised_days: u32,
    /// Days of the charge period inside the abstraction windows.
    pub billable_days: u32,
}

/// Calculates the authorised and billable day counts for a charge
/// reference, summed over its charge elements.
///
/// # Errors
///
/// Returns an error if an abstraction window cannot be concretized.
pub fn calculate_authorised_and_billable_days(
    charge_period: &ChargePeriod,
    billing_period: &BillingPeriod,
    charge_reference: &ChargeReference,
) -> Result<DayCounts, DomainError> {
    let mut authorised_days: u32 = 0;
    let mut billable_days: u32 = 0;

    for element in charge_reference.elements() {
        for window in element.abstraction_period().concrete_windows(billing_period)? {
            authorised_days += overlapping_days(
                window.start_date(),
                window.end_date(),
                billing_period.start_date(),
                billing_period.end_date(),
            )?;
            billable_days += overlapping_days(
                window.start_date(),
                window.end_date(),
                charge_period.start_date(),
                charge_period.end_date(),
            )?;
        }
    }

    Ok(DayCounts {
        authorised_days,
        billable_days,
    })
}

/// Counts the days two inclusive date ranges have in common.
fn overlapping_days(
    first_start: Date,
    first_end: Date,
    second_start: Date,
    second_end: Date,
) -> Result<u32, DomainError> {
    let start = first_start.max(second_start);
    let end = first_end.min(second_end);

    if start > end {
        return Ok(0);
    }

    let days = (end - start).whole_days() + 1;
    u32::try_from(days).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("counting days between {start} and {end}"),
    })
}
