// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod abstraction_period;
mod billable_days;
mod billing_period;
mod charge;
mod charge_period;
mod error;
mod minimum_charge;

#[cfg(test)]
mod tests;

pub use abstraction_period::{AbstractionPeriod, AbstractionWindow};
pub use billable_days::{DayCounts, calculate_authorised_and_billable_days};
pub use billing_period::{
    BillingPeriod, SROC_FIRST_FIN_YEAR_ENDING, determine_billing_periods,
};
pub use charge_period::{ChargePeriod, determine_charge_period};
pub use minimum_charge::triggers_minimum_charge;

// Re-export public types
pub use charge::{
    AdditionalCharges, Adjustments, ChangeReason, ChargeCategory, ChargeElement, ChargeReference,
    ChargeVersion, Loss, WaterSource, resolve_adjustment_factor,
};
pub use error::DomainError;
