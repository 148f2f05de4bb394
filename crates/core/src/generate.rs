// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate transaction generation.
//!
//! One standard transaction per charge reference with billable days,
//! plus a paired compensation transaction when the licence holder is
//! not a water undertaker. Partial adjustment data is tolerated via
//! default coercion; the only fallible step beyond date derivation is
//! serializing the purposes snapshot.

use crate::error::CoreError;
use crate::transaction::{ChargeType, Scheme, Transaction, TransactionStatus};
use sroc_bill_domain::{
    BillingPeriod, ChargePeriod, ChargeReference, calculate_authorised_and_billable_days,
};
use uuid::Uuid;

const STANDARD_PREFIX: &str = "Water abstraction charge: ";
const TWO_PART_TARIFF_PREFIX: &str = "Two-part tariff basic water abstraction charge: ";
const COMPENSATION_DESCRIPTION: &str = "Compensation charge: calculated from the charge reference, \
    activity description and regional environmental improvement charge; may be reduced by the \
    housing and small business tariff";

/// Generates the candidate transactions for a charge reference within a
/// billing period.
///
/// Returns an empty vector when the reference has no billable days.
/// Otherwise returns the standard transaction and, when the licence
/// holder is not a water undertaker, a paired compensation transaction
/// sharing its day counts and quantities.
///
/// # Errors
///
/// Returns an error if day counting fails or the purposes snapshot
/// cannot be serialized.
pub fn generate_transactions(
    charge_reference: &ChargeReference,
    billing_period: &BillingPeriod,
    charge_period: &ChargePeriod,
    new_licence: bool,
    water_undertaker: bool,
) -> Result<Vec<Transaction>, CoreError> {
    let day_counts =
        calculate_authorised_and_billable_days(charge_period, billing_period, charge_reference)?;
    if day_counts.billable_days == 0 {
        return Ok(Vec::new());
    }

    let adjustments = charge_reference.adjustments();
    let additional_charges = charge_reference.additional_charges();
    let purposes = serde_json::to_string(charge_reference.elements())?;

    let standard = Transaction {
        id: Uuid::new_v4(),
        bill_licence_id: None,
        charge_reference_id: charge_reference.id(),
        charge_type: ChargeType::Standard,
        status: TransactionStatus::Candidate,
        scheme: Scheme::Sroc,
        credit: false,
        new_licence,
        water_undertaker,
        authorised_days: day_counts.authorised_days,
        billable_days: day_counts.billable_days,
        start_date: charge_period.start_date(),
        end_date: charge_period.end_date(),
        source: charge_reference.source(),
        loss: charge_reference.loss(),
        description: standard_description(charge_reference),
        volume: charge_reference.volume(),
        authorised_quantity: charge_reference.volume(),
        billable_quantity: charge_reference.volume(),
        aggregate_factor: adjustments.aggregate_factor(),
        adjustment_factor: adjustments.charge_factor(),
        section_126_factor: adjustments.section_126_factor(),
        section_127_agreement: adjustments.s127,
        section_130_agreement: adjustments.s130,
        winter_only: adjustments.winter,
        supported_source: additional_charges.is_supported_source(),
        supported_source_name: additional_charges.supported_source_name.clone(),
        water_company_charge: additional_charges.water_company_charge,
        charge_category_code: charge_reference.charge_category().reference().to_string(),
        charge_category_description: charge_reference
            .charge_category()
            .short_description()
            .to_string(),
        purposes,
    };

    let mut transactions = vec![standard];

    if !water_undertaker {
        let mut compensation = transactions[0].clone();
        compensation.id = Uuid::new_v4();
        compensation.charge_type = ChargeType::Compensation;
        compensation.description = COMPENSATION_DESCRIPTION.to_string();
        transactions.push(compensation);
    }

    Ok(transactions)
}

/// Builds the standard line description. A section 127 agreement marks
/// the reference as two-part tariff and changes the prefix.
fn standard_description(charge_reference: &ChargeReference) -> String {
    let prefix = if charge_reference.adjustments().s127 {
        TWO_PART_TARIFF_PREFIX
    } else {
        STANDARD_PREFIX
    };

    format!("{prefix}{}", charge_reference.description())
}
