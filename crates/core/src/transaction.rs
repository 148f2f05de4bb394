// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The candidate transaction record.
//!
//! Transactions are the sole output of the billing engine. They are
//! created fresh per bill-run invocation and never updated in place;
//! corrections are modeled as new reversing transactions.

use serde::{Deserialize, Serialize};
use sroc_bill_domain::{Loss, WaterSource};
use time::Date;
use uuid::Uuid;

/// Whether a transaction is a standard or compensation charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    /// The standard water abstraction charge.
    Standard,
    /// The compensation charge paired with a standard charge for
    /// non-water-undertaker licences.
    Compensation,
}

impl ChargeType {
    /// Returns the string representation of the charge type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Compensation => "compensation",
        }
    }
}

/// The lifecycle status of a transaction.
///
/// The engine only ever emits candidates; later states belong to the
/// bill-run orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Freshly generated, not yet sent for charging.
    Candidate,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
        }
    }
}

/// The charge scheme a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Standard rules of charge, April 2022 onward.
    Sroc,
}

impl Scheme {
    /// Returns the string representation of the scheme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sroc => "sroc",
        }
    }
}

/// A candidate billing transaction line.
///
/// One record per standard charge and, for non-water-undertaker charge
/// references, one paired compensation record identical except for
/// `charge_type`, `description`, and its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction's unique identifier, freshly generated.
    pub id: Uuid,
    /// The bill licence the transaction is attached to, once assigned.
    pub bill_licence_id: Option<Uuid>,
    /// The charge reference the transaction was generated from.
    pub charge_reference_id: Uuid,
    /// Standard or compensation charge.
    pub charge_type: ChargeType,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// The charge scheme.
    pub scheme: Scheme,
    /// True for a credit (reversing) line, false for a debit.
    pub credit: bool,
    /// True when the licence is newly added to billing.
    pub new_licence: bool,
    /// True when the licence holder is a water undertaker.
    pub water_undertaker: bool,
    /// Days of the billing period inside the abstraction windows.
    pub authorised_days: u32,
    /// Days of the charge period inside the abstraction windows.
    pub billable_days: u32,
    /// The charge period start date.
    pub start_date: Date,
    /// The charge period end date.
    pub end_date: Date,
    /// The source of the abstracted water.
    pub source: WaterSource,
    /// The loss category.
    pub loss: Loss,
    /// The line description shown on the invoice.
    pub description: String,
    /// The annual volume in megalitres.
    pub volume: f64,
    /// The authorised annual quantity in megalitres.
    pub authorised_quantity: f64,
    /// The billable annual quantity in megalitres.
    pub billable_quantity: f64,
    /// Aggregate proportion factor, 1 when no adjustment applies.
    pub aggregate_factor: f64,
    /// General charge adjustment factor, 1 when no adjustment applies.
    pub adjustment_factor: f64,
    /// Section 126 abatement factor, 1 when no adjustment applies.
    pub section_126_factor: f64,
    /// Whether a section 127 two-part tariff agreement applies.
    pub section_127_agreement: bool,
    /// Whether a section 130 canal and river trust agreement applies.
    pub section_130_agreement: bool,
    /// Whether the winter-only discount applies.
    pub winter_only: bool,
    /// Whether a supported source charge applies.
    pub supported_source: bool,
    /// Name of the supported source, when one applies.
    pub supported_source_name: Option<String>,
    /// Whether the water company charge applies.
    pub water_company_charge: bool,
    /// The charge category reference code.
    pub charge_category_code: String,
    /// The charge category description.
    pub charge_category_description: String,
    /// JSON snapshot of the originating charge elements.
    pub purposes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_type_as_str() {
        assert_eq!(ChargeType::Standard.as_str(), "standard");
        assert_eq!(ChargeType::Compensation.as_str(), "compensation");
    }

    #[test]
    fn test_status_and_scheme_as_str() {
        assert_eq!(TransactionStatus::Candidate.as_str(), "candidate");
        assert_eq!(Scheme::Sroc.as_str(), "sroc");
    }
}
