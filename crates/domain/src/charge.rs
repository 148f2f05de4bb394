// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Charge version, charge reference, and charge element data model.
//!
//! These types are read-only inputs to the billing engine; they are
//! owned by the licensing subsystem and supplied fully populated.
//! The legacy schema stored `adjustments` and `additionalCharges` as
//! untyped JSON blobs; here they are explicit records with named
//! optional fields so the default-coercion rules are checked at
//! compile time.

use crate::abstraction_period::AbstractionPeriod;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Resolves an optional numeric adjustment to a multiplicative factor.
///
/// An absent adjustment, or a stored zero (legacy data used `0` as a
/// "not set" marker), resolves to the identity factor `1.0`.
#[must_use]
pub fn resolve_adjustment_factor(value: Option<f64>) -> f64 {
    match value {
        Some(factor) if factor.abs() > f64::EPSILON => factor,
        _ => 1.0,
    }
}

/// The source of the abstracted water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterSource {
    /// Tidal water source.
    Tidal,
    /// Non-tidal water source.
    NonTidal,
}

impl WaterSource {
    /// Parses a water source from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid source.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "tidal" => Ok(Self::Tidal),
            "non-tidal" => Ok(Self::NonTidal),
            _ => Err(DomainError::InvalidSource(format!(
                "'{s}' is not a valid water source"
            ))),
        }
    }

    /// Returns the string representation of the water source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tidal => "tidal",
            Self::NonTidal => "non-tidal",
        }
    }
}

/// The loss category of a charge reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loss {
    /// High loss.
    High,
    /// Medium loss.
    Medium,
    /// Low loss.
    Low,
}

impl Loss {
    /// Parses a loss category from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(DomainError::InvalidLoss(format!(
                "'{s}' is not a valid loss category"
            ))),
        }
    }

    /// Returns the string representation of the loss category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Adjustments applied to a charge reference.
///
/// Numeric adjustments are optional; an absent or zero value resolves
/// to the identity factor via [`resolve_adjustment_factor`]. Agreement
/// flags default to false. Upstream data quality varies, so partial
/// records are tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Adjustments {
    /// Aggregate proportion adjustment.
    pub aggregate: Option<f64>,
    /// General charge adjustment.
    pub charge: Option<f64>,
    /// Section 126 abatement factor.
    pub s126: Option<f64>,
    /// Section 127 two-part tariff agreement.
    pub s127: bool,
    /// Section 130 canal and river trust agreement.
    pub s130: bool,
    /// Winter-only abstraction discount.
    pub winter: bool,
}

impl Adjustments {
    /// Returns the aggregate factor, defaulting to 1.
    #[must_use]
    pub fn aggregate_factor(&self) -> f64 {
        resolve_adjustment_factor(self.aggregate)
    }

    /// Returns the charge adjustment factor, defaulting to 1.
    #[must_use]
    pub fn charge_factor(&self) -> f64 {
        resolve_adjustment_factor(self.charge)
    }

    /// Returns the section 126 factor, defaulting to 1.
    #[must_use]
    pub fn section_126_factor(&self) -> f64 {
        resolve_adjustment_factor(self.s126)
    }
}

/// Additional charges applied to a charge reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdditionalCharges {
    /// Name of the supported source, when one applies.
    pub supported_source_name: Option<String>,
    /// Whether the water company charge applies.
    pub water_company_charge: bool,
}

impl AdditionalCharges {
    /// Returns true if a supported source charge applies.
    #[must_use]
    pub const fn is_supported_source(&self) -> bool {
        self.supported_source_name.is_some()
    }
}

/// The charge category a reference was matched to, from the national
/// charge reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeCategory {
    /// The charge category reference code (e.g. "4.5.12").
    reference: String,
    /// The short description of the category.
    short_description: String,
}

impl ChargeCategory {
    /// Creates a new charge category.
    #[must_use]
    pub const fn new(reference: String, short_description: String) -> Self {
        Self {
            reference,
            short_description,
        }
    }

    /// Returns the charge category reference code.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the short description of the category.
    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }
}

/// A charge element (charge purpose in the legacy schema): the unit
/// carrying an annual abstraction period and an authorised quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeElement {
    /// The charge element's unique identifier.
    id: Uuid,
    /// Description of the abstraction purpose.
    description: String,
    /// The annual abstraction window.
    abstraction_period: AbstractionPeriod,
    /// The authorised annual quantity in megalitres.
    authorised_annual_quantity: f64,
}

impl ChargeElement {
    /// Creates a new charge element.
    #[must_use]
    pub const fn new(
        id: Uuid,
        description: String,
        abstraction_period: AbstractionPeriod,
        authorised_annual_quantity: f64,
    ) -> Self {
        Self {
            id,
            description,
            abstraction_period,
            authorised_annual_quantity,
        }
    }

    /// Returns the charge element's unique identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the description of the abstraction purpose.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the annual abstraction window.
    #[must_use]
    pub const fn abstraction_period(&self) -> AbstractionPeriod {
        self.abstraction_period
    }

    /// Returns the authorised annual quantity in megalitres.
    #[must_use]
    pub const fn authorised_annual_quantity(&self) -> f64 {
        self.authorised_annual_quantity
    }
}

/// A charge reference: the chargeable unit linking a licence's charge
/// version to pricing factors and purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeReference {
    /// The charge reference's unique identifier.
    id: Uuid,
    /// The licence holder's description of the reference.
    description: String,
    /// The source of the abstracted water.
    source: WaterSource,
    /// The loss category.
    loss: Loss,
    /// The annual volume in megalitres.
    volume: f64,
    /// The matched charge category.
    charge_category: ChargeCategory,
    /// Adjustments applied to the reference.
    adjustments: Adjustments,
    /// Additional charges applied to the reference.
    additional_charges: AdditionalCharges,
    /// The charge elements belonging to the reference.
    elements: Vec<ChargeElement>,
}

impl ChargeReference {
    /// Creates a new charge reference.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: Uuid,
        description: String,
        source: WaterSource,
        loss: Loss,
        volume: f64,
        charge_category: ChargeCategory,
        adjustments: Adjustments,
        additional_charges: AdditionalCharges,
        elements: Vec<ChargeElement>,
    ) -> Self {
        Self {
            id,
            description,
            source,
            loss,
            volume,
            charge_category,
            adjustments,
            additional_charges,
            elements,
        }
    }

    /// Returns the charge reference's unique identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the licence holder's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the source of the abstracted water.
    #[must_use]
    pub const fn source(&self) -> WaterSource {
        self.source
    }

    /// Returns the loss category.
    #[must_use]
    pub const fn loss(&self) -> Loss {
        self.loss
    }

    /// Returns the annual volume in megalitres.
    #[must_use]
    pub const fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the matched charge category.
    #[must_use]
    pub const fn charge_category(&self) -> &ChargeCategory {
        &self.charge_category
    }

    /// Returns the adjustments applied to the reference.
    #[must_use]
    pub const fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Returns the additional charges applied to the reference.
    #[must_use]
    pub const fn additional_charges(&self) -> &AdditionalCharges {
        &self.additional_charges
    }

    /// Returns the charge elements belonging to the reference.
    #[must_use]
    pub fn elements(&self) -> &[ChargeElement] {
        &self.elements
    }
}

/// The reason a charge version superseded its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReason {
    /// Description of the change reason.
    description: String,
    /// Whether this change reason triggers a minimum charge.
    triggers_minimum_charge: bool,
}

impl ChangeReason {
    /// Creates a new change reason.
    #[must_use]
    pub const fn new(description: String, triggers_minimum_charge: bool) -> Self {
        Self {
            description,
            triggers_minimum_charge,
        }
    }

    /// Returns the description of the change reason.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if this change reason triggers a minimum charge.
    #[must_use]
    pub const fn triggers_minimum_charge(&self) -> bool {
        self.triggers_minimum_charge
    }
}

/// A charge version: a licence's charging arrangement over a validity
/// window, carrying one or more charge references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeVersion {
    /// The charge version's unique identifier.
    id: Uuid,
    /// The identifier of the licence this version belongs to.
    licence_id: Uuid,
    /// The date the version takes effect (inclusive).
    start_date: Date,
    /// The date the version ceases to apply (inclusive), if ended.
    end_date: Option<Date>,
    /// The reason this version superseded its predecessor, if recorded.
    change_reason: Option<ChangeReason>,
    /// The charge references belonging to the version.
    references: Vec<ChargeReference>,
}

impl ChargeVersion {
    /// Creates a new charge version.
    #[must_use]
    pub const fn new(
        id: Uuid,
        licence_id: Uuid,
        start_date: Date,
        end_date: Option<Date>,
        change_reason: Option<ChangeReason>,
        references: Vec<ChargeReference>,
    ) -> Self {
        Self {
            id,
            licence_id,
            start_date,
            end_date,
            change_reason,
            references,
        }
    }

    /// Returns the charge version's unique identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the identifier of the licence this version belongs to.
    #[must_use]
    pub const fn licence_id(&self) -> Uuid {
        self.licence_id
    }

    /// Returns the date the version takes effect.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the date the version ceases to apply, if ended.
    #[must_use]
    pub const fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    /// Returns the reason this version superseded its predecessor.
    #[must_use]
    pub const fn change_reason(&self) -> Option<&ChangeReason> {
        self.change_reason.as_ref()
    }

    /// Returns the charge references belonging to the version.
    #[must_use]
    pub fn references(&self) -> &[ChargeReference] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_adjustment_factor_absent_defaults_to_one() {
        assert!((resolve_adjustment_factor(None) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_adjustment_factor_zero_defaults_to_one() {
        assert!((resolve_adjustment_factor(Some(0.0)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_adjustment_factor_present_passes_through() {
        assert!((resolve_adjustment_factor(Some(0.75)) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_water_source_parse_round_trip() {
        assert_eq!(WaterSource::parse("tidal"), Ok(WaterSource::Tidal));
        assert_eq!(WaterSource::parse("non-tidal"), Ok(WaterSource::NonTidal));
        assert_eq!(WaterSource::Tidal.as_str(), "tidal");
        assert_eq!(WaterSource::NonTidal.as_str(), "non-tidal");
    }

    #[test]
    fn test_water_source_parse_invalid() {
        assert!(WaterSource::parse("estuary").is_err());
    }

    #[test]
    fn test_loss_parse_round_trip() {
        assert_eq!(Loss::parse("high"), Ok(Loss::High));
        assert_eq!(Loss::parse("medium"), Ok(Loss::Medium));
        assert_eq!(Loss::parse("low"), Ok(Loss::Low));
        assert_eq!(Loss::Medium.as_str(), "medium");
    }

    #[test]
    fn test_loss_parse_invalid() {
        assert!(Loss::parse("very-high").is_err());
    }

    #[test]
    fn test_adjustments_default_is_identity() {
        let adjustments = Adjustments::default();
        assert!((adjustments.aggregate_factor() - 1.0).abs() < f64::EPSILON);
        assert!((adjustments.charge_factor() - 1.0).abs() < f64::EPSILON);
        assert!((adjustments.section_126_factor() - 1.0).abs() < f64::EPSILON);
        assert!(!adjustments.s127);
        assert!(!adjustments.s130);
        assert!(!adjustments.winter);
    }

    #[test]
    fn test_additional_charges_supported_source() {
        let none = AdditionalCharges::default();
        assert!(!none.is_supported_source());

        let some = AdditionalCharges {
            supported_source_name: Some("Severn".to_string()),
            water_company_charge: false,
        };
        assert!(some.is_supported_source());
    }
}
