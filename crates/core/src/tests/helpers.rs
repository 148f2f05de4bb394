// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sroc_bill_domain::{
    AbstractionPeriod, AdditionalCharges, Adjustments, BillingPeriod, ChargeCategory,
    ChargeElement, ChargePeriod, ChargeReference, Loss, WaterSource,
};
use time::macros::date;
use uuid::Uuid;

pub fn create_test_billing_period() -> BillingPeriod {
    BillingPeriod::from_financial_year_ending(2023).unwrap()
}

pub fn create_test_charge_period() -> ChargePeriod {
    ChargePeriod::new(date!(2022 - 04 - 01), date!(2023 - 03 - 31)).unwrap()
}

pub fn create_test_element() -> ChargeElement {
    ChargeElement::new(
        Uuid::new_v4(),
        String::from("Spray irrigation - direct"),
        AbstractionPeriod::new(1, 1, 31, 12).unwrap(),
        32.5,
    )
}

pub fn create_test_reference(adjustments: Adjustments) -> ChargeReference {
    create_test_reference_with(adjustments, AdditionalCharges::default())
}

pub fn create_test_reference_with(
    adjustments: Adjustments,
    additional_charges: AdditionalCharges,
) -> ChargeReference {
    ChargeReference::new(
        Uuid::new_v4(),
        String::from("River Severn at Bewdley"),
        WaterSource::NonTidal,
        Loss::Medium,
        32.5,
        ChargeCategory::new(
            String::from("4.5.12"),
            String::from("Medium loss, non-tidal, up to and including 50 ML/yr"),
        ),
        adjustments,
        additional_charges,
        vec![create_test_element()],
    )
}
