// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod initialization_tests;
mod licence_tests;

use uuid::Uuid;

use crate::{BillRunData, LicenceData, Persistence};
use sroc_bill::{ChargeType, Scheme, Transaction, TransactionStatus};
use sroc_bill_domain::{Loss, WaterSource};
use time::macros::date;

pub fn create_test_licence(licence_ref: &str, flagged: bool) -> LicenceData {
    LicenceData {
        licence_id: Uuid::new_v4(),
        licence_ref: licence_ref.to_string(),
        water_undertaker: false,
        include_in_sroc_billing: flagged,
    }
}

pub fn create_test_bill_run() -> BillRunData {
    BillRunData {
        bill_run_id: Uuid::new_v4(),
        region: String::from("Midlands"),
        status: String::from("processing"),
        scheme: String::from("sroc"),
    }
}

pub fn create_test_transaction(bill_licence_id: Option<Uuid>) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        bill_licence_id,
        charge_reference_id: Uuid::new_v4(),
        charge_type: ChargeType::Standard,
        status: TransactionStatus::Candidate,
        scheme: Scheme::Sroc,
        credit: false,
        new_licence: false,
        water_undertaker: false,
        authorised_days: 365,
        billable_days: 365,
        start_date: date!(2022 - 04 - 01),
        end_date: date!(2023 - 03 - 31),
        source: WaterSource::NonTidal,
        loss: Loss::Medium,
        description: String::from("Water abstraction charge: River Severn at Bewdley"),
        volume: 32.5,
        authorised_quantity: 32.5,
        billable_quantity: 32.5,
        aggregate_factor: 1.0,
        adjustment_factor: 1.0,
        section_126_factor: 1.0,
        section_127_agreement: false,
        section_130_agreement: false,
        winter_only: false,
        supported_source: false,
        supported_source_name: None,
        water_company_charge: false,
        charge_category_code: String::from("4.5.12"),
        charge_category_description: String::from("Medium loss, non-tidal, up to 250 ML/yr"),
        purposes: String::from("[]"),
    }
}

/// Creates a bill run, a bill, and a bill licence for the given licence,
/// returning the identifiers of the bill run and bill licence.
pub fn create_test_billing_chain(db: &mut Persistence, licence_id: Uuid) -> (Uuid, Uuid) {
    let bill_run = create_test_bill_run();
    db.create_bill_run(&bill_run).unwrap();

    let bill_id = Uuid::new_v4();
    db.create_bill(bill_id, bill_run.bill_run_id, "A12345678A")
        .unwrap();

    let bill_licence_id = Uuid::new_v4();
    db.create_bill_licence(bill_licence_id, bill_id, licence_id)
        .unwrap();

    (bill_run.bill_run_id, bill_licence_id)
}
