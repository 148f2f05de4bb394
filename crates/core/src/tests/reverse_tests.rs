// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_billing_period, create_test_charge_period, create_test_reference,
};
use crate::{generate_transactions, reverse_transactions};
use sroc_bill_domain::Adjustments;
use uuid::Uuid;

fn generated_pair() -> Vec<crate::Transaction> {
    generate_transactions(
        &create_test_reference(Adjustments::default()),
        &create_test_billing_period(),
        &create_test_charge_period(),
        false,
        false,
    )
    .unwrap()
}

#[test]
fn test_reverse_flips_credit_and_assigns_bill_licence() {
    let transactions = generated_pair();
    let bill_licence_id = Uuid::new_v4();
    let reversals = reverse_transactions(&transactions, bill_licence_id);

    assert_eq!(reversals.len(), transactions.len());
    for (original, reversal) in transactions.iter().zip(&reversals) {
        assert_ne!(original.id, reversal.id);
        assert_eq!(reversal.bill_licence_id, Some(bill_licence_id));
        assert_eq!(reversal.credit, !original.credit);
        assert_eq!(reversal.description, original.description);
        assert_eq!(reversal.billable_days, original.billable_days);
        assert_eq!(reversal.charge_type, original.charge_type);
    }
}

#[test]
fn test_reverse_preserves_order() {
    let transactions = generated_pair();
    let reversals = reverse_transactions(&transactions, Uuid::new_v4());

    let original_types: Vec<_> = transactions.iter().map(|t| t.charge_type).collect();
    let reversed_types: Vec<_> = reversals.iter().map(|t| t.charge_type).collect();
    assert_eq!(original_types, reversed_types);
}

#[test]
fn test_reverse_twice_restores_credit_flags() {
    let transactions = generated_pair();
    let bill_licence_id = Uuid::new_v4();

    let once = reverse_transactions(&transactions, bill_licence_id);
    let twice = reverse_transactions(&once, bill_licence_id);

    for (original, restored) in transactions.iter().zip(&twice) {
        assert_eq!(original.credit, restored.credit);
    }
}

#[test]
fn test_reverse_empty_input() {
    assert!(reverse_transactions(&[], Uuid::new_v4()).is_empty());
}
