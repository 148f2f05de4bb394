// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reversal generation.
//!
//! Reversals offset previously billed transactions. Each input is
//! cloned with a fresh id, attached to the target bill licence, and its
//! credit flag flipped. Output order matches input order.

use crate::transaction::{Transaction, TransactionStatus};
use uuid::Uuid;

/// Produces offsetting transactions for the given transactions,
/// attached to the target bill licence.
#[must_use]
pub fn reverse_transactions(transactions: &[Transaction], bill_licence_id: Uuid) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|transaction| {
            let mut reversal = transaction.clone();
            reversal.id = Uuid::new_v4();
            reversal.bill_licence_id = Some(bill_licence_id);
            reversal.credit = !transaction.credit;
            reversal.status = TransactionStatus::Candidate;
            reversal
        })
        .collect()
}
