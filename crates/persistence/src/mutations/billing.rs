// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bill run, bill, bill licence, and transaction mutations.
//!
//! Candidate transactions are inserted exactly as the engine produced
//! them; corrections arrive as new reversing transactions, never as
//! updates to existing rows.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::{BillRunData, day_count_to_column, format_date};
use crate::diesel_schema::{bill_licences, bill_runs, bills, transactions};
use crate::error::PersistenceError;
use sroc_bill::Transaction;
use uuid::Uuid;

backend_fn! {
/// Creates a bill run.
///
/// # Errors
///
/// Returns an error if the bill run cannot be inserted.
pub fn create_bill_run(conn: &mut _, bill_run: &BillRunData) -> Result<(), PersistenceError> {
    debug!("Creating bill run {} for region {}", bill_run.bill_run_id, bill_run.region);

    diesel::insert_into(bill_runs::table)
        .values((
            bill_runs::bill_run_id.eq(bill_run.bill_run_id.to_string()),
            bill_runs::region.eq(&bill_run.region),
            bill_runs::status.eq(&bill_run.status),
            bill_runs::scheme.eq(&bill_run.scheme),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Creates a bill within a bill run.
///
/// # Errors
///
/// Returns an error if the bill cannot be inserted.
pub fn create_bill(
    conn: &mut _,
    bill_id: Uuid,
    bill_run_id: Uuid,
    invoice_account: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(bills::table)
        .values((
            bills::bill_id.eq(bill_id.to_string()),
            bills::bill_run_id.eq(bill_run_id.to_string()),
            bills::invoice_account.eq(invoice_account),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Creates a bill licence linking a licence to a bill.
///
/// # Errors
///
/// Returns an error if the bill licence cannot be inserted.
pub fn create_bill_licence(
    conn: &mut _,
    bill_licence_id: Uuid,
    bill_id: Uuid,
    licence_id: Uuid,
) -> Result<(), PersistenceError> {
    diesel::insert_into(bill_licences::table)
        .values((
            bill_licences::bill_licence_id.eq(bill_licence_id.to_string()),
            bill_licences::bill_id.eq(bill_id.to_string()),
            bill_licences::licence_id.eq(licence_id.to_string()),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Inserts candidate transactions.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `batch` - The transactions to insert
///
/// # Returns
///
/// The number of rows inserted.
///
/// # Errors
///
/// Returns an error if a date cannot be formatted or an insert fails.
pub fn insert_transactions(
    conn: &mut _,
    batch: &[Transaction],
) -> Result<usize, PersistenceError> {
    for transaction in batch {
        diesel::insert_into(transactions::table)
            .values((
                transactions::transaction_id.eq(transaction.id.to_string()),
                transactions::bill_licence_id
                    .eq(transaction.bill_licence_id.map(|id| id.to_string())),
                transactions::charge_reference_id
                    .eq(transaction.charge_reference_id.to_string()),
                transactions::charge_type.eq(transaction.charge_type.as_str()),
                transactions::status.eq(transaction.status.as_str()),
                transactions::scheme.eq(transaction.scheme.as_str()),
                transactions::credit.eq(i32::from(transaction.credit)),
                transactions::new_licence.eq(i32::from(transaction.new_licence)),
                transactions::water_undertaker.eq(i32::from(transaction.water_undertaker)),
                transactions::authorised_days
                    .eq(day_count_to_column(transaction.authorised_days)?),
                transactions::billable_days.eq(day_count_to_column(transaction.billable_days)?),
                transactions::start_date.eq(format_date(transaction.start_date)?),
                transactions::end_date.eq(format_date(transaction.end_date)?),
                transactions::source.eq(transaction.source.as_str()),
                transactions::loss.eq(transaction.loss.as_str()),
                transactions::description.eq(&transaction.description),
                transactions::volume.eq(transaction.volume),
                transactions::authorised_quantity.eq(transaction.authorised_quantity),
                transactions::billable_quantity.eq(transaction.billable_quantity),
                transactions::aggregate_factor.eq(transaction.aggregate_factor),
                transactions::adjustment_factor.eq(transaction.adjustment_factor),
                transactions::section_126_factor.eq(transaction.section_126_factor),
                transactions::section_127_agreement
                    .eq(i32::from(transaction.section_127_agreement)),
                transactions::section_130_agreement
                    .eq(i32::from(transaction.section_130_agreement)),
                transactions::winter_only.eq(i32::from(transaction.winter_only)),
                transactions::supported_source.eq(i32::from(transaction.supported_source)),
                transactions::supported_source_name.eq(&transaction.supported_source_name),
                transactions::water_company_charge
                    .eq(i32::from(transaction.water_company_charge)),
                transactions::charge_category_code.eq(&transaction.charge_category_code),
                transactions::charge_category_description
                    .eq(&transaction.charge_category_description),
                transactions::purposes.eq(&transaction.purposes),
            ))
            .execute(conn)?;
    }

    info!("Inserted {} candidate transactions", batch.len());
    Ok(batch.len())
}
}
