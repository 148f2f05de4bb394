// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Licence mutations.
//!
//! Licence creation plus the unbilled-licence unflagger: the single
//! conditional bulk update performed by the billing core after a bill
//! run. Transaction boundaries around these calls belong to the
//! bill-run orchestrator.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::LicenceData;
use crate::diesel_schema::{bill_licences, bills, licences};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a licence.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `licence` - The licence to create
///
/// # Errors
///
/// Returns an error if the licence cannot be inserted.
pub fn create_licence(conn: &mut _, licence: &LicenceData) -> Result<(), PersistenceError> {
    debug!("Creating licence {}", licence.licence_ref);

    diesel::insert_into(licences::table)
        .values((
            licences::licence_id.eq(licence.licence_id.to_string()),
            licences::licence_ref.eq(&licence.licence_ref),
            licences::water_undertaker.eq(i32::from(licence.water_undertaker)),
            licences::include_in_sroc_billing.eq(i32::from(licence.include_in_sroc_billing)),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Clears the SROC supplementary billing flag on every licence in
/// `licence_ids` that has no bill licence linked (via its bill) to the
/// given bill run.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `bill_run_id` - The completed bill run
/// * `licence_ids` - The licences the bill run considered
///
/// # Returns
///
/// The number of licence rows updated.
///
/// # Errors
///
/// Returns an error if either statement fails.
pub fn unflag_unbilled_licences(
    conn: &mut _,
    bill_run_id: &str,
    licence_ids: &[String],
) -> Result<usize, PersistenceError> {
    // Licences that did produce a bill licence in this run stay flagged.
    let billed_licence_ids: Vec<String> = bill_licences::table
        .inner_join(bills::table)
        .filter(bills::bill_run_id.eq(bill_run_id))
        .select(bill_licences::licence_id)
        .load::<String>(conn)?;

    let updated = diesel::update(
        licences::table
            .filter(licences::licence_id.eq_any(licence_ids))
            .filter(licences::licence_id.ne_all(&billed_licence_ids))
            .filter(licences::include_in_sroc_billing.eq(1)),
    )
    .set(licences::include_in_sroc_billing.eq(0))
    .execute(conn)?;

    info!(
        "Unflagged {} of {} licences after bill run {}",
        updated,
        licence_ids.len(),
        bill_run_id
    );

    Ok(updated)
}
}
