// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Licence queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use uuid::Uuid;

use crate::data_models::{LicenceData, parse_uuid};
use crate::diesel_schema::licences;
use crate::error::PersistenceError;

/// Diesel Queryable struct for licence rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = licences)]
struct LicenceRow {
    licence_id: String,
    licence_ref: String,
    water_undertaker: i32,
    include_in_sroc_billing: i32,
}

impl LicenceRow {
    fn into_data(self) -> Result<LicenceData, PersistenceError> {
        Ok(LicenceData {
            licence_id: parse_uuid(&self.licence_id)?,
            licence_ref: self.licence_ref,
            water_undertaker: self.water_undertaker != 0,
            include_in_sroc_billing: self.include_in_sroc_billing != 0,
        })
    }
}

backend_fn! {
/// Retrieves a licence by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the licence is not found.
pub fn get_licence(
    conn: &mut _,
    licence_id: Uuid,
) -> Result<Option<LicenceData>, PersistenceError> {
    debug!("Looking up licence {}", licence_id);

    let result: Result<LicenceRow, diesel::result::Error> = licences::table
        .filter(licences::licence_id.eq(licence_id.to_string()))
        .select(LicenceRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_data()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists licences flagged for SROC supplementary billing, ordered by
/// licence reference.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_flagged_licences(conn: &mut _) -> Result<Vec<LicenceData>, PersistenceError> {
    let rows: Vec<LicenceRow> = licences::table
        .filter(licences::include_in_sroc_billing.eq(1))
        .order(licences::licence_ref.asc())
        .select(LicenceRow::as_select())
        .load(conn)?;

    rows.into_iter().map(LicenceRow::into_data).collect()
}
}
