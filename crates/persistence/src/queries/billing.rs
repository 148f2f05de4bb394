// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transaction queries.
//!
//! Loads persisted candidate transactions back into engine types, the
//! input the reversal generator works from.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use uuid::Uuid;

use crate::data_models::{day_count_from_column, parse_date, parse_uuid};
use crate::diesel_schema::transactions;
use crate::error::PersistenceError;
use sroc_bill::{ChargeType, Scheme, Transaction, TransactionStatus};
use sroc_bill_domain::{Loss, WaterSource};

/// Diesel Queryable struct for transaction rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = transactions)]
struct TransactionRow {
    transaction_id: String,
    bill_licence_id: Option<String>,
    charge_reference_id: String,
    charge_type: String,
    status: String,
    scheme: String,
    credit: i32,
    new_licence: i32,
    water_undertaker: i32,
    authorised_days: i32,
    billable_days: i32,
    start_date: String,
    end_date: String,
    source: String,
    loss: String,
    description: String,
    volume: f64,
    authorised_quantity: f64,
    billable_quantity: f64,
    aggregate_factor: f64,
    adjustment_factor: f64,
    section_126_factor: f64,
    section_127_agreement: i32,
    section_130_agreement: i32,
    winter_only: i32,
    supported_source: i32,
    supported_source_name: Option<String>,
    water_company_charge: i32,
    charge_category_code: String,
    charge_category_description: String,
    purposes: String,
}

fn parse_charge_type(value: &str) -> Result<ChargeType, PersistenceError> {
    match value {
        "standard" => Ok(ChargeType::Standard),
        "compensation" => Ok(ChargeType::Compensation),
        _ => Err(PersistenceError::SerializationError(format!(
            "invalid charge type '{value}'"
        ))),
    }
}

fn parse_status(value: &str) -> Result<TransactionStatus, PersistenceError> {
    match value {
        "candidate" => Ok(TransactionStatus::Candidate),
        _ => Err(PersistenceError::SerializationError(format!(
            "invalid transaction status '{value}'"
        ))),
    }
}

fn parse_scheme(value: &str) -> Result<Scheme, PersistenceError> {
    match value {
        "sroc" => Ok(Scheme::Sroc),
        _ => Err(PersistenceError::SerializationError(format!(
            "invalid scheme '{value}'"
        ))),
    }
}

impl TransactionRow {
    fn into_transaction(self) -> Result<Transaction, PersistenceError> {
        let bill_licence_id = self
            .bill_licence_id
            .as_deref()
            .map(parse_uuid)
            .transpose()?;

        Ok(Transaction {
            id: parse_uuid(&self.transaction_id)?,
            bill_licence_id,
            charge_reference_id: parse_uuid(&self.charge_reference_id)?,
            charge_type: parse_charge_type(&self.charge_type)?,
            status: parse_status(&self.status)?,
            scheme: parse_scheme(&self.scheme)?,
            credit: self.credit != 0,
            new_licence: self.new_licence != 0,
            water_undertaker: self.water_undertaker != 0,
            authorised_days: day_count_from_column(self.authorised_days)?,
            billable_days: day_count_from_column(self.billable_days)?,
            start_date: parse_date(&self.start_date)?,
            end_date: parse_date(&self.end_date)?,
            source: WaterSource::parse(&self.source)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            loss: Loss::parse(&self.loss)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            description: self.description,
            volume: self.volume,
            authorised_quantity: self.authorised_quantity,
            billable_quantity: self.billable_quantity,
            aggregate_factor: self.aggregate_factor,
            adjustment_factor: self.adjustment_factor,
            section_126_factor: self.section_126_factor,
            section_127_agreement: self.section_127_agreement != 0,
            section_130_agreement: self.section_130_agreement != 0,
            winter_only: self.winter_only != 0,
            supported_source: self.supported_source != 0,
            supported_source_name: self.supported_source_name,
            water_company_charge: self.water_company_charge != 0,
            charge_category_code: self.charge_category_code,
            charge_category_description: self.charge_category_description,
            purposes: self.purposes,
        })
    }
}

backend_fn! {
/// Retrieves the transactions attached to a bill licence, ordered by
/// transaction id for deterministic output.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn transactions_for_bill_licence(
    conn: &mut _,
    bill_licence_id: Uuid,
) -> Result<Vec<Transaction>, PersistenceError> {
    let rows: Vec<TransactionRow> = transactions::table
        .filter(transactions::bill_licence_id.eq(bill_licence_id.to_string()))
        .order(transactions::transaction_id.asc())
        .select(TransactionRow::as_select())
        .load(conn)?;

    rows.into_iter().map(TransactionRow::into_transaction).collect()
}
}
