// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the
//! persistence layer. Every mutation uses Diesel DSL and is generated
//! in backend-specific monomorphic versions via `backend_fn!`.
//!
//! ## Module Organization
//!
//! - `billing` — Bill run, bill, bill licence, and transaction inserts
//! - `licences` — Licence creation and the unbilled-licence unflagger

pub mod billing;
pub mod licences;

// Re-export backend-specific mutation functions used by lib.rs
pub use billing::{
    create_bill_licence_mysql, create_bill_licence_sqlite, create_bill_mysql, create_bill_sqlite,
    create_bill_run_mysql, create_bill_run_sqlite, insert_transactions_mysql,
    insert_transactions_sqlite,
};
pub use licences::{
    create_licence_mysql, create_licence_sqlite, unflag_unbilled_licences_mysql,
    unflag_unbilled_licences_sqlite,
};
