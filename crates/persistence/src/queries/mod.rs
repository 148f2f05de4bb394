// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `billing` — Transaction queries (reversal input)
//! - `licences` — Licence lookup and flagged-licence listing
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic
//! versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate
//! version based on the active backend connection.

pub mod billing;
pub mod licences;

// Re-export backend-specific query functions used by lib.rs
pub use billing::{transactions_for_bill_licence_mysql, transactions_for_bill_licence_sqlite};
pub use licences::{
    get_licence_mysql, get_licence_sqlite, list_flagged_licences_mysql,
    list_flagged_licences_sqlite,
};
