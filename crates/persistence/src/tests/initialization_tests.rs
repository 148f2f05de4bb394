// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! `SQLite` initialization (connection establishment, migration
//! application, foreign key enforcement) is also exercised implicitly by
//! every persistence test that calls `Persistence::new_in_memory()`.

use super::create_test_licence;
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    // Each in-memory instance should be isolated
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    let licence = create_test_licence("01/123/456", true);
    db1.create_licence(&licence).unwrap();

    assert!(db1.get_licence(licence.licence_id).unwrap().is_some());
    assert!(db2.get_licence(licence.licence_id).unwrap().is_none());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut db = Persistence::new_in_memory().unwrap();
    assert!(db.verify_foreign_key_enforcement().is_ok());
}
