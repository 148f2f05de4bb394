// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Licence creation and lookup tests.

use super::create_test_licence;
use crate::Persistence;
use uuid::Uuid;

#[test]
fn test_create_and_get_licence() {
    let mut db = Persistence::new_in_memory().unwrap();

    let licence = create_test_licence("01/123/456", true);
    db.create_licence(&licence).unwrap();

    let loaded = db.get_licence(licence.licence_id).unwrap();
    assert_eq!(loaded, Some(licence));
}

#[test]
fn test_get_missing_licence_returns_none() {
    let mut db = Persistence::new_in_memory().unwrap();

    let loaded = db.get_licence(Uuid::new_v4()).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_duplicate_licence_id_is_rejected() {
    let mut db = Persistence::new_in_memory().unwrap();

    let licence = create_test_licence("01/123/456", true);
    db.create_licence(&licence).unwrap();

    assert!(db.create_licence(&licence).is_err());
}

#[test]
fn test_list_flagged_licences_filters_and_orders() {
    let mut db = Persistence::new_in_memory().unwrap();

    let flagged_b = create_test_licence("02/222/222", true);
    let flagged_a = create_test_licence("01/111/111", true);
    let unflagged = create_test_licence("03/333/333", false);
    db.create_licence(&flagged_b).unwrap();
    db.create_licence(&flagged_a).unwrap();
    db.create_licence(&unflagged).unwrap();

    let listed = db.list_flagged_licences().unwrap();
    assert_eq!(listed, vec![flagged_a, flagged_b]);
}

#[test]
fn test_water_undertaker_flag_round_trips() {
    let mut db = Persistence::new_in_memory().unwrap();

    let mut licence = create_test_licence("04/444/444", true);
    licence.water_undertaker = true;
    db.create_licence(&licence).unwrap();

    let loaded = db.get_licence(licence.licence_id).unwrap().unwrap();
    assert!(loaded.water_undertaker);
}
