// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidAbstractionMonth { month: 13 };
    assert_eq!(
        format!("{err}"),
        "Invalid abstraction period month: 13. Must be between 1 and 12"
    );

    let err: DomainError = DomainError::InvalidAbstractionDay { day: 31, month: 4 };
    assert_eq!(
        format!("{err}"),
        "Invalid abstraction period day: 31 is not a valid day in month 4"
    );

    let err: DomainError = DomainError::InvalidPeriod {
        start_date: date!(2023 - 01 - 01),
        end_date: date!(2022 - 01 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid period: start date 2023-01-01 falls after end date 2022-01-01"
    );

    let err: DomainError = DomainError::InvalidFinancialYearEnding(-1);
    assert_eq!(format!("{err}"), "Invalid financial year ending: -1");

    let err: DomainError = DomainError::InvalidSource(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid water source: test");

    let err: DomainError = DomainError::InvalidLoss(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid loss category: test");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("testing"),
    };
    assert_eq!(format!("{err}"), "Date arithmetic overflow while testing");
}
