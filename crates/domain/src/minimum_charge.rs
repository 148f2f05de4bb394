// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Minimum charge determination.

use crate::charge::{ChangeReason, ChargeVersion};
use crate::charge_period::determine_charge_period;
use crate::error::DomainError;

/// Determines whether a charge version triggers a minimum charge in the
/// financial year ending in the given calendar year.
///
/// A minimum charge applies iff the derived charge period starts on the
/// version's own start date (the version is not a carry-over from a
/// prior year) and the version's change reason is flagged as triggering
/// one. A version with no overlap in the financial year never triggers
/// a minimum charge.
///
/// # Errors
///
/// Returns an error if the financial year window cannot be constructed.
pub fn triggers_minimum_charge(
    charge_version: &ChargeVersion,
    financial_year_ending: u16,
) -> Result<bool, DomainError> {
    let Some(charge_period) = determine_charge_period(charge_version, financial_year_ending)?
    else {
        return Ok(false);
    };

    let reason_triggers = charge_version
        .change_reason()
        .is_some_and(ChangeReason::triggers_minimum_charge);

    Ok(reason_triggers && charge_period.start_date() == charge_version.start_date())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Date;
    use time::macros::date;
    use uuid::Uuid;

    fn version(start_date: Date, triggers: Option<bool>) -> ChargeVersion {
        let change_reason =
            triggers.map(|flag| ChangeReason::new("Strategic review of charges".to_string(), flag));
        ChargeVersion::new(Uuid::new_v4(), Uuid::new_v4(), start_date, None, change_reason, vec![])
    }

    #[test]
    fn test_new_version_with_triggering_reason() {
        let charge_version = version(date!(2022 - 05 - 01), Some(true));
        assert!(triggers_minimum_charge(&charge_version, 2023).unwrap());
    }

    #[test]
    fn test_carry_over_version_does_not_trigger() {
        // Started in a prior year, so the charge period is clipped to
        // 1 April and no longer matches the version start.
        let charge_version = version(date!(2021 - 05 - 01), Some(true));
        assert!(!triggers_minimum_charge(&charge_version, 2023).unwrap());
    }

    #[test]
    fn test_non_triggering_reason() {
        let charge_version = version(date!(2022 - 05 - 01), Some(false));
        assert!(!triggers_minimum_charge(&charge_version, 2023).unwrap());
    }

    #[test]
    fn test_missing_change_reason() {
        let charge_version = version(date!(2022 - 05 - 01), None);
        assert!(!triggers_minimum_charge(&charge_version, 2023).unwrap());
    }

    #[test]
    fn test_version_starting_on_financial_year_boundary() {
        let charge_version = version(date!(2022 - 04 - 01), Some(true));
        assert!(triggers_minimum_charge(&charge_version, 2023).unwrap());
    }

    #[test]
    fn test_version_disjoint_from_financial_year() {
        let charge_version = version(date!(2024 - 05 - 01), Some(true));
        assert!(!triggers_minimum_charge(&charge_version, 2023).unwrap());
    }
}
