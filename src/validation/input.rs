//! Pre-construction checks on the family-unit partition.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ExchangeError, Result};
use crate::types::{FamilyUnit, MemberId};

/// Minimum number of family units for an exchange
pub const MIN_UNITS: usize = 2;

/// Check that `units` is a partition the engine can always satisfy.
///
/// Fails fast, in this order, with:
///
/// 1. [`ExchangeError::TooFewUnits`] when there are fewer than two units
/// 2. [`ExchangeError::InvalidUnit`] for an empty unit
/// 3. [`ExchangeError::InvalidMemberId`] for a member repeated within a unit
/// 4. [`ExchangeError::DuplicateMemberAcrossUnits`] for the first member
///    seen in a second unit
/// 5. [`ExchangeError::UnitTooLarge`] when `|unit| * 2 > total`
///
/// Returns the total member count on success.
///
/// # Example
///
/// ```
/// use family_gift_exchange::validation::validate_family_units;
/// use family_gift_exchange::ExchangeError;
///
/// assert_eq!(validate_family_units(&[vec![0, 1], vec![2, 3]]), Ok(4));
/// assert_eq!(
///     validate_family_units(&[vec![0, 1]]),
///     Err(ExchangeError::TooFewUnits { found: 1 }),
/// );
/// ```
pub fn validate_family_units(units: &[FamilyUnit]) -> Result<usize> {
    if units.len() < MIN_UNITS {
        return Err(ExchangeError::TooFewUnits { found: units.len() });
    }

    // member -> unit it was first seen in
    let mut seen: HashMap<MemberId, usize> = HashMap::new();

    for (unit_idx, unit) in units.iter().enumerate() {
        if unit.is_empty() {
            return Err(ExchangeError::InvalidUnit { unit: unit_idx });
        }

        for &member in unit {
            match seen.get(&member) {
                Some(&first) if first == unit_idx => {
                    return Err(ExchangeError::InvalidMemberId { unit: unit_idx, member });
                }
                Some(&first) => {
                    return Err(ExchangeError::DuplicateMemberAcrossUnits {
                        member,
                        first_unit: first,
                        second_unit: unit_idx,
                    });
                }
                None => {
                    seen.insert(member, unit_idx);
                }
            }
        }
    }

    let total = seen.len();
    for (unit_idx, unit) in units.iter().enumerate() {
        // Each member of the unit needs a distinct receiver outside it
        if unit.len() * 2 > total {
            return Err(ExchangeError::UnitTooLarge {
                unit: unit_idx,
                size: unit.len(),
                total,
            });
        }
    }

    debug!(units = units.len(), members = total, "family units validated");
    Ok(total)
}

// ============================================================================
// Unit Tests
// ============================================================================
