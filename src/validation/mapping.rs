//! Postcondition checks on a giver → receiver mapping.
//!
//! Each check stops at the first violation. The checks only read the
//! mapping, so they work just as well on mappings built outside the engine.

use std::collections::HashMap;

use crate::error::{ExchangeError, Result};
use crate::types::{universe, Assignment, FamilyUnit, MemberId, UnitIndex};

/// Run every check against a complete mapping.
///
/// Order: [`check_complete`], [`check_no_self_gifts`],
/// [`check_unique_receivers`], [`check_no_intra_unit_gifts`].
///
/// # Example
///
/// ```
/// use family_gift_exchange::types::Assignment;
/// use family_gift_exchange::validation::validate;
/// use family_gift_exchange::ExchangeError;
///
/// let units = vec![vec![0], vec![1]];
///
/// let swap: Assignment = [(0, 1), (1, 0)].into_iter().collect();
/// assert!(validate(&swap, &units).is_ok());
///
/// let selfish: Assignment = [(0, 0), (1, 1)].into_iter().collect();
/// assert_eq!(validate(&selfish, &units), Err(ExchangeError::SelfGift { member: 0 }));
/// ```
pub fn validate(assignment: &Assignment, units: &[FamilyUnit]) -> Result<()> {
    let index = UnitIndex::new(units);
    check_complete(assignment, units)?;
    check_no_self_gifts(assignment)?;
    check_unique_receivers(assignment)?;
    check_no_intra_unit_gifts_indexed(assignment, &index)
}

/// Run the checks that hold for a partially built mapping.
///
/// Skips [`check_complete`]; members not yet assigned are not an error.
pub fn validate_partial(assignment: &Assignment, units: &[FamilyUnit]) -> Result<()> {
    check_no_self_gifts(assignment)?;
    check_unique_receivers(assignment)?;
    check_no_intra_unit_gifts(assignment, units)
}

/// Every member has a receiver, and every giver and receiver is a member.
///
/// Fails with [`ExchangeError::NullGiverOrReceiver`].
pub fn check_complete(assignment: &Assignment, units: &[FamilyUnit]) -> Result<()> {
    let index = UnitIndex::new(units);

    for (giver, receiver) in assignment.iter() {
        if !index.contains(giver) {
            return Err(ExchangeError::NullGiverOrReceiver { member: giver });
        }
        if !index.contains(receiver) {
            return Err(ExchangeError::NullGiverOrReceiver { member: receiver });
        }
    }

    match universe(units).into_iter().find(|&m| !assignment.has_giver(m)) {
        Some(member) => Err(ExchangeError::NullGiverOrReceiver { member }),
        None => Ok(()),
    }
}

/// No giver is assigned to themselves.
///
/// Fails with [`ExchangeError::SelfGift`].
pub fn check_no_self_gifts(assignment: &Assignment) -> Result<()> {
    match assignment.iter().find(|(giver, receiver)| giver == receiver) {
        Some((member, _)) => Err(ExchangeError::SelfGift { member }),
        None => Ok(()),
    }
}

/// No two givers share a receiver.
///
/// Fails with [`ExchangeError::DuplicateReceiver`].
pub fn check_unique_receivers(assignment: &Assignment) -> Result<()> {
    let mut seen: HashMap<MemberId, MemberId> = HashMap::with_capacity(assignment.len());

    for (giver, receiver) in assignment.iter() {
        if let Some(&first_giver) = seen.get(&receiver) {
            return Err(ExchangeError::DuplicateReceiver {
                receiver,
                first_giver,
                second_giver: giver,
            });
        }
        seen.insert(receiver, giver);
    }
    Ok(())
}

/// No giver is assigned to a member of their own unit.
///
/// Fails with [`ExchangeError::IntraUnitGift`].
pub fn check_no_intra_unit_gifts(assignment: &Assignment, units: &[FamilyUnit]) -> Result<()> {
    check_no_intra_unit_gifts_indexed(assignment, &UnitIndex::new(units))
}

fn check_no_intra_unit_gifts_indexed(assignment: &Assignment, index: &UnitIndex) -> Result<()> {
    for (giver, receiver) in assignment.iter() {
        if let (Some(giver_unit), Some(receiver_unit)) =
            (index.unit_of(giver), index.unit_of(receiver))
        {
            if giver_unit == receiver_unit {
                return Err(ExchangeError::IntraUnitGift {
                    giver,
                    receiver,
                    unit: giver_unit,
                });
            }
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
