//! Conflict resolution by three-way rotation.
//!
//! When greedy draws leave a giver `g` with no eligible receiver, an earlier
//! pair `eg → er` (both outside g's unit) is broken up:
//!
//! ```text
//!   before:  eg → er            g → ?
//!   after:   eg → rr            g → er
//! ```
//!
//! where `rr` is a member nobody gives to yet. `er` lies outside g's unit,
//! and `rr` is not yet a receiver, so injectivity and the unit exclusions
//! both survive the rotation.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{ExchangeError, Result};
use crate::types::{Assignment, MemberId, UnitIndex};

/// The pairs rewritten by one conflict resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// The giver that had no eligible receiver
    pub giver: MemberId,
    /// The earlier giver whose receiver was handed over
    pub prior_giver: MemberId,
    /// The receiver moved from `prior_giver` to `giver`
    pub prior_receiver: MemberId,
    /// The previously unclaimed member now received by `prior_giver`
    pub new_receiver: MemberId,
}

/// Assign a receiver to `giver` by rotating an existing pair.
///
/// # Arguments
///
/// * `giver` - Member with no eligible receiver left in its pool
/// * `assignment` - Partial assignment, updated in place on success
/// * `members` - The full member universe
/// * `index` - Member-to-unit lookup for the same universe
/// * `rng` - Random source for picking the pair and the new receiver
///
/// # Errors
///
/// [`ExchangeError::UnsatisfiableConfiguration`] when no prior pair can be
/// rotated. The assignment is left untouched in that case.
pub fn resolve_conflict<R: Rng + ?Sized>(
    giver: MemberId,
    assignment: &mut Assignment,
    members: &[MemberId],
    index: &UnitIndex,
    rng: &mut R,
) -> Result<Rotation> {
    let giver_unit = index.unit_of(giver);

    let taken: HashSet<MemberId> = assignment.receivers().collect();
    let unclaimed: Vec<MemberId> = members
        .iter()
        .copied()
        .filter(|m| !taken.contains(m))
        .collect();

    // Pairs fully outside the giver's unit, whose giver can take at least
    // one unclaimed member without landing in its own unit.
    let eligible: Vec<(MemberId, MemberId)> = assignment
        .iter()
        .filter(|&(g, r)| index.unit_of(g) != giver_unit && index.unit_of(r) != giver_unit)
        .filter(|&(g, _)| unclaimed.iter().any(|&m| m != g && !index.same_unit(g, m)))
        .collect();

    let Some(&(prior_giver, prior_receiver)) = eligible.choose(rng) else {
        warn!(giver, assigned = assignment.len(), "no eligible prior giver for conflict resolution");
        return Err(ExchangeError::UnsatisfiableConfiguration { giver });
    };

    let candidates: Vec<MemberId> = unclaimed
        .into_iter()
        .filter(|&m| m != prior_giver && !index.same_unit(prior_giver, m))
        .collect();
    let Some(&new_receiver) = candidates.choose(rng) else {
        return Err(ExchangeError::UnsatisfiableConfiguration { giver });
    };

    assignment.assign(prior_giver, new_receiver);
    assignment.assign(giver, prior_receiver);

    debug!(
        giver,
        prior_giver,
        prior_receiver,
        new_receiver,
        "resolved conflict by rotation"
    );

    Ok(Rotation {
        giver,
        prior_giver,
        prior_receiver,
        new_receiver,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
