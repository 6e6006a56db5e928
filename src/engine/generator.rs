//! Pool-based assignment construction.
//!
//! ## Algorithm
//!
//! For each family unit, in input order:
//!
//! 1. Build the receiver pool: every member not yet receiving a gift and
//!    not in the current unit.
//! 2. For each giver in the unit, draw a receiver uniformly from the pool
//!    and remove it.
//! 3. When the pool runs dry before the unit is done, hand the giver to the
//!    [conflict resolver](super::resolver).
//!
//! The finished assignment is always run through [`validate`] before it is
//! returned.
//!
//! ## Complexity
//!
//! O(n) per pool build and per conflict resolution, O(n²) worst case
//! overall. There are no retry loops.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::ExchangeConfig;
use crate::engine::resolver::resolve_conflict;
use crate::error::Result;
use crate::types::{universe, Assignment, FamilyUnit, MemberId, UnitIndex};
use crate::validation::{validate, validate_family_units, validate_partial};

/// Generate an assignment with default options.
///
/// Shorthand for `GiftExchange::default().generate(units, rng)`.
///
/// # Example
///
/// ```
/// use family_gift_exchange::engine::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let assignment = generate(&[vec![0], vec![1]], &mut rng).unwrap();
///
/// assert_eq!(assignment.receiver_of(0), Some(1));
/// assert_eq!(assignment.receiver_of(1), Some(0));
/// ```
pub fn generate<R: Rng + ?Sized>(units: &[FamilyUnit], rng: &mut R) -> Result<Assignment> {
    GiftExchange::default().generate(units, rng)
}

/// Gift exchange generator.
///
/// Holds only configuration; every call to [`GiftExchange::generate`]
/// builds a fresh assignment and the random source is passed in per call.
#[derive(Debug, Clone, Default)]
pub struct GiftExchange {
    config: ExchangeConfig,
}

impl GiftExchange {
    /// Create a generator with the given options
    pub fn new(config: ExchangeConfig) -> Self {
        Self { config }
    }

    /// Options in effect
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Assign every member a receiver outside their own family unit.
    ///
    /// # Errors
    ///
    /// - Input errors from [`validate_family_units`]
    /// - [`crate::ExchangeError::UnsatisfiableConfiguration`] if conflict
    ///   resolution fails
    /// - Mapping errors from [`validate`] / [`validate_partial`]
    ///
    /// No partial assignment is returned on error.
    pub fn generate<R: Rng + ?Sized>(&self, units: &[FamilyUnit], rng: &mut R) -> Result<Assignment> {
        let total = validate_family_units(units)?;

        let members = universe(units);
        let index = UnitIndex::new(units);

        let mut assignment = Assignment::new();
        let mut received: HashSet<MemberId> = HashSet::with_capacity(total);
        let mut rotations = 0usize;

        for (unit_idx, unit) in units.iter().enumerate() {
            let mut pool: Vec<MemberId> = members
                .iter()
                .copied()
                .filter(|&m| !received.contains(&m) && index.unit_of(m) != Some(unit_idx))
                .collect();

            debug!(unit = unit_idx, size = unit.len(), pool = pool.len(), "assigning unit");

            for &giver in unit {
                if pool.is_empty() {
                    let rotation = resolve_conflict(giver, &mut assignment, &members, &index, rng)?;
                    received.insert(rotation.new_receiver);
                    rotations += 1;
                } else {
                    let receiver = pool.swap_remove(rng.gen_range(0..pool.len()));
                    assignment.assign(giver, receiver);
                    received.insert(receiver);
                }
            }

            if self.config.verify_partial {
                validate_partial(&assignment, units)?;
            }
        }

        if let Err(err) = validate(&assignment, units) {
            warn!(%err, "generated assignment failed validation");
            return Err(err);
        }

        info!(
            members = total,
            units = units.len(),
            rotations,
            "gift exchange generated"
        );
        Ok(assignment)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
