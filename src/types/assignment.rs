//! The giver → receiver mapping.

use std::collections::BTreeMap;

use crate::types::MemberId;

/// A giver → receiver mapping.
///
/// Produced by [`crate::engine::generate`], or built by hand from pairs or
/// a `BTreeMap` and checked with [`crate::validation::validate`].
///
/// Iteration is always in ascending giver order.
///
/// ## Example
///
/// ```
/// use family_gift_exchange::types::Assignment;
///
/// let assignment: Assignment = [(0, 1), (1, 0)].into_iter().collect();
/// assert_eq!(assignment.receiver_of(0), Some(1));
/// assert_eq!(assignment.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    pairs: BTreeMap<MemberId, MemberId>,
}

impl Assignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Receiver assigned to `giver`
    #[inline]
    pub fn receiver_of(&self, giver: MemberId) -> Option<MemberId> {
        self.pairs.get(&giver).copied()
    }

    /// Whether `giver` already has a receiver
    #[inline]
    pub fn has_giver(&self, giver: MemberId) -> bool {
        self.pairs.contains_key(&giver)
    }

    /// Number of (giver, receiver) pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the assignment has no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in ascending giver order
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, MemberId)> + '_ {
        self.pairs.iter().map(|(&g, &r)| (g, r))
    }

    /// Givers in ascending order
    pub fn givers(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.pairs.keys().copied()
    }

    /// Receivers, listed in giver order
    pub fn receivers(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.pairs.values().copied()
    }

    /// Assign `receiver` to `giver`, returning the previous receiver
    pub(crate) fn assign(&mut self, giver: MemberId, receiver: MemberId) -> Option<MemberId> {
        self.pairs.insert(giver, receiver)
    }

    /// Consume the assignment and return the underlying map
    pub fn into_inner(self) -> BTreeMap<MemberId, MemberId> {
        self.pairs
    }
}

impl From<BTreeMap<MemberId, MemberId>> for Assignment {
    fn from(pairs: BTreeMap<MemberId, MemberId>) -> Self {
        Self { pairs }
    }
}

impl FromIterator<(MemberId, MemberId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (MemberId, MemberId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
