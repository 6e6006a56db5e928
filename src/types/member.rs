//! Member identifiers and family units.

use std::collections::{BTreeSet, HashMap};

/// Opaque identifier of a gift-exchange participant.
///
/// Identifiers only need to be unique across the whole population;
/// they carry no meaning beyond equality and ordering.
pub type MemberId = u64;

/// A family unit: members that must not be matched with each other.
///
/// Stored as a list for ergonomic construction, treated as a set.
/// Input validation rejects empty units and repeated members.
pub type FamilyUnit = Vec<MemberId>;

/// Union of all family units, in ascending id order.
///
/// # Example
///
/// ```
/// use family_gift_exchange::types::universe;
///
/// let all = universe(&[vec![3, 1], vec![2]]);
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn universe(units: &[FamilyUnit]) -> Vec<MemberId> {
    units
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lookup from member to the index of its family unit.
///
/// Built once per run so that "are these two in the same unit" is O(1).
#[derive(Debug, Clone, Default)]
pub struct UnitIndex {
    unit_of: HashMap<MemberId, usize>,
}

impl UnitIndex {
    /// Index the given units. A member listed in several units keeps its
    /// first unit; input validation reports that case before indexing.
    pub fn new(units: &[FamilyUnit]) -> Self {
        let mut unit_of = HashMap::with_capacity(units.iter().map(Vec::len).sum());
        for (idx, unit) in units.iter().enumerate() {
            for &member in unit {
                unit_of.entry(member).or_insert(idx);
            }
        }
        Self { unit_of }
    }

    /// Index of the unit containing `member`, if it is known
    #[inline]
    pub fn unit_of(&self, member: MemberId) -> Option<usize> {
        self.unit_of.get(&member).copied()
    }

    /// Whether `member` belongs to any unit
    #[inline]
    pub fn contains(&self, member: MemberId) -> bool {
        self.unit_of.contains_key(&member)
    }

    /// Whether both members are known and belong to the same unit
    #[inline]
    pub fn same_unit(&self, a: MemberId, b: MemberId) -> bool {
        match (self.unit_of(a), self.unit_of(b)) {
            (Some(ua), Some(ub)) => ua == ub,
            _ => false,
        }
    }

    /// Total number of indexed members
    #[inline]
    pub fn len(&self) -> usize {
        self.unit_of.len()
    }

    /// Whether no members are indexed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unit_of.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_is_sorted_union() {
        let units = vec![vec![5, 0], vec![3], vec![4, 1, 2]];
        assert_eq!(universe(&units), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_universe_empty() {
        assert!(universe(&[]).is_empty());
    }

    #[test]
    fn test_unit_index_lookup() {
        let index = UnitIndex::new(&[vec![0, 1], vec![2]]);

        assert_eq!(index.unit_of(0), Some(0));
        assert_eq!(index.unit_of(1), Some(0));
        assert_eq!(index.unit_of(2), Some(1));
        assert_eq!(index.unit_of(9), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_unit_index_same_unit() {
        let index = UnitIndex::new(&[vec![0, 1], vec![2]]);

        assert!(index.same_unit(0, 1));
        assert!(!index.same_unit(0, 2));
        // Unknown members are never in the same unit as anyone
        assert!(!index.same_unit(7, 7));
    }

    #[test]
    fn test_unit_index_keeps_first_unit() {
        let index = UnitIndex::new(&[vec![0], vec![0, 1]]);
        assert_eq!(index.unit_of(0), Some(0));
    }
}
