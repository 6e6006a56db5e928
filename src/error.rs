//! Error kinds for gift exchange generation and validation.
//!
//! Input errors (the first five kinds) mean the family units must be fixed
//! by the caller. Mapping errors come from [`crate::validation`] checks.
//! [`ExchangeError::UnsatisfiableConfiguration`] is an internal invariant
//! violation and is never the caller's fault.

use thiserror::Error;

use crate::types::MemberId;

/// Result alias used throughout the crate
pub type Result<T, E = ExchangeError> = std::result::Result<T, E>;

/// Everything that can go wrong while generating or validating an exchange
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------
    /// Fewer than two family units were supplied
    #[error("at least two family units are required, found {found}")]
    TooFewUnits { found: usize },

    /// A family unit has no members
    #[error("family unit {unit} is empty")]
    InvalidUnit { unit: usize },

    /// A member is listed more than once inside the same unit
    #[error("member {member} is listed more than once in family unit {unit}")]
    InvalidMemberId { unit: usize, member: MemberId },

    /// A member appears in more than one family unit
    #[error("member {member} appears in family units {first_unit} and {second_unit}")]
    DuplicateMemberAcrossUnits {
        member: MemberId,
        first_unit: usize,
        second_unit: usize,
    },

    /// A unit holds more than half the population
    #[error("family unit {unit} has {size} of {total} members, more than half the population")]
    UnitTooLarge { unit: usize, size: usize, total: usize },

    // ------------------------------------------------------------------
    // Mapping validation
    // ------------------------------------------------------------------
    /// A member has no receiver, or a giver/receiver is not a known member
    #[error("member {member} has no receiver or is not part of any family unit")]
    NullGiverOrReceiver { member: MemberId },

    /// A giver is assigned to themselves
    #[error("member {member} is assigned to gift themselves")]
    SelfGift { member: MemberId },

    /// A receiver is assigned to more than one giver
    #[error("member {receiver} receives gifts from both {first_giver} and {second_giver}")]
    DuplicateReceiver {
        receiver: MemberId,
        first_giver: MemberId,
        second_giver: MemberId,
    },

    /// A giver is assigned to a member of their own unit
    #[error("member {giver} is assigned to gift {receiver} from the same family unit {unit}")]
    IntraUnitGift {
        giver: MemberId,
        receiver: MemberId,
        unit: usize,
    },

    // ------------------------------------------------------------------
    // Internal
    // ------------------------------------------------------------------
    /// The conflict resolver found no prior pair to rotate with
    #[error("internal error: no eligible prior giver to resolve a conflict for member {giver}")]
    UnsatisfiableConfiguration { giver: MemberId },
}

impl ExchangeError {
    /// Whether this is an internal invariant violation rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, ExchangeError::UnsatisfiableConfiguration { .. })
    }

    /// Whether this error was raised by input validation
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExchangeError::TooFewUnits { .. }
                | ExchangeError::InvalidUnit { .. }
                | ExchangeError::InvalidMemberId { .. }
                | ExchangeError::DuplicateMemberAcrossUnits { .. }
                | ExchangeError::UnitTooLarge { .. }
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
