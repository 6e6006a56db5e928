//! Validation of family units and of finished assignments.
//!
//! ## Checks
//!
//! | Stage      | Function                         | Error                          |
//! |------------|----------------------------------|--------------------------------|
//! | Input      | [`validate_family_units`]        | TooFewUnits, InvalidUnit, InvalidMemberId, DuplicateMemberAcrossUnits, UnitTooLarge |
//! | Output     | [`check_complete`]               | NullGiverOrReceiver            |
//! | Output     | [`check_no_self_gifts`]          | SelfGift                       |
//! | Output     | [`check_unique_receivers`]       | DuplicateReceiver              |
//! | Output     | [`check_no_intra_unit_gifts`]    | IntraUnitGift                  |
//!
//! [`validate`] runs all four output checks; [`validate_partial`] skips the
//! completeness check so it can run while an assignment is still being built.

pub mod input;
pub mod mapping;

pub use input::{validate_family_units, MIN_UNITS};
pub use mapping::{
    check_complete, check_no_intra_unit_gifts, check_no_self_gifts, check_unique_receivers,
    validate, validate_partial,
};
