//! Core data types for the gift exchange.
//!
//! ## Types
//!
//! - [`MemberId`]: Opaque identifier of one participant
//! - [`FamilyUnit`]: A group of members that may not gift each other
//! - [`UnitIndex`]: Member-to-unit lookup built once per run
//! - [`Assignment`]: The giver → receiver mapping produced by the engine
//!
//! ## Ordering
//!
//! All containers iterate in a fixed order (input order for units, ascending
//! id order for maps). Seeding the random source is enough to reproduce a run.

mod member;
mod assignment;

pub use member::{MemberId, FamilyUnit, UnitIndex, universe};
pub use assignment::Assignment;
