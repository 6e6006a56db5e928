//! # Family Gift Exchange
//!
//! Randomized gift exchange for families: every participant gives exactly
//! one gift and receives exactly one, never to themselves and never to a
//! member of their own family unit.
//!
//! ## Architecture
//!
//! - **Types**: Member ids, family units, and the [`Assignment`] mapping
//! - **Validation**: Input partition checks and the four mapping checks
//! - **Engine**: Pool-based random draws plus rotation-based conflict repair
//! - **Roster**: Names ↔ ids, JSON rosters, printable pairings
//!
//! ## Example
//!
//! ```
//! use family_gift_exchange::{generate, validate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let units = vec![vec![0, 1], vec![2, 3], vec![4]];
//! let mut rng = StdRng::seed_from_u64(2024);
//!
//! let assignment = generate(&units, &mut rng).unwrap();
//! assert!(validate(&assignment, &units).is_ok());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Member ids, family units, assignments
pub mod types;

/// Error kinds
pub mod error;

/// Input and mapping validation
pub mod validation;

/// Assignment construction and conflict resolution
pub mod engine;

/// Engine and binary configuration
pub mod config;

/// Named rosters and output formatting
pub mod roster;

/// Subscriber setup for binaries and tests
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Assignment, FamilyUnit, MemberId};
pub use error::{ExchangeError, Result};
pub use validation::{validate, validate_family_units};
pub use engine::{generate, GiftExchange};
pub use config::ExchangeConfig;
pub use roster::Roster;
