//! Matching engine for the gift exchange.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: callers pass `&mut impl Rng`; a seeded RNG
//!    reproduces a run exactly
//! 2. **Stateless**: [`GiftExchange`] holds options only
//! 3. **Validated both ends**: input partition before, full mapping after
//! 4. **Bounded**: no retries, O(n²) worst case
//!
//! ## Matching Rules
//!
//! - Nobody gifts themselves
//! - Nobody gifts a member of their own family unit
//! - Everybody receives exactly one gift
//!
//! ## Example
//!
//! ```
//! use family_gift_exchange::engine::GiftExchange;
//! use family_gift_exchange::validation::validate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let units = vec![vec![0, 1, 2], vec![3, 4, 5]];
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let assignment = GiftExchange::default().generate(&units, &mut rng).unwrap();
//!
//! assert_eq!(assignment.len(), 6);
//! assert!(validate(&assignment, &units).is_ok());
//! ```

pub mod generator;
pub mod resolver;

pub use generator::{generate, GiftExchange};
pub use resolver::{resolve_conflict, Rotation};
