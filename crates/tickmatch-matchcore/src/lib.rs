//! # tickmatch-matchcore
//!
//! **Continuous limit order matching for tickmatch.**
//!
//! Every submitted order is matched immediately against the resting orders
//! on the opposite side under price-time priority. Whatever cannot be filled
//! rests in the [`UnmatchedOrderBook`] until a later order consumes it.
//!
//! - **In memory, single writer**: no I/O, no internal locking
//! - **Resting price wins**: fills execute at the price of the order that
//!   was already in the book
//! - **Permanent history**: every order and its fills stay queryable
//! - **Fail stop**: a broken invariant halts the engine instead of masking it

pub mod engine;
pub mod invariants;
pub mod orderbook;
pub mod price_level;
pub mod registry;

pub use engine::MatchingEngine;
pub use orderbook::{OrderLookup, UnmatchedOrderBook};
pub use price_level::PriceLevel;
pub use registry::OrderRegistry;
