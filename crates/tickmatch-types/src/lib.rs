//! # tickmatch-types
//!
//! Shared types, errors, and configuration for the **tickmatch** matching core.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`]
//! - **Order model**: [`Order`], [`OrderSide`], [`OrderStatus`]
//! - **Fill model**: [`Match`]
//! - **Snapshots**: [`OrderSummary`], [`MatchSummary`], [`BookSummary`]
//! - **Configuration**: [`ApiConfig`], [`LogFormat`]
//! - **Errors**: [`TickmatchError`] with `TM_ERR_` prefix codes
//! - **Constants**: defaults and environment variable names

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod summary;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use tickmatch_types::{Order, OrderSide, Match, ...};

pub use self::config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use summary::*;
pub use trade::*;

// Constants are accessed via `tickmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
