//! Read-only views over task collections.
//!
//! # Responsibility
//! - Text search, status filtering and overdue listing.
//! - Aggregate statistics.
//!
//! # Invariants
//! - Every view is computed fresh from the slice it is given; nothing is
//!   cached between calls.
//! - Returned task lists keep the input (insertion) order.

pub mod filter;
pub mod stats;
