//! Reports module for divvy
//!
//! Derived, read-only projections over groups and settlements.

pub mod summary;

pub use summary::GroupSummary;
