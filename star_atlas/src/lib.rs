//! # Star Atlas
//!
//! The "atlas" crate - the single source of truth for the fixed universe the
//! explorer navigates. It contains the celestial body definitions and the
//! read-only catalog registry, and no interaction logic.
//!
//! ## Core Components
//!
//! - **bodies**: Galaxy and planet definitions with their descriptive attributes
//! - **catalog**: The immutable-after-load registry with case-insensitive lookup
//!
//! All attributes are static descriptive data: "gravity" and "orbital period"
//! are facts to discover, not computed values.

pub mod bodies;
pub mod catalog;

pub use bodies::*;
pub use catalog::*;
