//! # Explorer Core
//!
//! The interactive heart of the Astral Explorer. This crate interfaces with
//! `star_atlas`, tracks the per-session exploration state, and drives the
//! shell-like command loop.
//!
//! ## Core Components
//!
//! - **session**: Current location, knowledge points, discoveries, journey log
//! - **navigator**: Validates and applies location changes against the catalog
//! - **discovery**: Fact revelation and the scoring rule
//! - **prompt**: Renders the location-aware prompt string
//! - **command**: Line parsing and the recoverable error catalogue
//! - **shell**: The read-dispatch-reply loop with its running/terminated states
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: The catalog and session are values threaded through
//!   every call, never ambient globals
//! - **Typed locations**: The universe/galaxy/planet level is a tagged enum,
//!   so "planet without a galaxy" is unrepresentable
//! - **Recoverable errors**: Every command error becomes a one-line message
//!   and the loop continues; only seed loading may abort the process

pub mod command;
pub mod discovery;
pub mod navigator;
pub mod prompt;
pub mod session;
pub mod shell;

pub use command::*;
pub use discovery::*;
pub use prompt::*;
pub use session::*;
pub use shell::*;
