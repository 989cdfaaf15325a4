//! Celestial body definitions for the explorable universe.

mod galaxy;
mod planet;

pub use galaxy::*;
pub use planet::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for galaxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalaxyId(pub Uuid);

impl GalaxyId {
    /// Create a new random galaxy ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty galaxy ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for GalaxyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GalaxyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetId(pub Uuid);

impl PlanetId {
    /// Create a new random planet ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty planet ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for PlanetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
