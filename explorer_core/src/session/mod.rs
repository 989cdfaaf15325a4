//! Session state - everything a single exploration run accumulates.
//!
//! A session is created empty at process start, mutated only through the
//! entry points below, and discarded at process exit. Nothing here persists
//! across runs.

mod journey;

pub use journey::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use star_atlas::{GalaxyId, PlanetId};

use crate::command::CommandError;

/// Where the explorer currently is.
///
/// A tagged location makes the core invariant structural: a planet level
/// always carries its galaxy, so "planet without a galaxy" cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Location {
    #[default]
    Universe,
    Galaxy(GalaxyId),
    Planet { galaxy: GalaxyId, planet: PlanetId },
}

impl Location {
    /// The galaxy in scope, if any.
    pub fn galaxy_id(&self) -> Option<GalaxyId> {
        match self {
            Location::Universe => None,
            Location::Galaxy(galaxy) => Some(*galaxy),
            Location::Planet { galaxy, .. } => Some(*galaxy),
        }
    }

    /// The planet in scope, if any.
    pub fn planet_id(&self) -> Option<PlanetId> {
        match self {
            Location::Planet { planet, .. } => Some(*planet),
            _ => None,
        }
    }

    pub fn is_universe(&self) -> bool {
        matches!(self, Location::Universe)
    }
}

/// One recorded fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    /// Location-scoped fact key, e.g. `milky way/mars:gravity`.
    pub key: String,
    /// The fact sentence shown to the user.
    pub text: String,
    /// Points awarded when this fact was first discovered.
    pub points: u32,
}

/// Mutable per-run exploration state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    location: Location,

    /// Monotonically non-decreasing score.
    knowledge_points: u32,

    /// Discovered facts by scoped key. Append-only: a fact, once discovered,
    /// stays discovered.
    discoveries: HashMap<String, Discovery>,

    /// Scoped keys in discovery order, for stable listing.
    discovery_order: Vec<String>,

    /// Append-only exploration log, insertion order significant.
    journey: Vec<JourneyEntry>,
}

impl Session {
    /// Create a fresh session at universe level with zero points.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn knowledge_points(&self) -> u32 {
        self.knowledge_points
    }

    /// Move to galaxy level.
    pub fn enter_galaxy(&mut self, galaxy: GalaxyId) {
        self.location = Location::Galaxy(galaxy);
    }

    /// Move to planet level within the current galaxy.
    ///
    /// Fails with [`CommandError::NotAtGalaxy`] at universe level and
    /// [`CommandError::AlreadyAtLeaf`] at planet level; the location is
    /// unchanged on failure.
    pub fn enter_planet(&mut self, planet: PlanetId) -> Result<(), CommandError> {
        match self.location {
            Location::Universe => Err(CommandError::NotAtGalaxy),
            Location::Galaxy(galaxy) => {
                self.location = Location::Planet { galaxy, planet };
                Ok(())
            }
            Location::Planet { .. } => Err(CommandError::AlreadyAtLeaf),
        }
    }

    /// Pop one level: planet to galaxy, or galaxy to universe.
    ///
    /// Returns whether the location changed; at universe level this is an
    /// idempotent no-op.
    pub fn exit_one(&mut self) -> bool {
        match self.location {
            Location::Universe => false,
            Location::Galaxy(_) => {
                self.location = Location::Universe;
                true
            }
            Location::Planet { galaxy, .. } => {
                self.location = Location::Galaxy(galaxy);
                true
            }
        }
    }

    /// Jump straight back to universe level.
    pub fn exit_to_universe(&mut self) {
        self.location = Location::Universe;
    }

    /// Record a discovered fact.
    ///
    /// Idempotent per key: recording an already-known key changes nothing and
    /// returns `false`.
    pub fn record_fact(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        points: u32,
    ) -> bool {
        let key = key.into();
        if self.discoveries.contains_key(&key) {
            return false;
        }

        self.discovery_order.push(key.clone());
        self.discoveries.insert(
            key.clone(),
            Discovery {
                key,
                text: text.into(),
                points,
            },
        );
        true
    }

    /// Check whether a fact key has been discovered.
    pub fn knows_fact(&self, key: &str) -> bool {
        self.discoveries.contains_key(key)
    }

    /// Award knowledge points.
    pub fn add_points(&mut self, points: u32) {
        self.knowledge_points += points;
    }

    /// Discovered facts in discovery order.
    pub fn discoveries(&self) -> impl Iterator<Item = &Discovery> {
        self.discovery_order
            .iter()
            .filter_map(|key| self.discoveries.get(key))
    }

    pub fn discovery_count(&self) -> usize {
        self.discovery_order.len()
    }

    /// Append an event to the exploration log.
    pub fn log_event(&mut self, event: JourneyEvent, detail: impl Into<String>) {
        let seq = self.journey.len();
        self.journey.push(JourneyEntry {
            seq,
            event,
            detail: detail.into(),
        });
    }

    /// The full exploration log in insertion order.
    pub fn journey(&self) -> &[JourneyEntry] {
        &self.journey
    }
}
