//! Catalog - the immutable-after-load registry of galaxies and planets.
//!
//! The catalog is populated once at startup from a seed document and treated
//! as read-only afterwards: there are no public mutators, and both name
//! indexes always hold the lowercase form of the owned entity's name, so
//! lookups are case-insensitive by construction.

mod seed;

pub use seed::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::bodies::{Galaxy, GalaxyId, Planet, PlanetId};

/// Errors raised while loading the catalog seed.
///
/// These are the only fatal errors in the system: a malformed seed aborts
/// startup before the command loop begins. Lookup absence is never an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("universe seed contains no galaxies")]
    EmptyUniverse,

    #[error("galaxy with an empty name in seed")]
    UnnamedGalaxy,

    #[error("planet with an empty name in galaxy `{galaxy}`")]
    UnnamedPlanet { galaxy: String },

    #[error("duplicate galaxy `{0}` in seed")]
    DuplicateGalaxy(String),

    #[error("duplicate planet `{planet}` in galaxy `{galaxy}`")]
    DuplicatePlanet { galaxy: String, planet: String },

    #[error("malformed TOML seed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed JSON seed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The static registry of galaxies and their planets.
///
/// Planets live in a catalog-level arena keyed by stable IDs; each galaxy
/// holds the ordered list of IDs it owns, so no planet can belong to two
/// galaxies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// All galaxies stored by ID.
    galaxies: HashMap<GalaxyId, Galaxy>,

    /// All planets stored by ID.
    planets: HashMap<PlanetId, Planet>,

    /// Galaxy IDs in seed order.
    galaxy_order: Vec<GalaxyId>,

    /// Index: lowercase galaxy name -> galaxy ID.
    galaxy_names: HashMap<String, GalaxyId>,
}

/// Normalize a user-supplied or seed name into an index key.
fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// Build a catalog from a parsed seed document.
    pub fn from_seed(seed: UniverseSeed) -> Result<Self, CatalogError> {
        if seed.galaxies.is_empty() {
            return Err(CatalogError::EmptyUniverse);
        }

        let mut catalog = Catalog::default();

        for galaxy_seed in seed.galaxies {
            let galaxy_key = name_key(&galaxy_seed.name);
            if galaxy_key.is_empty() {
                return Err(CatalogError::UnnamedGalaxy);
            }
            if catalog.galaxy_names.contains_key(&galaxy_key) {
                return Err(CatalogError::DuplicateGalaxy(galaxy_seed.name));
            }

            let mut galaxy = Galaxy::new(
                galaxy_seed.name,
                galaxy_seed.description,
                galaxy_seed.class,
                galaxy_seed.diameter_ly,
                galaxy_seed.age_gyr,
                galaxy_seed.distance_mly,
            );

            for planet_seed in galaxy_seed.planets {
                let planet_key = name_key(&planet_seed.name);
                if planet_key.is_empty() {
                    return Err(CatalogError::UnnamedPlanet {
                        galaxy: galaxy.name.clone(),
                    });
                }
                if galaxy.planet_named(&planet_key).is_some() {
                    return Err(CatalogError::DuplicatePlanet {
                        galaxy: galaxy.name.clone(),
                        planet: planet_seed.name,
                    });
                }

                let planet = Planet::new(
                    planet_seed.name,
                    planet_seed.description,
                    planet_seed.class,
                    planet_seed.min_temp_c,
                    planet_seed.max_temp_c,
                    planet_seed.surface,
                    planet_seed.gravity,
                    planet_seed.orbital_period_days,
                    planet_seed.has_atmosphere,
                    planet_seed.diameter_km,
                );

                galaxy.attach_planet(planet_key, planet.id);
                catalog.planets.insert(planet.id, planet);
            }

            catalog.galaxy_order.push(galaxy.id);
            catalog.galaxy_names.insert(galaxy_key, galaxy.id);
            catalog.galaxies.insert(galaxy.id, galaxy);
        }

        Ok(catalog)
    }

    /// Build a catalog from a TOML seed document.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let seed: UniverseSeed = toml::from_str(text)?;
        Self::from_seed(seed)
    }

    /// Build a catalog from a JSON seed document.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let seed: UniverseSeed = serde_json::from_str(text)?;
        Self::from_seed(seed)
    }

    /// Get a galaxy by ID.
    pub fn galaxy(&self, id: GalaxyId) -> Option<&Galaxy> {
        self.galaxies.get(&id)
    }

    /// Get a planet by ID.
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    /// Case-insensitive galaxy lookup; leading/trailing whitespace is ignored.
    pub fn galaxy_by_name(&self, name: &str) -> Option<&Galaxy> {
        self.galaxy_names
            .get(&name_key(name))
            .and_then(|id| self.galaxies.get(id))
    }

    /// Case-insensitive planet lookup within one galaxy.
    pub fn planet_by_name(&self, galaxy: GalaxyId, name: &str) -> Option<&Planet> {
        self.galaxies
            .get(&galaxy)
            .and_then(|g| g.planet_named(&name_key(name)))
            .and_then(|id| self.planets.get(&id))
    }

    /// Galaxies in seed order.
    pub fn galaxies(&self) -> impl Iterator<Item = &Galaxy> {
        self.galaxy_order.iter().filter_map(|id| self.galaxies.get(id))
    }

    /// Planets of one galaxy in seed order.
    pub fn planets_of<'a>(&'a self, galaxy: &'a Galaxy) -> impl Iterator<Item = &'a Planet> {
        galaxy.planet_ids().iter().filter_map(|id| self.planets.get(id))
    }

    /// Total number of galaxies.
    pub fn galaxy_count(&self) -> usize {
        self.galaxy_order.len()
    }

    /// Total number of planets across all galaxies.
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}
