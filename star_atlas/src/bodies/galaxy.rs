//! Galaxy definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{GalaxyId, PlanetId};

/// Morphological classes of galaxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalaxyClass {
    Spiral,
    BarredSpiral,
    Elliptical,
    Lenticular,
    Irregular,
}

impl GalaxyClass {
    /// Human-readable label for prompts and fact text.
    pub fn label(&self) -> &'static str {
        match self {
            GalaxyClass::Spiral => "spiral",
            GalaxyClass::BarredSpiral => "barred spiral",
            GalaxyClass::Elliptical => "elliptical",
            GalaxyClass::Lenticular => "lenticular",
            GalaxyClass::Irregular => "irregular",
        }
    }
}

impl std::fmt::Display for GalaxyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A galaxy in the explorable universe.
///
/// Created once during catalog load and never mutated afterwards; the catalog
/// is process-lifetime, so galaxies are never destroyed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Galaxy {
    pub id: GalaxyId,
    pub name: String,
    pub description: String,
    pub class: GalaxyClass,

    /// Diameter in light years.
    pub diameter_ly: u32,
    /// Age in billions of years.
    pub age_gyr: f64,
    /// Distance from Earth in millions of light years.
    pub distance_mly: f64,

    /// Owned planets in seed order.
    planets: Vec<PlanetId>,
    /// Index: lowercase planet name -> planet ID.
    planet_names: HashMap<String, PlanetId>,
}

impl Galaxy {
    /// Create a new galaxy with no planets yet.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        class: GalaxyClass,
        diameter_ly: u32,
        age_gyr: f64,
        distance_mly: f64,
    ) -> Self {
        Self {
            id: GalaxyId::new(),
            name: name.into(),
            description: description.into(),
            class,
            diameter_ly,
            age_gyr,
            distance_mly,
            planets: Vec::new(),
            planet_names: HashMap::new(),
        }
    }

    /// Attach a planet to this galaxy. Load-phase only; the name must already
    /// be known to be unique within the galaxy.
    pub(crate) fn attach_planet(&mut self, key: String, id: PlanetId) {
        self.planets.push(id);
        self.planet_names.insert(key, id);
    }

    /// Look up an owned planet by its lowercase name key.
    pub fn planet_named(&self, key: &str) -> Option<PlanetId> {
        self.planet_names.get(key).copied()
    }

    /// Owned planet IDs in seed order.
    pub fn planet_ids(&self) -> &[PlanetId] {
        &self.planets
    }

    /// Number of planets owned by this galaxy.
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_galaxy_creation() {
        let galaxy = Galaxy::new(
            "Milky Way",
            "Our home galaxy",
            GalaxyClass::BarredSpiral,
            105_700,
            13.6,
            0.0,
        );

        assert_eq!(galaxy.name, "Milky Way");
        assert_eq!(galaxy.class, GalaxyClass::BarredSpiral);
        assert_eq!(galaxy.planet_count(), 0);
    }

    #[test]
    fn test_attach_and_find_planet() {
        let mut galaxy = Galaxy::new(
            "Andromeda",
            "Nearest major galaxy",
            GalaxyClass::Spiral,
            220_000,
            10.0,
            2.5,
        );

        let id = PlanetId::new();
        galaxy.attach_planet("europa".to_string(), id);

        assert_eq!(galaxy.planet_named("europa"), Some(id));
        assert_eq!(galaxy.planet_named("callisto"), None);
        assert_eq!(galaxy.planet_ids(), &[id]);
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(GalaxyClass::BarredSpiral.label(), "barred spiral");
        assert_eq!(GalaxyClass::Elliptical.to_string(), "elliptical");
    }
}
