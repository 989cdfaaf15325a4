//! Seed document structures - the external data source the catalog loads from.
//!
//! The same structures deserialize from TOML or JSON; the catalog treats the
//! document as opaque input and validates it during [`Catalog::from_seed`].
//!
//! [`Catalog::from_seed`]: super::Catalog::from_seed

use serde::{Deserialize, Serialize};

use crate::bodies::{GalaxyClass, PlanetClass, SurfaceState};

/// Top-level seed document: the full universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseSeed {
    pub galaxies: Vec<GalaxySeed>,
}

/// One galaxy entry in the seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxySeed {
    pub name: String,
    pub description: String,
    pub class: GalaxyClass,
    pub diameter_ly: u32,
    pub age_gyr: f64,
    pub distance_mly: f64,
    #[serde(default)]
    pub planets: Vec<PlanetSeed>,
}

/// One planet entry in the seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSeed {
    pub name: String,
    pub description: String,
    pub class: PlanetClass,
    pub min_temp_c: i32,
    pub max_temp_c: i32,
    pub surface: SurfaceState,
    pub gravity: f64,
    pub orbital_period_days: f64,
    pub has_atmosphere: bool,
    pub diameter_km: u32,
}
