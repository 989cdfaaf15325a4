//! Planet definitions.

use serde::{Deserialize, Serialize};

use super::PlanetId;

/// Dominant state of matter at a planet's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceState {
    Solid,
    Liquid,
    Gas,
    Ice,
    Molten,
}

impl SurfaceState {
    /// Human-readable label for fact text.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceState::Solid => "solid",
            SurfaceState::Liquid => "liquid",
            SurfaceState::Gas => "gaseous",
            SurfaceState::Ice => "icy",
            SurfaceState::Molten => "molten",
        }
    }
}

impl std::fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Broad planet classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetClass {
    Terrestrial,
    GasGiant,
    IceGiant,
    Dwarf,
    Ocean,
    Lava,
}

impl PlanetClass {
    /// Human-readable label for fact text.
    pub fn label(&self) -> &'static str {
        match self {
            PlanetClass::Terrestrial => "terrestrial",
            PlanetClass::GasGiant => "gas giant",
            PlanetClass::IceGiant => "ice giant",
            PlanetClass::Dwarf => "dwarf",
            PlanetClass::Ocean => "ocean",
            PlanetClass::Lava => "lava",
        }
    }
}

impl std::fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A planet in the explorable universe.
///
/// Owned by exactly one galaxy; all attributes are immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub description: String,
    pub class: PlanetClass,

    /// Minimum surface temperature in degrees Celsius.
    pub min_temp_c: i32,
    /// Maximum surface temperature in degrees Celsius.
    pub max_temp_c: i32,
    pub surface: SurfaceState,
    /// Surface gravity in m/s^2.
    pub gravity: f64,
    /// Orbital period in Earth days.
    pub orbital_period_days: f64,
    pub has_atmosphere: bool,
    /// Diameter in kilometers.
    pub diameter_km: u32,
}

impl Planet {
    /// Create a new planet.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        class: PlanetClass,
        min_temp_c: i32,
        max_temp_c: i32,
        surface: SurfaceState,
        gravity: f64,
        orbital_period_days: f64,
        has_atmosphere: bool,
        diameter_km: u32,
    ) -> Self {
        Self {
            id: PlanetId::new(),
            name: name.into(),
            description: description.into(),
            class,
            min_temp_c,
            max_temp_c,
            surface,
            gravity,
            orbital_period_days,
            has_atmosphere,
            diameter_km,
        }
    }
}
