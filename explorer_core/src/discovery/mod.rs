//! Fact discovery and the scoring rule.
//!
//! A fact is a keyed attribute of the current location. The stored key is
//! scoped to the body (`milky way/mars:gravity`), so the same attribute on a
//! different body counts as a separate discovery. First discovery awards
//! [`FACT_POINTS`]; repeats award nothing.

use star_atlas::{Catalog, Galaxy, Planet};

use crate::command::CommandError;
use crate::session::{JourneyEvent, Location, Session};

/// Knowledge points awarded for each first-time discovery.
pub const FACT_POINTS: u32 = 10;

/// Fact keys available at galaxy level.
pub const GALAXY_FACT_KEYS: &[&str] = &["class", "diameter", "age", "distance"];

/// Fact keys available at planet level.
pub const PLANET_FACT_KEYS: &[&str] = &[
    "temperature",
    "surface",
    "gravity",
    "orbit",
    "atmosphere",
    "diameter",
    "class",
];

fn galaxy_fact(galaxy: &Galaxy, key: &str) -> Option<String> {
    let name = &galaxy.name;
    let text = match key {
        "class" => format!("{name} is a {} galaxy.", galaxy.class),
        "diameter" => format!("{name} spans about {} light years.", galaxy.diameter_ly),
        "age" => format!("{name} is roughly {} billion years old.", galaxy.age_gyr),
        "distance" => {
            if galaxy.distance_mly == 0.0 {
                format!("{name} is our home galaxy; the distance is zero.")
            } else {
                format!(
                    "{name} lies {} million light years from Earth.",
                    galaxy.distance_mly
                )
            }
        }
        _ => return None,
    };
    Some(text)
}

fn planet_fact(planet: &Planet, key: &str) -> Option<String> {
    let name = &planet.name;
    let text = match key {
        "temperature" => format!(
            "Surface temperatures on {name} range from {} to {} degrees Celsius.",
            planet.min_temp_c, planet.max_temp_c
        ),
        "surface" => format!("The surface of {name} is {}.", planet.surface),
        "gravity" => format!("Gravity on {name} pulls at {} m/s².", planet.gravity),
        "orbit" => format!(
            "{name} completes an orbit every {} Earth days.",
            planet.orbital_period_days
        ),
        "atmosphere" => {
            if planet.has_atmosphere {
                format!("{name} holds on to an atmosphere.")
            } else {
                format!("{name} has no atmosphere to speak of.")
            }
        }
        "diameter" => format!("{name} measures {} kilometers across.", planet.diameter_km),
        "class" => format!("{name} is a {} planet.", planet.class),
        _ => return None,
    };
    Some(text)
}

/// Reveal a fact about the current location, recording and scoring it on
/// first discovery.
///
/// At universe level there is no body to ask about, so this fails with
/// [`CommandError::NotAtGalaxy`]. Unknown keys fail with
/// [`CommandError::UnknownFact`]; neither failure changes the session.
pub fn reveal(catalog: &Catalog, session: &mut Session, key: &str) -> Result<String, CommandError> {
    let key = key.trim().to_lowercase();

    let (scoped_key, text) = match session.location() {
        Location::Universe => return Err(CommandError::NotAtGalaxy),
        Location::Galaxy(galaxy_id) => {
            let galaxy = catalog
                .galaxy(galaxy_id)
                .ok_or(CommandError::NotAtGalaxy)?;
            let text =
                galaxy_fact(galaxy, &key).ok_or_else(|| CommandError::UnknownFact(key.clone()))?;
            (format!("{}:{key}", galaxy.name.to_lowercase()), text)
        }
        Location::Planet { galaxy, planet } => {
            let galaxy = catalog.galaxy(galaxy).ok_or(CommandError::NotAtGalaxy)?;
            let planet = catalog.planet(planet).ok_or(CommandError::NotAtGalaxy)?;
            let text =
                planet_fact(planet, &key).ok_or_else(|| CommandError::UnknownFact(key.clone()))?;
            (
                format!(
                    "{}/{}:{key}",
                    galaxy.name.to_lowercase(),
                    planet.name.to_lowercase()
                ),
                text,
            )
        }
    };

    if session.record_fact(scoped_key, text.clone(), FACT_POINTS) {
        session.add_points(FACT_POINTS);
        session.log_event(JourneyEvent::Discovery, text.clone());
        Ok(format!("{text} (+{FACT_POINTS} knowledge)"))
    } else {
        Ok(format!("{text} (already known)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator;
    use star_atlas::Catalog;

    const SEED: &str = r#"
[[galaxies]]
name = "Milky Way"
description = "Our home galaxy"
class = "barred_spiral"
diameter_ly = 105700
age_gyr = 13.6
distance_mly = 0.0

[[galaxies.planets]]
name = "Mars"
description = "The red planet"
class = "terrestrial"
min_temp_c = -140
max_temp_c = 20
surface = "solid"
gravity = 3.71
orbital_period_days = 687.0
has_atmosphere = true
diameter_km = 6779

[[galaxies.planets]]
name = "Venus"
description = "A runaway greenhouse"
class = "terrestrial"
min_temp_c = 438
max_temp_c = 482
surface = "solid"
gravity = 8.87
orbital_period_days = 224.7
has_atmosphere = true
diameter_km = 12104
"#;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(SEED).unwrap()
    }

    #[test]
    fn test_fact_at_universe_level_is_rejected() {
        let catalog = catalog();
        let mut session = Session::new();

        let err = reveal(&catalog, &mut session, "age").unwrap_err();
        assert_eq!(err, CommandError::NotAtGalaxy);
        assert_eq!(session.knowledge_points(), 0);
    }

    #[test]
    fn test_first_discovery_awards_points() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();

        let reply = reveal(&catalog, &mut session, "age").unwrap();
        assert!(reply.contains("13.6 billion years"));
        assert!(reply.contains("+10 knowledge"));
        assert_eq!(session.knowledge_points(), FACT_POINTS);
        assert_eq!(session.discovery_count(), 1);
    }

    #[test]
    fn test_repeat_discovery_awards_nothing() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();

        reveal(&catalog, &mut session, "age").unwrap();
        let reply = reveal(&catalog, &mut session, "AGE").unwrap();

        assert!(reply.contains("already known"));
        assert_eq!(session.knowledge_points(), FACT_POINTS);
        assert_eq!(session.discovery_count(), 1);
    }

    #[test]
    fn test_same_key_on_different_planet_is_new_discovery() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();

        navigator::enter(&catalog, &mut session, "Mars").unwrap();
        reveal(&catalog, &mut session, "gravity").unwrap();

        navigator::exit(&catalog, &mut session).unwrap();
        navigator::enter(&catalog, &mut session, "Venus").unwrap();
        reveal(&catalog, &mut session, "gravity").unwrap();

        assert_eq!(session.discovery_count(), 2);
        assert_eq!(session.knowledge_points(), 2 * FACT_POINTS);
    }

    #[test]
    fn test_unknown_fact_key() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();

        let err = reveal(&catalog, &mut session, "gravity").unwrap_err();
        assert_eq!(err, CommandError::UnknownFact("gravity".to_string()));
        assert_eq!(session.knowledge_points(), 0);
    }

    #[test]
    fn test_atmosphere_fact_wording() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();
        navigator::enter(&catalog, &mut session, "Mars").unwrap();

        let reply = reveal(&catalog, &mut session, "atmosphere").unwrap();
        assert!(reply.contains("holds on to an atmosphere"));
    }

    #[test]
    fn test_every_advertised_key_resolves() {
        let catalog = catalog();
        let mut session = Session::new();
        navigator::enter(&catalog, &mut session, "Milky Way").unwrap();

        for key in GALAXY_FACT_KEYS {
            reveal(&catalog, &mut session, key).unwrap();
        }

        navigator::enter(&catalog, &mut session, "Mars").unwrap();
        for key in PLANET_FACT_KEYS {
            reveal(&catalog, &mut session, key).unwrap();
        }

        let expected = (GALAXY_FACT_KEYS.len() + PLANET_FACT_KEYS.len()) as u32;
        assert_eq!(session.knowledge_points(), expected * FACT_POINTS);
    }
}
