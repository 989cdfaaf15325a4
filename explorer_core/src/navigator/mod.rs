//! Navigator - translates structured movement commands into catalog lookups
//! and session mutations.
//!
//! Every failure leaves the session untouched; name matching is
//! case-insensitive and the target is trimmed before lookup.

use star_atlas::Catalog;

use crate::command::CommandError;
use crate::session::{JourneyEvent, Location, Session};

/// Descend one level into the named galaxy or planet.
///
/// At universe level the target is looked up as a galaxy, at galaxy level as
/// a planet of the current galaxy. Planets have no children, so `enter` at
/// planet level is invalid. Returns the user-facing reply on success.
pub fn enter(catalog: &Catalog, session: &mut Session, target: &str) -> Result<String, CommandError> {
    let target = target.trim();

    match session.location() {
        Location::Universe => {
            let galaxy = catalog
                .galaxy_by_name(target)
                .ok_or_else(|| CommandError::UnknownGalaxy(target.to_string()))?;

            session.enter_galaxy(galaxy.id);
            session.log_event(
                JourneyEvent::Arrival,
                format!("Entered the {} galaxy", galaxy.name),
            );
            Ok(format!("You drift into the {} galaxy.", galaxy.name))
        }
        Location::Galaxy(galaxy_id) => {
            let galaxy_name = catalog
                .galaxy(galaxy_id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "this galaxy".to_string());

            let planet = catalog
                .planet_by_name(galaxy_id, target)
                .ok_or_else(|| CommandError::UnknownPlanet {
                    galaxy: galaxy_name,
                    name: target.to_string(),
                })?;

            let planet_id = planet.id;
            let planet_name = planet.name.clone();
            session.enter_planet(planet_id)?;
            session.log_event(
                JourneyEvent::Arrival,
                format!("Landed on {planet_name}"),
            );
            Ok(format!("You descend towards {planet_name}."))
        }
        Location::Planet { .. } => Err(CommandError::AlreadyAtLeaf),
    }
}

/// Climb back up exactly one level.
///
/// At universe level this is a no-op reported as [`CommandError::AlreadyAtTop`].
pub fn exit(catalog: &Catalog, session: &mut Session) -> Result<String, CommandError> {
    match session.location() {
        Location::Universe => Err(CommandError::AlreadyAtTop),
        Location::Galaxy(galaxy_id) => {
            let name = catalog
                .galaxy(galaxy_id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "the galaxy".to_string());

            session.exit_one();
            session.log_event(JourneyEvent::Departure, format!("Left the {name} galaxy"));
            Ok("You drift back into the open universe.".to_string())
        }
        Location::Planet { galaxy, planet } => {
            let planet_name = catalog
                .planet(planet)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "the planet".to_string());
            let galaxy_name = catalog
                .galaxy(galaxy)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "the galaxy".to_string());

            session.exit_one();
            session.log_event(JourneyEvent::Departure, format!("Left orbit of {planet_name}"));
            Ok(format!("You pull back into the {galaxy_name} galaxy."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
"#;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(SEED).unwrap()
    }

    #[test]
    fn test_enter_galaxy_case_insensitive() {
        let catalog = catalog();
        let mut a = Session::new();
        let mut b = Session::new();

        enter(&catalog, &mut a, "milky way").unwrap();
        enter(&catalog, &mut b, "MILKY WAY").unwrap();

        assert_eq!(a.location(), b.location());
        assert!(a.location().galaxy_id().is_some());
    }

    #[test]
    fn test_enter_unknown_galaxy_leaves_state() {
        let catalog = catalog();
        let mut session = Session::new();

        let err = enter(&catalog, &mut session, "Nowhere").unwrap_err();
        assert_eq!(err, CommandError::UnknownGalaxy("Nowhere".to_string()));
        assert_eq!(session.location(), Location::Universe);
        assert!(session.journey().is_empty());
    }

    #[test]
    fn test_enter_planet_then_leaf_rejection() {
        let catalog = catalog();
        let mut session = Session::new();

        enter(&catalog, &mut session, "Milky Way").unwrap();
        enter(&catalog, &mut session, "mars").unwrap();

        let before = session.location();
        let err = enter(&catalog, &mut session, "anything").unwrap_err();
        assert_eq!(err, CommandError::AlreadyAtLeaf);
        assert_eq!(session.location(), before);
    }

    #[test]
    fn test_enter_unknown_planet_names_the_galaxy() {
        let catalog = catalog();
        let mut session = Session::new();
        enter(&catalog, &mut session, "Milky Way").unwrap();

        let err = enter(&catalog, &mut session, "Vulcan").unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownPlanet {
                galaxy: "Milky Way".to_string(),
                name: "Vulcan".to_string(),
            }
        );
    }

    #[test]
    fn test_exit_at_top_is_idempotent() {
        let catalog = catalog();
        let mut session = Session::new();

        for _ in 0..3 {
            let err = exit(&catalog, &mut session).unwrap_err();
            assert_eq!(err, CommandError::AlreadyAtTop);
            assert_eq!(session.location(), Location::Universe);
        }
        assert!(session.journey().is_empty());
    }

    #[test]
    fn test_round_trip_returns_to_equivalent_state() {
        let catalog = catalog();
        let mut session = Session::new();

        enter(&catalog, &mut session, "Milky Way").unwrap();
        let first = session.location();

        exit(&catalog, &mut session).unwrap();
        enter(&catalog, &mut session, "Milky Way").unwrap();

        assert_eq!(session.location(), first);
    }

    #[test]
    fn test_exit_pops_planet_to_galaxy() {
        let catalog = catalog();
        let mut session = Session::new();

        enter(&catalog, &mut session, "Milky Way").unwrap();
        let galaxy_level = session.location();
        enter(&catalog, &mut session, "Mars").unwrap();

        exit(&catalog, &mut session).unwrap();
        assert_eq!(session.location(), galaxy_level);
    }

    #[test]
    fn test_moves_are_logged() {
        let catalog = catalog();
        let mut session = Session::new();

        enter(&catalog, &mut session, "Milky Way").unwrap();
        enter(&catalog, &mut session, "Mars").unwrap();
        exit(&catalog, &mut session).unwrap();

        let events: Vec<_> = session.journey().iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                JourneyEvent::Arrival,
                JourneyEvent::Arrival,
                JourneyEvent::Departure
            ]
        );
    }
}
