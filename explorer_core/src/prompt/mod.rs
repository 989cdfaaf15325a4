//! Prompt rendering - a pure function of session state and catalog.

use star_atlas::Catalog;

use crate::session::{Location, Session};

/// Render the shell prompt for the current location.
///
/// - Universe level: `Universe [<points>] $ `
/// - Galaxy level: `<GalaxyName> [<points>] $ `
/// - Planet level: `<GalaxyName>/<PlanetName> [<points>] $ `
///
/// Display names come from the catalog, never from what the user typed. If a
/// session id is somehow absent from the catalog the renderer falls back to
/// the universe form instead of panicking.
pub fn render(catalog: &Catalog, session: &Session) -> String {
    let points = session.knowledge_points();

    let place = match session.location() {
        Location::Universe => None,
        Location::Galaxy(galaxy) => catalog.galaxy(galaxy).map(|g| g.name.clone()),
        Location::Planet { galaxy, planet } => catalog.galaxy(galaxy).and_then(|g| {
            catalog
                .planet(planet)
                .map(|p| format!("{}/{}", g.name, p.name))
        }),
    };

    match place {
        Some(place) => format!("{place} [{points}] $ "),
        None => format!("Universe [{points}] $ "),
    }
}
