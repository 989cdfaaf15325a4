//! Journey log entries - the append-only record of an exploration run.

use serde::{Deserialize, Serialize};

/// Kinds of events recorded in the journey log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyEvent {
    /// Entered a galaxy or planet.
    Arrival,
    /// Exited back up a level.
    Departure,
    /// Revealed a new fact.
    Discovery,
}

impl JourneyEvent {
    /// Short marker used when the log is replayed.
    pub fn marker(&self) -> &'static str {
        match self {
            JourneyEvent::Arrival => "->",
            JourneyEvent::Departure => "<-",
            JourneyEvent::Discovery => "**",
        }
    }
}

/// One entry in the journey log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyEntry {
    /// Position in the log, starting at 0.
    pub seq: usize,
    pub event: JourneyEvent,
    pub detail: String,
}

impl std::fmt::Display for JourneyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.event.marker(), self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = JourneyEntry {
            seq: 0,
            event: JourneyEvent::Arrival,
            detail: "Entered the Milky Way galaxy".to_string(),
        };
        assert_eq!(entry.to_string(), "-> Entered the Milky Way galaxy");
    }
}
