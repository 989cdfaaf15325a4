//! Shell engine - the read-dispatch-reply loop.
//!
//! The engine owns the catalog and the session and processes exactly one
//! command per iteration. It is input-agnostic: [`Explorer::run`] drives it
//! from any buffered reader, and interactive front-ends can call
//! [`Explorer::prompt`] and [`Explorer::handle_line`] directly.

use std::io::{BufRead, Write};

use star_atlas::Catalog;

use crate::command::Command;
use crate::discovery::{self, GALAXY_FACT_KEYS, PLANET_FACT_KEYS};
use crate::navigator;
use crate::prompt;
use crate::session::{Location, Session};

const HELP_TEXT: &str = "\
Commands:
  enter <name>     descend into a galaxy or planet
  exit | back      climb back up one level
  look | describe  describe where you are
  fact <key>       reveal a fact about this place
  facts            list everything you have discovered
  journey | log    replay your exploration log
  score            show your knowledge points
  help             this summary
  quit             leave the explorer";

/// Loop states of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Running,
    Terminated,
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Message to print, if any. Errors arrive here already rendered.
    pub reply: Option<String>,
    pub control: Control,
}

impl Outcome {
    fn running(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            control: Control::Running,
        }
    }

    fn silent() -> Self {
        Self {
            reply: None,
            control: Control::Running,
        }
    }
}

/// The interactive explorer: a catalog, a session, and the dispatch logic.
#[derive(Debug, Clone)]
pub struct Explorer {
    catalog: Catalog,
    session: Session,
}

impl Explorer {
    /// Start a fresh exploration of the given universe.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Session::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Render the prompt for the current state.
    pub fn prompt(&self) -> String {
        prompt::render(&self.catalog, &self.session)
    }

    /// Parse and execute one input line.
    ///
    /// Command errors are converted to their one-line message here; no error
    /// terminates the shell. Only `quit` flips the control state.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.dispatch(command),
            Err(err) => Outcome::running(err.to_string()),
        }
    }

    fn dispatch(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::Empty => return Outcome::silent(),
            Command::Quit => {
                return Outcome {
                    reply: Some("Safe travels, explorer.".to_string()),
                    control: Control::Terminated,
                }
            }
            Command::Enter(target) => navigator::enter(&self.catalog, &mut self.session, &target),
            Command::Exit => navigator::exit(&self.catalog, &mut self.session),
            Command::Fact(key) => discovery::reveal(&self.catalog, &mut self.session, &key),
            Command::Look => Ok(self.describe()),
            Command::Facts => Ok(self.list_discoveries()),
            Command::Journey => Ok(self.replay_journey()),
            Command::Score => Ok(format!(
                "Knowledge points: {}",
                self.session.knowledge_points()
            )),
            Command::Help => Ok(HELP_TEXT.to_string()),
        };

        match result {
            Ok(reply) => Outcome::running(reply),
            Err(err) => Outcome::running(err.to_string()),
        }
    }

    /// Describe the current location, including its available fact keys.
    fn describe(&self) -> String {
        match self.session.location() {
            Location::Universe => {
                let names: Vec<_> = self
                    .catalog
                    .galaxies()
                    .map(|g| g.name.as_str())
                    .collect();
                format!(
                    "The universe holds {} galaxies: {}. Use `enter <name>` to explore one.",
                    names.len(),
                    names.join(", ")
                )
            }
            Location::Galaxy(galaxy_id) => match self.catalog.galaxy(galaxy_id) {
                Some(galaxy) => {
                    let planets: Vec<_> = self
                        .catalog
                        .planets_of(galaxy)
                        .map(|p| p.name.as_str())
                        .collect();
                    let planet_line = if planets.is_empty() {
                        "No charted planets.".to_string()
                    } else {
                        format!("Charted planets: {}.", planets.join(", "))
                    };
                    format!(
                        "{}\n{}\nFact keys: {}.",
                        galaxy.description,
                        planet_line,
                        GALAXY_FACT_KEYS.join(", ")
                    )
                }
                None => "Nothing but the open universe.".to_string(),
            },
            Location::Planet { planet, .. } => match self.catalog.planet(planet) {
                Some(planet) => format!(
                    "{}\nFact keys: {}.",
                    planet.description,
                    PLANET_FACT_KEYS.join(", ")
                ),
                None => "Nothing but the open universe.".to_string(),
            },
        }
    }

    fn list_discoveries(&self) -> String {
        if self.session.discovery_count() == 0 {
            return "Nothing discovered yet. Try `fact <key>` near a galaxy or planet.".to_string();
        }

        let mut lines = vec![format!(
            "Discovered {} facts for {} knowledge points:",
            self.session.discovery_count(),
            self.session.knowledge_points()
        )];
        for discovery in self.session.discoveries() {
            lines.push(format!("  [{}] {}", discovery.key, discovery.text));
        }
        lines.join("\n")
    }

    fn replay_journey(&self) -> String {
        if self.session.journey().is_empty() {
            return "The journey log is empty.".to_string();
        }

        let mut lines = vec!["Your journey so far:".to_string()];
        for entry in self.session.journey() {
            lines.push(format!("  {entry}"));
        }
        lines.join("\n")
    }

    /// Drive the loop from a reader until `quit` or end-of-input.
    ///
    /// The prompt is written without a trailing newline and flushed before
    /// each read; the blocking line read is the only suspension point.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> std::io::Result<()> {
        let mut line = String::new();

        loop {
            write!(writer, "{}", self.prompt())?;
            writer.flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                // End of input terminates just like `quit`.
                writeln!(writer)?;
                return Ok(());
            }

            let outcome = self.handle_line(&line);
            if let Some(reply) = outcome.reply {
                writeln!(writer, "{reply}")?;
            }
            if outcome.control == Control::Terminated {
                return Ok(());
            }
        }
    }
}
