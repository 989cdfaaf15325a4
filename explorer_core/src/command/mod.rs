//! Command parsing and the recoverable error catalogue.
//!
//! A line is one verb plus an optional argument. Verbs are matched
//! case-insensitively; the argument keeps its casing (lookups case-fold
//! later) but is trimmed.

use thiserror::Error;

/// Every error a command can produce.
///
/// All of these are recoverable: the shell converts them to their `Display`
/// text and keeps looping. Session state is never changed by a failing
/// command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("there is no galaxy named `{0}` in the universe")]
    UnknownGalaxy(String),

    #[error("there is no planet named `{name}` in {galaxy}")]
    UnknownPlanet { galaxy: String, name: String },

    #[error("you are adrift in the universe; enter a galaxy first")]
    NotAtGalaxy,

    #[error("planets are as deep as the atlas goes; try `exit`")]
    AlreadyAtLeaf,

    #[error("you are already at the top of the universe")]
    AlreadyAtTop,

    #[error("unknown command `{0}`; type `help` for the list")]
    UnknownCommand(String),

    #[error("nothing to learn about `{0}` here; `look` lists the fact keys")]
    UnknownFact(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input; the shell re-prompts silently.
    Empty,
    /// Descend into a galaxy or planet by name.
    Enter(String),
    /// Climb back up one level (`exit` or `back`).
    Exit,
    /// Describe the current location (`look` or `describe`).
    Look,
    /// Reveal and record a fact about the current location.
    Fact(String),
    /// List discovered facts in discovery order.
    Facts,
    /// Replay the exploration log (`journey` or `log`).
    Journey,
    /// Show the knowledge point total.
    Score,
    /// Print the command summary.
    Help,
    /// Terminate the shell. Distinct from `exit`.
    Quit,
}

impl Command {
    /// Parse one input line into a command.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "enter" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("enter"))
                } else {
                    Ok(Command::Enter(rest.to_string()))
                }
            }
            "exit" | "back" => Ok(Command::Exit),
            "look" | "describe" => Ok(Command::Look),
            "fact" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("fact"))
                } else {
                    Ok(Command::Fact(rest.to_string()))
                }
            }
            "facts" => Ok(Command::Facts),
            "journey" | "log" => Ok(Command::Journey),
            "score" => Ok(Command::Score),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enter_keeps_argument_casing() {
        let cmd = Command::parse("enter Milky Way").unwrap();
        assert_eq!(cmd, Command::Enter("Milky Way".to_string()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let cmd = Command::parse("  enter   Andromeda  ").unwrap();
        assert_eq!(cmd, Command::Enter("Andromeda".to_string()));
    }

    #[test]
    fn test_verb_is_case_insensitive() {
        assert_eq!(Command::parse("ENTER mars").unwrap(), Command::Enter("mars".to_string()));
        assert_eq!(Command::parse("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Command::parse("back").unwrap(), Command::Exit);
        assert_eq!(Command::parse("describe").unwrap(), Command::Look);
        assert_eq!(Command::parse("log").unwrap(), Command::Journey);
    }

    #[test]
    fn test_empty_line_is_noop() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            Command::parse("enter").unwrap_err(),
            CommandError::MissingArgument("enter")
        );
        assert_eq!(
            Command::parse("fact  ").unwrap_err(),
            CommandError::MissingArgument("fact")
        );
    }

    #[test]
    fn test_unknown_verb() {
        let err = Command::parse("warp andromeda").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("warp".to_string()));
    }
}
