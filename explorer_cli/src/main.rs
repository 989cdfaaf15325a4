//! `astra` - the interactive Astral Explorer shell.
//!
//! Loads a universe catalog once at startup (the embedded default or a
//! user-supplied seed file), then hands every line to the explorer engine.
//! Seed loading is the only fatal path; every command error is a one-line
//! message and the loop keeps going.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use explorer_core::{Control, Explorer};
use star_atlas::Catalog;

const DEFAULT_SEED: &str = include_str!("../data/universe.toml");

#[derive(Debug, Parser)]
#[command(name = "astra", about = "Explore a universe of galaxies and planets, one prompt at a time")]
struct Args {
    /// Universe seed file (.toml or .json); defaults to the built-in universe.
    seed: Option<PathBuf>,
}

fn load_catalog(seed: Option<&Path>) -> Result<Catalog> {
    let Some(path) = seed else {
        return Catalog::from_toml_str(DEFAULT_SEED).context("built-in universe seed is invalid");
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read seed file {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let catalog = if is_json {
        Catalog::from_json_str(&text)
    } else {
        Catalog::from_toml_str(&text)
    };
    catalog.with_context(|| format!("cannot load universe from {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let catalog = load_catalog(args.seed.as_deref())?;

    println!(
        "Astral Explorer - {} galaxies and {} planets charted.",
        catalog.galaxy_count(),
        catalog.planet_count()
    );
    println!("Type `help` for commands, `quit` to leave.\n");

    let mut explorer = Explorer::new(catalog);
    let mut editor = DefaultEditor::new().context("cannot initialize the line editor")?;

    loop {
        let line = match editor.readline(&explorer.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(err) => return Err(err).context("line editor failure"),
        };

        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.trim());
        }

        let outcome = explorer.handle_line(&line);
        if let Some(reply) = outcome.reply {
            println!("{reply}");
        }
        if outcome.control == Control::Terminated {
            break;
        }
    }

    Ok(())
}
