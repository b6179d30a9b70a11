//! REPL command table and handlers.

use std::io::Write;

use colored::*;

use pokedex_api::PokeApiClient;
use pokedex_core::error::{PokedexError, Result};
use pokedex_core::types::LocationAreaPage;

/// A command table entry.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// All commands, in the order `help` prints them.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "explore",
        description: "List the Pokemon found in a location area: explore <area>",
    },
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "map",
        description: "Show the next 20 location areas",
    },
    CommandSpec {
        name: "mapb",
        description: "Show the previous 20 location areas",
    },
];

/// A parsed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => {
                let area = words
                    .next()
                    .ok_or_else(|| PokedexError::MissingArgument("which area to explore?".into()))?;
                Command::Explore(area.to_string())
            }
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Pagination cursor for `map`/`mapb`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl Session {
    fn advance(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// What the REPL should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs `command`, writing its output to `out`.
pub async fn execute<W: Write>(
    command: &Command,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    match command {
        Command::Help => cmd_help(out)?,
        Command::Exit => return Ok(Flow::Exit),
        Command::Map => cmd_map(session, client, out).await?,
        Command::MapBack => cmd_map_back(session, client, out).await?,
        Command::Explore(area) => cmd_explore(area, client, out).await?,
    }
    Ok(Flow::Continue)
}

fn cmd_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n {}\n", "Welcome to the Pokedex!".cyan().bold())?;
    writeln!(out, " Usage:\n")?;
    for spec in COMMANDS {
        writeln!(out, " {}: {}", spec.name.yellow(), spec.description)?;
    }
    writeln!(out)?;
    Ok(())
}

async fn cmd_map<W: Write>(session: &mut Session, client: &PokeApiClient, out: &mut W) -> Result<()> {
    let page = client.location_areas(session.next.as_deref()).await?;
    print_page(&page, out)?;
    session.advance(&page);
    Ok(())
}

async fn cmd_map_back<W: Write>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<()> {
    let previous = session.previous.as_deref().ok_or(PokedexError::NoPreviousPage)?;
    let page = client.location_areas(Some(previous)).await?;
    print_page(&page, out)?;
    session.advance(&page);
    Ok(())
}

async fn cmd_explore<W: Write>(area: &str, client: &PokeApiClient, out: &mut W) -> Result<()> {
    writeln!(out, " {} {}...", "Exploring".cyan(), area)?;
    let detail = client.location_area(area).await?;

    if detail.pokemon_encounters.is_empty() {
        writeln!(out, " {}", "No Pokemon found here.".yellow())?;
        return Ok(());
    }

    writeln!(out, " {}", "Found Pokemon:".green().bold())?;
    for name in detail.pokemon_names() {
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}

fn print_page<W: Write>(page: &LocationAreaPage, out: &mut W) -> Result<()> {
    writeln!(out)?;
    for name in page.names() {
        writeln!(out, " {}", name)?;
    }
    writeln!(out)?;
    writeln!(out, " {}\n", navigation_hint(page).dimmed())?;
    Ok(())
}

fn navigation_hint(page: &LocationAreaPage) -> String {
    match (page.has_previous(), page.has_next()) {
        (true, true) => "map: next page, mapb: previous page".into(),
        (true, false) => "last page; mapb: previous page".into(),
        (false, true) => "map: next page".into(),
        (false, false) => "no more pages".into(),
    }
}
