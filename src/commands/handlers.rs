//! Command Handlers
//!
//! One handler per command. Handlers write user-facing text to `out` and
//! report failures as errors for the REPL to print.

use std::io::Write;

use crate::commands::{Command, Flow, Session};
use crate::error::{PokedexError, Result};
use crate::pokeapi::PokeApiClient;

/// Runs `command` with its arguments.
pub async fn execute<W: Write>(
    command: Command,
    args: &[String],
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    match command {
        Command::Help => help(out),
        Command::Exit => exit(out),
        Command::Map => map_next(session, client, out).await,
        Command::MapBack => map_back(session, client, out).await,
        Command::Explore => explore(args, client, out).await,
    }
}

fn help<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(Flow::Continue)
}

fn exit<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(Flow::Exit)
}

async fn map_next<W: Write>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    let url = match (&session.next, &session.previous) {
        (Some(next), _) => next.clone(),
        (None, None) => client.first_location_page_url(),
        (None, Some(_)) => {
            writeln!(out, "You're on the last page")?;
            return Ok(Flow::Continue);
        }
    };

    show_location_page(&url, session, client, out).await
}

async fn map_back<W: Write>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    let url = match (&session.previous, &session.next) {
        (Some(previous), _) => previous.clone(),
        (None, None) => {
            writeln!(out, "Must use 'map' command at least once before 'mapb'")?;
            return Ok(Flow::Continue);
        }
        (None, Some(_)) => {
            writeln!(out, "You're on the first page")?;
            return Ok(Flow::Continue);
        }
    };

    show_location_page(&url, session, client, out).await
}

async fn show_location_page<W: Write>(
    url: &str,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    let page = client.location_areas(url).await?;

    session.next = page.next;
    session.previous = page.previous;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(Flow::Continue)
}

async fn explore<W: Write>(
    args: &[String],
    client: &PokeApiClient,
    out: &mut W,
) -> Result<Flow> {
    let name = match args {
        [name] => name,
        _ => {
            return Err(PokedexError::Usage(format!(
                "{} <location-area>",
                Command::Explore.name()
            )))
        }
    };

    writeln!(out, "Exploring {}...", name)?;
    let area = client.location_area(name).await?;

    writeln!(out, "Found Pokemon:")?;
    for pokemon in area.pokemon_names() {
        writeln!(out, " - {}", pokemon)?;
    }
    Ok(Flow::Continue)
}
