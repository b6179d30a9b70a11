//! Read-eval-print loop.

use std::io::Write;

use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use pokedex_api::PokeApiClient;
use pokedex_core::error::{PokedexError, Result};

use crate::commands::{self, Command, Flow, Session};

const PROMPT: &str = "pokedex > ";

/// Reads commands from `input` until `exit` or end of input.
///
/// Command failures are printed and the loop keeps going; only I/O errors
/// on `input`/`out` end it early.
pub async fn run<R, W>(client: &PokeApiClient, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::default();
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report(&e, out)?;
                continue;
            }
        };

        debug!(?command, "Dispatching");
        match commands::execute(&command, &mut session, client, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => report(&e, out)?,
        }
    }

    Ok(())
}

/// User mistakes in yellow, failures in red with a retry hint when one applies.
fn report<W: Write>(err: &PokedexError, out: &mut W) -> Result<()> {
    if err.is_user_error() {
        writeln!(out, " {}", err.to_string().yellow())?;
    } else if err.is_recoverable() {
        writeln!(out, " {} {}", err.to_string().red(), "(temporary failure, try again)".dimmed())?;
    } else {
        writeln!(out, " {}", err.to_string().red())?;
        warn!(error = %err, "Command failed");
    }
    Ok(())
}
