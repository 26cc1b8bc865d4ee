//! Simple interactive CLI mode
//!
//! Line-based game loop over a [`Lobby`], for terminals without the TUI.

use crate::game::{CommandArgs, Lobby, PlayerId, SessionStore};
use chrono::Utc;
use std::io::{self, BufRead, Write};

/// Player identity used by the single-player terminal modes
pub const LOCAL_PLAYER: &str = "local";

/// Run the simple interactive CLI mode
///
/// Reads commands (`start`, `guess <word>`, `stop`, `help`) from `input` until
/// `quit` or end of input. A bare word is treated as a guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(lobby: &mut Lobby<S>, input: R, mut output: W) -> io::Result<()>
where
    S: SessionStore,
    R: BufRead,
    W: Write,
{
    let player = PlayerId::from(LOCAL_PLAYER);

    writeln!(output, "Wordle - type `help` for commands, `quit` to exit.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "" => {}
            "quit" | "exit" | "q" => {
                writeln!(output, "Thanks for playing!")?;
                return Ok(());
            }
            _ => {
                let reply = match parse_line(trimmed) {
                    Ok(args) => {
                        let reply = lobby.handle(&player, &args, Utc::now());
                        match reply.public {
                            Some(share) => format!("{}\n\n{share}", reply.private),
                            None => reply.private,
                        }
                    }
                    Err(err) => format!("{err}. Type `help` for commands."),
                };
                writeln!(output, "{reply}")?;
            }
        }

        prompt(&mut output)?;
    }

    Ok(())
}

/// A lone word that isn't an action is shorthand for `guess <word>`
fn parse_line(line: &str) -> Result<CommandArgs, crate::error::ParseError> {
    CommandArgs::parse(line).or_else(|err| {
        let is_single_word =
            !line.contains(char::is_whitespace) && line.chars().all(|c| c.is_ascii_alphabetic());
        if is_single_word {
            Ok(CommandArgs::guess(line))
        } else {
            Err(err)
        }
    })
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
