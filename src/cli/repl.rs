//! The interactive command loop

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::ContactsResult;

use super::handlers::respond;
use super::session::Session;

/// Prompt printed before every command
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `input` until an exit command or end of input
///
/// Replies go to `output`. The session's autosave runs once the loop ends,
/// including when reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: W,
) -> ContactsResult<()> {
    let result = read_commands(session, input, output);
    let saved = session.finish();
    result.and(saved)
}

fn read_commands<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> ContactsResult<()> {
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            info!("end of input");
            break;
        }

        // Undecodable bytes become U+FFFD and the line is handled like any other
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        let reply = respond(session, line);
        writeln!(output, "{}", reply.text)?;

        if reply.exit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}
