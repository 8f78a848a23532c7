//! Read-eval-print loop over any line source.
//!
//! Input and output are generic so the loop runs the same on a terminal and
//! in tests.

use crate::commands::{dispatch, Reply, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const DEFAULT_PROMPT: &str = ">>> ";
pub const INVALID_INPUT: &str = "Input must be valid UTF-8";

/// Run the loop until `exit`/`close` or end of input.
///
/// A line that is not valid UTF-8 is answered and skipped. Only I/O
/// failures of the reader or writer end the loop with an error.
pub fn run<R, W>(session: &mut Session, mut reader: R, mut writer: W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", WELCOME)?;
    info!("Session started");

    let mut buf = Vec::new();
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            writeln!(writer)?;
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Skipping line that is not valid UTF-8");
                writeln!(writer, "{}", INVALID_INPUT)?;
                continue;
            }
        };

        match dispatch(line, session) {
            Reply::Continue(message) => writeln!(writer, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(writer, "{}", message)?;
                break;
            }
            Reply::Silent => {}
        }
    }

    info!(contacts = session.book().len(), "Session finished");
    Ok(())
}
