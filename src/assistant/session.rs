//! Read-eval-print loop over any line source and sink.

use super::handlers::{Assistant, Outcome};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run an interactive session until `close`/`exit` or end of input.
///
/// Each line is fully handled and its reply written before the next line is
/// read. Only I/O failures are returned; command failures become replies.
pub fn run_session<R, W>(assistant: &mut Assistant, mut input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("Input closed, ending session");
            break;
        }

        // Undecodable bytes become U+FFFD and fall through to a normal reply
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8");
        }

        match assistant.handle(&line) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    Ok(())
}
