mod stdio_loop;
mod tty_loop;

use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use tracing::debug;

pub use stdio_loop::read_until_blank;

const PASTE_PROMPT: &str = "Paste the command below (press Enter twice to process):";

trait InteractiveBackend {
    fn read_paste(&self) -> Result<Vec<String>>;
}

struct TtyBackend;
struct StdioBackend;

impl InteractiveBackend for TtyBackend {
    fn read_paste(&self) -> Result<Vec<String>> {
        tty_loop::read_paste()
    }
}

impl InteractiveBackend for StdioBackend {
    fn read_paste(&self) -> Result<Vec<String>> {
        read_until_blank(io::stdin().lock())
    }
}

/// Prompts for a pasted command and returns the lines read before the first
/// blank line, joined with newlines.
pub fn read_pasted_command() -> Result<String> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{PASTE_PROMPT}")?;
    writeln!(stdout)?;
    stdout.flush()?;

    let backend: &dyn InteractiveBackend =
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            debug!("reading paste through line editor");
            &TtyBackend
        } else {
            debug!("reading paste from plain stdin");
            &StdioBackend
        };
    let lines = backend.read_paste()?;
    debug!(lines = lines.len(), "paste finished");
    Ok(lines.join("\n"))
}
