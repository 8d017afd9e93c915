mod cli;
mod clipboard;
mod formatter;
mod interactive;
mod logging;
mod output;

#[cfg(test)]
#[path = "../build/src/git.rs"]
mod build_git;

use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

use cli::Cli;
use clipboard::{Clipboard, SystemClipboard};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init();

    let input = match cli.command_text() {
        Some(text) => {
            debug!(args = cli.command.len(), "formatting command from arguments");
            text
        }
        None => interactive::read_pasted_command()?,
    };

    let mut system_clipboard = SystemClipboard;
    let clipboard: Option<&mut dyn Clipboard> = if cli.no_copy {
        None
    } else {
        Some(&mut system_clipboard)
    };

    let mut stdout = io::stdout().lock();
    output::format_and_display(&mut stdout, &input, cli.single_line, clipboard)?;
    stdout.flush()?;
    Ok(())
}
