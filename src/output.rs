use anyhow::Result;
use std::io::Write;
use tracing::warn;

use crate::clipboard::Clipboard;
use crate::formatter::format_command;

pub const SEPARATOR: &str = "════════════════════════════════════════════════════════════";

const EMPTY_MESSAGE: &str = "No command text provided.";
const FOOTER: [&str; 2] = [
    "TEMPORARY FIX: This tool addresses Claude Code issue #4686",
    "https://github.com/anthropics/claude-code/issues/4686",
];

/// Formats `input`, prints it framed by separators and copies it with
/// `clipboard`. Passing `None` skips the copy. Clipboard errors are reported
/// in the output and never returned.
pub fn format_and_display<W: Write>(
    w: &mut W,
    input: &str,
    single_line: bool,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<()> {
    let formatted = format_command(input, single_line);
    if formatted.is_empty() {
        writeln!(w, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    writeln!(w, "{SEPARATOR}")?;
    writeln!(w, "{formatted}")?;
    writeln!(w, "{SEPARATOR}")?;

    match clipboard {
        Some(clipboard) => match clipboard.copy(&formatted) {
            Ok(()) => writeln!(w, "Copied to clipboard!")?,
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                writeln!(w, "Could not copy to clipboard: {err}")?;
                writeln!(w, "Please copy the command above manually.")?;
            }
        },
        None => writeln!(w, "Clipboard copy skipped.")?,
    }

    writeln!(w)?;
    for line in FOOTER {
        writeln!(w, "{line}")?;
    }
    Ok(())
}
