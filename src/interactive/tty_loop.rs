use anyhow::Result;
use rustyline::error::ReadlineError;

pub fn read_paste() -> Result<Vec<String>> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let mut lines = Vec::new();
    loop {
        match editor.readline("") {
            Ok(line) => {
                if push_editor_line(&mut lines, &line) {
                    break;
                }
            }
            Err(ReadlineError::Eof) => break,
            // Ctrl-C discards the paste.
            Err(ReadlineError::Interrupted) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(lines)
}

/// Appends one editor line to `lines`. A bracketed paste can deliver several
/// lines in one read, so the line is split and the first empty piece ends the
/// paste. Returns true once the paste is complete.
fn push_editor_line(lines: &mut Vec<String>, line: &str) -> bool {
    for piece in line.split('\n') {
        let piece = piece.strip_suffix('\r').unwrap_or(piece);
        if piece.is_empty() {
            return true;
        }
        lines.push(piece.to_string());
    }
    false
}
