use anyhow::Result;
use std::io::BufRead;

/// Collects lines until the first empty line or end of input.
pub fn read_until_blank<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let content = strip_line_ending(&line);
        if content.is_empty() {
            break;
        }
        lines.push(content.to_string());
    }
    Ok(lines)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
