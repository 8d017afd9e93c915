//! Normalization of command text pasted from wrapped chat output.
//!
//! The formatter is a fixed sequence of rewrite rules. Backslash
//! continuations are either kept (one fragment per line, two-space indent)
//! or folded into a single line together with every other line break.

use std::sync::LazyLock;

use regex::Regex;

// Whitespace inside the command is the ASCII set only: tab, newline, form
// feed, carriage return and space. Other Unicode spaces (NBSP) are kept.
static LINE_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\\[\t\n\f\r ]*\n[\t\n\f\r ]*"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"[\t\n\f\r ]+"));
static AND_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[\t\n\f\r ]*&&[\t\n\f\r ]*"));
static PIPE_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[\t\n\f\r ]*\|[\t\n\f\r ]*"));
static SEMICOLON: LazyLock<Regex> = LazyLock::new(|| compile(r"[\t\n\f\r ]*;[\t\n\f\r ]*"));

const CONTINUATION_JOIN: &str = " \\\n  ";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid formatter pattern {pattern}: {err}"))
}

/// Cleans `text` into a canonical command string.
///
/// Returns an empty string when `text` holds nothing but whitespace. When the
/// text contains backslash continuations and `single_line` is false, the
/// continuation structure is kept and every continued fragment is re-indented
/// by two spaces. Otherwise all line breaks are folded, whitespace runs are
/// collapsed and the spacing around `&&`, `|` and `;` is normalized.
///
/// `||` is not recognized as an operator of its own: each `|` is rewritten
/// independently, so `a || b` becomes `a |  | b`.
pub fn format_command(text: &str, single_line: bool) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    if !single_line && has_line_continuation(text) {
        return format_multi_line(text);
    }

    let folded = LINE_CONTINUATION.replace_all(text, " ");
    format_single_line(&folded)
}

pub fn has_line_continuation(text: &str) -> bool {
    LINE_CONTINUATION.is_match(text)
}

fn format_single_line(text: &str) -> String {
    let rules: [(&Regex, &str); 3] = [
        (&*AND_OPERATOR, " && "),
        (&*PIPE_OPERATOR, " | "),
        (&*SEMICOLON, "; "),
    ];
    let mut out = WHITESPACE.replace_all(text, " ").into_owned();
    for (pattern, replacement) in rules {
        out = pattern.replace_all(&out, replacement).into_owned();
    }
    out
}

fn format_multi_line(text: &str) -> String {
    LINE_CONTINUATION
        .split(text)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(CONTINUATION_JOIN)
}
