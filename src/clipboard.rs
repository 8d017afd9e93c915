use anyhow::{Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

const OVERRIDE_ENV: &str = "COMMAND_FIX_CLIPBOARD";

const UNIX_HELPERS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

impl<F> Clipboard for F
where
    F: FnMut(&str) -> Result<()>,
{
    fn copy(&mut self, text: &str) -> Result<()> {
        self(text)
    }
}

/// Copies through the platform's clipboard helper program.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_text(text)
    }
}

pub fn copy_text(text: &str) -> Result<()> {
    if let Some((cmd, args)) = override_command() {
        debug!(command = %cmd, "using clipboard override");
        let args = args.iter().map(String::as_str).collect::<Vec<_>>();
        return run_copy_command(&cmd, &args, text);
    }
    if cfg!(target_os = "macos") {
        return run_copy_command("pbcopy", &[], text);
    }
    if cfg!(target_os = "windows") {
        return run_copy_command("clip", &[], text);
    }

    let (cmd, args) = UNIX_HELPERS
        .iter()
        .find(|(cmd, _)| which::which(cmd).is_ok())
        .ok_or_else(|| anyhow!("no clipboard command available (tried wl-copy, xclip, xsel)"))?;
    debug!(command = %cmd, "using clipboard helper");
    run_copy_command(cmd, args, text)
}

fn override_command() -> Option<(String, Vec<String>)> {
    let value = std::env::var(OVERRIDE_ENV).ok()?;
    parse_command_line(&value)
}

fn parse_command_line(value: &str) -> Option<(String, Vec<String>)> {
    let mut parts = value.split_whitespace().map(str::to_string);
    let cmd = parts.next()?;
    Some((cmd, parts.collect()))
}

fn run_copy_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| anyhow!("failed to start clipboard command '{}': {}", cmd, err))?;
    // stdin is dropped before waiting so the helper sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    if !status.success() {
        return Err(anyhow!("clipboard command '{}' failed", cmd));
    }
    written?;
    Ok(())
}
