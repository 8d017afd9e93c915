use clap::Parser;
use std::ffi::OsString;

const VERSION_LINE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit: ",
    env!("COMMAND_FIX_COMMIT"),
    ", target: ",
    env!("COMMAND_FIX_TARGET"),
    ", profile: ",
    env!("COMMAND_FIX_PROFILE"),
    ")"
);

/// Flags recognized anywhere on the command line. Every other token is
/// command text, even when it starts with a dash (`head -n 5`).
const KNOWN_FLAGS: &[&str] = &["-s", "--single-line", "--no-copy", "--help", "--version"];

/// Short help/version forms, honored only as the sole argument so that
/// commands like `df -h` keep them.
const SOLE_FLAGS: &[&str] = &["-h", "-V"];

#[derive(Debug, Parser)]
#[command(
    name = "command-fix",
    version = VERSION_LINE,
    about = "Clean up terminal commands copied from wrapped chat output",
    after_help = "Without COMMAND, paste the command interactively and press Enter twice."
)]
pub struct Cli {
    /// Collapse backslash line continuations into a single line
    #[arg(short = 's', long = "single-line")]
    pub single_line: bool,

    /// Print the formatted command without copying it to the clipboard
    #[arg(long = "no-copy")]
    pub no_copy: bool,

    /// Command text to format (read interactively when omitted)
    #[arg(value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_from(reorder_args(std::env::args_os()))
    }

    /// Joined command text, or `None` when interactive input is required.
    pub fn command_text(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

/// Moves recognized flags ahead of the command text and separates the two
/// with `--`, so tokens such as `-la` reach the command unchanged.
pub fn reorder_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("command-fix"));
    let args = args.collect::<Vec<_>>();

    let sole_flag = matches!(args.as_slice(), [only] if is_one_of(only, SOLE_FLAGS));

    let (flags, rest): (Vec<OsString>, Vec<OsString>) = if sole_flag {
        (args, Vec::new())
    } else {
        args.into_iter().partition(|arg| is_one_of(arg, KNOWN_FLAGS))
    };

    let mut reordered = Vec::with_capacity(flags.len() + rest.len() + 2);
    reordered.push(program);
    reordered.extend(flags);
    reordered.push(OsString::from("--"));
    reordered.extend(rest);
    reordered
}

fn is_one_of(arg: &OsString, names: &[&str]) -> bool {
    arg.to_str().is_some_and(|arg| names.contains(&arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["command-fix"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(reorder_args(argv)).unwrap()
    }

    #[test]
    fn no_arguments_means_interactive() {
        let cli = parse(&[]);
        assert!(cli.command_text().is_none());
        assert!(!cli.single_line);
        assert!(!cli.no_copy);
    }

    #[test]
    fn joins_positionals_with_single_spaces() {
        let cli = parse(&["ls", "-la", "|", "grep", "src"]);
        assert_eq!(cli.command_text().as_deref(), Some("ls -la | grep src"));
    }

    #[test]
    fn extracts_interspersed_flags() {
        let cli = parse(&["docker", "-s", "run", "--no-copy", "-p", "80:80"]);
        assert!(cli.single_line);
        assert!(cli.no_copy);
        assert_eq!(cli.command_text().as_deref(), Some("docker run -p 80:80"));
    }

    #[test]
    fn long_single_line_flag() {
        let cli = parse(&["--single-line", "echo hi"]);
        assert!(cli.single_line);
        assert_eq!(cli.command_text().as_deref(), Some("echo hi"));
    }

    #[test]
    fn unknown_dash_tokens_are_command_text() {
        let cli = parse(&["--rm", "-it", "--", "x"]);
        assert_eq!(cli.command_text().as_deref(), Some("--rm -it -- x"));
    }

    #[test]
    fn version_and_help_stop_parsing() {
        let version = Cli::try_parse_from(reorder_args(["command-fix", "echo", "--version"]))
            .unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(version.to_string().contains("commit:"));

        let help = Cli::try_parse_from(reorder_args(["command-fix", "-h"])).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = Cli::try_parse_from(reorder_args(["command-fix", "-V"])).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn command_short_options_are_kept() {
        let cli = parse(&["head", "-n", "5", "log.txt"]);
        assert!(!cli.no_copy);
        assert_eq!(cli.command_text().as_deref(), Some("head -n 5 log.txt"));

        let cli = parse(&["df", "-h"]);
        assert_eq!(cli.command_text().as_deref(), Some("df -h"));

        let cli = parse(&["java", "-V", "-h"]);
        assert_eq!(cli.command_text().as_deref(), Some("java -V -h"));
    }

    #[test]
    fn reorder_keeps_program_name_first() {
        let argv = reorder_args(["bin", "a", "-s", "b"]);
        let expected = ["bin", "-s", "--", "a", "b"].map(OsString::from);
        assert_eq!(argv, expected);
    }
}
