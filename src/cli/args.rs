//! Command-line argument parsing for the creatorkit CLI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the signed-in user
    WhoAmI,
    /// Sign out and open the login page
    Logout,
    /// List saved ideas
    Ideas,
    /// Delete one saved idea by id
    DeleteIdea(String),
    /// Show usage; `Some` carries the reason
    Usage(Option<String>),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name and is skipped. Flags are
/// recognised anywhere; the first positional argument picks the command.
///
/// # Examples
///
/// ```
/// use creatorkit::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["creatorkit".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut positional = Vec::new();
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Usage(None),
            _ => positional.push(arg),
        }
    }

    let mut rest = positional.into_iter();
    let Some(command) = rest.next() else {
        return CliCommand::Usage(None);
    };

    match command.as_str() {
        "whoami" => CliCommand::WhoAmI,
        "logout" => CliCommand::Logout,
        "ideas" => CliCommand::Ideas,
        "delete-idea" => match rest.next() {
            Some(id) if !id.trim().is_empty() => CliCommand::DeleteIdea(id),
            _ => CliCommand::Usage(Some("delete-idea requires an idea id".to_string())),
        },
        other => CliCommand::Usage(Some(format!("unknown command: {}", other))),
    }
}

/// Text printed for [`CliCommand::Usage`].
pub const USAGE: &str = "\
Usage: creatorkit <command>

Commands:
  whoami              Show the signed-in user
  logout              Sign out and open the login page
  ideas               List saved ideas
  delete-idea <id>    Delete a saved idea

Options:
  -V, --version       Print version
  -h, --help          Print this help";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["creatorkit".to_string()];
        all.extend(args.iter().map(|arg| arg.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_version_flag_wins_over_command() {
        assert_eq!(parse(&["ideas", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse(&["whoami"]), CliCommand::WhoAmI);
        assert_eq!(parse(&["logout"]), CliCommand::Logout);
        assert_eq!(parse(&["ideas"]), CliCommand::Ideas);
    }

    #[test]
    fn test_parse_delete_idea() {
        assert_eq!(
            parse(&["delete-idea", "42"]),
            CliCommand::DeleteIdea("42".to_string())
        );
    }

    #[test]
    fn test_delete_idea_without_id() {
        assert_eq!(
            parse(&["delete-idea"]),
            CliCommand::Usage(Some("delete-idea requires an idea id".to_string()))
        );
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Usage(None));
        assert_eq!(parse(&["--help"]), CliCommand::Usage(None));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse(&["publish"]),
            CliCommand::Usage(Some("unknown command: publish".to_string()))
        );
    }
}
