//! Command-line argument parsing.

/// Options for the interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiOptions {
    /// Overrides the configured GitHub owner
    pub owner: Option<String>,
    /// Log at debug level
    pub verbose: bool,
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Clear persisted preferences and exit
    Reset,
    /// Run the portfolio (default)
    RunTui(TuiOptions),
    /// Arguments that could not be understood
    Invalid(String),
}

/// Parse `args` (program name first, as from `std::env::args()`).
///
/// `--version`, `--help` and `--reset` win over everything else on the line.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--reset" => return CliCommand::Reset,
            "--verbose" | "-v" => options.verbose = true,
            "--owner" => match args.next() {
                Some(owner) if !owner.starts_with('-') && !owner.trim().is_empty() => {
                    options.owner = Some(owner)
                }
                _ => return CliCommand::Invalid("--owner requires a GitHub user name".to_string()),
            },
            other => {
                if let Some(owner) = other.strip_prefix("--owner=") {
                    if owner.trim().is_empty() {
                        return CliCommand::Invalid("--owner requires a GitHub user name".to_string());
                    }
                    options.owner = Some(owner.to_string());
                } else {
                    return CliCommand::Invalid(format!("unrecognized argument '{}'", other));
                }
            }
        }
    }

    CliCommand::RunTui(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("folio")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_reset() {
        assert_eq!(parse(&["--reset"]), CliCommand::Reset);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(TuiOptions::default()));
    }

    #[test]
    fn test_parse_owner_and_verbose() {
        let expected = CliCommand::RunTui(TuiOptions {
            owner: Some("rust-lang".to_string()),
            verbose: true,
        });
        assert_eq!(parse(&["--owner", "rust-lang", "--verbose"]), expected);
        assert_eq!(parse(&["-v", "--owner=rust-lang"]), expected);
    }

    #[test]
    fn test_parse_owner_missing_value() {
        assert!(matches!(parse(&["--owner"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--owner", "--verbose"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--owner="]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::Invalid("unrecognized argument '--unknown'".to_string())
        );
    }

    #[test]
    fn test_version_wins_over_other_flags() {
        assert_eq!(parse(&["--owner", "x", "--version"]), CliCommand::Version);
    }
}
