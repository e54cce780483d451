//! CLI argument parser for clear-project
//!
//! Provides type-safe argument parsing using clap derive.

use clap::Parser;

/// CLI arguments for clear-project
///
/// The tool takes no flags and no positional arguments; it always operates
/// on the current working directory. Parsing still rejects stray arguments
/// and provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "clear-project",
    version,
    about = "Remove recreatable build artifacts and caches from a Next.js project",
    long_about = "Deletes build output, dependency, cache, log, and editor-settings paths\n\
                  from the current working directory after listing what exists and asking\n\
                  for confirmation. Environment files and lock files are never touched."
)]
pub struct CliArgs {}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parses_with_no_arguments() {
        let result = CliArgs::try_parse_from(["clear-project"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_positional_argument() {
        let result = CliArgs::try_parse_from(["clear-project", "some-path"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let result = CliArgs::try_parse_from(["clear-project", "--delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = CliArgs::try_parse_from(["clear-project", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_help_flag() {
        let err = CliArgs::try_parse_from(["clear-project", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_args_debug() {
        let args = CliArgs::try_parse_from(["clear-project"]).unwrap();
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("CliArgs"));
    }
}
