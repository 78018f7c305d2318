pub mod report;
pub mod select;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

pub const USAGE: &str = "usage: logs_analysis.py [-f]";

#[derive(Parser, Debug)]
#[command(
    name = "logs_analysis",
    version,
    about = "Report on article popularity and error rates in the news database"
)]
pub struct Cli {
    /// Write the report to <Title>.txt in the current directory instead of the console
    #[arg(short = 'f', overrides_with = "file")]
    pub file: bool,

    /// Path to the news database (defaults to $LOGS_ANALYSIS_DB, then the data directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Operands after the options are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

/// Outcome of argument parsing that does not produce a `Cli`.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Bad arguments: print [`USAGE`] and exit with status 2.
    Usage,
    /// `--help` or `--version`: let clap print it.
    Info(clap::Error),
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseOutcome::Info(e),
        _ => ParseOutcome::Usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_console() {
        let cli = parse_from(["logs_analysis"]).unwrap();
        assert!(!cli.file);
        assert!(cli.db.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_file_flag() {
        let cli = parse_from(["logs_analysis", "-f"]).unwrap();
        assert!(cli.file);
    }

    #[test]
    fn test_db_and_verbosity() {
        let cli = parse_from(["logs_analysis", "-vv", "--db", "/data/news.db"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.db, Some(PathBuf::from("/data/news.db")));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        assert!(matches!(
            parse_from(["logs_analysis", "-z"]),
            Err(ParseOutcome::Usage)
        ));
        assert!(matches!(
            parse_from(["logs_analysis", "-f", "-z"]),
            Err(ParseOutcome::Usage)
        ));
    }

    #[test]
    fn test_operands_are_ignored() {
        let cli = parse_from(["logs_analysis", "stray"]).unwrap();
        assert!(!cli.file);
        assert_eq!(cli.rest, vec![OsString::from("stray")]);

        // Option parsing stops at the first operand.
        let cli = parse_from(["logs_analysis", "-f", "stray", "-z"]).unwrap();
        assert!(cli.file);
        assert_eq!(cli.rest.len(), 2);
    }

    #[test]
    fn test_repeated_file_flag() {
        assert!(parse_from(["logs_analysis", "-f", "-f"]).unwrap().file);
        assert!(parse_from(["logs_analysis", "-ff"]).unwrap().file);
    }

    #[test]
    fn test_help_is_not_usage_error() {
        assert!(matches!(
            parse_from(["logs_analysis", "--help"]),
            Err(ParseOutcome::Info(_))
        ));
    }
}
