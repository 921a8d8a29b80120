use crate::io::DEFAULT_DATA_FILE;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// Track personal expenses in a local JSON file
///
/// Global options go before the command. Everything from the command on is
/// handed to the command parser as-is.
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Track personal expenses in a local JSON file", long_about = None)]
pub struct CliArgs {
    /// Data file holding the expenses
    #[arg(
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the JSON data file"
    )]
    pub data_file: PathBuf,

    /// Logging verbosity, overridden by RUST_LOG when set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value_t = LevelFilter::WARN,
        help = "One of: off, error, warn, info, debug, trace"
    )]
    pub log_level: LevelFilter,

    /// The command and its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "add, delete, list or summary, followed by its arguments"
    )]
    pub command: Vec<String>,
}

impl CliArgs {
    /// Path of the data file the store should use
    pub fn store_path(&self) -> &Path {
        &self.data_file
    }

    /// Raw command tokens, starting with the command name
    pub fn command_tokens(&self) -> &[String] {
        &self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_file(&["program", "list"], "expenses.json")]
    #[case::custom_file(&["program", "--file", "/tmp/data.json", "list"], "/tmp/data.json")]
    fn test_data_file(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.store_path(), Path::new(expected));
    }

    #[rstest]
    #[case::default_level(&["program"], LevelFilter::WARN)]
    #[case::debug(&["program", "--log-level", "debug", "list"], LevelFilter::DEBUG)]
    #[case::off(&["program", "--log-level", "off"], LevelFilter::OFF)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: LevelFilter) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::no_command(&["program"], &[])]
    #[case::list(&["program", "list"], &["list"])]
    #[case::add_flags_kept(
        &["program", "add", "--description", "coffee", "--amount", "4.50"],
        &["add", "--description", "coffee", "--amount", "4.50"]
    )]
    #[case::delete_equals_form(&["program", "delete", "--id=3"], &["delete", "--id=3"])]
    #[case::global_option_first(
        &["program", "--file", "x.json", "summary", "--month=5"],
        &["summary", "--month=5"]
    )]
    fn test_command_tokens(#[case] args: &[&str], #[case] expected: &[&str]) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command_tokens(), expected);
    }

    #[rstest]
    #[case::invalid_log_level(&["program", "--log-level", "loud", "list"])]
    #[case::file_without_value(&["program", "--file"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
