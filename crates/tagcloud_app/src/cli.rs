use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tagcloud_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};

/// Generate an HTML tag cloud of the most frequent words in a text file.
///
/// Any of input, output or count left out is asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "tagcloud", version)]
pub(crate) struct Args {
    /// Text file to read (must end in .txt)
    #[arg(short, long)]
    pub input: Option<String>,

    /// HTML file to write (must end in .html)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of words to include in the cloud
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// RON file overriding separators, font range and stylesheets
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write a JSON summary of the selected words
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Skip the .txt/.html file name checks
    #[arg(long)]
    pub allow_any_extension: bool,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log file used by --log file|both
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Args {
    pub fn log_destination(&self) -> LogDestination {
        let path = || {
            self.log_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
        };
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File(path()),
            LogTarget::Both => LogDestination::Both(path()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn negative_count_reaches_validation() {
        let args = Args::try_parse_from(["tagcloud", "-n", "-3"]).unwrap();
        assert_eq!(args.count, Some(-3));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let args = Args::try_parse_from(["tagcloud", "-vv"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let quiet = Args::try_parse_from(["tagcloud"]).unwrap();
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn file_logging_defaults_path() {
        let args = Args::try_parse_from(["tagcloud", "--log", "both"]).unwrap();
        assert_eq!(
            args.log_destination(),
            LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }
}
