//! Command-line arguments.

use std::path::PathBuf;

use thiserror::Error;

/// Usage text for `--help` and argument errors.
pub const USAGE: &str = "\
smartpark - Smart parking system with costing

Usage:
  smartpark [--config <path>] [--hour <0-23>]

Options:
  --config <path>   Load facility config from a JSON file
  --hour <0-23>     Price every stay as if it were this hour
  -h, --help        Show this help

Environment:
  SMARTPARK_CONFIG          JSON config file (when --config is not given)
  SMARTPARK_SLOTS           Number of slots (default: 10)
  SMARTPARK_BASE_RATE       Hourly rate of slot 1 (default: 100)
  SMARTPARK_RATE_DECREMENT  Rate drop per slot (default: 10)
  SMARTPARK_CURRENCY        Currency symbol (default: ₹)
  RUST_LOG                  Log filter, logs go to stderr (default: warn)";

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// Flag given without its value
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    /// `--hour` outside 0-23 or not a number
    #[error("invalid hour: {0:?} (expected 0-23)")]
    InvalidHour(String),

    /// Unrecognised argument
    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Settings for an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Config file overriding the environment
    pub config: Option<PathBuf>,
    /// Pinned hour of day for pricing
    pub hour: Option<u32>,
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the menu loop
    Run(Options),
    /// Print usage and exit
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or(ArgsError::MissingValue("--config"))?;
                    options.config = Some(PathBuf::from(path));
                }
                "--hour" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--hour"))?;
                    let hour = value
                        .parse::<u32>()
                        .ok()
                        .filter(|h| *h < 24)
                        .ok_or(ArgsError::InvalidHour(value))?;
                    options.hour = Some(hour);
                }
                "-h" | "--help" | "help" => return Ok(Self::Help),
                _ => return Err(ArgsError::Unknown(arg)),
            }
        }

        Ok(Self::Run(options))
    }
}
