use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::path::PathBuf;

/// Parsed command-line invocation
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given with `--config`; `None` means use the default
    /// path and tolerate its absence
    pub(crate) config: Option<PathBuf>,

    /// Directory for the log file & default leaderboard
    pub(crate) data_dir: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            config: None,
            data_dir: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("data-dir") => {
                    args.data_dir = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-level") => {
                    args.log_level = parser.value()?.parse()?;
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: ",
    env!("CARGO_PKG_NAME"),
    " [OPTIONS]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>      Read configuration from the given file\n",
    "      --data-dir <PATH>    Store the log & leaderboard in the given directory\n",
    "      --log-level <LEVEL>  Log level: off, error, warn, info, debug, trace\n",
    "                           [default: info]\n",
    "  -h, --help               Show this help and exit\n",
    "  -V, --version            Show the program version and exit\n",
);
