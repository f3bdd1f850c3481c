//! Logging configuration for the itsctl CLI tool.
//!
//! Verbosity comes from `-v` flags unless `RUST_LOG` is set. Logs go to stderr, or to the file
//! given with `--log.file`.

use std::{fs::File, path::PathBuf};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use super::Result;

/// Logging configuration arguments.
#[derive(Debug, Clone, Default, Parser)]
pub struct LogArgs {
    /// Increase logging verbosity (-v = error, -vv = warn, -vvv = info, -vvvv = debug, -vvvvv =
    /// trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file path. If specified, logs are written to this file instead of stderr.
    #[arg(long = "log.file", visible_aliases = ["log-file"], global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colorful console logging. Only applies when logging to stderr (no --log.file).
    #[arg(long = "log.no-color", visible_aliases = ["log-no-color"], global = true)]
    pub log_no_color: bool,
}

impl LogArgs {
    /// The level selected by the `-v` flags, `None` when logging is off.
    pub const fn level(&self) -> Option<Level> {
        match self.verbose {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// Filter directives for the `-v` flags, ignoring `RUST_LOG`.
    pub fn directives(&self) -> String {
        match self.level() {
            None => "off".to_string(),
            Some(level) => format!("itsctl={level},interchain_deploy={level}"),
        }
    }

    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the `-v` flags. Without either, logging is off. The log
    /// target is only shown from DEBUG on.
    pub fn init(&self) -> Result<()> {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.directives())
        };
        let show_target = self.verbose >= 4;

        if let Some(ref log_file) = self.log_file {
            let file = File::create(log_file)?;
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(file)
                .with_ansi(false)
                .init();
        } else {
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .with_ansi(!self.log_no_color)
                .init();
        }
        Ok(())
    }
}
