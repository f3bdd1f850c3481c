use clap::{Parser, Subcommand};

use crate::common::{ItsError, LogArgs};

/// Interchain token deployment tool
#[derive(Parser, Debug)]
#[command(infer_subcommands = true, version = "0.1")]
pub struct Cli {
    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,

    /// Command to run
    #[command(subcommand)]
    pub cmd: MainCmd,
}

/// Main command enumeration for the itsctl CLI tool
#[derive(Subcommand, Debug)]
pub enum MainCmd {
    /// Derive the token id of an interchain or canonical token
    TokenId(crate::token_id::Cmd),
    /// Predict token and token manager addresses
    Predict(crate::predict::Cmd),
    /// Encode a deploy message, optionally wrapped in a hub envelope
    Encode(crate::encode::Cmd),
    /// Execute a hub payload against a fresh ledger
    Execute(crate::execute::Cmd),
}

/// Error types for the main command system
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Logging could not be set up
    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] ItsError),
    /// Command error
    #[error("{0}")]
    Its(#[from] ItsError),
}

impl Cli {
    /// Execute the selected command
    pub fn run(&self) -> Result<(), Error> {
        self.log_args.init().map_err(Error::Logging)?;
        self.cmd.run()
    }
}

impl MainCmd {
    /// Execute the main command
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::TokenId(cmd) => cmd.run()?,
            Self::Predict(cmd) => cmd.run()?,
            Self::Encode(cmd) => cmd.run()?,
            Self::Execute(cmd) => cmd.run()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from([
            "itsctl",
            "-vv",
            "token-id",
            "--deployer",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "--salt",
            "deployRemoteInterchainToken",
        ])
        .unwrap();
        assert_eq!(cli.log_args.verbose, 2);
        assert!(matches!(cli.cmd, MainCmd::TokenId(_)));

        assert!(Cli::try_parse_from(["itsctl", "unknown"]).is_err());
    }
}
