//! Argument groups shared by several commands.

use std::path::PathBuf;

use alloy_primitives::{Address, B256};
use clap::Parser;
use interchain_deploy::{DeploymentParams, ExecutorConfig, TokenId};
use tracing::debug;

use super::Result;

/// Executor configuration arguments.
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the executor configuration JSON file
    #[arg(long = "config", env = "ITS_CONFIG")]
    pub config: PathBuf,
}

impl ConfigArgs {
    /// Loads and validates the configuration file.
    pub fn load(&self) -> Result<ExecutorConfig> {
        let config = ExecutorConfig::from_json_file(&self.config)?;
        debug!(
            path = %self.config.display(),
            chain_name = %config.chain_name,
            factory = %config.factory_address,
            "Loaded executor config"
        );
        Ok(config)
    }
}

/// Token deployment arguments.
#[derive(Parser, Debug, Clone)]
pub struct TokenArgs {
    /// Token id of the deployment
    #[arg(long = "token-id")]
    pub token_id: B256,

    /// Token name
    #[arg(long)]
    pub name: String,

    /// Token symbol
    #[arg(long)]
    pub symbol: String,

    /// Token decimals
    #[arg(long, default_value_t = 18)]
    pub decimals: u8,

    /// Minter of the token. Omit for no minter.
    #[arg(long)]
    pub minter: Option<Address>,
}

impl TokenArgs {
    /// The token id as a [`TokenId`].
    pub const fn token_id(&self) -> TokenId {
        TokenId(self.token_id)
    }

    /// Deployment params built from the arguments.
    pub fn params(&self) -> DeploymentParams {
        DeploymentParams::new(self.name.clone(), self.symbol.clone(), self.decimals)
            .with_minter(self.minter)
    }
}
