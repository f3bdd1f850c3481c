use std::{collections::BTreeSet, path::Path};

use alloy_primitives::{keccak256, Address, B256};
use serde::{Deserialize, Serialize};

use crate::chain_name_hash;

/// Errors raised while loading an [`ExecutorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration is not valid JSON for [`ExecutorConfig`].
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is empty.
    #[error("Invalid config: `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Process-wide configuration of a deployment executor. It is fixed once the executor is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    /// Name of the ledger the executor runs on.
    pub chain_name: String,
    /// Chain name the hub sends from.
    pub hub_chain: String,
    /// Address the hub sends from.
    pub hub_address: Address,
    /// Factory address every predicted address descends from.
    pub factory_address: Address,
    /// Hash of the token contract init code.
    pub token_init_code_hash: B256,
    /// Hash of the token manager init code.
    pub token_manager_init_code_hash: B256,
    /// Origin chains accepted inside hub envelopes. Empty accepts every origin chain.
    #[serde(default)]
    pub trusted_chains: BTreeSet<String>,
}

impl ExecutorConfig {
    /// Creates a configuration trusting the given hub. Init code hashes default to the hashes of
    /// the contract names and can be overridden with [`Self::with_init_code_hashes`].
    pub fn new(
        chain_name: impl Into<String>,
        hub_chain: impl Into<String>,
        hub_address: Address,
        factory_address: Address,
    ) -> Self {
        Self {
            chain_name: chain_name.into(),
            hub_chain: hub_chain.into(),
            hub_address,
            factory_address,
            token_init_code_hash: keccak256("InterchainToken"),
            token_manager_init_code_hash: keccak256("TokenManager"),
            trusted_chains: BTreeSet::new(),
        }
    }

    /// Sets the token and token manager init code hashes.
    pub fn with_init_code_hashes(mut self, token: B256, token_manager: B256) -> Self {
        self.token_init_code_hash = token;
        self.token_manager_init_code_hash = token_manager;
        self
    }

    /// Adds trusted origin chains.
    pub fn with_trusted_chains<I, S>(mut self, chains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_chains.extend(chains.into_iter().map(Into::into));
        self
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the chain names are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_name.is_empty() {
            return Err(ConfigError::EmptyField("chainName"));
        }
        if self.hub_chain.is_empty() {
            return Err(ConfigError::EmptyField("hubChain"));
        }
        Ok(())
    }

    /// Hash of the local chain name.
    pub fn chain_name_hash(&self) -> B256 {
        chain_name_hash(&self.chain_name)
    }

    /// Whether the hub may deliver payloads originating on `chain`.
    pub fn is_trusted_chain(&self, chain: &str) -> bool {
        self.trusted_chains.is_empty() || self.trusted_chains.contains(chain)
    }
}
