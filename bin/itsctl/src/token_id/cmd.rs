use alloy_primitives::Address;
use clap::Parser;
use interchain_deploy::{
    chain_name_hash, derive_canonical_token_id, derive_salt, derive_token_id, Salt, TokenId,
};
use serde::Serialize;
use tracing::info;

use crate::common::{print_json, ItsError, Result};

/// Derive the token id of an interchain or canonical token
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Deployer of an interchain token
    #[arg(long, requires = "salt_key", conflicts_with = "canonical")]
    pub deployer: Option<Address>,

    /// Key hashed into the deployment salt
    #[arg(long = "salt", requires = "deployer")]
    pub salt_key: Option<String>,

    /// Existing token to derive the canonical token id of
    #[arg(long, requires = "chain")]
    pub canonical: Option<Address>,

    /// Chain the canonical token lives on
    #[arg(long, requires = "canonical")]
    pub chain: Option<String>,
}

/// Output of the token-id command.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIdOutput {
    /// Salt of an interchain token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<Salt>,
    /// Derived token id
    pub token_id: TokenId,
}

impl Cmd {
    /// Execute the token-id command
    pub fn run(&self) -> Result<()> {
        let output = self.derive()?;
        info!(token_id = %output.token_id, "Derived token id");
        print_json(&output)
    }

    /// Derive the token id selected by the arguments.
    pub fn derive(&self) -> Result<TokenIdOutput> {
        match (self.deployer, &self.salt_key, self.canonical, &self.chain) {
            (Some(deployer), Some(key), None, None) => {
                let salt = derive_salt(key);
                Ok(TokenIdOutput { salt: Some(salt), token_id: derive_token_id(deployer, salt) })
            }
            (None, None, Some(token), Some(chain)) => Ok(TokenIdOutput {
                salt: None,
                token_id: derive_canonical_token_id(chain_name_hash(chain), token),
            }),
            _ => Err(ItsError::InvalidInput(
                "expected either --deployer with --salt or --canonical with --chain".to_string(),
            )),
        }
    }
}
