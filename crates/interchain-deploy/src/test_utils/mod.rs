//! Fixtures shared by unit and integration tests.

use alloy_primitives::{address, keccak256, Address, Bytes, B256};

use crate::{
    wrap_for_hub, CommandId, DeployMessage, DeploymentExecutor, DeploymentParams, ExecutorConfig,
    TokenId,
};

/// Chain name the hub sends from.
pub const HUB_CHAIN: &str = "axelar";
/// Address the hub sends from.
pub const HUB_ADDRESS: Address = address!("00000000000000000000000000000000000000a1");
/// Factory address shared by every test ledger.
pub const FACTORY: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
/// Deployer of the test tokens.
pub const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
/// Chain the test payloads originate on.
pub const SOURCE_CHAIN: &str = "source chain";
/// Chain the test executor runs on.
pub const DESTINATION_CHAIN: &str = "destination chain";

/// Token name used across fixtures.
pub const TOKEN_NAME: &str = "Token Name";
/// Token symbol used across fixtures.
pub const TOKEN_SYMBOL: &str = "TN";
/// Token decimals used across fixtures.
pub const TOKEN_DECIMALS: u8 = 18;

/// Configuration of the destination ledger, trusting [`SOURCE_CHAIN`] and [`DESTINATION_CHAIN`].
pub fn test_config() -> ExecutorConfig {
    ExecutorConfig::new(DESTINATION_CHAIN, HUB_CHAIN, HUB_ADDRESS, FACTORY)
        .with_init_code_hashes(
            keccak256("TestInterchainToken"),
            keccak256("TestTokenManager"),
        )
        .with_trusted_chains([SOURCE_CHAIN, DESTINATION_CHAIN])
}

/// A fresh executor with [`test_config`].
pub fn test_executor() -> DeploymentExecutor {
    DeploymentExecutor::new(test_config())
}

/// Deployment params of the fixture token with the given minter.
pub fn token_params(minter: Option<Address>) -> DeploymentParams {
    DeploymentParams::new(TOKEN_NAME, TOKEN_SYMBOL, TOKEN_DECIMALS).with_minter(minter)
}

/// A hub-delivered payload deploying `token_id` with `params`, originating on [`SOURCE_CHAIN`].
pub fn hub_payload(token_id: TokenId, params: DeploymentParams) -> Bytes {
    wrap_for_hub(SOURCE_CHAIN, &DeployMessage::new(token_id, params).encode())
}

/// A deterministic command id.
pub fn command_id(n: u64) -> CommandId {
    keccak256(B256::left_padding_from(&n.to_be_bytes()))
}
