//! Deterministic address prediction.
//!
//! Token contracts and token managers are deployed in two `CREATE2` stages so that their
//! addresses never depend on ledger-local nonces:
//!
//! 1. The factory deploys an intermediate deployer per token id and role at
//!    `create2(factory, keccak256(abi.encode(keccak256(prefix), token_id)), keccak256(DEPLOYER_INIT_CODE))`.
//! 2. The intermediate deployer deploys the contract itself:
//!    - token: `create2(token_deployer, keccak256(constructor_params), token_init_code_hash)`
//!    - manager: `create2(manager_deployer, token_id, token_manager_init_code_hash)`
//!
//! Any ledger sharing the factory address and init code hashes predicts the same addresses.

use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{prefix, DEPLOYER_INIT_CODE},
    DeploymentParams, ExecutorConfig, TokenId,
};

/// Addresses predicted for one deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedAddresses {
    /// Intermediate deployer of the token contract.
    pub token_deployer: Address,
    /// Token contract.
    pub token: Address,
    /// Intermediate deployer of the token manager.
    pub token_manager_deployer: Address,
    /// Token manager.
    pub token_manager: Address,
}

/// Predicts token and token manager addresses before they are deployed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressPredictor {
    factory: Address,
    deployer_init_code_hash: B256,
    token_init_code_hash: B256,
    token_manager_init_code_hash: B256,
}

impl AddressPredictor {
    /// Creates a predictor for the given factory and init code hashes.
    pub fn new(
        factory: Address,
        token_init_code_hash: B256,
        token_manager_init_code_hash: B256,
    ) -> Self {
        Self {
            factory,
            deployer_init_code_hash: keccak256(DEPLOYER_INIT_CODE),
            token_init_code_hash,
            token_manager_init_code_hash,
        }
    }

    /// Creates a predictor from the executor configuration.
    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self::new(
            config.factory_address,
            config.token_init_code_hash,
            config.token_manager_init_code_hash,
        )
    }

    /// The factory address every intermediate deployer descends from.
    pub const fn factory(&self) -> Address {
        self.factory
    }

    fn intermediate_deployer(&self, role_prefix: &str, token_id: TokenId) -> Address {
        let salt = keccak256((keccak256(role_prefix), token_id.0).abi_encode());
        self.factory.create2(salt, self.deployer_init_code_hash)
    }

    /// Intermediate deployer of the token contract of `token_id`.
    pub fn token_deployer(&self, token_id: TokenId) -> Address {
        self.intermediate_deployer(prefix::INTERCHAIN_TOKEN_SALT, token_id)
    }

    /// Intermediate deployer of the token manager of `token_id`.
    pub fn token_manager_deployer(&self, token_id: TokenId) -> Address {
        self.intermediate_deployer(prefix::TOKEN_MANAGER_SALT, token_id)
    }

    /// Address of the token contract deployed for `token_id` with `params`.
    pub fn token_address(&self, token_id: TokenId, params: &DeploymentParams) -> Address {
        let params_hash = keccak256(params.constructor_params(token_id));
        self.token_deployer(token_id).create2(params_hash, self.token_init_code_hash)
    }

    /// Address of the token manager deployed for `token_id`.
    pub fn token_manager_address(&self, token_id: TokenId) -> Address {
        self.token_manager_deployer(token_id).create2(token_id.0, self.token_manager_init_code_hash)
    }

    /// Predicts every address involved in deploying `token_id` with `params`.
    pub fn predict(&self, token_id: TokenId, params: &DeploymentParams) -> PredictedAddresses {
        PredictedAddresses {
            token_deployer: self.token_deployer(token_id),
            token: self.token_address(token_id, params),
            token_manager_deployer: self.token_manager_deployer(token_id),
            token_manager: self.token_manager_address(token_id),
        }
    }
}
