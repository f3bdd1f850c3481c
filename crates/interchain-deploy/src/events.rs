use alloy_primitives::{Address, Bytes, Log};
use alloy_sol_types::{sol, SolEvent};
use serde::{Deserialize, Serialize};

use crate::{TokenId, TokenManagerType};

sol! {
    /// Events emitted by the interchain token service, as seen by off-chain indexers.
    interface IInterchainTokenService {
        event InterchainTokenDeployed(
            bytes32 indexed tokenId,
            address tokenAddress,
            address indexed minter,
            string name,
            string symbol,
            uint8 decimals
        );

        event TokenManagerDeployed(
            bytes32 indexed tokenId,
            address tokenManager,
            uint8 indexed tokenManagerType,
            bytes params
        );

        event InterchainTokenDeploymentStarted(
            bytes32 indexed tokenId,
            string tokenName,
            string tokenSymbol,
            uint8 tokenDecimals,
            bytes minter,
            string destinationChain
        );
    }
}

/// A token contract was deployed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDeployed {
    /// Token id of the token.
    pub token_id: TokenId,
    /// Address of the token contract.
    pub token_address: Address,
    /// Minter of the token, the zero address when there is none.
    pub minter: Address,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
}

impl TokenDeployed {
    /// The event as an EVM log emitted by `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        let event = IInterchainTokenService::InterchainTokenDeployed {
            tokenId: self.token_id.0,
            tokenAddress: self.token_address,
            minter: self.minter,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
        };
        Log { address: emitter, data: event.encode_log_data() }
    }
}

/// A token manager was deployed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenManagerDeployed {
    /// Token id of the managed token.
    pub token_id: TokenId,
    /// Address of the token manager.
    pub token_manager: Address,
    /// Kind of the token manager.
    pub manager_type: TokenManagerType,
    /// ABI-encoded [`crate::TokenManagerParams`].
    pub params: Bytes,
}

impl TokenManagerDeployed {
    /// The event as an EVM log emitted by `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        let event = IInterchainTokenService::TokenManagerDeployed {
            tokenId: self.token_id.0,
            tokenManager: self.token_manager,
            tokenManagerType: self.manager_type.into(),
            params: self.params.clone(),
        };
        Log { address: emitter, data: event.encode_log_data() }
    }
}

/// A remote deployment was requested through the hub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDeploymentStarted {
    /// Token id of the token.
    pub token_id: TokenId,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
    /// Minter on the destination chain, empty when there is none.
    pub minter: Bytes,
    /// Chain the token is deployed to.
    pub destination_chain: String,
}

impl TokenDeploymentStarted {
    /// The event as an EVM log emitted by `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        let event = IInterchainTokenService::InterchainTokenDeploymentStarted {
            tokenId: self.token_id.0,
            tokenName: self.name.clone(),
            tokenSymbol: self.symbol.clone(),
            tokenDecimals: self.decimals,
            minter: self.minter.clone(),
            destinationChain: self.destination_chain.clone(),
        };
        Log { address: emitter, data: event.encode_log_data() }
    }
}

/// Events recorded by an executor, in emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ExecutionEvent {
    /// See [`TokenDeployed`].
    TokenDeployed(TokenDeployed),
    /// See [`TokenManagerDeployed`].
    TokenManagerDeployed(TokenManagerDeployed),
    /// See [`TokenDeploymentStarted`].
    TokenDeploymentStarted(TokenDeploymentStarted),
}

impl ExecutionEvent {
    /// Token id the event refers to.
    pub const fn token_id(&self) -> TokenId {
        match self {
            Self::TokenDeployed(event) => event.token_id,
            Self::TokenManagerDeployed(event) => event.token_id,
            Self::TokenDeploymentStarted(event) => event.token_id,
        }
    }

    /// The event as an EVM log emitted by `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        match self {
            Self::TokenDeployed(event) => event.to_log(emitter),
            Self::TokenManagerDeployed(event) => event.to_log(emitter),
            Self::TokenDeploymentStarted(event) => event.to_log(emitter),
        }
    }
}
