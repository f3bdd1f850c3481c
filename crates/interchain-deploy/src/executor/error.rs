use alloy_primitives::Address;

use crate::{CommandId, DecodeError, TokenId};

/// Reasons a deployment was rejected. A rejected call leaves the executor state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The call was not sent by the configured hub.
    #[error("Untrusted source: chain={chain}, address={address}")]
    UntrustedSource {
        /// Source chain of the call
        chain: String,
        /// Source address of the call
        address: Address,
    },
    /// The hub delivered a payload from a chain outside the trusted origin chains.
    #[error("Untrusted origin chain: {0}")]
    UntrustedOriginChain(String),
    /// The payload could not be decoded.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] DecodeError),
    /// The command id has already been executed.
    #[error("Command already executed: {0}")]
    AlreadyExecuted(CommandId),
    /// The deployment parameters are invalid.
    #[error("Invalid params: {0}")]
    InvalidParams(&'static str),
    /// The token id is already deployed or a predicted address is occupied.
    #[error("Already deployed: token_id={token_id}, address={address}")]
    AlreadyDeployed {
        /// Token id of the deployment
        token_id: TokenId,
        /// The conflicting address
        address: Address,
    },
    /// The token id is not deployed on this ledger.
    #[error("Token not deployed: {0}")]
    TokenNotDeployed(TokenId),
}
