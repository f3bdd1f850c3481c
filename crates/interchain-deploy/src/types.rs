use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use crate::{constants::IDENTITY_LENGTH, DecodeError};

/// Identifier of one approved incoming call, used for replay detection.
pub type CommandId = B256;

/// Canonical cross-chain identifier of a token family.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct TokenId(pub B256);

/// Deployer-chosen value used to diversify token id derivation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Salt(pub B256);

/// Metadata of a token to be deployed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentParams {
    /// Token name. Must not be empty.
    pub name: String,
    /// Token symbol. Must not be empty.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
    /// Identity allowed to mint, `None` when the token has no minter.
    pub minter: Option<Address>,
}

impl DeploymentParams {
    /// Creates deployment params without a minter.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self { name: name.into(), symbol: symbol.into(), decimals, minter: None }
    }

    /// Sets the minter.
    pub fn with_minter(mut self, minter: Option<Address>) -> Self {
        self.minter = minter;
        self
    }

    /// Whether name and symbol are both present.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.symbol.is_empty()
    }

    /// The minter as it appears in emitted events: the zero address stands for none.
    pub fn minter_or_zero(&self) -> Address {
        self.minter.unwrap_or(Address::ZERO)
    }

    /// ABI-encoded constructor parameters of the token contract. Decimals are a `uint8` word.
    pub fn constructor_params(&self, token_id: TokenId) -> Bytes {
        (
            token_id.0,
            self.name.clone(),
            self.symbol.clone(),
            U256::from(self.decimals),
            identity_to_bytes(self.minter),
        )
            .abi_encode_params()
            .into()
    }
}

/// Kind of token manager. The discriminants are part of the emitted events.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TokenManagerType {
    /// The token contract itself is deployed by the protocol.
    #[default]
    NativeInterchainToken = 0,
    /// Mints on arrival, burns with `transferFrom` on departure.
    MintBurnFrom = 1,
    /// Locks on departure and unlocks on arrival.
    LockUnlock = 2,
    /// Lock/unlock for tokens charging a transfer fee.
    LockUnlockFee = 3,
    /// Mints on arrival, burns on departure.
    MintBurn = 4,
}

impl TokenManagerType {
    /// Whether the manager comes with a token contract deployed by the protocol.
    pub const fn deploys_token(self) -> bool {
        matches!(self, Self::NativeInterchainToken)
    }
}

impl From<TokenManagerType> for u8 {
    fn from(value: TokenManagerType) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for TokenManagerType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NativeInterchainToken),
            1 => Ok(Self::MintBurnFrom),
            2 => Ok(Self::LockUnlock),
            3 => Ok(Self::LockUnlockFee),
            4 => Ok(Self::MintBurn),
            other => Err(DecodeError::UnknownManagerType(other)),
        }
    }
}

/// Initialization parameters handed to a deployed token manager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenManagerParams {
    /// Identity allowed to operate the manager, `None` when there is no operator.
    pub operator: Option<Address>,
    /// Address of the managed token.
    pub token_address: Address,
}

impl TokenManagerParams {
    /// ABI encoding `(bytes operator, address tokenAddress)`. A missing operator is encoded as
    /// zero-length bytes.
    pub fn encode(&self) -> Bytes {
        (identity_to_bytes(self.operator), self.token_address).abi_encode_params().into()
    }

    /// Decodes parameters produced by [`TokenManagerParams::encode`].
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (operator, token_address) = <(Bytes, Address)>::abi_decode_params(data, true)
            .map_err(|_| DecodeError::InvalidManagerParams)?;
        Ok(Self { operator: identity_from_bytes(&operator)?, token_address })
    }
}

/// Replay-protection record of one command id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// The command id.
    pub command_id: CommandId,
    /// Whether the command has been executed. Never reset once set.
    pub executed: bool,
}

/// Encodes an optional identity as variable-length bytes, empty for none.
pub fn identity_to_bytes(identity: Option<Address>) -> Bytes {
    identity.map(|address| Bytes::copy_from_slice(address.as_slice())).unwrap_or_default()
}

/// Decodes variable-length identity bytes. Empty bytes are none; anything other than a full
/// identity is rejected.
pub fn identity_from_bytes(bytes: &[u8]) -> Result<Option<Address>, DecodeError> {
    match bytes.len() {
        0 => Ok(None),
        IDENTITY_LENGTH => Ok(Some(Address::from_slice(bytes))),
        len => Err(DecodeError::InvalidIdentityLength(len)),
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, hex};

    use super::*;

    #[test]
    fn test_manager_params_with_empty_operator() {
        let token_address = address!("00000000000000000000000000000000000000aa");
        let params = TokenManagerParams { operator: None, token_address };
        let encoded = params.encode();

        let (operator, decoded_token) =
            <(Bytes, Address)>::abi_decode_params(&encoded, true).unwrap();
        assert!(operator.is_empty());
        assert_eq!(decoded_token, token_address);
        assert_eq!(TokenManagerParams::decode(&encoded).unwrap(), params);
    }

    #[test]
    fn test_zero_operator_is_not_none() {
        let params =
            TokenManagerParams { operator: Some(Address::ZERO), token_address: Address::ZERO };
        let decoded = TokenManagerParams::decode(&params.encode()).unwrap();
        assert_eq!(decoded.operator, Some(Address::ZERO));
    }

    #[test]
    fn test_constructor_params_layout() {
        let params = DeploymentParams::new("Token Name", "TN", 18);
        assert_eq!(
            params.constructor_params(TokenId(B256::repeat_byte(7))),
            Bytes::from(hex!(
                "0707070707070707070707070707070707070707070707070707070707070707"
                "00000000000000000000000000000000000000000000000000000000000000a0"
                "00000000000000000000000000000000000000000000000000000000000000e0"
                "0000000000000000000000000000000000000000000000000000000000000012"
                "0000000000000000000000000000000000000000000000000000000000000120"
                "000000000000000000000000000000000000000000000000000000000000000a"
                "546f6b656e204e616d6500000000000000000000000000000000000000000000"
                "0000000000000000000000000000000000000000000000000000000000000002"
                "544e000000000000000000000000000000000000000000000000000000000000"
                "0000000000000000000000000000000000000000000000000000000000000000"
            ))
        );
    }

    #[test]
    fn test_identity_bytes() {
        assert_eq!(identity_from_bytes(&[]).unwrap(), None);
        assert_eq!(identity_from_bytes(&[0u8; 20]).unwrap(), Some(Address::ZERO));
        assert_eq!(identity_from_bytes(&[1u8; 19]), Err(DecodeError::InvalidIdentityLength(19)));
    }

    #[test]
    fn test_manager_type_discriminants() {
        for ty in [
            TokenManagerType::NativeInterchainToken,
            TokenManagerType::MintBurnFrom,
            TokenManagerType::LockUnlock,
            TokenManagerType::LockUnlockFee,
            TokenManagerType::MintBurn,
        ] {
            assert_eq!(TokenManagerType::try_from(u8::from(ty)).unwrap(), ty);
        }
        assert!(TokenManagerType::try_from(5).is_err());
        assert!(TokenManagerType::NativeInterchainToken.deploys_token());
        assert!(!TokenManagerType::LockUnlock.deploys_token());
    }

    #[test]
    fn test_params_validity() {
        assert!(DeploymentParams::new("Token Name", "TN", 18).is_valid());
        assert!(!DeploymentParams::new("", "TN", 18).is_valid());
        assert!(!DeploymentParams::new("Token Name", "", 18).is_valid());
    }
}
