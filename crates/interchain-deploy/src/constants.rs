//! Constants of the interchain token deployment protocol.
//!
//! It groups the constants by the concern they belong to as sub-modules.

/// Domain separation prefixes. Every prefix is hashed with `keccak256` before being
/// ABI-encoded in front of the hashed values.
pub mod prefix {
    /// Prefix of token ids derived from a deployer and a salt.
    pub const INTERCHAIN_TOKEN_ID: &str = "its-interchain-token-id";
    /// Prefix of token ids derived from a pre-existing token address.
    pub const CANONICAL_TOKEN_ID: &str = "its-canonical-token-id";
    /// Prefix of the salt of the intermediate deployer of the token contract.
    pub const INTERCHAIN_TOKEN_SALT: &str = "its-interchain-token-salt";
    /// Prefix of the salt of the intermediate deployer of the token manager.
    pub const TOKEN_MANAGER_SALT: &str = "its-token-manager-salt";
}

/// Message type discriminants. They are the first byte of every encoded message.
pub mod message_type {
    /// Inner message asking the destination to deploy an interchain token.
    pub const DEPLOY_INTERCHAIN_TOKEN: u8 = 1;
    /// Envelope sent from an origin ledger to the hub.
    pub const SEND_TO_HUB: u8 = 3;
    /// Envelope delivered by the hub to a destination ledger.
    pub const RECEIVE_FROM_HUB: u8 = 4;
}

/// Init code of the intermediate deployer contract. It is identical on every ledger, so the
/// intermediate address depends only on the factory and the per-token salt.
pub const DEPLOYER_INIT_CODE: &[u8] = &[
    0x60, 0x0b, 0x80, 0x60, 0x0a, 0x5f, 0x39, 0x5f, 0xf3, 0xfe, 0x36, 0x5f, 0x5f, 0x37, 0x36,
    0x5f, 0x34, 0xf5, 0x5f, 0x52, 0x60, 0x14, 0x60, 0x0c, 0xf3,
];

/// Width in bytes of an encoded identity.
pub const IDENTITY_LENGTH: usize = 20;
