//! Salt and token id derivation.
//!
//! All functions here are pure: the same inputs produce the same output on every ledger, which
//! is what keeps token ids consistent across chains.

use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;

use crate::{constants::prefix, Salt, TokenId};

/// Derives a salt from a human-chosen key string.
///
/// The salt is `keccak256(abi.encode(key))`.
pub fn derive_salt(key: &str) -> Salt {
    Salt(keccak256(key.to_string().abi_encode()))
}

/// Derives the token id of a token deployed by `deployer` with `salt`.
///
/// The id is `keccak256(abi.encode(keccak256(PREFIX_INTERCHAIN_TOKEN_ID), deployer, salt))`.
pub fn derive_token_id(deployer: Address, salt: Salt) -> TokenId {
    let prefix = keccak256(prefix::INTERCHAIN_TOKEN_ID);
    TokenId(keccak256((prefix, deployer, salt.0).abi_encode()))
}

/// Derives the token id of a pre-existing token registered on the chain whose name hashes to
/// `chain_name_hash`.
///
/// The canonical prefix differs from the one used by [`derive_token_id`], so the two derivation
/// paths never produce the same id.
pub fn derive_canonical_token_id(chain_name_hash: B256, origin_token: Address) -> TokenId {
    let prefix = keccak256(prefix::CANONICAL_TOKEN_ID);
    TokenId(keccak256((prefix, chain_name_hash, origin_token).abi_encode()))
}

/// Hash of a chain name, used to scope canonical token ids to their chain of registration.
pub fn chain_name_hash(chain_name: &str) -> B256 {
    keccak256(chain_name)
}
