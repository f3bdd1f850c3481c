//! Determinism and separation properties of derivation, prediction and encoding.

use alloy_primitives::{Address, B256};
use interchain_deploy::{
    chain_name_hash, derive_canonical_token_id, derive_salt, derive_token_id, unwrap_hub,
    wrap_for_hub,
    test_utils::{test_config, test_executor, token_params, DEPLOYER},
    AddressPredictor, DeployMessage, DeploymentExecutor, Salt, TokenId,
};
use rstest::rstest;

fn random_address() -> Address {
    Address::from(rand::random::<[u8; 20]>())
}

fn random_word() -> B256 {
    B256::from(rand::random::<[u8; 32]>())
}

#[rstest]
#[case("deployRemoteInterchainToken")]
#[case("deployRemoteInterchainTokenEmpty")]
#[case("")]
#[case("ключ")]
fn test_salt_and_token_id_are_deterministic(#[case] key: &str) {
    let first = derive_token_id(DEPLOYER, derive_salt(key));
    let second = derive_token_id(DEPLOYER, derive_salt(key));
    assert_eq!(first, second);
}

#[test]
fn test_derivation_paths_never_collide() {
    for _ in 0..256 {
        let deployer = random_address();
        let salt = Salt(random_word());
        let token_id = derive_token_id(deployer, salt);

        assert_ne!(token_id, derive_canonical_token_id(salt.0, deployer));
        assert_ne!(token_id, derive_canonical_token_id(chain_name_hash("chain"), random_address()));
    }
}

#[test]
fn test_predictions_agree_across_instances() {
    let a = test_executor();
    let b = DeploymentExecutor::new(test_config());
    let standalone = AddressPredictor::from_config(&test_config());

    for _ in 0..32 {
        let token_id = TokenId(random_word());
        let params = token_params(Some(random_address()));
        assert_eq!(a.predict(token_id, &params), b.predict(token_id, &params));
        assert_eq!(a.predict(token_id, &params), standalone.predict(token_id, &params));
    }
}

#[rstest]
#[case(token_params(None))]
#[case(token_params(Some(Address::ZERO)))]
#[case(token_params(Some(DEPLOYER)))]
#[case(token_params(None).with_minter(Some(random_address())))]
fn test_message_round_trip(#[case] params: interchain_deploy::DeploymentParams) {
    let message = DeployMessage::new(TokenId(random_word()), params);
    let encoded = message.encode();
    assert_eq!(DeployMessage::decode(&encoded).unwrap(), message);

    let wrapped = wrap_for_hub("source chain", &encoded);
    assert_eq!(unwrap_hub(&wrapped).unwrap(), ("source chain".to_string(), encoded));
}
