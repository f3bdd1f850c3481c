//! Token address derivation for hub-routed and local deployments.
//!
//! The expected addresses are pinned: any ledger configured with the test factory and init code
//! hashes must reproduce them byte for byte.

use alloy_primitives::{address, b256, hex, Address, Bytes};
use interchain_deploy::{
    derive_canonical_token_id, derive_salt, derive_token_id,
    test_utils::{
        command_id, hub_payload, test_config, test_executor, token_params, DEPLOYER,
        DESTINATION_CHAIN, FACTORY, HUB_ADDRESS, HUB_CHAIN, SOURCE_CHAIN, TOKEN_DECIMALS,
        TOKEN_NAME, TOKEN_SYMBOL,
    },
    wrap_for_hub, DeploymentExecutor, ExecutionEvent, ExecutorConfig, HubMessage,
    TokenManagerParams, TokenManagerType,
};

#[test]
fn test_remote_interchain_token_deployment() {
    let executor = test_executor();
    let salt = derive_salt("deployRemoteInterchainToken");
    let token_id = derive_token_id(DEPLOYER, salt);
    assert_eq!(
        token_id.0,
        b256!("e75ec39a256092126ba09389c142247a0ab02a38c9b230d0929e64883412ab3a")
    );

    let minter = DEPLOYER;
    let expected_token_address = address!("d5eCa9C925DB455e0f8E91202C4A1F4a77b57bD9");
    let expected_token_manager_address = address!("1BCeCc8F5Dc03e2f2885AcD18db4B1844C87FcA8");
    let params =
        TokenManagerParams { operator: Some(minter), token_address: expected_token_address }
            .encode();

    let payload = hub_payload(token_id, token_params(Some(minter)));
    let deployment = executor.execute(command_id(1), HUB_CHAIN, HUB_ADDRESS, &payload).unwrap();

    assert_eq!(deployment.token.token_id, token_id);
    assert_eq!(deployment.token.token_address, expected_token_address);
    assert_eq!(deployment.token.minter, minter);
    assert_eq!(deployment.token.name, TOKEN_NAME);
    assert_eq!(deployment.token.symbol, TOKEN_SYMBOL);
    assert_eq!(deployment.token.decimals, TOKEN_DECIMALS);

    assert_eq!(deployment.token_manager.token_id, token_id);
    assert_eq!(deployment.token_manager.token_manager, expected_token_manager_address);
    assert_eq!(deployment.token_manager.manager_type, TokenManagerType::NativeInterchainToken);
    assert_eq!(deployment.token_manager.params, params);
}

#[test]
fn test_remote_interchain_token_deployment_with_empty_minter_and_operator() {
    let executor = test_executor();
    let salt = derive_salt("deployRemoteInterchainTokenEmpty");
    let token_id = derive_token_id(DEPLOYER, salt);

    let expected_token_address = address!("fd98614264181673FD4EcE2dE928A09A0b0D688e");
    let expected_token_manager_address = address!("88291F02D95876e170bCf898Bec5dae7bf10D591");

    let payload = hub_payload(token_id, token_params(None));
    let deployment = executor.execute(command_id(2), HUB_CHAIN, HUB_ADDRESS, &payload).unwrap();

    // the emitted minter is the zero address, the operator stays empty bytes
    assert_eq!(deployment.token.token_address, expected_token_address);
    assert_eq!(deployment.token.minter, Address::ZERO);
    assert_eq!(deployment.token_manager.token_manager, expected_token_manager_address);
    assert_eq!(
        deployment.token_manager.params,
        Bytes::from(hex!(
            "0000000000000000000000000000000000000000000000000000000000000040"
            "000000000000000000000000fd98614264181673fd4ece2de928a09a0b0d688e"
            "0000000000000000000000000000000000000000000000000000000000000000"
        ))
    );
    assert_eq!(
        TokenManagerParams::decode(&deployment.token_manager.params).unwrap().operator,
        None
    );
}

#[test]
fn test_local_interchain_token_deployment() {
    let executor = test_executor();
    let salt = derive_salt("deployInterchainToken");
    let token_id = derive_token_id(DEPLOYER, salt);

    let expected_token_address = address!("06052235848D42223A27a1c6845d40C2566A88E5");
    let expected_token_manager_address = address!("7f6D27FeeC3a9777C21B19F5c6191E93b817FB1A");

    let deployment =
        executor.deploy_interchain_token(DEPLOYER, salt, token_params(Some(FACTORY))).unwrap();

    assert_eq!(deployment.token.token_id, token_id);
    assert_eq!(deployment.token.token_address, expected_token_address);
    assert_eq!(deployment.token.minter, FACTORY);
    assert_eq!(deployment.token_manager.token_manager, expected_token_manager_address);
    assert_eq!(
        deployment.token_manager.params,
        TokenManagerParams { operator: Some(FACTORY), token_address: expected_token_address }
            .encode()
    );
}

#[test]
fn test_canonical_token_registration() {
    let executor = test_executor();
    let origin = address!("00000000000000000000000000000000000000cc");
    let token_id = derive_canonical_token_id(executor.config().chain_name_hash(), origin);
    assert_eq!(
        token_id.0,
        b256!("645d25debf44cd9aeda5f79b84c1c2ad56c3110fe5c35a462beb4a77418d6429")
    );

    let manager = executor.register_canonical_token(origin, token_params(None)).unwrap();
    assert_eq!(manager.token_manager, address!("BD57aec43bf8E14aE5825774951cbA2610a3CbE9"));
    assert_eq!(manager.manager_type, TokenManagerType::LockUnlock);
    assert_eq!(executor.token(token_id).unwrap().token_address, origin);
}

#[test]
fn test_remote_deployment_lands_at_origin_prediction() {
    // origin ledger deploys locally, then sends the deployment through the hub
    let origin = DeploymentExecutor::new(ExecutorConfig {
        chain_name: SOURCE_CHAIN.to_string(),
        ..test_config()
    });
    let salt = derive_salt("deployInterchainToken");
    let local = origin.deploy_interchain_token(DEPLOYER, salt, token_params(None)).unwrap();
    let token_id = local.token.token_id;

    let sent =
        origin.deploy_remote_interchain_token(token_id, DESTINATION_CHAIN, Some(DEPLOYER)).unwrap();
    let predicted = origin.predict(token_id, &token_params(Some(DEPLOYER)));

    // the hub rewrites the envelope for the destination
    let HubMessage::SendToHub { payload, .. } = HubMessage::decode(&sent).unwrap() else {
        panic!("expected a send to hub envelope");
    };
    let delivered = wrap_for_hub(SOURCE_CHAIN, &payload);

    let destination = test_executor();
    let deployment =
        destination.execute(command_id(3), HUB_CHAIN, HUB_ADDRESS, &delivered).unwrap();

    assert_eq!(deployment.token.token_address, predicted.token);
    assert_eq!(deployment.token_manager.token_manager, predicted.token_manager);
    // the manager address only depends on the token id
    assert_eq!(deployment.token_manager.token_manager, local.token_manager.token_manager);
    assert!(matches!(
        origin.events().last(),
        Some(ExecutionEvent::TokenDeploymentStarted(event))
            if event.destination_chain == DESTINATION_CHAIN
    ));
}
