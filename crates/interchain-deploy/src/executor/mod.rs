//! Execution of approved deploy messages.
//!
//! A [`DeploymentExecutor`] owns the state of one ledger instance: which command ids have been
//! executed, which tokens are deployed and which addresses are occupied. Each command id moves
//! through `Unseen -> Validating -> {Deployed | Rejected}`:
//!
//! 1. the call must come from the configured hub chain and address
//! 2. the hub envelope and the inner deploy message must decode
//! 3. the command id must not have been executed
//! 4. name and symbol must not be empty
//! 5. an empty minter stands for no minter
//! 6. token and token manager addresses are predicted
//! 7. neither the token id nor the predicted addresses may already be in use
//! 8. the token and its `NativeInterchainToken` manager are deployed
//! 9. the command id is marked executed and both deployment events are recorded
//!
//! Steps 1 and 2 only look at the call itself. Steps 3 to 9 run while holding the state lock,
//! and only steps 8 and 9 write to it, so a rejected call changes nothing and two deliveries of
//! the same command id can never both deploy.

mod error;
pub use error::*;

mod state;
pub use state::{DeployedContract, TokenRecord};
use state::{ExecutorState, PendingDeployment};

use std::sync::{Mutex, MutexGuard};

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    derive_canonical_token_id, derive_token_id, identity_to_bytes, unwrap_hub, wrap_to_hub,
    AddressPredictor, CommandId, DeployMessage, DeploymentParams, ExecutionEvent,
    ExecutionRecord, ExecutorConfig, PredictedAddresses, Salt, TokenDeployed,
    TokenDeploymentStarted, TokenId, TokenManagerDeployed, TokenManagerParams, TokenManagerType,
};

/// Outcome of a successful token deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// The deployed token contract.
    pub token: TokenDeployed,
    /// The deployed token manager.
    pub token_manager: TokenManagerDeployed,
}

/// Deploys interchain tokens at predictable addresses, at most once per token id and once per
/// command id.
#[derive(Debug)]
pub struct DeploymentExecutor {
    config: ExecutorConfig,
    predictor: AddressPredictor,
    state: Mutex<ExecutorState>,
}

impl DeploymentExecutor {
    /// Creates an executor with empty state.
    pub fn new(config: ExecutorConfig) -> Self {
        let predictor = AddressPredictor::from_config(&config);
        Self { config, predictor, state: Mutex::new(ExecutorState::default()) }
    }

    /// The configuration of the executor.
    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// The address predictor of the executor.
    pub const fn predictor(&self) -> &AddressPredictor {
        &self.predictor
    }

    fn lock(&self) -> MutexGuard<'_, ExecutorState> {
        self.state.lock().expect("executor state poisoned")
    }

    /// Executes an approved call delivered by the gateway.
    pub fn execute(
        &self,
        command_id: CommandId,
        source_chain: &str,
        source_address: Address,
        payload: &[u8],
    ) -> Result<Deployment, ExecuteError> {
        debug!(%command_id, source_chain, %source_address, "Executing approved call");
        self.execute_inner(command_id, source_chain, source_address, payload).inspect_err(|err| {
            if matches!(err, ExecuteError::AlreadyExecuted(_)) {
                debug!(%command_id, "Ignored replayed call");
            } else {
                warn!(%command_id, %err, "Rejected approved call");
            }
        })
    }

    fn execute_inner(
        &self,
        command_id: CommandId,
        source_chain: &str,
        source_address: Address,
        payload: &[u8],
    ) -> Result<Deployment, ExecuteError> {
        if source_chain != self.config.hub_chain || source_address != self.config.hub_address {
            return Err(ExecuteError::UntrustedSource {
                chain: source_chain.to_string(),
                address: source_address,
            });
        }

        let (origin_chain, inner) = unwrap_hub(payload)?;
        if !self.config.is_trusted_chain(&origin_chain) {
            return Err(ExecuteError::UntrustedOriginChain(origin_chain));
        }
        let message = DeployMessage::decode(&inner)?;
        debug!(%command_id, %origin_chain, token_id = %message.token_id, "Decoded deploy message");

        let mut state = self.lock();
        if state.is_executed(&command_id) {
            return Err(ExecuteError::AlreadyExecuted(command_id));
        }
        let (deployment, pending) =
            self.prepare_native(&state, message.token_id, message.params())?;
        state.apply(pending);
        state.mark_executed(command_id);

        info!(
            %command_id,
            token_id = %deployment.token.token_id,
            token = %deployment.token.token_address,
            token_manager = %deployment.token_manager.token_manager,
            "Deployed interchain token"
        );
        Ok(deployment)
    }

    /// Deploys an interchain token on this ledger on behalf of `deployer`, without going through
    /// the hub.
    pub fn deploy_interchain_token(
        &self,
        deployer: Address,
        salt: Salt,
        params: DeploymentParams,
    ) -> Result<Deployment, ExecuteError> {
        let token_id = derive_token_id(deployer, salt);
        let mut state = self.lock();
        let (deployment, pending) = self.prepare_native(&state, token_id, params)?;
        state.apply(pending);

        info!(
            %deployer,
            %token_id,
            token = %deployment.token.token_address,
            "Deployed local interchain token"
        );
        Ok(deployment)
    }

    /// Registers a token that already exists on this ledger under its canonical token id and
    /// deploys a `LockUnlock` manager for it. `metadata` is the metadata of the existing token;
    /// its minter is ignored.
    pub fn register_canonical_token(
        &self,
        origin_token: Address,
        metadata: DeploymentParams,
    ) -> Result<TokenManagerDeployed, ExecuteError> {
        let token_id = derive_canonical_token_id(self.config.chain_name_hash(), origin_token);
        let metadata = metadata.with_minter(None);
        let mut state = self.lock();
        let pending = self.prepare_existing(
            &state,
            token_id,
            TokenManagerType::LockUnlock,
            origin_token,
            metadata,
        )?;
        let token_manager = pending.token_manager.clone();
        state.apply(pending);

        info!(
            %origin_token,
            %token_id,
            token_manager = %token_manager.token_manager,
            "Registered canonical token"
        );
        Ok(token_manager)
    }

    /// Builds the hub payload deploying a locally known token on `destination_chain` with the
    /// given destination minter.
    pub fn deploy_remote_interchain_token(
        &self,
        token_id: TokenId,
        destination_chain: &str,
        minter: Option<Address>,
    ) -> Result<Bytes, ExecuteError> {
        if destination_chain.is_empty() {
            return Err(ExecuteError::InvalidParams("destination chain is empty"));
        }
        if destination_chain == self.config.chain_name {
            return Err(ExecuteError::InvalidParams("destination chain is the local chain"));
        }

        let mut state = self.lock();
        let metadata = state
            .token(&token_id)
            .map(|record| record.metadata.clone())
            .ok_or(ExecuteError::TokenNotDeployed(token_id))?;

        let message = DeployMessage::new(token_id, metadata.with_minter(minter));
        let payload = wrap_to_hub(destination_chain, &message.encode());
        state.push_event(ExecutionEvent::TokenDeploymentStarted(TokenDeploymentStarted {
            token_id,
            name: message.name,
            symbol: message.symbol,
            decimals: message.decimals,
            minter: identity_to_bytes(minter),
            destination_chain: destination_chain.to_string(),
        }));

        info!(%token_id, destination_chain, "Started remote interchain token deployment");
        Ok(payload)
    }

    /// Predicts the addresses a native deployment of `token_id` with `params` would occupy.
    pub fn predict(&self, token_id: TokenId, params: &DeploymentParams) -> PredictedAddresses {
        self.predictor.predict(token_id, params)
    }

    /// The execution record of `command_id`.
    pub fn execution_record(&self, command_id: CommandId) -> ExecutionRecord {
        ExecutionRecord { command_id, executed: self.lock().is_executed(&command_id) }
    }

    /// The token deployed under `token_id`, if any.
    pub fn token(&self, token_id: TokenId) -> Option<TokenRecord> {
        self.lock().token(&token_id).cloned()
    }

    /// What occupies `address`, if anything.
    pub fn contract(&self, address: Address) -> Option<DeployedContract> {
        self.lock().contract(&address)
    }

    /// Whether `address` is occupied.
    pub fn is_occupied(&self, address: Address) -> bool {
        self.contract(address).is_some()
    }

    /// Records code deployed at `address` outside the protocol. Returns `false` if the address
    /// was already occupied.
    pub fn register_external_contract(&self, address: Address) -> bool {
        self.lock().insert_external(address)
    }

    /// All events recorded so far, in emission order.
    pub fn events(&self) -> Vec<ExecutionEvent> {
        self.lock().events().to_vec()
    }

    /// Validates a `NativeInterchainToken` deployment: a token contract plus its manager.
    fn prepare_native(
        &self,
        state: &ExecutorState,
        token_id: TokenId,
        params: DeploymentParams,
    ) -> Result<(Deployment, PendingDeployment), ExecuteError> {
        if params.name.is_empty() {
            return Err(ExecuteError::InvalidParams("token name is empty"));
        }
        if params.symbol.is_empty() {
            return Err(ExecuteError::InvalidParams("token symbol is empty"));
        }

        let predicted = self.predictor.predict(token_id, &params);
        debug!(
            %token_id,
            token = %predicted.token,
            token_manager = %predicted.token_manager,
            "Predicted addresses"
        );
        Self::ensure_vacant(state, token_id, &[predicted.token, predicted.token_manager])?;

        let token = TokenDeployed {
            token_id,
            token_address: predicted.token,
            minter: params.minter_or_zero(),
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            decimals: params.decimals,
        };
        let manager_params =
            TokenManagerParams { operator: params.minter, token_address: predicted.token };
        let token_manager = TokenManagerDeployed {
            token_id,
            token_manager: predicted.token_manager,
            manager_type: TokenManagerType::NativeInterchainToken,
            params: manager_params.encode(),
        };

        let deployment = Deployment { token: token.clone(), token_manager: token_manager.clone() };
        let pending = PendingDeployment {
            record: TokenRecord {
                token_address: predicted.token,
                token_manager: predicted.token_manager,
                manager_type: TokenManagerType::NativeInterchainToken,
                metadata: params,
            },
            token: Some(token),
            token_manager,
        };
        Ok((deployment, pending))
    }

    /// Validates a manager deployment for a token contract that already exists.
    fn prepare_existing(
        &self,
        state: &ExecutorState,
        token_id: TokenId,
        manager_type: TokenManagerType,
        token_address: Address,
        metadata: DeploymentParams,
    ) -> Result<PendingDeployment, ExecuteError> {
        if manager_type.deploys_token() {
            return Err(ExecuteError::InvalidParams(
                "native interchain tokens are deployed with their token",
            ));
        }
        if !metadata.is_valid() {
            return Err(ExecuteError::InvalidParams("token metadata is incomplete"));
        }

        let token_manager_address = self.predictor.token_manager_address(token_id);
        Self::ensure_vacant(state, token_id, &[token_manager_address])?;

        let manager_params = TokenManagerParams { operator: None, token_address };
        let token_manager = TokenManagerDeployed {
            token_id,
            token_manager: token_manager_address,
            manager_type,
            params: manager_params.encode(),
        };

        Ok(PendingDeployment {
            record: TokenRecord {
                token_address,
                token_manager: token_manager_address,
                manager_type,
                metadata,
            },
            token: None,
            token_manager,
        })
    }

    fn ensure_vacant(
        state: &ExecutorState,
        token_id: TokenId,
        addresses: &[Address],
    ) -> Result<(), ExecuteError> {
        if let Some(record) = state.token(&token_id) {
            return Err(ExecuteError::AlreadyDeployed { token_id, address: record.token_address });
        }
        if let Some(address) = addresses.iter().find(|address| state.contract(address).is_some()) {
            return Err(ExecuteError::AlreadyDeployed { token_id, address: *address });
        }
        Ok(())
    }
}
