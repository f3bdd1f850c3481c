//! Process-wide state owned by a deployment executor.

use std::collections::{HashMap, HashSet};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    CommandId, DeploymentParams, ExecutionEvent, TokenDeployed, TokenId, TokenManagerDeployed,
    TokenManagerType,
};

/// What occupies an address of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployedContract {
    /// Token contract deployed by the executor.
    Token(TokenId),
    /// Token manager deployed by the executor.
    TokenManager(TokenId),
    /// Code deployed outside the protocol.
    External,
}

/// A token known to the executor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Address of the token contract.
    pub token_address: Address,
    /// Address of the token manager.
    pub token_manager: Address,
    /// Kind of the token manager.
    pub manager_type: TokenManagerType,
    /// Token metadata.
    pub metadata: DeploymentParams,
}

/// A validated deployment, ready to be applied.
#[derive(Debug)]
pub(crate) struct PendingDeployment {
    pub(crate) record: TokenRecord,
    pub(crate) token: Option<TokenDeployed>,
    pub(crate) token_manager: TokenManagerDeployed,
}

/// Execution records, token registry and address space of one executor. Starts empty and is
/// never torn down.
#[derive(Debug, Default)]
pub(crate) struct ExecutorState {
    executed: HashSet<CommandId>,
    tokens: HashMap<TokenId, TokenRecord>,
    contracts: HashMap<Address, DeployedContract>,
    events: Vec<ExecutionEvent>,
}

impl ExecutorState {
    pub(crate) fn is_executed(&self, command_id: &CommandId) -> bool {
        self.executed.contains(command_id)
    }

    pub(crate) fn mark_executed(&mut self, command_id: CommandId) {
        self.executed.insert(command_id);
    }

    pub(crate) fn token(&self, token_id: &TokenId) -> Option<&TokenRecord> {
        self.tokens.get(token_id)
    }

    pub(crate) fn contract(&self, address: &Address) -> Option<DeployedContract> {
        self.contracts.get(address).copied()
    }

    pub(crate) fn insert_external(&mut self, address: Address) -> bool {
        if self.contracts.contains_key(&address) {
            return false;
        }
        self.contracts.insert(address, DeployedContract::External);
        true
    }

    pub(crate) fn events(&self) -> &[ExecutionEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: ExecutionEvent) {
        self.events.push(event);
    }

    /// Applies a pending deployment. The caller has checked that none of its addresses are
    /// occupied and that the token id is unknown.
    pub(crate) fn apply(&mut self, pending: PendingDeployment) {
        let PendingDeployment { record, token, token_manager } = pending;
        let token_id = token_manager.token_id;

        if let Some(token) = token {
            self.contracts.insert(token.token_address, DeployedContract::Token(token_id));
            self.events.push(ExecutionEvent::TokenDeployed(token));
        } else {
            // existing token contract, possibly registered as external already
            self.contracts.entry(record.token_address).or_insert(DeployedContract::External);
        }
        self.contracts
            .insert(token_manager.token_manager, DeployedContract::TokenManager(token_id));
        self.events.push(ExecutionEvent::TokenManagerDeployed(token_manager));
        self.tokens.insert(token_id, record);
    }
}
