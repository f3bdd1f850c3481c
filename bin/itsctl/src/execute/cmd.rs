use alloy_primitives::{Address, Log, B256};
use clap::Parser;
use interchain_deploy::{Deployment, DeploymentExecutor, ExecutionEvent};
use serde::Serialize;
use tracing::{debug, info};

use crate::common::{load_hex, print_json, ConfigArgs, ItsError, Result};

/// Execute a hub payload against a fresh ledger
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Executor configuration
    #[command(flatten)]
    pub config_args: ConfigArgs,

    /// Command id of the approved call
    #[arg(long = "command-id")]
    pub command_id: B256,

    /// Chain the call was sent from
    #[arg(long = "source-chain")]
    pub source_chain: String,

    /// Address the call was sent from
    #[arg(long = "source-address")]
    pub source_address: Address,

    /// Hex-encoded payload
    #[arg(long, conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// File containing the hex-encoded payload, `-` for stdin
    #[arg(long = "payload.file", visible_aliases = ["payload-file"])]
    pub payload_file: Option<String>,

    /// Addresses already holding code on the ledger
    #[arg(long = "occupied", value_delimiter = ',')]
    pub occupied: Vec<Address>,

    /// Emitter of the rendered EVM logs. Logs are omitted without it.
    #[arg(long)]
    pub emitter: Option<Address>,
}

/// Output of the execute command.
#[derive(Debug, Serialize)]
pub struct ExecuteOutput {
    /// The deployment performed
    pub deployment: Deployment,
    /// Events recorded by the executor
    pub events: Vec<ExecutionEvent>,
    /// Events rendered as EVM logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<Log>>,
}

impl Cmd {
    /// Execute the execute command
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        info!(
            token_id = %output.deployment.token.token_id,
            token = %output.deployment.token.token_address,
            "Executed payload"
        );
        print_json(&output)
    }

    /// Execute the payload on a ledger built from the configuration.
    pub fn execute(&self) -> Result<ExecuteOutput> {
        let payload = load_hex(self.payload.as_deref(), self.payload_file.as_deref())?
            .ok_or_else(|| {
                ItsError::InvalidInput("either --payload or --payload.file is required".to_string())
            })?;

        let executor = DeploymentExecutor::new(self.config_args.load()?);
        for address in &self.occupied {
            executor.register_external_contract(*address);
        }
        debug!(occupied = self.occupied.len(), payload_len = payload.len(), "Ledger prepared");

        let deployment =
            executor.execute(self.command_id, &self.source_chain, self.source_address, &payload)?;
        let events = executor.events();
        let logs = self
            .emitter
            .map(|emitter| events.iter().map(|event| event.to_log(emitter)).collect());

        Ok(ExecuteOutput { deployment, events, logs })
    }
}
