use alloy_primitives::Bytes;
use clap::Parser;
use interchain_deploy::{wrap_for_hub, wrap_to_hub, DeployMessage};
use tracing::debug;

use crate::common::{Result, TokenArgs};

/// Encode a deploy message, optionally wrapped in a hub envelope
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Token to deploy
    #[command(flatten)]
    pub token_args: TokenArgs,

    /// Wrap the message in a `SEND_TO_HUB` envelope addressed to this chain
    #[arg(long = "to-hub", conflicts_with = "from_hub")]
    pub to_hub: Option<String>,

    /// Wrap the message in a `RECEIVE_FROM_HUB` envelope originating on this chain
    #[arg(long = "from-hub")]
    pub from_hub: Option<String>,
}

impl Cmd {
    /// Execute the encode command
    pub fn run(&self) -> Result<()> {
        println!("{}", self.encode());
        Ok(())
    }

    /// Encode the payload selected by the arguments.
    pub fn encode(&self) -> Bytes {
        let message = DeployMessage::new(self.token_args.token_id(), self.token_args.params());
        let inner = message.encode();
        debug!(token_id = %message.token_id, len = inner.len(), "Encoded deploy message");

        match (&self.to_hub, &self.from_hub) {
            (Some(destination_chain), _) => wrap_to_hub(destination_chain, &inner),
            (None, Some(origin_chain)) => wrap_for_hub(origin_chain, &inner),
            (None, None) => inner,
        }
    }
}
