use clap::Parser;
use interchain_deploy::{AddressPredictor, PredictedAddresses, TokenId};
use serde::Serialize;
use tracing::info;

use crate::common::{print_json, ConfigArgs, Result, TokenArgs};

/// Predict token and token manager addresses
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Executor configuration
    #[command(flatten)]
    pub config_args: ConfigArgs,

    /// Token to predict
    #[command(flatten)]
    pub token_args: TokenArgs,
}

/// Output of the predict command.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictOutput {
    /// Token id the prediction is for
    pub token_id: TokenId,
    /// Predicted addresses
    #[serde(flatten)]
    pub addresses: PredictedAddresses,
}

impl Cmd {
    /// Execute the predict command
    pub fn run(&self) -> Result<()> {
        let output = self.predict()?;
        info!(
            token_id = %output.token_id,
            token = %output.addresses.token,
            token_manager = %output.addresses.token_manager,
            "Predicted addresses"
        );
        print_json(&output)
    }

    /// Predict the addresses of the token described by the arguments.
    pub fn predict(&self) -> Result<PredictOutput> {
        let predictor = AddressPredictor::from_config(&self.config_args.load()?);
        let token_id = self.token_args.token_id();
        Ok(PredictOutput {
            token_id,
            addresses: predictor.predict(token_id, &self.token_args.params()),
        })
    }
}

#[cfg(test)]
mod tests {
    use interchain_deploy::{
        derive_salt, derive_token_id,
        test_utils::{test_config, token_params, DEPLOYER},
    };
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_predict_matches_library() {
        let file = NamedTempFile::new().unwrap();
        serde_json::to_writer(&file, &test_config()).unwrap();
        let token_id = derive_token_id(DEPLOYER, derive_salt("deployRemoteInterchainToken"));

        let cmd = Cmd::try_parse_from([
            "predict".to_string(),
            "--config".to_string(),
            file.path().display().to_string(),
            "--token-id".to_string(),
            token_id.to_string(),
            "--name".to_string(),
            "Token Name".to_string(),
            "--symbol".to_string(),
            "TN".to_string(),
            "--minter".to_string(),
            DEPLOYER.to_string(),
        ])
        .unwrap();

        let output = cmd.predict().unwrap();
        assert_eq!(output.token_id, token_id);
        assert_eq!(
            output.addresses,
            AddressPredictor::from_config(&test_config())
                .predict(token_id, &token_params(Some(DEPLOYER)))
        );
    }
}
