//! Deterministic, hub-routed deployment of interchain tokens.
//!
//! The crate covers the identity side of the interchain token service: deriving salts and
//! token ids, predicting where a token and its manager will be deployed, encoding the messages
//! that travel through the hub, and executing approved deploy messages exactly once.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

pub mod codec;
pub use codec::*;

mod config;
pub use config::*;

mod derivation;
pub use derivation::*;

mod events;
pub use events::*;

mod executor;
pub use executor::*;

mod predictor;
pub use predictor::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

mod types;
pub use types::*;

pub use alloy_primitives;
