//! Address prediction for token deployments.

mod cmd;

pub use cmd::*;
