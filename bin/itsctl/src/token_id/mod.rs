//! Token id derivation for interchain and canonical tokens.

mod cmd;

pub use cmd::*;
