//! Execution of hub payloads against a fresh ledger.

mod cmd;

pub use cmd::*;
