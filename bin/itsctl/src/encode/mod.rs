//! Deploy message and hub envelope encoding.

mod cmd;

pub use cmd::*;
