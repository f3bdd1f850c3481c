//! `itsctl` command line tool for interchain token deployments
//!
//! Derives token ids, predicts deployment addresses, builds hub payloads and executes approved
//! deploy messages against a fresh ledger.

use clap::Parser;

mod cmd;
pub use cmd::*;

pub mod common;
pub mod encode;
pub mod execute;
pub mod predict;
pub mod token_id;

fn main() -> Result<(), Error> {
    set_thread_panic_hook();
    Cli::parse().run().inspect_err(|e| eprintln!("{e}"))
}

/// Sets thread panic hook, useful for having tests that panic.
fn set_thread_panic_hook() {
    use std::{
        backtrace::Backtrace,
        panic::{set_hook, take_hook},
        process::exit,
    };
    let orig_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        eprintln!("Custom backtrace: {}", Backtrace::capture());
        orig_hook(panic_info);
        exit(1);
    }));
}
