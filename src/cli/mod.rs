// file: src/cli/mod.rs
// version: 1.0.0
// guid: 52f1c817-8467-42cc-bb18-5641a8887008

//! Command line interface for the weave solver

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
