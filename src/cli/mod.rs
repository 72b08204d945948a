// file: src/cli/mod.rs
// version: 1.0.0
// guid: 5c0e82f4-a961-4d73-b8e5-42f6d091c3a7

//! Command line interface for the profile generator

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
