//! medisight-cli library root.
//!
//! Re-exports the command-line modules so integration tests can drive the
//! commands and the config loader without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
