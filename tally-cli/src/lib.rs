//! Tally CLI library
//!
//! This library provides the command-line interface for running Tally
//! reducers over files and for the calendar utilities.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
