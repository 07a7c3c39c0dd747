//! genetag CLI library
//!
//! This library provides the command-line interface for annotating gene
//! names and scoring them against a gold standard.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
