//! Library support for the `cukex` command line tool.
//!
//! Configuration, logging and output live here so the binary stays a thin
//! shell around them and they can be tested directly.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
