//! Infrastructure layer
//!
//! Process-level concerns around the core: command line parsing and
//! configuration loading.

pub mod cli;
pub mod config;
