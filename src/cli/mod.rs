//! CLI for running the text-analytics pipeline from the shell.

mod commands;

pub use commands::{is_verbose, run};
