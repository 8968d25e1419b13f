//! Command-line interface module.

mod args;
pub mod fastdl;
pub mod prompt;

pub use args::Cli;
