//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod label;
pub mod output;

pub use args::{Cli, Commands, Format, Order};
pub use error::{CliError, CliResult};
pub use label::Label;
