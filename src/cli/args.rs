//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;

/// Inspect and render N-ary trees stored as JSON
#[derive(Parser, Debug)]
#[command(name = "narytree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity of logging on stderr (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file layered over the global configuration
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree in one of the text formats
    Render {
        /// JSON tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Show height, size and leaf count
    Stats {
        /// JSON tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List values in traversal order, one per line
    Traverse {
        /// JSON tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Order::Prefix)]
        order: Order,
    },

    /// Check whether a value occurs in the tree (exit code 1 if not)
    Contains {
        /// JSON tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Value to look for, parsed as JSON when possible
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `[value] (child, ...)`
    Text,
    /// Compact JSON
    Json,
    /// Indented diagram
    Pretty,
    /// Box-drawing tree
    Tree,
    /// Nested `TreeNode{...}` form
    Debug,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Prefix,
    Postfix,
    Width,
}
