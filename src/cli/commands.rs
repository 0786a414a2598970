use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, Format, Order};
use crate::cli::error::{CliError, CliResult};
use crate::cli::label::Label;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{NodeId, NodeRef, TreeArena};
use crate::exitcode;
use crate::tree_traits::TreeNodeConvert;

/// Runs the selected subcommand and returns the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Render { file, format }) => _render(file, *format, &settings),
        Some(Commands::Stats { file }) => _stats(file),
        Some(Commands::Traverse { file, order }) => _traverse(file, *order),
        Some(Commands::Contains { file, value }) => _contains(file, value),
        None => Ok(exitcode::OK),
    }
}

/// Reads a JSON tree file into a fresh arena.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> CliResult<(TreeArena<Label>, NodeId)> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("read {}", path.display()), e))?;
    Ok(TreeArena::from_json(&content)?)
}

/// Renders `node` in the requested format, newline-terminated.
pub fn render(node: NodeRef<'_, Label>, format: Format, settings: &Settings) -> CliResult<String> {
    let text = match format {
        Format::Text => format!("{}\n", node.generate_text_with(&settings.render)),
        Format::Json => format!("{}\n", node.to_json()?),
        Format::Pretty => node.to_pretty_text_with(&settings.render)?,
        Format::Tree => node.to_tree_string()?.to_string(),
        Format::Debug => format!("{}\n", node.to_debug_string()?),
    };
    Ok(text)
}

#[instrument(skip(settings))]
fn _render(file: &Path, format: Format, settings: &Settings) -> CliResult<i32> {
    let (tree, root) = load_tree(file)?;
    output::raw(&render(tree.node(root)?, format, settings)?);
    Ok(exitcode::OK)
}

#[instrument]
fn _stats(file: &Path) -> CliResult<i32> {
    let (tree, root) = load_tree(file)?;
    let node = tree.node(root)?;
    output::action("height", &node.height());
    output::action("size", &node.size());
    output::action("leaves", &node.number_of_leaves());
    output::action("children", &node.children_count());
    Ok(exitcode::OK)
}

#[instrument]
fn _traverse(file: &Path, order: Order) -> CliResult<i32> {
    let (tree, root) = load_tree(file)?;
    let node = tree.node(root)?;
    let values = match order {
        Order::Prefix => node.to_prefix_list(),
        Order::Postfix => node.to_postfix_list(),
        Order::Width => node.to_by_width_list(),
    };
    for value in values {
        match value {
            Some(label) => output::info(label),
            None => output::info("null"),
        }
    }
    Ok(exitcode::OK)
}

#[instrument]
fn _contains(file: &Path, value: &str) -> CliResult<i32> {
    let (tree, root) = load_tree(file)?;
    let found = tree.node(root)?.contains(&Label::parse_arg(value))?;
    output::info(&found);
    Ok(if found { exitcode::OK } else { exitcode::NO_MATCH })
}
