//! CLI entry point for the `grasple` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use grasple::cli::commands;
use grasple::tree::TraversalOrder;
use grasple::types::{GraphError, GraphResult, SlotConfig};

#[derive(Parser)]
#[command(
    name = "grasple",
    about = "grasple CLI: indexed graphs and LMR search trees"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// JSON file with slot settings for graph vertices
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the banner
    Banner,
    /// Build an LMR tree from values (the first one is the root)
    Tree {
        /// Values to insert
        values: Vec<String>,
        /// Traversal order: inorder, preorder, postorder
        #[arg(long, default_value = "inorder")]
        order: String,
        /// Compare values as integers instead of strings
        #[arg(long)]
        numeric: bool,
        /// Count the nodes equal to this value
        #[arg(long)]
        find: Option<String>,
    },
    /// Find connected components of a graph given as `a-b` edges
    Components {
        /// Edges written `a-b`, or a lone vertex name
        edges: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> GraphResult<SlotConfig> {
    match path {
        Some(path) => SlotConfig::load(path),
        None => Ok(SlotConfig::default()),
    }
}

fn run_tree(
    values: Vec<String>,
    order: TraversalOrder,
    numeric: bool,
    find: Option<String>,
    json: bool,
) -> GraphResult<()> {
    if numeric {
        let values = commands::parse_values::<i64>(&values)?;
        let find = match find {
            Some(raw) => commands::parse_values::<i64>(&[raw])?.pop(),
            None => None,
        };
        commands::cmd_tree(values, order, find, json)
    } else {
        commands::cmd_tree(values, order, find, json)
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Banner => commands::cmd_banner(),
        Commands::Tree {
            values,
            order,
            numeric,
            find,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            run_tree(values, order, numeric, find, json)
        }
        Commands::Components { edges } => load_config(cli.config.as_ref())
            .and_then(|config| commands::cmd_components(&edges, config, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidValue(_) => 3,
            _ => 1,
        };
        process::exit(code);
    }
}
