//! CLI entry point for dirtree

use std::fmt::Display;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use dirtree::logging::init_logging;
use dirtree::{OutputConfig, Tree, TreeConfig, TreeFormatter, demo_tree, format_size, print_json};
use tracing::info;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Query an in-memory directory tree: paths, folder sizes, wildcard search")]
#[command(version)]
struct Args {
    /// JSON manifest describing the tree (default: built-in reference tree)
    #[arg(short = 'f', long = "file", value_name = "MANIFEST", global = true)]
    manifest: Option<PathBuf>,

    /// Accept sibling nodes with the same name (lookups take the first in pre-order)
    #[arg(long = "allow-duplicates", global = true)]
    allow_duplicates: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display the whole tree
    Show {
        /// Show file sizes and folder totals
        #[arg(short = 's', long = "size")]
        size: bool,

        /// Output the tree as a JSON manifest
        #[arg(long = "json", conflicts_with = "size")]
        json: bool,
    },
    /// Print the path of the first node named NAME
    Find { name: String },
    /// Print the total size of the first node named NAME
    Size {
        name: String,

        /// Print a human-readable size (e.g. 1.5K)
        #[arg(short = 'H', long = "human")]
        human: bool,
    },
    /// List the paths of files whose name matches PATTERN
    /// (* any run, ? one character, ! start anchor, # digits)
    Search { pattern: String },
    /// Remove NAME from the folder at PARENT_PATH, then display the tree
    Remove {
        parent: String,
        name: String,

        /// Show file sizes and folder totals
        #[arg(short = 's', long = "size")]
        size: bool,
    },
}

fn fail(message: impl Display) -> ! {
    eprintln!("dirtree: {}", message);
    process::exit(1);
}

fn load_tree(args: &Args) -> Tree {
    let config = if args.allow_duplicates {
        TreeConfig::allow_duplicates()
    } else {
        TreeConfig::default()
    };

    match &args.manifest {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path.display(), e)));
            Tree::from_json(&json, config).unwrap_or_else(|e| fail(e))
        }
        None => demo_tree()
            .map(|tree| tree.with_config(config))
            .unwrap_or_else(|e| fail(e)),
    }
}

fn show(tree: &mut Tree, use_color: bool, size: bool) -> std::io::Result<()> {
    if size {
        tree.total_size();
    }
    TreeFormatter::new(OutputConfig {
        use_color,
        show_size: size,
    })
    .print(tree)
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);
    init_logging(args.verbose, use_color);

    let mut tree = load_tree(&args);
    let started = Instant::now();

    let result = match &args.command {
        Command::Show { size, json } => {
            if *json {
                print_json(&tree)
            } else {
                show(&mut tree, use_color, *size)
            }
        }
        Command::Find { name } => match tree.find_path(name) {
            Some(path) => {
                println!("{}", path);
                Ok(())
            }
            None => fail(format!("'{}' not found", name)),
        },
        Command::Size { name, human } => match tree.folder_size(name) {
            Some(bytes) if *human => {
                println!("{}", format_size(bytes));
                Ok(())
            }
            Some(bytes) => {
                println!("{}", bytes);
                Ok(())
            }
            None => fail(format!("'{}' not found", name)),
        },
        Command::Search { pattern } => {
            let paths = tree.find_matching(pattern).unwrap_or_else(|e| fail(e));
            if paths.is_empty() {
                info!(pattern = %pattern, "no files matched");
            }
            for path in &paths {
                println!("{}", path);
            }
            Ok(())
        }
        Command::Remove { parent, name, size } => {
            let removed = tree.remove(parent, name).unwrap_or_else(|e| fail(e));
            info!(name = removed.name(), parent = %parent, "removed");
            show(&mut tree, use_color, *size)
        }
    };

    info!(
        elapsed = %humantime::format_duration(started.elapsed()),
        "query finished"
    );

    if let Err(e) = result {
        fail(format!("error writing output: {}", e));
    }
}
