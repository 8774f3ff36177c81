//! CLI entry point for wintree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wintree::{
    JsonOptions, ListOptions, OutputConfig, TreeFormatter, WalkerConfig, WintreeError, build_tree,
    list_files, tree_to_json,
};

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
#[command(name = "wintree")]
#[command(about = "Render a directory as a tree diagram, a file list, or a JSON document")]
#[command(version)]
struct Cli {
    /// Log skipped entries and written files to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Filters shared by every subcommand
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip directories with this name anywhere in the tree (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "DIR")]
    ignore: Vec<String>,

    /// Only show files with this extension, e.g. ".rs" (can be used multiple times)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an indented tree diagram
    Tree {
        #[command(flatten)]
        filter: FilterArgs,

        /// Decorate entries with folder and file emoji
        #[arg(long)]
        emoji: bool,

        /// Control color output: auto, always, never
        #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
        color: ColorMode,
    },
    /// Print the absolute path of every file, one per line
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the tree as a JSON document
    Json {
        #[command(flatten)]
        filter: FilterArgs,

        /// Destination file (must end in .json, default: <PATH>_tree.json)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include size and modification time for files
        #[arg(long)]
        meta: bool,

        /// Also print the document to stdout
        #[arg(long)]
        print: bool,
    },
}

/// Install a stderr subscriber honoring RUST_LOG, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), WintreeError> {
    match command {
        Command::Tree {
            filter,
            emoji,
            color,
        } => {
            let config = WalkerConfig::new(&filter.ignore, &filter.ext);
            let root = build_tree(&filter.path, config)?;
            let formatter = TreeFormatter::new(OutputConfig {
                use_emoji: emoji,
                use_color: should_use_color(color),
            });
            formatter
                .print(&root)
                .map_err(|e| WintreeError::io("<stdout>", e))
        }
        Command::List { filter } => {
            let options = ListOptions {
                ignore_dirs: filter.ignore,
                filter_exts: filter.ext,
            };
            let listing = list_files(&filter.path, &options)?;
            if !listing.is_empty() {
                println!("{}", listing);
            }
            Ok(())
        }
        Command::Json {
            filter,
            output,
            meta,
            print,
        } => {
            let options = JsonOptions {
                save_path: output,
                ignore_dirs: filter.ignore,
                filter_exts: filter.ext,
                show_meta: meta,
            };
            let document = tree_to_json(&filter.path, &options)?;
            if print {
                println!("{}", document.to_pretty_string()?);
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("wintree: {}", e);
        process::exit(1);
    }
}
