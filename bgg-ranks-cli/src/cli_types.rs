//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bgg-ranks")]
#[command(
    about = "Rank board game collections using the BoardGameGeek catalog",
    long_about = None
)]
pub(crate) struct Cli {
    /// Directory holding collection .yaml files (default: ./in)
    #[arg(long, global = true)]
    pub in_dir: Option<PathBuf>,

    /// Directory snapshots are written to (default: ./out)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Base URL of the catalog XML API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch, rank, and snapshot every collection
    Run {
        /// Only process these collections (by file stem, e.g. watchlist,shelf)
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,

        /// Print rankings instead of writing snapshots
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List collections in the input directory
    List,

    /// Show the catalog's current hot list
    Hot {
        /// Save the hot list's ids as collection NAME in the input directory
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each came from
    Show,

    /// Print the settings file path
    Path,
}
