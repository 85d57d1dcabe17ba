//! CLI module for tagmatch.
//!
//! Lets shell scripts and log pipelines use the same patterns the library does,
//! e.g. `journalctl ... | tagmatch filter 'App.Net.**'`.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tagmatch - Match hierarchical log tags against wildcard patterns.
#[derive(Parser)]
#[command(
    name = "tagmatch",
    version,
    about = "Match hierarchical log tags against wildcard patterns"
)]
pub struct Cli {
    /// Config file (defaults to ~/.config/tagmatch/tagmatch.conf)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Exit 0 if the tag matches the pattern, 1 otherwise.
    Match {
        /// Dot-separated tag
        tag: String,
        /// Wildcard pattern or `regex:` expression
        pattern: String,
    },
    /// Print the tags that match the pattern.
    Filter {
        /// Wildcard pattern or `regex:` expression
        pattern: String,
        /// Tags to test (reads one per line from stdin if omitted)
        tags: Vec<String>,
    },
    /// Report whether each pattern compiles.
    Check {
        /// Patterns to validate
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Print the tags allowed by the configured include/exclude rules.
    Route {
        /// Tags to route (reads one per line from stdin if omitted)
        tags: Vec<String>,
    },
}

pub use commands::{cmd_check, cmd_filter, cmd_match, cmd_route};
pub use util::{load_config, read_tags};
