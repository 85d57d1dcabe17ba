//! `tagmatch` binary: scriptable one-shot access to the tag matcher.
//!
//! Usage:
//!   tagmatch match <tag> <pattern>       Exit 0 on match, 1 otherwise
//!   tagmatch filter <pattern> [tags..]   Print matching tags (stdin if none given)
//!   tagmatch check <pattern>...          Validate patterns
//!   tagmatch route [tags..]              Apply the configured include/exclude rules

use clap::Parser;
use std::process::ExitCode;
use tagmatch::cli::{Cli, Command, cmd_check, cmd_filter, cmd_match, cmd_route, load_config};
use tagmatch::internal;
use tagmatch::{Level, TagMatcher};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Warnings from loading (missing or cyclic sources) need a sink before the configured level is known
    internal::init(Level::Warn);

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    let matcher = TagMatcher::builder().config(&config).build();

    match &cli.command {
        Command::Match { tag, pattern } => cmd_match(tag, pattern, &matcher),
        Command::Filter { pattern, tags } => cmd_filter(pattern, tags, &matcher),
        Command::Check { patterns } => cmd_check(patterns, &matcher),
        Command::Route { tags } => cmd_route(tags, &config),
    }
}
