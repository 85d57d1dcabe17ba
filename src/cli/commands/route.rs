//! `tagmatch route [tags..]`: dry-run of the configured `[rules]`.

use crate::cli::util::read_tags;
use crate::config::Config;
use crate::filter::TagFilter;
use crate::internal;
use std::process::ExitCode;

#[must_use]
pub fn cmd_route(args: &[String], config: &Config) -> ExitCode {
    let tags = match read_tags(args) {
        Ok(tags) => tags,
        Err(e) => {
            internal::error("ROUTE", &format!("Error reading stdin: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let filter = TagFilter::from_config(config);
    internal::debug(
        "ROUTE",
        &format!(
            "{} include, {} exclude rules",
            filter.includes().len(),
            filter.excludes().len()
        ),
    );

    for tag in filter.apply(tags.iter().map(String::as_str)) {
        println!("{tag}");
    }
    ExitCode::SUCCESS
}
