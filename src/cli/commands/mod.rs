//! Each subcommand lives in its own file, keeping the match arm in main thin
//! and letting each handler own its argument validation and error reporting.

mod check;
mod filter;
mod matching;
mod route;

pub use check::cmd_check;
pub use filter::cmd_filter;
pub use matching::cmd_match;
pub use route::cmd_route;
