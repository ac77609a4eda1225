//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `query` - Run a single status query
//! - `report` - Run all queries and print a combined report
//! - `show` - Display configuration

pub mod query;
pub mod report;
pub mod show;

pub use query::cmd_query;
pub use report::cmd_report;
pub use show::cmd_show;
