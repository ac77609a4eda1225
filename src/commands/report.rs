//! Report command - all queries at once.

use anyhow::Result;

use crate::config::Config;
use crate::report::{ReportOptions, StatusReport};
use crate::root::FsRoot;
use crate::status::TimestampFormat;

/// Execute the report command.
pub fn cmd_report(
    root: &FsRoot,
    json: bool,
    parse_manually: bool,
    date_only: bool,
    config: &Config,
) -> Result<()> {
    let options = ReportOptions {
        parse_manually,
        timestamp: TimestampFormat::from_date_only(date_only),
        mender_bin: config.mender_bin.clone(),
    };

    let report = StatusReport::collect(root, &options)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }
    Ok(())
}
