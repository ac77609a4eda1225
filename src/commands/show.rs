//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::root::FsRoot;

/// Show the effective configuration, with `root` as resolved from the CLI.
pub fn cmd_show(root: &FsRoot, config: &Config) -> Result<()> {
    let effective = Config {
        root: root.clone(),
        ..config.clone()
    };
    effective.print();
    Ok(())
}
