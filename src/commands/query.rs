//! Single-query commands.

use anyhow::Result;

use crate::config::Config;
use crate::root::FsRoot;
use crate::status::{self, ArtifactMode, TimestampFormat};

/// Query to run.
pub enum Query {
    UhdVersion,
    Artifact { manual: bool },
    FsVersion,
    OpkgDate { date_only: bool },
    OpkgChecksum,
}

/// Execute one query and print its result to stdout.
pub fn cmd_query(root: &FsRoot, query: Query, config: &Config) -> Result<()> {
    match query {
        Query::UhdVersion => {
            let uhd = status::uhd_version(root)?;
            println!("version: {}", uhd.version);
            println!("appendix: {}", uhd.appendix);
            println!("githash: {}", uhd.githash);
        }
        Query::Artifact { manual } => {
            let mode = ArtifactMode::resolve(root, manual);
            println!("{}", status::mender_artifact_with(root, mode, &config.mender_bin)?);
        }
        Query::FsVersion => {
            println!("{}", status::fs_version(root)?);
        }
        Query::OpkgDate { date_only } => {
            let format = TimestampFormat::from_date_only(date_only);
            println!("{}", status::opkg_status_date(root, format)?);
        }
        Query::OpkgChecksum => {
            println!("{}", status::opkg_status_checksum(root)?);
        }
    }
    Ok(())
}
