//! Aggregate status report over all queries.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::root::FsRoot;
use crate::status::{self, ArtifactMode, ArtifactName, Reading, TimestampFormat, UhdVersion};

/// Knobs for [`StatusReport::collect`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Read artifact_info even on the live root.
    pub parse_manually: bool,
    pub timestamp: TimestampFormat,
    /// Mender client used for the live artifact lookup.
    pub mender_bin: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            parse_manually: false,
            timestamp: TimestampFormat::DateTime,
            mender_bin: PathBuf::from(status::MENDER_BIN),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub filesystem_root: String,
    /// `None` for image roots, whose binaries are not executed.
    pub uhd_version: Option<UhdVersion>,
    pub mender_artifact: ArtifactName,
    pub fs_version: Reading,
    pub opkg_status_date: Reading,
    pub opkg_status_checksum: Reading,
}

impl StatusReport {
    /// Run every query against `root`. The first failing query aborts the report.
    pub fn collect(root: &FsRoot, options: &ReportOptions) -> Result<Self> {
        log::info!("Collecting filesystem status for {}", root);

        let uhd_version = if root.is_live() {
            Some(status::uhd_version(root)?)
        } else {
            log::debug!("skipping UHD version for image root {}", root);
            None
        };

        let mode = ArtifactMode::resolve(root, options.parse_manually);

        Ok(Self {
            filesystem_root: root.to_string(),
            uhd_version,
            mender_artifact: status::mender_artifact_with(root, mode, &options.mender_bin)?,
            fs_version: status::fs_version(root)?,
            opkg_status_date: status::opkg_status_date(root, options.timestamp)?,
            opkg_status_checksum: status::opkg_status_checksum(root)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Filesystem Status: {} ===\n", self.filesystem_root);

        match &self.uhd_version {
            Some(uhd) => println!(
                "  UHD version:       {} ({}, {})",
                uhd.version, uhd.appendix, uhd.githash
            ),
            None => println!("  UHD version:       (not queried for image roots)"),
        }
        println!("  Mender artifact:   {}", self.mender_artifact);
        println!("  Filesystem:        {}", self.fs_version);
        println!("  opkg status date:  {}", self.opkg_status_date);
        println!("  opkg status hash:  {}", self.opkg_status_checksum);
    }
}
