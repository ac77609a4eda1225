//! UHD toolkit version, as reported by `uhd_config_info --version`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

use crate::process;
use crate::root::FsRoot;

/// Location of the version tool relative to the filesystem root.
pub const UHD_CONFIG_INFO: &str = "usr/bin/uhd_config_info";

const PREFIX: &str = "UHD ";

/// A version line that does not have the `UHD <version>-<appendix>-<githash>` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version line {line:?} does not start with \"UHD \"")]
    MissingPrefix { line: String },
    #[error("version line {line:?} has {found} '-'-separated parts, expected 3")]
    SegmentCount { line: String, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UhdVersion {
    pub version: String,
    pub appendix: String,
    pub githash: String,
}

impl UhdVersion {
    pub fn parse(line: &str) -> Result<Self, VersionParseError> {
        let rest = line
            .strip_prefix(PREFIX)
            .ok_or_else(|| VersionParseError::MissingPrefix {
                line: line.to_string(),
            })?;

        let parts: Vec<&str> = rest.split('-').collect();
        match parts.as_slice() {
            [version, appendix, githash] => Ok(Self {
                version: version.to_string(),
                appendix: appendix.to_string(),
                githash: githash.to_string(),
            }),
            _ => Err(VersionParseError::SegmentCount {
                line: line.to_string(),
                found: parts.len(),
            }),
        }
    }
}

impl FromStr for UhdVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Run `<root>/usr/bin/uhd_config_info --version` and parse its first line.
///
/// Executes a binary from the root, so this is only meaningful for the live
/// system. Spawn failures, non-zero exits and malformed lines are errors.
pub fn uhd_version(root: &FsRoot) -> Result<UhdVersion> {
    let tool = root.join(UHD_CONFIG_INFO);
    let line = process::first_line_of(&tool, ["--version"])?;
    let version = UhdVersion::parse(&line)
        .with_context(|| format!("Unexpected output from {}", tool.display()))?;
    log::debug!("UHD version {} ({})", version.version, version.githash);
    Ok(version)
}
