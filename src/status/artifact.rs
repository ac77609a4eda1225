//! Mender deployment artifact name.
//!
//! On the live system `mender -show-artifact` is authoritative. An offline
//! image cannot run its own tools, so the artifact is read from
//! `etc/mender/artifact_info` instead.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

use super::FILE_NOT_FOUND;
use crate::process;
use crate::root::FsRoot;

/// Mender client on the running system. Always resolved against `/`.
pub const MENDER_BIN: &str = "/usr/bin/mender";

/// Artifact info file relative to the filesystem root.
pub const ARTIFACT_INFO: &str = "etc/mender/artifact_info";

const ARTIFACT_KEY: &str = "artifact_name=";

/// How the artifact name is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactMode {
    /// Read `etc/mender/artifact_info` under the root.
    Manual,
    /// Ask the mender client of the running system.
    Live,
}

impl ArtifactMode {
    /// Pick the mode for a root. Image roots are always parsed manually.
    pub fn resolve(root: &FsRoot, parse_manually: bool) -> Self {
        if parse_manually || !root.is_live() {
            ArtifactMode::Manual
        } else {
            ArtifactMode::Live
        }
    }
}

/// Result of an artifact lookup.
///
/// `FileNotFound` and `KeyMissing` are distinct: the first means there is no
/// artifact_info at all, the second that it exists without an
/// `artifact_name=` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactName {
    Present(String),
    KeyMissing,
    FileNotFound,
}

impl ArtifactName {
    pub fn name(&self) -> Option<&str> {
        match self {
            ArtifactName::Present(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactName::Present(name) => f.write_str(name),
            ArtifactName::KeyMissing => f.write_str("(none)"),
            ArtifactName::FileNotFound => f.write_str(FILE_NOT_FOUND),
        }
    }
}

/// Serialized as the name, the sentinel string, or `null` for a missing key.
impl Serialize for ArtifactName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArtifactName::Present(name) => serializer.serialize_str(name),
            ArtifactName::KeyMissing => serializer.serialize_none(),
            ArtifactName::FileNotFound => serializer.serialize_str(FILE_NOT_FOUND),
        }
    }
}

/// Determine the deployed artifact name.
///
/// `parse_manually` selects the artifact_info file over the mender client;
/// it is implied for any image root.
pub fn mender_artifact(root: &FsRoot, parse_manually: bool) -> Result<ArtifactName> {
    let mode = ArtifactMode::resolve(root, parse_manually);
    mender_artifact_with(root, mode, Path::new(MENDER_BIN))
}

/// Like [`mender_artifact`] with the mode and the mender client given explicitly.
pub fn mender_artifact_with(
    root: &FsRoot,
    mode: ArtifactMode,
    mender_bin: &Path,
) -> Result<ArtifactName> {
    match mode {
        ArtifactMode::Manual => read_artifact_info(&root.join(ARTIFACT_INFO)),
        ArtifactMode::Live => {
            // The client prints the bare name, no key to strip.
            let line = process::first_line_of(mender_bin, ["-show-artifact"])?;
            Ok(ArtifactName::Present(line))
        }
    }
}

fn read_artifact_info(path: &Path) -> Result<ArtifactName> {
    if !path.exists() {
        log::warn!("{} not found", path.display());
        return Ok(ArtifactName::FileNotFound);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(parse_artifact_info(&content))
}

/// Find the `artifact_name=` entry in artifact_info content.
pub fn parse_artifact_info(content: &str) -> ArtifactName {
    content
        .lines()
        .find_map(|line| line.strip_prefix(ARTIFACT_KEY))
        .map(|name| ArtifactName::Present(name.to_string()))
        .unwrap_or(ArtifactName::KeyMissing)
}
