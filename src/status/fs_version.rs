//! Filesystem build identifier from `etc/version`.

use anyhow::{Context, Result};
use std::fs;

use super::Reading;
use crate::root::FsRoot;

pub const VERSION_FILE: &str = "etc/version";

/// First line of `<root>/etc/version`, unvalidated.
pub fn fs_version(root: &FsRoot) -> Result<Reading> {
    let path = root.join(VERSION_FILE);
    if !path.exists() {
        log::warn!("{} not found", path.display());
        return Ok(Reading::FileNotFound);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let first = content.lines().next().unwrap_or_default();

    Ok(Reading::Value(first.to_string()))
}
