//! opkg package database status: when it last changed and what it contains.
//!
//! `var/lib/opkg/status` is rewritten on every package install or removal,
//! so its mtime dates the last update and its digest detects drift between
//! devices or images.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use super::Reading;
use crate::root::FsRoot;

pub const OPKG_STATUS: &str = "var/lib/opkg/status";

/// Granularity of the status timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD`
    DateOnly,
    /// `YYYY-MM-DD HH:MM:SS`
    #[default]
    DateTime,
}

impl TimestampFormat {
    pub fn from_date_only(date_only: bool) -> Self {
        if date_only {
            TimestampFormat::DateOnly
        } else {
            TimestampFormat::DateTime
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::DateOnly => "%Y-%m-%d",
            TimestampFormat::DateTime => "%Y-%m-%d %H:%M:%S",
        }
    }

    pub fn format(self, time: DateTime<Utc>) -> String {
        time.format(self.pattern()).to_string()
    }
}

/// Modification time of the opkg status file, in UTC.
pub fn opkg_status_date(root: &FsRoot, format: TimestampFormat) -> Result<Reading> {
    let path = root.join(OPKG_STATUS);
    if !path.exists() {
        log::warn!("{} not found", path.display());
        return Ok(Reading::FileNotFound);
    }

    let modified = fs::metadata(&path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to read modification time of {}", path.display()))?;

    Ok(Reading::Value(format.format(DateTime::<Utc>::from(modified))))
}

/// Hex SHA-256 of the opkg status file.
///
/// Hashes the raw bytes, so the digest matches `sha256sum` regardless of
/// encoding or line endings.
pub fn opkg_status_checksum(root: &FsRoot) -> Result<Reading> {
    let path = root.join(OPKG_STATUS);
    if !path.exists() {
        log::warn!("{} not found", path.display());
        return Ok(Reading::FileNotFound);
    }

    Ok(Reading::Value(hash_file(&path)?))
}

fn hash_file(path: &Path) -> Result<String> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}
