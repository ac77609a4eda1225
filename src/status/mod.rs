//! Filesystem status queries.
//!
//! Five independent, read-only probes against a [`FsRoot`](crate::root::FsRoot):
//! - [`uhd_version`] - toolkit version from `usr/bin/uhd_config_info`
//! - [`mender_artifact`] - deployed artifact name
//! - [`fs_version`] - first line of `etc/version`
//! - [`opkg_status_date`] - modification time of `var/lib/opkg/status`
//! - [`opkg_status_checksum`] - digest of `var/lib/opkg/status`
//!
//! A missing target file is a reportable status, not an error: those queries
//! return [`Reading::FileNotFound`], which displays as [`FILE_NOT_FOUND`].

pub mod artifact;
pub mod fs_version;
pub mod opkg;
pub mod uhd;

use serde::{Serialize, Serializer};
use std::fmt;

pub use artifact::{mender_artifact, mender_artifact_with, ArtifactMode, ArtifactName, MENDER_BIN};
pub use fs_version::fs_version;
pub use opkg::{opkg_status_checksum, opkg_status_date, TimestampFormat};
pub use uhd::{uhd_version, UhdVersion, VersionParseError};

/// Sentinel reported in place of a value whose source file is absent.
pub const FILE_NOT_FOUND: &str = "FILE NOT FOUND";

/// Outcome of a file-backed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Value(String),
    FileNotFound,
}

impl Reading {
    /// The value, or the sentinel if the file was absent.
    pub fn as_str(&self) -> &str {
        match self {
            Reading::Value(value) => value,
            Reading::FileNotFound => FILE_NOT_FOUND,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Reading::Value(value) => Some(value),
            Reading::FileNotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Reading::Value(_))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
