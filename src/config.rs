//! Configuration management for fsstatus.
//!
//! Reads configuration from environment variables. `main` loads a `.env`
//! file into the environment first; variables already set take precedence.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::root::FsRoot;
use crate::status::MENDER_BIN;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem root to inspect (FSSTATUS_ROOT, default `/`)
    pub root: FsRoot,
    /// Mender client for live artifact lookups (FSSTATUS_MENDER_BIN)
    pub mender_bin: PathBuf,
    /// Log level spec (FSSTATUS_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&vars)
    }

    /// Build configuration from an explicit variable map, applying defaults.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let root = vars
            .get("FSSTATUS_ROOT")
            .filter(|s| !s.is_empty())
            .map(FsRoot::from_path)
            .unwrap_or_default();

        let mender_bin = vars
            .get("FSSTATUS_MENDER_BIN")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(MENDER_BIN));

        let log_level = vars
            .get("FSSTATUS_LOG")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            root,
            mender_bin,
            log_level,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  FSSTATUS_ROOT: {}", self.root);
        println!("  FSSTATUS_MENDER_BIN: {}", self.mender_bin.display());
        println!("  FSSTATUS_LOG: {}", self.log_level);
        if self.root.is_live() {
            println!("  Mode: live system");
        } else {
            println!("  Mode: offline image (artifact parsed from artifact_info)");
        }
    }
}
