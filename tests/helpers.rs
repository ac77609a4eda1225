//! Shared test utilities for fsstatus tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

use fsstatus::FsRoot;

/// 2020-09-13 12:26:40 UTC
pub const MOCK_MTIME_SECS: u64 = 1_600_000_000;

/// Test environment with a temporary directory standing in for an image root.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Mock filesystem root
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("rootfs");
        fs::create_dir_all(&root).expect("Failed to create rootfs dir");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn fs_root(&self) -> FsRoot {
        FsRoot::from_path(&self.root)
    }

    /// Write a root-relative file, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative);
        write_file(&path, content);
        path
    }

    /// Write a root-relative executable shell script.
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        let path = self.root.join(relative);
        create_mock_script(&path, body);
        path
    }
}

/// Create a minimal mock image with every file the queries read.
pub fn create_mock_image(env: &TestEnv) {
    env.write("etc/version", "20240315123456\nbuild-host: ci\n");
    env.write(
        "etc/mender/artifact_info",
        "artifact_name=release-v2.3\n",
    );
    let status = env.write(
        "var/lib/opkg/status",
        "Package: uhd\nVersion: 4.1.0\nStatus: install ok installed\n",
    );
    set_mtime(&status, UNIX_EPOCH + Duration::from_secs(MOCK_MTIME_SECS));
}

pub fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Create an executable `/bin/sh` script with the given body.
pub fn create_mock_script(path: &Path, body: &str) {
    write_file(path, format!("#!/bin/sh\n{}\n", body));

    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file")
        .set_modified(time)
        .expect("Failed to set mtime");
}
