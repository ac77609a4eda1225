//! Filesystem root selection.
//!
//! Every query resolves its files relative to a root. On a running device
//! that is `/`; for offline inspection it is the mount point of an image.

use std::fmt;
use std::path::{Path, PathBuf};

/// The root all status queries resolve paths against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FsRoot {
    /// The live root of the running system (`/`).
    #[default]
    Live,
    /// A mounted filesystem image, inspected offline.
    Image(PathBuf),
}

impl FsRoot {
    /// Map a path to a root. Exactly `/` is the live root.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new("/") {
            FsRoot::Live
        } else {
            FsRoot::Image(path.to_path_buf())
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsRoot::Live => Path::new("/"),
            FsRoot::Image(path) => path,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, FsRoot::Live)
    }

    /// Resolve a root-relative path such as `etc/version`.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.path().join(relative.trim_start_matches('/'))
    }
}

impl fmt::Display for FsRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_is_live() {
        assert_eq!(FsRoot::from_path("/"), FsRoot::Live);
        assert!(FsRoot::from_path("/").is_live());
    }

    #[test]
    fn test_other_paths_are_images() {
        let root = FsRoot::from_path("/mnt/image");
        assert_eq!(root, FsRoot::Image(PathBuf::from("/mnt/image")));
        assert!(!root.is_live());
    }

    #[test]
    fn test_join() {
        assert_eq!(FsRoot::Live.join("etc/version"), PathBuf::from("/etc/version"));
        assert_eq!(
            FsRoot::from_path("/mnt/image").join("/var/lib/opkg/status"),
            PathBuf::from("/mnt/image/var/lib/opkg/status")
        );
    }

    #[test]
    fn test_default_is_live() {
        assert_eq!(FsRoot::default(), FsRoot::Live);
        assert_eq!(FsRoot::Live.to_string(), "/");
    }
}
