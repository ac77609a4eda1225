//! fsstatus - provenance and status of an embedded root filesystem.
//!
//! Answers "what software is running on this box, and when was it last
//! updated" for a live device or a mounted image. See [`status`] for the
//! individual queries and [`report`] for the combined view.

pub mod commands;
pub mod config;
pub mod logging;
pub mod process;
pub mod report;
pub mod root;
pub mod status;

pub use root::FsRoot;
pub use status::{ArtifactName, Reading, UhdVersion, FILE_NOT_FOUND};
