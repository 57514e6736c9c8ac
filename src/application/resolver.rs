//! Archive resolution
//!
//! Maps a build target and its output path to the one artifact that should
//! be shipped. The resolver never searches: each target has exactly one
//! expected location, and that location must exist.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildTarget;
use crate::error::{HookError, HookResult};

/// Product name Xcode exports use for Unity iOS builds
pub const DEFAULT_IOS_PRODUCT_NAME: &str = "Unity-iPhone";

#[derive(Debug, Clone)]
pub struct ArchiveResolver {
    ios_product_name: String,
}

impl Default for ArchiveResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IOS_PRODUCT_NAME)
    }
}

impl ArchiveResolver {
    pub fn new(ios_product_name: impl Into<String>) -> Self {
        Self {
            ios_product_name: ios_product_name.into(),
        }
    }

    /// Expected archive location for `target`, without touching the disk.
    pub fn archive_path(&self, target: BuildTarget, output_path: &Path) -> HookResult<PathBuf> {
        match target {
            BuildTarget::Ios => Ok(output_path
                .join("build")
                .join(format!("{}.ipa", self.ios_product_name))),
            BuildTarget::Android => Ok(output_path.to_path_buf()),
            other => Err(HookError::UnsupportedTarget(other)),
        }
    }

    /// Expected archive location, verified to be an existing file.
    pub fn resolve(&self, target: BuildTarget, output_path: &Path) -> HookResult<PathBuf> {
        let archive = self.archive_path(target, output_path)?;
        if !archive.is_file() {
            return Err(HookError::ArtifactNotFound { path: archive });
        }
        tracing::debug!(%target, archive = %archive.display(), "resolved archive");
        Ok(archive)
    }
}
