//! Rollback of a partially created project.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Removes a freshly created destination directory when dropped, unless
/// [`DestinationGuard::commit`] was called first.
///
/// Arm it right after the destination directory is created. Every early
/// return through `?` after that point drops the guard and takes the partial
/// tree with it.
#[derive(Debug)]
#[must_use = "dropping the guard immediately removes the destination"]
pub struct DestinationGuard {
    destination: Option<PathBuf>,
}

impl DestinationGuard {
    pub fn new<P: AsRef<Path>>(destination: P) -> Self {
        Self { destination: Some(destination.as_ref().to_path_buf()) }
    }

    /// Keeps the destination and disarms the guard.
    pub fn commit(mut self) -> PathBuf {
        let destination = self.destination.take().unwrap_or_default();
        debug!("Keeping {}", destination.display());
        destination
    }
}

impl Drop for DestinationGuard {
    fn drop(&mut self) {
        if let Some(destination) = self.destination.take() {
            debug!("Rolling back, removing {}", destination.display());
            if let Err(e) = fs::remove_dir_all(&destination) {
                warn!("Failed to remove partial project {}: {}", destination.display(), e);
            }
        }
    }
}
