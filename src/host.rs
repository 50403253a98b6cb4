//! What the provider needs from its host.

use std::path::{Path, PathBuf};

/// Host-side context handed to setup.
#[derive(Debug, Clone)]
pub struct HostContext {
    config_dir: PathBuf,
}

impl HostContext {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Resolve `path` against the config directory; absolute paths are kept.
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.config_dir.join(path)
    }
}
