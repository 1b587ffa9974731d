//! Filesystem-level image storage with a default-image fallback.
//!
//! Images live flat under a single root directory, keyed by their stored
//! filename. Lookups never fail: a name that is not on disk resolves to the
//! configured default image instead.

use std::path::{Component, Path, PathBuf};

use catalog_core::config::ImageConfig;
use catalog_core::{Error, Result};

/// Filesystem manager for stored images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
    default_image: String,
}

impl ImageStore {
    /// Create a new `ImageStore` rooted at `root`.
    ///
    /// `default_image` is a filename inside `root` returned by
    /// [`resolve`](Self::resolve) when a requested file is missing.
    pub fn new(root: PathBuf, default_image: impl Into<String>) -> Self {
        Self {
            root,
            default_image: default_image.into(),
        }
    }

    /// Build a store from the image section of the config.
    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(config.storage_dir.clone(), config.default_image.clone())
    }

    /// The directory holding every stored image.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the fallback image.
    pub fn default_path(&self) -> PathBuf {
        self.root.join(&self.default_image)
    }

    /// Whether a file with this name is stored.
    pub fn exists(&self, filename: &str) -> bool {
        is_plain_filename(filename) && self.root.join(filename).is_file()
    }

    /// Resolve a stored filename to a path on disk.
    ///
    /// Returns the path under the image root if that file exists, otherwise
    /// the default image path. Names that are not a single plain path
    /// component also resolve to the default.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        if self.exists(filename) {
            return self.root.join(filename);
        }
        tracing::debug!("Image not found: {}", self.root.join(filename).display());
        self.default_path()
    }

    /// Write `data` under `filename`, replacing any existing file.
    ///
    /// The root directory is created on first use. The write is not atomic;
    /// a crash mid-write leaves a partial file behind.
    pub fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        if !is_plain_filename(filename) {
            return Err(Error::invalid_filename(format!(
                "'{filename}' is not a plain file name"
            )));
        }

        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(filename);
        std::fs::write(&path, data)?;
        tracing::debug!("Stored {} bytes at {}", data.len(), path.display());
        Ok(path)
    }
}

/// True when `name` is exactly one normal path component on every platform.
fn is_plain_filename(name: &str) -> bool {
    if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\' || c == '\0') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
