//! Image naming and storage.
//!
//! Uploaded images are renamed by [`namer`] and written flat under one
//! directory by [`ImageStore`], which falls back to a default image for any
//! name that is not on disk.

pub mod namer;
mod storage;

pub use namer::{derive_content_filename, derive_filename};
pub use storage::ImageStore;
