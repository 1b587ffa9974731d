//! Stored-filename derivation for uploaded images.
//!
//! Uploaded filenames are never written to disk as given. The stem is
//! replaced by its SHA-256 digest and the extension is kept verbatim, so
//! `photo.jpg` is stored as `{sha256("photo")}.jpg`. Two distinct uploads
//! that share a stem map to the same stored name.

use catalog_core::config::NamingScheme;
use catalog_core::{Error, Result};
use sha2::{Digest, Sha256};

/// Derive the stored filename for an upload from its name alone.
///
/// Splits on the last `.`; the part before it is hashed. Fails with
/// [`Error::InvalidFilename`] when there is no `.` or when the extension
/// contains a path separator.
pub fn derive_filename(original: &str) -> Result<String> {
    let (stem, ext) = split_extension(original)?;
    Ok(format!("{}.{}", sha256_hex(stem.as_bytes()), ext))
}

/// Derive the stored filename from the uploaded bytes instead of the name.
///
/// The extension still comes from `original` and follows the same rules as
/// [`derive_filename`].
pub fn derive_content_filename(original: &str, data: &[u8]) -> Result<String> {
    let (_, ext) = split_extension(original)?;
    Ok(format!("{}.{}", sha256_hex(data), ext))
}

/// Derive a stored filename with the configured scheme.
pub fn derive_with(scheme: NamingScheme, original: &str, data: &[u8]) -> Result<String> {
    match scheme {
        NamingScheme::Filename => derive_filename(original),
        NamingScheme::Content => derive_content_filename(original, data),
    }
}

fn split_extension(original: &str) -> Result<(&str, &str)> {
    let (stem, ext) = original
        .rsplit_once('.')
        .ok_or_else(|| Error::invalid_filename(format!("'{original}' has no extension")))?;

    if ext.contains(|c: char| c == '/' || c == '\\') {
        return Err(Error::invalid_filename(format!(
            "'{original}' has a path separator in its extension"
        )));
    }

    Ok((stem, ext))
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
