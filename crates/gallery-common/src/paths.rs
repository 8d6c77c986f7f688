//! Path utilities for matching image files and naming their thumbnails.
//!
//! Extensions are matched case-sensitively against the end of the file name,
//! so `im01.JPG` is not an image as far as these tools are concerned. A
//! thumbnail name is built by splitting the file name into stem and extension
//! and inserting a suffix between them.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Image file extensions handled by the thumbnail generator, in scan order.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".bmp", ".tif", ".tiff"];

/// Suffix inserted before the extension of a generated thumbnail.
pub const DEFAULT_THUMBNAIL_SUFFIX: &str = "_t";

/// Return the first extension in `extensions` that `name` ends with.
///
/// # Examples
///
/// ```
/// use gallery_common::paths::{matching_extension, IMAGE_EXTENSIONS};
///
/// assert_eq!(matching_extension("im01.png", IMAGE_EXTENSIONS), Some(".png"));
/// assert_eq!(matching_extension("im01.PNG", IMAGE_EXTENSIONS), None);
/// ```
pub fn matching_extension<'a, S: AsRef<str>>(name: &str, extensions: &'a [S]) -> Option<&'a str> {
    extensions
        .iter()
        .map(AsRef::as_ref)
        .find(|ext| split_extension(name, ext).is_some())
}

/// Split `name` into its stem, given the extension it ends with.
///
/// Returns `None` when `name` does not end with `ext` or when nothing is left
/// in front of it (a bare `.jpg` is a hidden file, not an image).
pub fn split_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    name.strip_suffix(ext).filter(|stem| !stem.is_empty())
}

/// Check whether `name` is itself a thumbnail, i.e. its stem ends with `suffix`.
///
/// # Examples
///
/// ```
/// use gallery_common::paths::is_thumbnail;
///
/// assert!(is_thumbnail("im01_t.jpg", ".jpg", "_t"));
/// assert!(!is_thumbnail("im01.jpg", ".jpg", "_t"));
/// ```
pub fn is_thumbnail(name: &str, ext: &str, suffix: &str) -> bool {
    split_extension(name, ext)
        .map(|stem| stem.ends_with(suffix))
        .unwrap_or(false)
}

/// Build the thumbnail file name for `name`.
///
/// Only the trailing extension is replaced, so a name that repeats its
/// extension (`photo.jpg.jpg`) keeps the inner copy intact.
///
/// # Examples
///
/// ```
/// use gallery_common::paths::thumbnail_name;
///
/// assert_eq!(thumbnail_name("im01.jpg", ".jpg", "_t").as_deref(), Some("im01_t.jpg"));
/// assert_eq!(
///     thumbnail_name("photo.jpg.jpg", ".jpg", "_t").as_deref(),
///     Some("photo.jpg_t.jpg")
/// );
/// ```
pub fn thumbnail_name(name: &str, ext: &str, suffix: &str) -> Option<String> {
    split_extension(name, ext).map(|stem| format!("{stem}{suffix}{ext}"))
}

/// Build the thumbnail path next to `path`.
pub fn thumbnail_path(path: &Path, ext: &str, suffix: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    thumbnail_name(name, ext, suffix).map(|thumb| path.with_file_name(thumb))
}

/// Check that `ext` looks like a file extension (`.jpg`, `.tiff`, ...).
pub fn validate_extension(ext: &str) -> Result<()> {
    let valid = ext.len() > 1
        && ext.starts_with('.')
        && !ext[1..].contains(['.', '/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "extension must look like \".jpg\", got {ext:?}"
        )))
    }
}
