//! Per-file thumbnail errors.

use std::path::{Path, PathBuf};

/// Why a single thumbnail could not be produced.
///
/// Every variant carries the path of the source image so a batch report can
/// name the failing file.
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    /// The source could not be opened or read.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a decodable image (corrupt, truncated, unknown format).
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The resized image could not be encoded in the output format.
    #[error("failed to encode thumbnail for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The encoded thumbnail could not be written.
    #[error("failed to write {}: {source}", thumbnail.display())]
    Write {
        path: PathBuf,
        thumbnail: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No thumbnail name can be derived from the source file name.
    #[error("cannot derive a thumbnail name for {}", path.display())]
    Name { path: PathBuf },
}

impl ThumbnailError {
    /// The source image this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::Name { path } => path,
        }
    }
}
