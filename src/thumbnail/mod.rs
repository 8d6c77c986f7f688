//! Thumbnail generation.
//!
//! For every image in a directory whose name ends in one of the configured
//! extensions, writes a copy scaled down to fit a square bounding box next to
//! the original, named by inserting a suffix before the extension
//! (`im01.jpg` -> `im01_t.jpg`). Files that already carry the suffix are left
//! alone. Each file yields its own [`ThumbnailOutcome`]; one bad image never
//! stops the batch.

mod error;
mod generator;
mod resize;

pub use error::ThumbnailError;
pub use generator::{
    SkipReason, ThumbnailGenerator, ThumbnailOutcome, ThumbnailPair, ThumbnailReport,
};
pub use resize::thumbnail_dimensions;
