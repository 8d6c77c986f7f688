//! Gallery-Common: Shared path and script utilities.
//!
//! This crate provides the small pieces of logic shared by the gallery tools:
//!
//! - **Path Utilities**: case-sensitive image extension matching and thumbnail naming
//! - **Script Literals**: quoting and identifier checks for the generated media list
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use gallery_common::paths::{thumbnail_name, matching_extension, IMAGE_EXTENSIONS};
//!
//! let ext = matching_extension("im01.jpg", IMAGE_EXTENSIONS).unwrap();
//! assert_eq!(thumbnail_name("im01.jpg", ext, "_t").unwrap(), "im01_t.jpg");
//! ```

pub mod error;
pub mod paths;
pub mod script;

pub use error::{Error, Result};
