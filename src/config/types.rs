use gallery_common::paths::{DEFAULT_THUMBNAIL_SUFFIX, IMAGE_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub media_list: MediaListConfig,

    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
}

/// Where the media lister reads from and what it writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaListConfig {
    /// Directory whose entries are listed (not recursed into)
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,

    /// Generated script file, overwritten on every run
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Logical root prepended to every entry name
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Variable the array literal is assigned to
    #[serde(default = "default_variable")]
    pub variable: String,
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("../media")
}
fn default_output() -> PathBuf {
    PathBuf::from("../js/media-list.js")
}
fn default_prefix() -> String {
    "../src/media/".to_string()
}
fn default_variable() -> String {
    "media_list".to_string()
}

impl Default for MediaListConfig {
    fn default() -> Self {
        Self {
            media_dir: default_media_dir(),
            output: default_output(),
            prefix: default_prefix(),
            variable: default_variable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThumbnailConfig {
    /// Side of the square bounding box, in pixels (default: 512)
    #[serde(default = "default_size")]
    pub size: u32,

    /// Inserted before the extension of each thumbnail (default: "_t")
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Case-sensitive extensions to process, in scan order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Skip sources whose thumbnail is already at least as new as they are
    #[serde(default)]
    pub skip_fresh: bool,
}

fn default_size() -> u32 {
    512
}
fn default_suffix() -> String {
    DEFAULT_THUMBNAIL_SUFFIX.to_string()
}
fn default_extensions() -> Vec<String> {
    IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            suffix: default_suffix(),
            extensions: default_extensions(),
            skip_fresh: false,
        }
    }
}
