//! Media list generation.
//!
//! Lists every entry of the media directory and writes a script that assigns
//! the prefixed names to a variable, e.g.
//!
//! ```text
//! media_list = ['../src/media/im01.jpg', '../src/media/im02.jpg'];
//! ```
//!
//! The gallery front-end loads that script to discover its images. Entries are
//! not filtered or recursed into and keep the order the filesystem returns.

use std::path::Path;

use anyhow::{Context, Result};
use gallery_common::script::quote_single;
use tracing::{debug, info};

use crate::config::MediaListConfig;

/// The prefixed entry names of one media directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaList {
    pub variable: String,
    pub entries: Vec<String>,
}

impl MediaList {
    /// Render the script: a single assignment statement and a trailing newline.
    pub fn render(&self) -> String {
        let items: Vec<String> = self.entries.iter().map(|e| quote_single(e)).collect();
        format!("{} = [{}];\n", self.variable, items.join(", "))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// List the entries directly inside `config.media_dir`.
pub fn collect(config: &MediaListConfig) -> Result<MediaList> {
    let entries = list_entries(&config.media_dir)?
        .into_iter()
        .map(|name| format!("{}{}", config.prefix, name))
        .collect();

    Ok(MediaList {
        variable: config.variable.clone(),
        entries,
    })
}

/// Collect the media list and overwrite `config.output` with it.
///
/// The directory is fully listed before the output is opened, so a listing
/// failure leaves a previously generated file as it was.
pub fn write_media_list(config: &MediaListConfig) -> Result<MediaList> {
    let list = collect(config)?;

    std::fs::write(&config.output, list.render())
        .with_context(|| format!("Failed to write media list: {:?}", config.output))?;

    info!(
        "Wrote {} entries from {:?} to {:?}",
        list.len(),
        config.media_dir,
        config.output
    );
    Ok(list)
}

fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read media directory: {:?}", dir))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed to read media directory: {:?}", dir))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("Found media entry {}", name);
        names.push(name);
    }
    Ok(names)
}
