use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-tools")]
#[command(author, version, about = "Media list and thumbnail tools for the flex gallery")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the media list script for every entry of the media directory
    List {
        /// Directory to list (default: ../media)
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// Script file to overwrite (default: ../js/media-list.js)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prefix prepended to every entry name (default: ../src/media/)
        #[arg(long)]
        prefix: Option<String>,

        /// Variable the list is assigned to (default: media_list)
        #[arg(long)]
        variable: Option<String>,
    },

    /// Generate thumbnails for the images in a directory
    ///
    /// Images that cannot be thumbnailed are reported and never change the exit
    /// status. An unreadable or invalid config file, or an invalid flag, is
    /// rejected before any image is touched and exits non-zero.
    Thumbnail {
        /// Directory containing the images
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Maximum thumbnail width and height in pixels (default: 512)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        size: Option<u32>,

        /// Show what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip images whose thumbnail is already newer than the image
        #[arg(long)]
        skip_fresh: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
