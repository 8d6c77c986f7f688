//! Gallery tools - media list and thumbnail generation for the flex gallery
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod media_list;
pub mod thumbnail;
