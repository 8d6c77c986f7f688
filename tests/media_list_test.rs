//! Integration tests for media list generation.

mod common;

use common::parse_media_list;
use gallery_tools::config::MediaListConfig;
use gallery_tools::media_list::{collect, write_media_list};
use std::fs;
use tempfile::tempdir;

fn media_config(media_dir: &std::path::Path, output: &std::path::Path) -> MediaListConfig {
    MediaListConfig {
        media_dir: media_dir.to_path_buf(),
        output: output.to_path_buf(),
        ..MediaListConfig::default()
    }
}

#[test]
fn output_matches_directory_entries() {
    let media = tempdir().unwrap();
    let out = tempdir().unwrap();
    for name in ["a.jpg", "b.png", "c.txt"] {
        fs::write(media.path().join(name), b"x").unwrap();
    }

    let output = out.path().join("media-list.js");
    let config = media_config(media.path(), &output);
    write_media_list(&config).unwrap();

    let script = fs::read_to_string(&output).unwrap();
    let (variable, entries) = parse_media_list(&script);
    assert_eq!(variable, "media_list");

    // Order is whatever the filesystem returns, and matches a fresh listing.
    assert_eq!(entries, collect(&config).unwrap().entries);

    let mut sorted = entries.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        vec!["../src/media/a.jpg", "../src/media/b.png", "../src/media/c.txt"]
    );
}

#[test]
fn rerun_is_byte_identical() {
    let media = tempdir().unwrap();
    let out = tempdir().unwrap();
    for i in 0..20 {
        fs::write(media.path().join(format!("im{i:02}.jpg")), b"x").unwrap();
    }

    let output = out.path().join("media-list.js");
    let config = media_config(media.path(), &output);

    write_media_list(&config).unwrap();
    let first = fs::read(&output).unwrap();
    write_media_list(&config).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_prefix_and_variable() {
    let media = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(media.path().join("im01.jpg"), b"x").unwrap();

    let output = out.path().join("photos.js");
    let config = MediaListConfig {
        media_dir: media.path().to_path_buf(),
        output: output.clone(),
        prefix: "/static/".to_string(),
        variable: "photos".to_string(),
    };
    write_media_list(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "photos = ['/static/im01.jpg'];\n"
    );
}

#[test]
fn empty_directory_gives_empty_array() {
    let media = tempdir().unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("media-list.js");

    write_media_list(&media_config(media.path(), &output)).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "media_list = [];\n");
}

#[test]
fn missing_directory_fails_without_writing() {
    let out = tempdir().unwrap();
    let output = out.path().join("media-list.js");

    let result = write_media_list(&media_config(&out.path().join("nope"), &output));
    assert!(result.is_err());
    assert!(!output.exists());
}
