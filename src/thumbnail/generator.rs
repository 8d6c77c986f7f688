//! Directory-level thumbnail generation.

use std::path::{Path, PathBuf};

use gallery_common::paths::{
    is_thumbnail, matching_extension, split_extension, thumbnail_path,
};
use image::{ImageFormat, ImageReader};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::error::ThumbnailError;
use super::resize::{encode, resize_to_fit};
use crate::config::ThumbnailConfig;

/// A source image and the thumbnail written for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailPair {
    pub source: PathBuf,
    pub thumbnail: PathBuf,
    /// Source dimensions (width, height).
    pub original: (u32, u32),
    /// Thumbnail dimensions (width, height).
    pub resized: (u32, u32),
}

/// Why a matched file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file name already carries the thumbnail suffix.
    AlreadyThumbnail,
    /// The existing thumbnail is at least as new as the source.
    Fresh,
}

/// What happened to one matched file.
#[derive(Debug)]
pub enum ThumbnailOutcome {
    Created(ThumbnailPair),
    /// Dry run: the thumbnail that would have been written.
    Planned { source: PathBuf, thumbnail: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
    Failed(ThumbnailError),
}

/// Outcomes of one directory run, in processing order.
#[derive(Debug, Default)]
pub struct ThumbnailReport {
    pub outcomes: Vec<ThumbnailOutcome>,
}

impl ThumbnailReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Created(_)))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Planned { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Failed(_)))
    }

    /// Errors for the files that could not be thumbnailed.
    pub fn failures(&self) -> impl Iterator<Item = &ThumbnailError> {
        self.outcomes.iter().filter_map(|o| match o {
            ThumbnailOutcome::Failed(err) => Some(err),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&ThumbnailOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Writes bounding-box thumbnails next to the images of a directory.
pub struct ThumbnailGenerator {
    config: ThumbnailConfig,
    dry_run: bool,
}

impl ThumbnailGenerator {
    pub fn new(config: ThumbnailConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Only report what would be written; nothing is decoded or saved.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Thumbnail every matching image directly inside `dir`.
    ///
    /// Extensions are processed in configured order, files within an extension
    /// in directory order. A file that fails is recorded and the batch moves on.
    pub fn generate_dir(&self, dir: &Path) -> ThumbnailReport {
        let mut report = ThumbnailReport::default();

        if !dir.is_dir() {
            warn!("Thumbnail source is not a directory: {:?}", dir);
            return report;
        }

        info!("Generating thumbnails in {:?} (size {})", dir, self.config.size);
        let files = list_images(dir, &self.config.extensions);

        for ext in &self.config.extensions {
            for (name, path) in &files {
                if split_extension(name, ext).is_none() {
                    continue;
                }
                report.outcomes.push(self.process(path, name, ext));
            }
        }

        info!(
            "Thumbnails in {:?}: {} created, {} skipped, {} failed",
            dir,
            report.created(),
            report.skipped(),
            report.failed()
        );
        report
    }

    fn process(&self, path: &Path, name: &str, ext: &str) -> ThumbnailOutcome {
        if is_thumbnail(name, ext, &self.config.suffix) {
            debug!("Skipping thumbnail {:?}", path);
            return ThumbnailOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::AlreadyThumbnail,
            };
        }

        let Some(thumbnail) = thumbnail_path(path, ext, &self.config.suffix) else {
            return ThumbnailOutcome::Failed(ThumbnailError::Name {
                path: path.to_path_buf(),
            });
        };

        if self.config.skip_fresh && is_fresh(path, &thumbnail) {
            debug!("Thumbnail {:?} is up to date", thumbnail);
            return ThumbnailOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Fresh,
            };
        }

        if self.dry_run {
            return ThumbnailOutcome::Planned {
                source: path.to_path_buf(),
                thumbnail,
            };
        }

        match self.generate_file(path, ext) {
            Ok(pair) => ThumbnailOutcome::Created(pair),
            Err(err) => ThumbnailOutcome::Failed(err),
        }
    }

    /// Decode `source`, shrink it into the bounding box and write the thumbnail
    /// named by inserting the suffix before `ext`.
    pub fn generate_file(
        &self,
        source: &Path,
        ext: &str,
    ) -> Result<ThumbnailPair, ThumbnailError> {
        let thumbnail = thumbnail_path(source, ext, &self.config.suffix).ok_or_else(|| {
            ThumbnailError::Name {
                path: source.to_path_buf(),
            }
        })?;

        let img = ImageReader::open(source)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ThumbnailError::Open {
                path: source.to_path_buf(),
                source: e,
            })?
            .decode()
            .map_err(|e| ThumbnailError::Decode {
                path: source.to_path_buf(),
                source: e,
            })?;

        let original = (img.width(), img.height());
        let resized_img = resize_to_fit(&img, self.config.size);
        let resized = (resized_img.width(), resized_img.height());

        let data = ImageFormat::from_path(&thumbnail)
            .and_then(|format| encode(&resized_img, format))
            .map_err(|e| ThumbnailError::Encode {
                path: source.to_path_buf(),
                source: e,
            })?;

        std::fs::write(&thumbnail, data).map_err(|e| ThumbnailError::Write {
            path: source.to_path_buf(),
            thumbnail: thumbnail.clone(),
            source: e,
        })?;

        debug!(
            "Wrote {:?} ({}x{} -> {}x{})",
            thumbnail, original.0, original.1, resized.0, resized.1
        );

        Ok(ThumbnailPair {
            source: source.to_path_buf(),
            thumbnail,
            original,
            resized,
        })
    }
}

/// Regular files directly inside `dir` with one of `extensions`, paired with
/// their names, in directory order.
fn list_images(dir: &Path, extensions: &[String]) -> Vec<(String, PathBuf)> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {:?}: {}", dir, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Dot-files are hidden, never gallery images
        if entry.file_name().to_string_lossy().starts_with('.') {
            debug!("Ignoring hidden file {:?}", entry.path());
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) if matching_extension(name, extensions).is_some() => {
                files.push((name.to_string(), entry.path().to_path_buf()))
            }
            Some(_) => debug!("Ignoring {:?}", entry.path()),
            None => debug!("Skipping non UTF-8 file name {:?}", entry.path()),
        }
    }

    files
}

fn is_fresh(source: &Path, thumbnail: &Path) -> bool {
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(thumbnail)) {
        (Some(src), Some(thumb)) => thumb >= src,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_image(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(path).unwrap();
    }

    fn generator(size: u32) -> ThumbnailGenerator {
        ThumbnailGenerator::new(ThumbnailConfig {
            size,
            ..ThumbnailConfig::default()
        })
    }

    #[test]
    fn test_generate_file_landscape() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("im01.jpg");
        write_image(&source, 1024, 768);

        let pair = generator(512).generate_file(&source, ".jpg").unwrap();
        assert_eq!(pair.thumbnail, dir.path().join("im01_t.jpg"));
        assert_eq!(pair.original, (1024, 768));
        assert_eq!(pair.resized, (512, 384));

        let thumb = image::open(&pair.thumbnail).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (512, 384));
    }

    #[test]
    fn test_generate_file_no_upscale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("small.png");
        write_image(&source, 50, 50);

        let pair = generator(100).generate_file(&source, ".png").unwrap();
        assert_eq!(pair.resized, (50, 50));
        let thumb = image::open(&pair.thumbnail).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (50, 50));
    }

    #[test]
    fn test_generate_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.png");
        fs::write(&source, b"definitely not a png").unwrap();

        let err = generator(512).generate_file(&source, ".png").unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode { .. }));
        assert_eq!(err.path(), &source);
        assert!(!dir.path().join("bad_t.png").exists());
    }

    #[test]
    fn test_generate_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = generator(512)
            .generate_file(&dir.path().join("gone.jpg"), ".jpg")
            .unwrap_err();
        assert!(matches!(err, ThumbnailError::Open { .. }));
    }

    #[test]
    fn test_generate_dir_skips_existing_thumbnails() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("im01.jpg"), 64, 64);
        write_image(&dir.path().join("im02_t.jpg"), 64, 64);

        let report = generator(32).generate_dir(dir.path());
        assert_eq!(report.created(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(dir.path().join("im01_t.jpg").exists());
        assert!(!dir.path().join("im02_t_t.jpg").exists());

        // Second run regenerates im01_t.jpg but never thumbnails the thumbnails.
        let report = generator(32).generate_dir(dir.path());
        assert_eq!(report.created(), 1);
        assert_eq!(report.skipped(), 2);
        assert!(!dir.path().join("im01_t_t.jpg").exists());
    }

    #[test]
    fn test_generate_dir_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.png"), b"garbage").unwrap();
        write_image(&dir.path().join("good.png"), 80, 40);
        write_image(&dir.path().join("later.bmp"), 80, 40);

        let report = generator(20).generate_dir(dir.path());
        assert_eq!(report.failed(), 1);
        assert_eq!(report.created(), 2);
        let failed: Vec<_> = report.failures().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(failed, vec![dir.path().join("bad.png")]);
        assert!(dir.path().join("good_t.png").exists());
        assert!(dir.path().join("later_t.bmp").exists());
    }

    #[test]
    fn test_generate_dir_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("upper.JPG"), 10, 10);
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_image(&dir.path().join("nested").join("deep.jpg"), 10, 10);

        let report = generator(5).generate_dir(dir.path());
        assert!(report.outcomes.is_empty());
        assert!(!dir.path().join("nested").join("deep_t.jpg").exists());
    }

    #[test]
    fn test_generate_dir_extension_order() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("b.png"), 10, 10);
        write_image(&dir.path().join("a.jpg"), 10, 10);

        let report = generator(5).generate_dir(dir.path());
        let sources: Vec<_> = report
            .outcomes
            .iter()
            .map(|o| match o {
                ThumbnailOutcome::Created(pair) => pair.source.clone(),
                other => panic!("unexpected outcome {other:?}"),
            })
            .collect();
        assert_eq!(sources, vec![dir.path().join("a.jpg"), dir.path().join("b.png")]);
    }

    #[test]
    fn test_generate_dir_repeated_extension_name() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("photo.jpg.jpg"), 10, 10);

        let report = generator(5).generate_dir(dir.path());
        assert_eq!(report.created(), 1);
        assert!(dir.path().join("photo.jpg_t.jpg").exists());
        assert!(!dir.path().join("photo_t.jpg.jpg").exists());
    }

    #[test]
    fn test_generate_dir_skips_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join(".hidden.jpg"), 20, 20);
        write_image(&dir.path().join("shown.jpg"), 20, 20);

        let report = generator(10).generate_dir(dir.path());
        assert_eq!(report.created(), 1);
        assert_eq!(report.outcomes.len(), 1);
        assert!(!dir.path().join(".hidden_t.jpg").exists());
        assert!(dir.path().join("shown_t.jpg").exists());
    }

    #[test]
    fn test_generate_dir_zero_size_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("im01.png"), 100, 50);
        write_image(&dir.path().join("im02.png"), 30, 30);

        let report = generator(0).generate_dir(dir.path());
        assert_eq!(report.created(), 2);
        assert_eq!(report.failed(), 0);
        let thumb = image::open(dir.path().join("im01_t.png")).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (1, 1));
    }

    #[test]
    fn test_generate_dir_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(512).generate_dir(&dir.path().join("missing"));
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("im01.jpg"), 64, 64);

        let report = generator(32).dry_run(true).generate_dir(dir.path());
        assert_eq!(report.planned(), 1);
        assert_eq!(report.created(), 0);
        assert!(!dir.path().join("im01_t.jpg").exists());
    }

    #[test]
    fn test_skip_fresh() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("im01.jpg"), 64, 64);

        let generator = ThumbnailGenerator::new(ThumbnailConfig {
            size: 32,
            skip_fresh: true,
            ..ThumbnailConfig::default()
        });

        let report = generator.generate_dir(dir.path());
        assert_eq!(report.created(), 1);

        let report = generator.generate_dir(dir.path());
        assert_eq!(report.created(), 0);
        assert!(report.outcomes.iter().any(|o| matches!(
            o,
            ThumbnailOutcome::Skipped {
                reason: SkipReason::Fresh,
                ..
            }
        )));
    }

    #[test]
    fn test_default_regenerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("im01.jpg"), 64, 64);
        fs::write(dir.path().join("im01_t.jpg"), b"placeholder").unwrap();

        let report = generator(32).generate_dir(dir.path());
        assert_eq!(report.created(), 1);
        let thumb = image::open(dir.path().join("im01_t.jpg")).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (32, 32));
    }
}
