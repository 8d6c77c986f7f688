mod cli;

use gallery_tools::{
    config,
    media_list,
    thumbnail::{ThumbnailGenerator, ThumbnailOutcome},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use gallery_common::script::validate_identifier;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "gallery_tools=trace,gallery_common=trace".to_string()
        } else {
            "gallery_tools=info,gallery_common=info".to_string()
        }
    });

    // stdout carries the command output, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            media_dir,
            output,
            prefix,
            variable,
        } => list_media(
            cli.config.as_deref(),
            media_dir,
            output,
            prefix,
            variable,
        ),
        Commands::Thumbnail {
            path,
            size,
            dry_run,
            skip_fresh,
        } => generate_thumbnails(cli.config.as_deref(), &path, size, dry_run, skip_fresh),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("gallery-tools {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn list_media(
    config_path: Option<&Path>,
    media_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    prefix: Option<String>,
    variable: Option<String>,
) -> Result<()> {
    let mut settings = config::load_config_or_default(config_path)?.media_list;

    // Override config from CLI if specified
    if let Some(media_dir) = media_dir {
        settings.media_dir = media_dir;
    }
    if let Some(output) = output {
        settings.output = output;
    }
    if let Some(prefix) = prefix {
        settings.prefix = prefix;
    }
    if let Some(variable) = variable {
        validate_identifier(&variable).context("Invalid --variable")?;
        settings.variable = variable;
    }

    let list = media_list::write_media_list(&settings)?;
    println!(
        "Wrote {} entries to {}",
        list.len(),
        settings.output.display()
    );

    Ok(())
}

fn generate_thumbnails(
    config_path: Option<&Path>,
    path: &Path,
    size: Option<u32>,
    dry_run: bool,
    skip_fresh: bool,
) -> Result<()> {
    let mut settings = config::load_config_or_default(config_path)?.thumbnail;

    if let Some(size) = size {
        settings.size = size;
    }
    settings.skip_fresh |= skip_fresh;

    let generator = ThumbnailGenerator::new(settings).dry_run(dry_run);
    let report = generator.generate_dir(path);

    for outcome in &report.outcomes {
        match outcome {
            ThumbnailOutcome::Created(pair) => {
                tracing::debug!(
                    "{} -> {} ({}x{})",
                    pair.source.display(),
                    pair.thumbnail.display(),
                    pair.resized.0,
                    pair.resized.1
                );
            }
            ThumbnailOutcome::Planned { source, thumbnail } => {
                println!("{} -> {}", source.display(), thumbnail.display());
            }
            ThumbnailOutcome::Skipped { .. } => {}
            ThumbnailOutcome::Failed(err) => {
                tracing::warn!("{}", err);
                println!("Cannot create thumbnail for {}", err.path().display());
            }
        }
    }

    if dry_run {
        println!(
            "\n[DRY RUN] Would create {} thumbnails ({} skipped)",
            report.planned(),
            report.skipped()
        );
    } else {
        println!(
            "Created {} thumbnails ({} skipped, {} failed)",
            report.created(),
            report.skipped(),
            report.failed()
        );
    }

    // Per-file failures are reported above and never fail the run
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_summary(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_summary(&config::Config::default());
        }
    }

    Ok(())
}

fn print_summary(config: &config::Config) {
    let list = &config.media_list;
    println!("  Media dir: {}", list.media_dir.display());
    println!("  Media list: {} ({})", list.output.display(), list.variable);
    println!("  Prefix: {}", list.prefix);

    let thumb = &config.thumbnail;
    println!("  Thumbnail size: {}", thumb.size);
    println!("  Thumbnail suffix: {}", thumb.suffix);
    println!("  Extensions: {}", thumb.extensions.join(" "));
    println!("  Skip fresh: {}", thumb.skip_fresh);
}
