mod types;

pub use types::*;

use anyhow::{Context, Result};
use gallery_common::{paths::validate_extension, script::validate_identifier};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./gallery.toml", "~/.config/gallery-tools/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_identifier(&config.media_list.variable)
        .context("Invalid media_list.variable")?;

    let thumbnail = &config.thumbnail;
    if thumbnail.size == 0 {
        anyhow::bail!("Thumbnail size cannot be 0");
    }

    if thumbnail.suffix.is_empty() {
        anyhow::bail!("Thumbnail suffix cannot be empty");
    }

    if thumbnail.extensions.is_empty() {
        tracing::warn!("No thumbnail extensions configured; the thumbnail command will do nothing");
    }

    for ext in &thumbnail.extensions {
        validate_extension(ext).context("Invalid thumbnail extension")?;
    }

    Ok(())
}
