//! Loading site configurations from RON files.
use std::fs;
use std::path::Path;

use anyhow::Context;
use site_layout::prelude::*;

/// Parses and validates a RON site configuration.
pub fn parse_site_config(text: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = ron::from_str(text).context("malformed site configuration")?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a RON site configuration file.
pub fn load_site_config(path: impl AsRef<Path>) -> anyhow::Result<SiteConfig> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_site_config(&text).with_context(|| format!("loading {}", path.display()))
}

/// Seed given as the first command line argument, or `default`.
pub fn seed_from_args(default: u64) -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}
