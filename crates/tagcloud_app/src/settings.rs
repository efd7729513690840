use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tagcloud_core::CloudConfig;
use tagcloud_logging::{cloud_debug, cloud_info};

/// Loads the RON configuration at `path`, or the defaults when none is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<CloudConfig> {
    let Some(path) = path else {
        cloud_debug!("no config file given, using defaults");
        return Ok(CloudConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {:?}", path))?;
    let config: CloudConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config from {:?}", path))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {:?}", path))?;

    cloud_info!("loaded config from {:?}", path);
    Ok(config)
}

pub(crate) fn render_config(config: &CloudConfig) -> Result<String> {
    let pretty = ron::ser::PrettyConfig::new();
    ron::ser::to_string_pretty(config, pretty).context("failed to serialize config")
}
