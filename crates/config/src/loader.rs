use std::path::Path;

use anyhow::Context;

use crate::Config;

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration from {}", path.display()))?;

    log::debug!("Loaded configuration from {}", path.display());

    Ok(config)
}
