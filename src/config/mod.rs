mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind, path::Path};
use tracing::{debug, info};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

/// Reads the YAML file at `path`. A missing file yields the built-in defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: Config = serde_yaml::from_str(&config_str)?;
    Ok(config)
}
