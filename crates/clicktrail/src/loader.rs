use clicktrail_common::config::{ConfigError, ConfigLoader, schema::ClickTrailConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Load from default locations:
/// 1. ./clicktrail.yaml
/// 2. ~/.clicktrail/config.yaml
/// 3. Default configuration
pub async fn load_default() -> Result<ClickTrailConfig, LoadError> {
    let local_config = PathBuf::from("./clicktrail.yaml");
    if local_config.exists() {
        return load_from(&local_config).await;
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".clicktrail").join("config.yaml");
        if home_config.exists() {
            return load_from(&home_config).await;
        }
    }

    debug!("no config file found, using defaults");
    Ok(ClickTrailConfig::default())
}

/// Load a config file. `.json` files are parsed as JSON, anything else as YAML.
pub async fn load_from(path: &Path) -> Result<ClickTrailConfig, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "loading config");

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        ConfigLoader::from_json(&content)?
    } else {
        ConfigLoader::from_yaml(&content)?
    };
    Ok(config)
}

/// Explicit path if given, default locations otherwise.
pub async fn load(path: Option<&Path>) -> Result<ClickTrailConfig, LoadError> {
    match path {
        Some(path) => load_from(path).await,
        None => load_default().await,
    }
}
