//! Configuration loader with environment variable support

use super::ClientConfig;
use crate::error::Result;
use config::{Environment, File};
use std::path::Path;

const ENV_PREFIX: &str = "VOYAGE";

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Load configuration from a file with `VOYAGE_*` environment overrides
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(env_source())
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Load configuration from the environment only, reading `.env` first if present
pub fn load_config_from_env() -> Result<ClientConfig> {
    dotenvy::dotenv().ok();

    let config = config::Config::builder()
        .add_source(env_source())
        .build()?;

    Ok(config.try_deserialize()?)
}
