//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SEED: &str = "orion";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("DEFAULT_SEED must be non-empty letters and digits, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Directory served at `/` (page, wasm bundle, loader script).
    pub public_dir: PathBuf,
    /// Seed assumed when a myth request omits `seed`.
    pub default_seed: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, public_dir: default_public_dir(), default_seed: DEFAULT_SEED.to_string() }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `PUBLIC_DIR`: default `public/` next to this crate's manifest
    /// - `DEFAULT_SEED`: default `orion`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a valid port number or
    /// `DEFAULT_SEED` is not alphanumeric.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let public_dir = std::env::var("PUBLIC_DIR").map_or_else(|_| default_public_dir(), PathBuf::from);
        let default_seed = parse_seed(std::env::var("DEFAULT_SEED").ok().as_deref())?;
        Ok(Self { port, public_dir, default_seed })
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort { value: raw.to_string(), source })
}

fn parse_seed(raw: Option<&str>) -> Result<String, ConfigError> {
    let seed = raw.map_or(DEFAULT_SEED, str::trim);
    if seed.is_empty() || !seed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidSeed(seed.to_string()));
    }
    Ok(seed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
