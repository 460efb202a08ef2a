//! Environment configuration
//!
//! Settings come from process environment variables, optionally seeded from
//! a `.env` file in the working directory. Variables already set in the
//! environment win over the file.
//!
//! | Variable              | Required | Default   |
//! |-----------------------|----------|-----------|
//! | `MONGO_URI`           | yes      |           |
//! | `MONGO_DATABASE`      | no       | `quizdb`  |
//! | `QUIZDB_HOST`         | no       | `0.0.0.0` |
//! | `QUIZDB_PORT`         | no       | `8000`    |
//! | `QUIZDB_CORS_ORIGINS` | no       | any       |

use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::store::StoreConfig;

pub const MONGO_URI: &str = "MONGO_URI";
pub const MONGO_DATABASE: &str = "MONGO_DATABASE";
pub const HOST: &str = "QUIZDB_HOST";
pub const PORT: &str = "QUIZDB_PORT";
pub const CORS_ORIGINS: &str = "QUIZDB_CORS_ORIGINS";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors; all are fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Load `.env` into the process environment if present
///
/// Returns the path of the file that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Read a variable from the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build the store configuration
pub fn store_config<F>(lookup: F) -> ConfigResult<StoreConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let uri = non_empty(&lookup, MONGO_URI).ok_or(ConfigError::Missing(MONGO_URI))?;

    if !(uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")) {
        return Err(ConfigError::Invalid {
            key: MONGO_URI,
            value: uri,
            reason: "expected a mongodb:// or mongodb+srv:// connection string".to_string(),
        });
    }

    let mut config = StoreConfig::new(uri);
    if let Some(database) = non_empty(&lookup, MONGO_DATABASE) {
        config.database = database;
    }
    Ok(config)
}

/// Build the HTTP server configuration
pub fn server_config<F>(lookup: F) -> ConfigResult<HttpServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = HttpServerConfig::default();

    if let Some(host) = non_empty(&lookup, HOST) {
        config.host = host;
    }

    if let Some(port) = non_empty(&lookup, PORT) {
        config.port = match port.parse::<u16>() {
            Ok(p) if p > 0 => p,
            _ => {
                return Err(ConfigError::Invalid {
                    key: PORT,
                    value: port,
                    reason: "expected a port between 1 and 65535".to_string(),
                })
            }
        };
    }

    if let Some(origins) = non_empty(&lookup, CORS_ORIGINS) {
        config.cors_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
    }

    Ok(config)
}
