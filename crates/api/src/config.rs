use std::path::PathBuf;

use roster_core::sampler::DEFAULT_SELECTION_SIZE;
use roster_core::store::{DEFAULT_AVATAR_URL_PREFIX, DEFAULT_NAME_FIELD};

/// CORS origin value that allows any origin.
pub const ANY_ORIGIN: &str = "*";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults that work when the server is started next to
/// the scraper's output (`operators_data.json` and `avatars/`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5370`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A lone `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Character snapshot written by the scraper.
    pub snapshot_path: PathBuf,
    /// Directory holding portrait images.
    pub avatars_dir: PathBuf,
    /// URL prefix for `avatar_url` and for serving `avatars_dir`.
    pub avatars_url_prefix: String,
    /// Snapshot field holding each character's display name.
    pub name_field: String,
    /// Characters per selection.
    pub selection_size: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5370`                  |
    /// | `CORS_ORIGINS`         | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `OPERATORS_SNAPSHOT`   | `operators_data.json`   |
    /// | `AVATARS_DIR`          | `avatars`               |
    /// | `AVATARS_URL_PREFIX`   | `/avatars`              |
    /// | `NAME_FIELD`           | `姓名`                  |
    /// | `SELECTION_SIZE`       | `30`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5370".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| ANY_ORIGIN.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let snapshot_path = std::env::var("OPERATORS_SNAPSHOT")
            .unwrap_or_else(|_| "operators_data.json".into())
            .into();

        let avatars_dir = std::env::var("AVATARS_DIR")
            .unwrap_or_else(|_| "avatars".into())
            .into();

        let avatars_url_prefix = std::env::var("AVATARS_URL_PREFIX")
            .unwrap_or_else(|_| DEFAULT_AVATAR_URL_PREFIX.into());

        let name_field = std::env::var("NAME_FIELD").unwrap_or_else(|_| DEFAULT_NAME_FIELD.into());

        let selection_size: usize = std::env::var("SELECTION_SIZE")
            .map(|v| v.parse().expect("SELECTION_SIZE must be a valid usize"))
            .unwrap_or(DEFAULT_SELECTION_SIZE);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            snapshot_path,
            avatars_dir,
            avatars_url_prefix,
            name_field,
            selection_size,
        }
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}
