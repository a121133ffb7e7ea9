// src/config.rs
use crate::domain::upload::default_image_types;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const MIN_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    auth_token_secret: String,
    images_dir: PathBuf,
    staging_dir: PathBuf,
    public_base_url: String,
    max_image_bytes: u64,
    allowed_image_types: Vec<String>,
    max_request_bytes: usize,
    orphan_sweep_interval: Option<Duration>,
    orphan_grace: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://news.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("public/images")
}

/// Sibling of the images directory, so it stays on the same filesystem
/// while remaining outside the publicly served tree.
fn default_staging_dir(images_dir: &Path) -> PathBuf {
    images_dir
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(".images-staging")
}

fn default_public_base_url() -> String {
    "http://localhost:8080".into()
}

const DEFAULT_MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
const DEFAULT_MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;
const DEFAULT_ORPHAN_GRACE_SECS: u64 = 600;

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let auth_token_secret =
            lookup("AUTH_TOKEN_SECRET").ok_or(ConfigError::Missing("AUTH_TOKEN_SECRET"))?;
        if auth_token_secret.len() < MIN_TOKEN_SECRET_BYTES {
            return Err(ConfigError::Invalid(format!(
                "AUTH_TOKEN_SECRET must be at least {MIN_TOKEN_SECRET_BYTES} bytes"
            )));
        }

        let images_dir = lookup("IMAGES_DIR").map_or_else(default_images_dir, PathBuf::from);
        let staging_dir = lookup("IMAGES_STAGING_DIR")
            .map_or_else(|| default_staging_dir(&images_dir), PathBuf::from);
        if staging_dir.starts_with(&images_dir) {
            return Err(ConfigError::Invalid(
                "IMAGES_STAGING_DIR must be outside IMAGES_DIR".into(),
            ));
        }
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_public_base_url);

        let max_image_bytes = parse_number(
            "MAX_IMAGE_BYTES",
            lookup("MAX_IMAGE_BYTES"),
            DEFAULT_MAX_IMAGE_BYTES,
        )?;
        if max_image_bytes == 0 {
            return Err(ConfigError::Invalid("MAX_IMAGE_BYTES must be positive".into()));
        }

        let allowed_image_types = lookup("ALLOWED_IMAGE_TYPES")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_image_types);
        if allowed_image_types.is_empty() {
            return Err(ConfigError::Invalid(
                "ALLOWED_IMAGE_TYPES must list at least one mime type".into(),
            ));
        }

        let max_request_bytes = parse_number(
            "MAX_REQUEST_BYTES",
            lookup("MAX_REQUEST_BYTES"),
            DEFAULT_MAX_REQUEST_BYTES,
        )?;
        if (max_request_bytes as u64) < max_image_bytes {
            return Err(ConfigError::Invalid(
                "MAX_REQUEST_BYTES must not be smaller than MAX_IMAGE_BYTES".into(),
            ));
        }

        let sweep_secs = parse_number(
            "ORPHAN_SWEEP_INTERVAL_SECS",
            lookup("ORPHAN_SWEEP_INTERVAL_SECS"),
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;
        let grace_secs = parse_number(
            "ORPHAN_GRACE_SECS",
            lookup("ORPHAN_GRACE_SECS"),
            DEFAULT_ORPHAN_GRACE_SECS,
        )?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            auth_token_secret,
            images_dir,
            staging_dir,
            public_base_url,
            max_image_bytes,
            allowed_image_types,
            max_request_bytes,
            orphan_sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            orphan_grace: Duration::from_secs(grace_secs),
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn auth_token_secret(&self) -> &str {
        &self.auth_token_secret
    }

    pub fn images_dir(&self) -> &PathBuf {
        &self.images_dir
    }

    /// Where uploads are written before they are renamed into `images_dir`.
    pub fn staging_dir(&self) -> &PathBuf {
        &self.staging_dir
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_bytes
    }

    pub fn allowed_image_types(&self) -> &[String] {
        &self.allowed_image_types
    }

    /// Upper bound for a whole request body; kept above the image limit so
    /// oversized images are reported per field instead of as 413.
    pub fn max_request_bytes(&self) -> usize {
        self.max_request_bytes
    }

    /// `None` when the periodic orphan sweep is disabled.
    pub fn orphan_sweep_interval(&self) -> Option<Duration> {
        self.orphan_sweep_interval
    }

    pub fn orphan_grace(&self) -> Duration {
        self.orphan_grace
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
