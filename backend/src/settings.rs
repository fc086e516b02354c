//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `WORDS_*` environment variables, configuration files and
//! command-line flags, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const SESSION_KEY_MIN_LEN: usize = 64;

/// Build mode for session key validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to a temporary key when the key file is missing.
    Debug,
    /// Release builds require a readable key of sufficient length.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Errors raised while turning settings into runtime values.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Runtime settings for the words server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WORDS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it the server keeps definitions
    /// in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Path of the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Generate a temporary session key when the key file cannot be read.
    pub session_allow_ephemeral: Option<bool>,
    /// Mark the session cookie `Secure`. Defaults to `true`.
    pub cookie_secure: Option<bool>,
    /// Accept the shared-password development accounts against PostgreSQL.
    pub dev_accounts: Option<bool>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn session_allow_ephemeral(&self) -> bool {
        self.session_allow_ephemeral.unwrap_or(false)
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Whether the development accounts may log in to a database-backed
    /// server. Unset means debug builds only.
    pub fn dev_accounts(&self, mode: BuildMode) -> bool {
        self.dev_accounts.unwrap_or(mode == BuildMode::Debug)
    }

    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }

    /// Load the session signing key.
    ///
    /// A missing or unreadable key file is fatal unless the build is a debug
    /// build or ephemeral keys are allowed. Release builds additionally reject
    /// keys shorter than 64 bytes.
    pub fn session_key(&self, mode: BuildMode) -> Result<Key, SettingsError> {
        let path = self.session_key_file();
        match std::fs::read(path) {
            Ok(mut bytes) => {
                if mode == BuildMode::Release && bytes.len() < SESSION_KEY_MIN_LEN {
                    let length = bytes.len();
                    bytes.zeroize();
                    return Err(SettingsError::KeyTooShort {
                        path: path.to_path_buf(),
                        length,
                        min_len: SESSION_KEY_MIN_LEN,
                    });
                }
                let key = Key::derive_from(&bytes);
                bytes.zeroize();
                Ok(key)
            }
            Err(source) => {
                if mode == BuildMode::Debug || self.session_allow_ephemeral() {
                    warn!(path = %path.display(), error = %source, "using temporary session key (dev only)");
                    Ok(Key::generate())
                } else {
                    Err(SettingsError::KeyRead {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            }
        }
    }
}
