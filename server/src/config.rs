//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Invalid host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` holding the compiled `/pkg` bundle.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: directory containing `pkg/`; default from Leptos options
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ConfigError::Invalid { var: "PORT", value: raw })?,
        };
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
