// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration supplied by the hub.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
#[cfg(feature = "http")]
use crate::protocol::ApiConfig;

/// The platform block of the hub configuration.
///
/// Only `token` is required. Keys the bridge does not know (such as the
/// hub's own `platform` key) are ignored.
///
/// # Examples
///
/// ```
/// use remo_bridge::config::PlatformConfig;
///
/// let config = PlatformConfig::from_json(r#"{
///     "platform": "NatureRemo",
///     "name": "Remo",
///     "token": "secret-token",
///     "timeout_secs": 5
/// }"#).unwrap();
///
/// assert_eq!(config.token(), "secret-token");
/// assert_eq!(config.name(), Some("Remo"));
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    token: String,
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl PlatformConfig {
    /// Creates a configuration with only a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` for invalid JSON and
    /// `ConfigError::MissingToken` if the token is missing or blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the API root.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if the token is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }

    /// Returns the platform display name, if configured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API root override, if configured.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns the request timeout override, if configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Converts into an API client configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if the token is blank.
    #[cfg(feature = "http")]
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        self.validate()?;

        let mut config = ApiConfig::new(self.token.trim());
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(timeout) = self.timeout() {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
