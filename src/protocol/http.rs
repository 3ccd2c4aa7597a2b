// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTPS implementation of the cloud API.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method};

use crate::error::{Error, ParseError, ProtocolError, RemoteError};
use crate::protocol::ApplianceApi;
use crate::response::{Appliance, LightState};
use crate::types::LightButton;

// ============================================================================
// ApiConfig - Connection parameters
// ============================================================================

/// Configuration for the cloud API client.
///
/// # Examples
///
/// ```
/// use remo_bridge::protocol::ApiConfig;
/// use std::time::Duration;
///
/// let config = ApiConfig::new("secret-token");
/// assert_eq!(config.base_url(), "https://api.nature.global/1");
///
/// let config = ApiConfig::new("secret-token")
///     .with_base_url("http://127.0.0.1:8080/1/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080/1");
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    token: String,
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Default API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.nature.global/1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the API root. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`CloudClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an `http(s)` URL or the HTTP
    /// client cannot be created.
    pub fn into_client(self) -> Result<CloudClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(CloudClient {
            base_url: self.base_url,
            token: self.token,
            client,
        })
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// CloudClient - reqwest-backed ApplianceApi
// ============================================================================

/// HTTP client for the cloud API.
///
/// Every request carries `Authorization: Bearer <token>`. A non-success
/// status becomes [`Error::RemoteCallFailed`] with the parsed error body.
///
/// ```no_run
/// use remo_bridge::protocol::{ApiConfig, ApplianceApi};
/// use remo_bridge::types::LightButton;
///
/// # async fn example() -> remo_bridge::Result<()> {
/// let client = ApiConfig::new("secret-token").into_client()?;
/// let state = client.press_light_button("appliance-id", LightButton::On).await?;
/// assert!(state.is_on());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CloudClient {
    base_url: String,
    token: String,
    client: Client,
}

impl CloudClient {
    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Sends a request and returns the body of a successful response.
    async fn send(
        &self,
        method: Method,
        url: String,
        form: Option<&[(&str, &str)]>,
    ) -> Result<String, Error> {
        tracing::debug!(method = %method, url = %url, "Sending cloud request");

        let mut request = self.client.request(method, &url).bearer_auth(&self.token);
        if let Some(form) = form {
            request = request.form(form);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        if !status.is_success() {
            let err = RemoteError::new(status.as_u16(), &body);
            tracing::debug!(url = %url, error = %err, "Cloud request rejected");
            return Err(err.into());
        }

        tracing::trace!(body = %body, "Received cloud response");

        Ok(body)
    }
}

impl fmt::Debug for CloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApplianceApi for CloudClient {
    async fn appliances(&self) -> Result<Vec<Appliance>, Error> {
        let body = self
            .send(Method::GET, self.build_url(&["appliances"]), None)
            .await?;
        serde_json::from_str(&body).map_err(|e| Error::Parse(ParseError::Json(e)))
    }

    async fn press_light_button(
        &self,
        appliance_id: &str,
        button: LightButton,
    ) -> Result<LightState, Error> {
        tracing::debug!(appliance = %appliance_id, button = %button, "Pressing light button");

        let url = self.build_url(&["appliances", appliance_id, "light"]);
        let form = [("button", button.as_str())];
        let body = self.send(Method::POST, url, Some(&form[..])).await?;
        serde_json::from_str(&body).map_err(|e| Error::Parse(ParseError::Json(e)))
    }

    async fn send_signal(&self, signal_id: &str) -> Result<(), Error> {
        tracing::debug!(signal = %signal_id, "Sending signal");

        let url = self.build_url(&["signals", signal_id, "send"]);
        self.send(Method::POST, url, None).await?;
        Ok(())
    }
}
