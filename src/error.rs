// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `remo_bridge` library.
//!
//! This module provides the error hierarchy for everything that can go wrong
//! between the hub and the cloud: value validation, transport failures,
//! rejected remote calls, JSON parsing and configuration.

use std::fmt;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request never produced an HTTP response.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A successful response could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The cloud answered with a non-success status.
    #[error("remote call failed: {0}")]
    RemoteCallFailed(RemoteError),

    /// The appliance has no signal carrying the expected icon.
    #[error("no signal with image {image:?}")]
    NoMatchingSignal {
        /// The icon name that was looked up (`ico_on` or `ico_off`).
        image: String,
    },

    /// The platform configuration is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No accessory is registered for this appliance id.
    #[error("accessory not found: {0}")]
    AccessoryNotFound(String),
}

impl From<RemoteError> for Error {
    fn from(err: RemoteError) -> Self {
        Self::RemoteCallFailed(err)
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a status was received.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing cloud responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors in the hub-provided platform configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bearer token is missing or blank.
    #[error("access token is missing")]
    MissingToken,

    /// The configuration block is not valid JSON for this platform.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A non-success response from the cloud API.
///
/// The cloud reports failures as a JSON object such as
/// `{"code": 401001, "message": "Unauthorized"}`. The body is kept as parsed
/// JSON; a body that is not JSON is kept as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    status: u16,
    payload: serde_json::Value,
}

impl RemoteError {
    /// Creates a remote error from a status code and the response body.
    #[must_use]
    pub fn new(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str(body)
            .unwrap_or_else(|_| serde_json::Value::String(body.to_string()));
        Self { status, payload }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the parsed error payload.
    #[must_use]
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Returns the API error code, if the payload carries one.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.payload.get("code").and_then(serde_json::Value::as_i64)
    }

    /// Returns the API error message, if the payload carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .get("message")
            .and_then(serde_json::Value::as_str)
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => {
                write!(f, "HTTP {} - {message} (code {code})", self.status)
            }
            (None, Some(message)) => write!(f, "HTTP {} - {message}", self.status),
            _ => write!(f, "HTTP {} - {}", self.status, self.payload),
        }
    }
}

impl std::error::Error for RemoteError {}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn remote_error_parses_api_payload() {
        let err = RemoteError::new(401, r#"{"code":401001,"message":"Unauthorized"}"#);
        assert_eq!(err.status(), 401);
        assert_eq!(err.code(), Some(401_001));
        assert_eq!(err.message(), Some("Unauthorized"));
        assert_eq!(err.to_string(), "HTTP 401 - Unauthorized (code 401001)");
    }

    #[test]
    fn remote_error_keeps_non_json_body() {
        let err = RemoteError::new(502, "Bad Gateway");
        assert_eq!(err.payload(), &serde_json::json!("Bad Gateway"));
        assert!(err.code().is_none());
        assert_eq!(err.to_string(), "HTTP 502 - \"Bad Gateway\"");
    }

    #[test]
    fn error_from_remote_error() {
        let err: Error = RemoteError::new(500, "{}").into();
        assert!(matches!(err, Error::RemoteCallFailed(ref e) if e.status() == 500));
    }

    #[test]
    fn no_matching_signal_display() {
        let err = Error::NoMatchingSignal {
            image: "ico_on".to_string(),
        };
        assert_eq!(err.to_string(), "no signal with image \"ico_on\"");
    }

    #[test]
    fn config_error_display() {
        let err: Error = ConfigError::MissingToken.into();
        assert_eq!(err.to_string(), "configuration error: access token is missing");
    }
}
