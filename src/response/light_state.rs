// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::PowerState;

/// State of a light, returned by every `POST /appliances/{id}/light`.
///
/// The cloud reports brightness as a string.
///
/// ```
/// use remo_bridge::response::LightState;
///
/// let json = r#"{"brightness": "7", "power": "on"}"#;
/// let state: LightState = serde_json::from_str(json).unwrap();
/// assert!(state.is_on());
/// assert_eq!(state.brightness_value().unwrap(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightState {
    /// Brightness as reported by the cloud.
    pub brightness: String,
    /// Power state.
    pub power: PowerState,
}

impl LightState {
    /// Returns `true` if the light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Parses the reported brightness.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the string is not a number.
    pub fn brightness_value(&self) -> Result<u8, ParseError> {
        self.brightness
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ParseError::InvalidValue {
                field: "brightness".to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_off_state() {
        let state: LightState =
            serde_json::from_str(r#"{"brightness": "", "power": "off"}"#).unwrap();
        assert!(!state.is_on());
        assert!(state.brightness_value().is_err());
    }

    #[test]
    fn invalid_power_rejected() {
        let result = serde_json::from_str::<LightState>(r#"{"brightness": "1", "power": "dim"}"#);
        assert!(result.is_err());
    }
}
