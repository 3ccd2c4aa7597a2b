// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance listing response parsing.

use serde::Deserialize;

use super::LightState;

/// Icon name of the signal that turns an IR appliance on.
pub const SIGNAL_IMAGE_ON: &str = "ico_on";

/// Icon name of the signal that turns an IR appliance off.
pub const SIGNAL_IMAGE_OFF: &str = "ico_off";

/// An appliance registered in the cloud, as returned by `GET /appliances`.
///
/// Only the fields the bridge needs are decoded; everything else in the
/// payload is ignored.
///
/// # Examples
///
/// ```
/// use remo_bridge::response::Appliance;
///
/// let json = r#"{
///     "id": "a1",
///     "type": "IR",
///     "nickname": "Fan",
///     "image": "ico_fan",
///     "model": null,
///     "signals": [{"id": "s1", "name": "Power", "image": "ico_on"}]
/// }"#;
/// let appliance: Appliance = serde_json::from_str(json).unwrap();
/// assert_eq!(appliance.signal_for_power(true).unwrap().id, "s1");
/// assert!(!appliance.has_light());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appliance {
    /// Appliance id used in API paths.
    pub id: String,
    /// Manufacturer model, when the cloud recognised one.
    #[serde(default)]
    pub model: Option<Model>,
    /// Appliance kind (`"IR"`, `"LIGHT"`, `"AC"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// User-visible name.
    pub nickname: String,
    /// Learned IR signals.
    #[serde(default)]
    pub signals: Vec<Signal>,
    /// Light subsystem, present for appliances controlled through the light
    /// endpoint.
    #[serde(default)]
    pub light: Option<Light>,
    /// Icon name.
    #[serde(default)]
    pub image: String,
}

impl Appliance {
    /// Returns `true` if this appliance has a light subsystem.
    #[must_use]
    pub fn has_light(&self) -> bool {
        self.light.is_some()
    }

    /// Finds the first signal with the given icon name.
    #[must_use]
    pub fn signal_by_image(&self, image: &str) -> Option<&Signal> {
        self.signals.iter().find(|signal| signal.image == image)
    }

    /// Finds the signal that switches the appliance on or off.
    #[must_use]
    pub fn signal_for_power(&self, on: bool) -> Option<&Signal> {
        self.signal_by_image(power_signal_image(on))
    }

    /// Returns `true` if the bridge can drive this appliance at all.
    #[must_use]
    pub fn is_controllable(&self) -> bool {
        self.has_light() || !self.signals.is_empty()
    }
}

/// Icon name of the signal used for a requested power value.
#[must_use]
pub const fn power_signal_image(on: bool) -> &'static str {
    if on { SIGNAL_IMAGE_ON } else { SIGNAL_IMAGE_OFF }
}

/// Manufacturer model of an appliance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
    /// Model id, used as the accessory serial number.
    pub id: String,
    /// Model name.
    pub name: String,
    /// Manufacturer name.
    pub manufacturer: String,
}

/// A learned IR signal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Signal {
    /// Signal id used in `/signals/{id}/send`.
    pub id: String,
    /// User-visible name.
    pub name: String,
    /// Icon name; `ico_on` / `ico_off` mark the power signals.
    pub image: String,
}

/// Light subsystem of an appliance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Light {
    /// Last state reported by the cloud.
    pub state: LightState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerState;

    fn light_json() -> &'static str {
        r#"{
            "id": "light-1",
            "type": "LIGHT",
            "nickname": "Ceiling",
            "image": "ico_light",
            "model": {"id": "m-7", "name": "HLDC", "manufacturer": "Panasonic", "remote_name": "x"},
            "signals": [],
            "light": {
                "buttons": [],
                "state": {"brightness": "100", "power": "on", "last_button": "on"}
            },
            "settings": null
        }"#
    }

    #[test]
    fn parse_light_appliance() {
        let appliance: Appliance = serde_json::from_str(light_json()).unwrap();
        assert_eq!(appliance.kind, "LIGHT");
        assert!(appliance.has_light());
        assert!(appliance.is_controllable());
        let model = appliance.model.as_ref().unwrap();
        assert_eq!(model.manufacturer, "Panasonic");
        assert_eq!(
            appliance.light.unwrap().state.power,
            PowerState::On
        );
    }

    #[test]
    fn parse_appliance_without_optional_fields() {
        let json = r#"{"id": "x", "type": "AC", "nickname": "Aircon"}"#;
        let appliance: Appliance = serde_json::from_str(json).unwrap();
        assert!(appliance.model.is_none());
        assert!(appliance.signals.is_empty());
        assert!(!appliance.is_controllable());
    }

    #[test]
    fn signal_lookup_by_image() {
        let json = r#"{
            "id": "tv", "type": "IR", "nickname": "TV", "image": "ico_tv",
            "signals": [
                {"id": "s-off", "name": "Off", "image": "ico_off"},
                {"id": "s-on", "name": "On", "image": "ico_on"},
                {"id": "s-vol", "name": "Vol", "image": "ico_up"}
            ]
        }"#;
        let appliance: Appliance = serde_json::from_str(json).unwrap();
        assert_eq!(appliance.signal_for_power(true).unwrap().id, "s-on");
        assert_eq!(appliance.signal_for_power(false).unwrap().id, "s-off");
        assert!(appliance.signal_by_image("ico_down").is_none());
    }
}
