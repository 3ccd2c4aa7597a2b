// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory information characteristics.

use crate::response::Appliance;

/// Values for the hub's accessory information service.
///
/// Manufacturer, model and serial number are only known when the cloud
/// recognised the appliance's model.
///
/// ```
/// use remo_bridge::accessory::AccessoryInfo;
/// use remo_bridge::response::Appliance;
///
/// let appliance: Appliance = serde_json::from_str(
///     r#"{"id": "a", "type": "IR", "nickname": "Fan", "model": null}"#,
/// ).unwrap();
/// let info = AccessoryInfo::from_appliance(&appliance);
/// assert_eq!(info.name, "Fan");
/// assert!(info.manufacturer.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInfo {
    /// Display name, from the appliance nickname.
    pub name: String,
    /// Manufacturer name.
    pub manufacturer: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Serial number, from the model id.
    pub serial_number: Option<String>,
}

impl AccessoryInfo {
    /// Builds the information block for an appliance.
    #[must_use]
    pub fn from_appliance(appliance: &Appliance) -> Self {
        let model = appliance.model.as_ref();
        Self {
            name: appliance.nickname.clone(),
            manufacturer: model.map(|m| m.manufacturer.clone()),
            model: model.map(|m| m.name.clone()),
            serial_number: model.map(|m| m.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_from_model() {
        let appliance: Appliance = serde_json::from_str(
            r#"{
                "id": "a", "type": "LIGHT", "nickname": "Desk",
                "model": {"id": "m-1", "name": "CL-1", "manufacturer": "Acme"}
            }"#,
        )
        .unwrap();

        let info = AccessoryInfo::from_appliance(&appliance);
        assert_eq!(
            info,
            AccessoryInfo {
                name: "Desk".to_string(),
                manufacturer: Some("Acme".to_string()),
                model: Some("CL-1".to_string()),
                serial_number: Some("m-1".to_string()),
            }
        );
    }
}
