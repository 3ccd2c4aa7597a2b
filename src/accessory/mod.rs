// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub-facing accessory for one cloud appliance.
//!
//! An [`Accessory`] exposes the characteristics a hub light bulb service
//! needs (on/off, brightness, color temperature, accessory information) and
//! turns writes into cloud calls.
//!
//! # Power
//!
//! - Appliances with a light subsystem press the `on` / `off` light button
//!   and report the power state returned by the cloud.
//! - Other appliances send the IR signal whose icon is `ico_on` / `ico_off`
//!   and report the last value sent (initially off).
//!
//! # Brightness
//!
//! Brightness writes go through a
//! [`BrightnessReconciler`](crate::reconciler::BrightnessReconciler) that
//! presses `bright-up` / `bright-down` until the requested level is reached.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use remo_bridge::accessory::Accessory;
//! use remo_bridge::protocol::{ApiConfig, ApplianceApi};
//! use remo_bridge::types::Brightness;
//!
//! # async fn example() -> remo_bridge::Result<()> {
//! let api = Arc::new(ApiConfig::new("secret-token").into_client()?);
//! let appliance = api.appliances().await?.remove(0);
//! let accessory = Accessory::new(api, appliance);
//!
//! accessory.set_power(true).await?;
//! accessory.set_brightness(Brightness::new(60)?);
//! assert!(accessory.power());
//! # Ok(())
//! # }
//! ```

mod info;
mod stepper;

pub use info::AccessoryInfo;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::protocol::ApplianceApi;
use crate::reconciler::BrightnessReconciler;
use crate::response::{Appliance, LightState, power_signal_image};
use crate::types::{Brightness, ColorTemperature, LightButton};

use stepper::LightStepper;

/// A cloud appliance exposed as a hub light bulb.
#[derive(Debug)]
pub struct Accessory<A> {
    api: Arc<A>,
    appliance: Appliance,
    info: AccessoryInfo,
    /// Last light state returned by the cloud, for light appliances.
    light_state: Arc<RwLock<Option<LightState>>>,
    /// Last power value sent through an IR signal.
    power_context: RwLock<Option<bool>>,
    brightness: Arc<BrightnessReconciler<LightStepper<A>>>,
}

impl<A: ApplianceApi + 'static> Accessory<A> {
    /// Creates an accessory for an appliance.
    ///
    /// Brightness starts at 100%.
    #[must_use]
    pub fn new(api: Arc<A>, appliance: Appliance) -> Self {
        let light_state = Arc::new(RwLock::new(
            appliance.light.as_ref().map(|light| light.state.clone()),
        ));
        let stepper = LightStepper::new(
            Arc::clone(&api),
            appliance.id.clone(),
            appliance.has_light().then(|| Arc::clone(&light_state)),
        );

        Self {
            api,
            info: AccessoryInfo::from_appliance(&appliance),
            appliance,
            light_state,
            power_context: RwLock::new(None),
            brightness: Arc::new(BrightnessReconciler::new(stepper)),
        }
    }

    /// Returns the appliance id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.appliance.id
    }

    /// Returns the appliance this accessory was built from.
    #[must_use]
    pub fn appliance(&self) -> &Appliance {
        &self.appliance
    }

    /// Returns the accessory information values.
    #[must_use]
    pub fn info(&self) -> &AccessoryInfo {
        &self.info
    }

    /// Returns the last light state reported by the cloud.
    #[must_use]
    pub fn light_state(&self) -> Option<LightState> {
        self.light_state.read().clone()
    }

    // ========== Power ==========

    /// Turns the appliance on or off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingSignal`] if an IR appliance has no power
    /// signal for the requested value, or the cloud error if the call fails.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        if self.appliance.has_light() {
            let state = self
                .api
                .press_light_button(&self.appliance.id, LightButton::from_power(on))
                .await?;
            *self.light_state.write() = Some(state);
            *self.power_context.write() = None;
        } else {
            let image = power_signal_image(on);
            let signal = self
                .appliance
                .signal_by_image(image)
                .ok_or_else(|| Error::NoMatchingSignal {
                    image: image.to_string(),
                })?;
            self.api.send_signal(&signal.id).await?;
            *self.power_context.write() = Some(on);
        }

        tracing::debug!(appliance = %self.appliance.id, on, "Set power");
        Ok(())
    }

    /// Returns whether the appliance is on, without network traffic.
    #[must_use]
    pub fn power(&self) -> bool {
        let on = if self.appliance.has_light() {
            self.light_state
                .read()
                .as_ref()
                .is_some_and(LightState::is_on)
        } else {
            self.power_context.read().unwrap_or(false)
        };
        tracing::trace!(appliance = %self.appliance.id, on, "Get power");
        on
    }

    // ========== Brightness ==========

    /// Requests a brightness and returns without waiting for the device.
    ///
    /// See [`BrightnessReconciler::set_target`].
    pub fn set_brightness(&self, value: Brightness) -> JoinHandle<Result<(), Error>> {
        tracing::debug!(appliance = %self.appliance.id, brightness = %value, "Set brightness");
        self.brightness.set_target(value)
    }

    /// Returns the tracked brightness, without network traffic.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness.current()
    }

    /// Returns `true` while brightness steps are being sent.
    #[must_use]
    pub fn is_adjusting_brightness(&self) -> bool {
        self.brightness.is_running()
    }

    // ========== Color Temperature ==========

    /// Returns the color temperature. Always [`ColorTemperature::DEFAULT`].
    #[must_use]
    pub fn color_temperature(&self) -> ColorTemperature {
        ColorTemperature::DEFAULT
    }

    /// Accepts a color temperature write. Cloud lights cannot apply it, so it
    /// is only logged.
    pub fn set_color_temperature(&self, value: ColorTemperature) {
        tracing::debug!(
            appliance = %self.appliance.id,
            value = %value,
            "Ignoring color temperature change"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fake::{Call, FakeApi};

    fn appliance(json: &str) -> Appliance {
        serde_json::from_str(json).unwrap()
    }

    fn light() -> Appliance {
        appliance(
            r#"{
                "id": "light-1", "type": "LIGHT", "nickname": "Ceiling",
                "model": {"id": "m-1", "name": "HH-1", "manufacturer": "Acme"},
                "light": {"state": {"brightness": "10", "power": "off"}}
            }"#,
        )
    }

    fn remote() -> Appliance {
        appliance(
            r#"{
                "id": "fan-1", "type": "IR", "nickname": "Fan",
                "signals": [
                    {"id": "sig-on", "name": "On", "image": "ico_on"},
                    {"id": "sig-off", "name": "Off", "image": "ico_off"}
                ]
            }"#,
        )
    }

    #[tokio::test]
    async fn light_power_uses_light_button() {
        let api = Arc::new(FakeApi::default());
        let accessory = Accessory::new(Arc::clone(&api), light());
        assert!(!accessory.power());

        accessory.set_power(true).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Button("light-1".to_string(), LightButton::On)]
        );
        assert!(accessory.power());
    }

    #[tokio::test]
    async fn remote_power_sends_matching_signal() {
        let api = Arc::new(FakeApi::default());
        let accessory = Accessory::new(Arc::clone(&api), remote());
        assert!(!accessory.power());

        accessory.set_power(true).await.unwrap();
        assert!(accessory.power());
        accessory.set_power(false).await.unwrap();
        assert!(!accessory.power());

        assert_eq!(
            api.calls(),
            vec![
                Call::Signal("sig-on".to_string()),
                Call::Signal("sig-off".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn remote_without_signal_fails() {
        let api = Arc::new(FakeApi::default());
        let accessory = Accessory::new(
            Arc::clone(&api),
            appliance(r#"{"id": "tv", "type": "IR", "nickname": "TV", "signals": []}"#),
        );

        let err = accessory.set_power(true).await.unwrap_err();
        assert!(matches!(err, Error::NoMatchingSignal { ref image } if image == "ico_on"));
        assert!(api.calls().is_empty());
        assert!(!accessory.power());
    }

    #[tokio::test]
    async fn rejected_power_call_keeps_state() {
        let api = Arc::new(FakeApi::default());
        api.reject_with(404);
        let accessory = Accessory::new(Arc::clone(&api), remote());

        let err = accessory.set_power(true).await.unwrap_err();
        assert!(matches!(err, Error::RemoteCallFailed(ref e) if e.code() == Some(404_001)));
        assert!(!accessory.power());
    }

    #[tokio::test]
    async fn brightness_steps_through_light_buttons() {
        let api = Arc::new(FakeApi::default());
        let accessory = Accessory::new(Arc::clone(&api), light());
        assert_eq!(accessory.brightness(), Brightness::MAX);

        accessory
            .set_brightness(Brightness::new(70).unwrap())
            .await
            .unwrap()
            .unwrap();

        // Level 9 -> level 6
        assert_eq!(
            api.calls(),
            vec![Call::Button("light-1".to_string(), LightButton::BrightDown); 3]
        );
        assert_eq!(accessory.brightness().value(), 70);
        assert!(!accessory.is_adjusting_brightness());
        // Step responses refresh the cached light state
        assert!(accessory.power());
    }

    #[tokio::test]
    async fn brightness_failure_surfaces_remote_error() {
        let api = Arc::new(FakeApi::default());
        api.reject_with(500);
        let accessory = Accessory::new(Arc::clone(&api), light());

        let result = accessory.set_brightness(Brightness::MIN).await.unwrap();
        assert!(matches!(result, Err(Error::RemoteCallFailed(_))));
        assert_eq!(accessory.brightness(), Brightness::MAX);
        assert!(!accessory.is_adjusting_brightness());
    }

    #[tokio::test]
    async fn remote_brightness_keeps_signal_power() {
        let api = Arc::new(FakeApi::default());
        let accessory = Accessory::new(Arc::clone(&api), remote());

        accessory
            .set_brightness(Brightness::new(50).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(accessory.light_state().is_none());
        assert!(!accessory.power());

        accessory.set_power(true).await.unwrap();
        assert!(accessory.power());
        accessory.set_power(false).await.unwrap();
        assert!(!accessory.power());
    }

    #[tokio::test]
    async fn rejected_call_reports_its_status() {
        let api = Arc::new(FakeApi::default());
        api.reject_with(401);
        let accessory = Accessory::new(Arc::clone(&api), remote());

        let err = accessory.set_power(true).await.unwrap_err();
        assert!(matches!(
            err,
            Error::RemoteCallFailed(ref e) if e.status() == 401 && e.code() == Some(401_001)
        ));
    }

    #[test]
    fn metadata_and_color_temperature() {
        let accessory = Accessory::new(Arc::new(FakeApi::default()), light());
        assert_eq!(accessory.id(), "light-1");
        assert_eq!(accessory.info().manufacturer.as_deref(), Some("Acme"));
        assert_eq!(accessory.color_temperature(), ColorTemperature::DEFAULT);
        accessory.set_color_temperature(ColorTemperature::new(200).unwrap());
        assert_eq!(accessory.color_temperature().value(), 300);
    }
}
