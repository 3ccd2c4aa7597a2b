// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory `ApplianceApi` for unit tests.

use parking_lot::Mutex;

use crate::error::{Error, RemoteError};
use crate::protocol::ApplianceApi;
use crate::response::{Appliance, LightState};
use crate::types::{LightButton, PowerState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Appliances,
    Button(String, LightButton),
    Signal(String),
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    appliances: Vec<Appliance>,
    calls: Mutex<Vec<Call>>,
    reject_with: Mutex<Option<u16>>,
}

impl FakeApi {
    pub(crate) fn with_appliances(appliances: Vec<Appliance>) -> Self {
        Self {
            appliances,
            ..Self::default()
        }
    }

    pub(crate) fn reject_with(&self, status: u16) {
        *self.reject_with.lock() = Some(status);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> Result<(), Error> {
        self.calls.lock().push(call);
        match *self.reject_with.lock() {
            Some(status) => {
                let body = serde_json::json!({
                    "code": u32::from(status) * 1000 + 1,
                    "message": format!("Rejected with {status}"),
                });
                Err(RemoteError::new(status, &body.to_string()).into())
            }
            None => Ok(()),
        }
    }
}

impl ApplianceApi for FakeApi {
    async fn appliances(&self) -> Result<Vec<Appliance>, Error> {
        self.record(Call::Appliances)?;
        Ok(self.appliances.clone())
    }

    async fn press_light_button(
        &self,
        appliance_id: &str,
        button: LightButton,
    ) -> Result<LightState, Error> {
        self.record(Call::Button(appliance_id.to_string(), button))?;
        let power = match button {
            LightButton::Off => PowerState::Off,
            _ => PowerState::On,
        };
        Ok(LightState {
            brightness: String::new(),
            power,
        })
    }

    async fn send_signal(&self, signal_id: &str) -> Result<(), Error> {
        self.record(Call::Signal(signal_id.to_string()))
    }
}
