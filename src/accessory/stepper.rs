// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Step driver backed by the light endpoint.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Error;
use crate::protocol::ApplianceApi;
use crate::reconciler::{StepDirection, StepDriver};
use crate::response::LightState;

/// Presses `bright-up` / `bright-down` on one appliance.
///
/// The returned light state is kept only when a cache is given, which is the
/// case for appliances with a light subsystem.
#[derive(Debug)]
pub(crate) struct LightStepper<A> {
    api: Arc<A>,
    appliance_id: String,
    light_state: Option<Arc<RwLock<Option<LightState>>>>,
}

impl<A> LightStepper<A> {
    pub(crate) fn new(
        api: Arc<A>,
        appliance_id: String,
        light_state: Option<Arc<RwLock<Option<LightState>>>>,
    ) -> Self {
        Self {
            api,
            appliance_id,
            light_state,
        }
    }
}

impl<A: ApplianceApi> StepDriver for LightStepper<A> {
    async fn step(&self, direction: StepDirection) -> Result<(), Error> {
        let state = self
            .api
            .press_light_button(&self.appliance_id, direction.button())
            .await?;
        if let Some(cache) = &self.light_state {
            *cache.write() = Some(state);
        }
        Ok(())
    }
}
