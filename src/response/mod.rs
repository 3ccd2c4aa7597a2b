// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud API response types.

mod appliance;
mod light_state;

pub use appliance::{
    Appliance, Light, Model, SIGNAL_IMAGE_OFF, SIGNAL_IMAGE_ON, Signal, power_signal_image,
};
pub use light_state::LightState;
