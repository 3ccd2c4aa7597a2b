// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared between the hub side and the cloud side.
//!
//! Each type checks its range at construction time.
//!
//! # Types
//!
//! - [`Brightness`] - Hub brightness percentage (0-100%)
//! - [`Level`] - Discrete device brightness level (0-9)
//! - [`PowerState`] - On/Off as reported by a cloud light
//! - [`LightButton`] - Buttons accepted by the light endpoint
//! - [`ColorTemperature`] - Color temperature in mireds (140-500)

mod brightness;
mod button;
mod color_temperature;
mod power;

pub use brightness::{Brightness, Level};
pub use button::LightButton;
pub use color_temperature::ColorTemperature;
pub use power::PowerState;
