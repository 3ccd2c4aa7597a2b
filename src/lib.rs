// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `remo_bridge` - Expose Nature Remo cloud appliances to a home-automation hub.
//!
//! The cloud API controls lights through button presses and other appliances
//! through learned IR signals. This library turns those into the
//! characteristics a hub light bulb service expects.
//!
//! # Supported Features
//!
//! - **Power control**: light buttons, or the `ico_on` / `ico_off` IR signals
//! - **Brightness**: absolute percentages reached through `bright-up` /
//!   `bright-down` steps, see [`reconciler`]
//! - **Accessory information**: manufacturer, model and serial number
//!
//! # Quick Start
//!
//! ```no_run
//! use remo_bridge::{Bridge, Brightness, PlatformConfig};
//!
//! #[tokio::main]
//! async fn main() -> remo_bridge::Result<()> {
//!     let config = PlatformConfig::from_json(r#"{"token": "secret-token"}"#)?;
//!     let bridge = Bridge::from_config(&config).await?;
//!
//!     let accessory = bridge.accessory("appliance-id")?;
//!     accessory.set_power(true).await?;
//!
//!     // Returns immediately; steps are sent in the background
//!     let _ = accessory.set_brightness(Brightness::new(40)?);
//!     println!("brightness: {}", accessory.brightness());
//!     Ok(())
//! }
//! ```

pub mod accessory;
mod bridge;
pub mod config;
pub mod error;
pub mod protocol;
pub mod reconciler;
pub mod response;
pub mod types;

pub use accessory::{Accessory, AccessoryInfo};
pub use bridge::Bridge;
pub use config::PlatformConfig;
pub use error::{ConfigError, Error, ParseError, ProtocolError, RemoteError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{ApiConfig, CloudClient};
pub use protocol::ApplianceApi;
pub use reconciler::{BrightnessReconciler, StepDirection, StepDriver};
pub use response::{Appliance, LightState, Signal};
pub use types::{Brightness, ColorTemperature, Level, LightButton, PowerState};
