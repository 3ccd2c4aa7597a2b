// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud API access.
//!
//! The [`ApplianceApi`] trait is the seam between accessories and the cloud.
//! [`CloudClient`] implements it over HTTPS with a bearer token; tests and
//! alternative transports can provide their own implementation.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ApplianceApi::appliances`] | `GET /appliances` |
//! | [`ApplianceApi::press_light_button`] | `POST /appliances/{id}/light` with `button=<name>` |
//! | [`ApplianceApi::send_signal`] | `POST /signals/{id}/send` |

#[cfg(test)]
pub(crate) mod fake;
#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{ApiConfig, CloudClient};

use std::future::Future;

use crate::error::Error;
use crate::response::{Appliance, LightState};
use crate::types::LightButton;

/// Operations the bridge needs from the cloud API.
///
/// Every method maps a non-success status to
/// [`Error::RemoteCallFailed`](crate::Error::RemoteCallFailed).
pub trait ApplianceApi: Send + Sync {
    /// Lists every appliance of the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    fn appliances(&self) -> impl Future<Output = Result<Vec<Appliance>, Error>> + Send;

    /// Presses a button of a light appliance and returns the new light state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    fn press_light_button(
        &self,
        appliance_id: &str,
        button: LightButton,
    ) -> impl Future<Output = Result<LightState, Error>> + Send;

    /// Sends a learned IR signal.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    fn send_signal(&self, signal_id: &str) -> impl Future<Output = Result<(), Error>> + Send;
}
