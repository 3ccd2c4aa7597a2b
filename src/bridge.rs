// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory registry for one cloud account.

use std::sync::Arc;

use crate::accessory::Accessory;
use crate::error::Error;
use crate::protocol::ApplianceApi;
use crate::response::Appliance;

#[cfg(feature = "http")]
use crate::config::PlatformConfig;
#[cfg(feature = "http")]
use crate::protocol::CloudClient;

/// Owns one [`Accessory`] per controllable appliance of an account.
///
/// Appliances without a light subsystem and without any learned signal are
/// skipped.
///
/// # Examples
///
/// ```no_run
/// use remo_bridge::Bridge;
/// use remo_bridge::config::PlatformConfig;
///
/// #[tokio::main]
/// async fn main() -> remo_bridge::Result<()> {
///     let config = PlatformConfig::from_json(r#"{"token": "secret-token"}"#)?;
///     let bridge = Bridge::from_config(&config).await?;
///
///     for accessory in bridge.accessories() {
///         println!("{} on={}", accessory.info().name, accessory.power());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Bridge<A> {
    api: Arc<A>,
    accessories: Vec<Arc<Accessory<A>>>,
}

impl<A: ApplianceApi + 'static> Bridge<A> {
    /// Lists the account's appliances and builds their accessories.
    ///
    /// # Errors
    ///
    /// Returns error if the appliance listing fails.
    pub async fn connect(api: A) -> Result<Self, Error> {
        let api = Arc::new(api);
        let appliances = api.appliances().await?;
        Ok(Self::from_appliances(api, appliances))
    }

    /// Builds accessories from an already fetched appliance list.
    #[must_use]
    pub fn from_appliances(api: Arc<A>, appliances: Vec<Appliance>) -> Self {
        let total = appliances.len();
        let accessories: Vec<_> = appliances
            .into_iter()
            .filter(|appliance| {
                let keep = appliance.is_controllable();
                if !keep {
                    tracing::debug!(
                        appliance = %appliance.id,
                        kind = %appliance.kind,
                        "Skipping appliance without light or signals"
                    );
                }
                keep
            })
            .map(|appliance| Arc::new(Accessory::new(Arc::clone(&api), appliance)))
            .collect();

        tracing::info!(
            total,
            accessories = accessories.len(),
            "Bridge accessories created"
        );

        Self { api, accessories }
    }

    /// Returns the shared API client.
    #[must_use]
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Looks up the accessory of an appliance.
    ///
    /// # Errors
    ///
    /// Returns `Error::AccessoryNotFound` if no accessory has this id.
    pub fn accessory(&self, appliance_id: &str) -> Result<&Arc<Accessory<A>>, Error> {
        self.accessories
            .iter()
            .find(|accessory| accessory.id() == appliance_id)
            .ok_or_else(|| Error::AccessoryNotFound(appliance_id.to_string()))
    }

    /// Iterates over all accessories in listing order.
    pub fn accessories(&self) -> impl Iterator<Item = &Arc<Accessory<A>>> {
        self.accessories.iter()
    }

    /// Returns the number of accessories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    /// Returns `true` if no appliance was controllable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }
}

#[cfg(feature = "http")]
impl Bridge<CloudClient> {
    /// Creates the cloud client from a platform configuration and connects.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, the client cannot be
    /// created, or the appliance listing fails.
    pub async fn from_config(config: &PlatformConfig) -> Result<Self, Error> {
        let client = config.api_config()?.into_client()?;
        Self::connect(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fake::{Call, FakeApi};

    fn appliances() -> Vec<Appliance> {
        serde_json::from_str(
            r#"[
                {"id": "light", "type": "LIGHT", "nickname": "Light",
                 "light": {"state": {"brightness": "", "power": "on"}}},
                {"id": "ac", "type": "AC", "nickname": "Aircon", "signals": []},
                {"id": "fan", "type": "IR", "nickname": "Fan",
                 "signals": [{"id": "s1", "name": "On", "image": "ico_on"}]}
            ]"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn connect_skips_uncontrollable_appliances() {
        let bridge = Bridge::connect(FakeApi::with_appliances(appliances()))
            .await
            .unwrap();

        assert_eq!(bridge.len(), 2);
        assert!(!bridge.is_empty());
        let ids: Vec<_> = bridge.accessories().map(|a| a.id().to_string()).collect();
        assert_eq!(ids, vec!["light", "fan"]);
        assert_eq!(bridge.api().calls(), vec![Call::Appliances]);
    }

    #[tokio::test]
    async fn accessory_lookup() {
        let bridge = Bridge::connect(FakeApi::with_appliances(appliances()))
            .await
            .unwrap();

        assert!(bridge.accessory("light").unwrap().power());
        assert!(matches!(
            bridge.accessory("ac"),
            Err(Error::AccessoryNotFound(ref id)) if id == "ac"
        ));
    }

    #[tokio::test]
    async fn connect_propagates_listing_failure() {
        let api = FakeApi::default();
        api.reject_with(401);
        let result = Bridge::connect(api).await;
        assert!(matches!(result, Err(Error::RemoteCallFailed(_))));
    }
}
