// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature as exposed to the hub.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in mireds (140-500), the hub characteristic's range.
///
/// Cloud lights cannot change their color temperature, so the accessory only
/// ever reports [`ColorTemperature::DEFAULT`].
///
/// ```
/// use remo_bridge::types::ColorTemperature;
///
/// assert_eq!(ColorTemperature::DEFAULT.value(), 300);
/// assert!(ColorTemperature::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature (coolest).
    pub const MIN: u16 = 140;

    /// Maximum color temperature (warmest).
    pub const MAX: u16 = 500;

    /// Value reported for every light.
    pub const DEFAULT: Self = Self(300);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [140, 500].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Default for ColorTemperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temperature_range() {
        assert!(ColorTemperature::new(140).is_ok());
        assert!(ColorTemperature::new(500).is_ok());
        assert!(ColorTemperature::new(139).is_err());
        assert!(ColorTemperature::new(501).is_err());
    }

    #[test]
    fn color_temperature_default() {
        assert_eq!(ColorTemperature::default(), ColorTemperature::DEFAULT);
        assert_eq!(ColorTemperature::DEFAULT.to_string(), "300 mired");
    }
}
