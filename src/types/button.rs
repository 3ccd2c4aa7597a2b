// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Buttons of the cloud light remote.

use std::fmt;

/// A button that can be pressed on a light appliance.
///
/// The light endpoint has no absolute brightness setter; brightness only
/// moves through [`LightButton::BrightUp`] and [`LightButton::BrightDown`].
///
/// ```
/// use remo_bridge::types::LightButton;
///
/// assert_eq!(LightButton::BrightUp.as_str(), "bright-up");
/// assert_eq!(LightButton::from_power(false), LightButton::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightButton {
    /// Turn the light on.
    On,
    /// Turn the light off.
    Off,
    /// Raise brightness by one level.
    BrightUp,
    /// Lower brightness by one level.
    BrightDown,
    /// Night light mode.
    Night,
}

impl LightButton {
    /// Returns the form value sent as `button=<value>`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::BrightUp => "bright-up",
            Self::BrightDown => "bright-down",
            Self::Night => "night",
        }
    }

    /// The on/off button matching a requested power value.
    #[must_use]
    pub const fn from_power(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for LightButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_wire_names() {
        assert_eq!(LightButton::On.as_str(), "on");
        assert_eq!(LightButton::Off.as_str(), "off");
        assert_eq!(LightButton::BrightDown.to_string(), "bright-down");
        assert_eq!(LightButton::Night.as_str(), "night");
    }

    #[test]
    fn button_from_power() {
        assert_eq!(LightButton::from_power(true), LightButton::On);
        assert_eq!(LightButton::from_power(false), LightButton::Off);
    }
}
