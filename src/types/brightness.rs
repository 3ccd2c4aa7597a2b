// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness and level types.
//!
//! The hub speaks in percentages (0-100) while the remote light only knows
//! ten discrete levels (0-9). [`Brightness::level`] maps the former onto the
//! latter and [`Level::band`] gives the inverse range.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ValueError;

/// Brightness as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use remo_bridge::types::Brightness;
///
/// let half = Brightness::new(50).unwrap();
/// assert_eq!(half.value(), 50);
/// assert_eq!(half.level().value(), 4);
///
/// assert_eq!(Brightness::MAX.level().value(), 9);
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// ```
    /// use remo_bridge::types::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(150).value(), 100);
    /// assert_eq!(Brightness::clamped(-3).value(), 0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i32) -> Self {
        if value < 0 {
            Self(0)
        } else if value > 100 {
            Self(100)
        } else {
            Self(value as u8)
        }
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the device level this brightness falls into.
    ///
    /// `level = floor(brightness * 9 / 100)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn level(&self) -> Level {
        // 100 * 9 / 100 == 9, so the quotient always fits
        Level((self.0 as u16 * Level::MAX.0 as u16 / 100) as u8)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

/// A discrete device brightness level (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Lowest level.
    pub const MIN: Self = Self(0);

    /// Highest level.
    pub const MAX: Self = Self(9);

    /// Creates a new level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 9.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the level value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Signed distance from `self` to `other`, in levels.
    #[must_use]
    pub fn steps_to(self, other: Level) -> i32 {
        i32::from(other.0) - i32::from(self.0)
    }

    /// The level one step from `self` in the direction of `other`.
    ///
    /// Returns `self` when both are equal.
    #[must_use]
    pub const fn step_toward(self, other: Level) -> Level {
        if other.0 > self.0 {
            Level(self.0 + 1)
        } else if other.0 < self.0 {
            Level(self.0 - 1)
        } else {
            self
        }
    }

    /// The range of brightness values that map onto this level.
    ///
    /// ```
    /// use remo_bridge::types::Level;
    ///
    /// let band = Level::new(1).unwrap().band();
    /// assert_eq!((*band.start(), *band.end()), (12, 22));
    /// assert_eq!(Level::MAX.band(), 100..=100);
    /// ```
    #[must_use]
    pub fn band(self) -> RangeInclusive<u8> {
        let lowest = |level: u8| u16::from(level) * 100 / u16::from(Self::MAX.0)
            + u16::from(u16::from(level) * 100 % u16::from(Self::MAX.0) != 0);
        let start = lowest(self.0);
        let end = if self == Self::MAX {
            100
        } else {
            lowest(self.0 + 1) - 1
        };
        // Both bounds are at most 100
        u8::try_from(start).unwrap_or(100)..=u8::try_from(end).unwrap_or(100)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
