// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage level used for brightness and volume.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueError;

/// A percentage level (0-100).
///
/// Lights store their brightness and speakers their volume as a `Level`.
///
/// # Examples
///
/// ```
/// use homedeck::types::Level;
///
/// let level = Level::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// // Out-of-range input is rejected by `new`...
/// assert!(Level::new(101).is_err());
///
/// // ...and saturated by `clamped`.
/// assert_eq!(Level::clamped(1000), Level::MAX);
/// assert_eq!(Level::clamped(-1000), Level::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    /// Minimum level (0%).
    pub const MIN: Self = Self(0);

    /// Maximum level (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: i32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a level, saturating at the bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i32) -> Self {
        // Safe: clamped to 0..=100 before the cast
        Self(value.clamp(0, 100) as u8)
    }

    /// Returns the level offset by `delta`, saturating at the bounds.
    ///
    /// ```
    /// use homedeck::types::Level;
    ///
    /// let level = Level::new(50).unwrap();
    /// assert_eq!(level.saturating_add(30).value(), 80);
    /// assert_eq!(level.saturating_add(1000), Level::MAX);
    /// ```
    #[must_use]
    pub fn saturating_add(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.0).saturating_add(delta))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
