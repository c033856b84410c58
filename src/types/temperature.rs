// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueError;

/// A target temperature in degrees Fahrenheit, always within 60-85 °F.
///
/// Both the global thermostat and each room's temperature use this type.
///
/// # Examples
///
/// ```
/// use homedeck::types::Temperature;
///
/// let t = Temperature::new(72).unwrap();
/// assert_eq!(t.value(), 72);
///
/// assert!(Temperature::new(55).is_err());
/// assert_eq!(Temperature::clamped(55), Temperature::MIN);
/// assert_eq!(t.saturating_add(100), Temperature::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Temperature(i32);

impl Temperature {
    /// Lowest allowed target (60 °F).
    pub const MIN: Self = Self(60);

    /// Highest allowed target (85 °F).
    pub const MAX: Self = Self(85);

    /// Initial global target (72 °F).
    pub const DEFAULT: Self = Self(72);

    /// Creates a new temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 60-85.
    pub fn new(value: i32) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a temperature, saturating at the bounds.
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the temperature offset by `delta`, saturating at the bounds.
    #[must_use]
    pub fn saturating_add(self, delta: i32) -> Self {
        Self::clamped(self.0.saturating_add(delta))
    }

    /// Returns the temperature in °F.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

impl TryFrom<i32> for Temperature {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i32::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(Temperature::new(60).is_ok());
        assert!(Temperature::new(85).is_ok());
        assert!(Temperature::new(59).is_err());
        assert!(Temperature::new(86).is_err());
    }

    #[test]
    fn saturating_add_clamps() {
        let garage = Temperature::new(65).unwrap();
        assert_eq!(garage.saturating_add(-10).value(), 60);
        assert_eq!(garage.saturating_add(1).value(), 66);
        assert_eq!(garage.saturating_add(i32::MAX).value(), 85);
        assert_eq!(garage.saturating_add(i32::MIN).value(), 60);
    }

    #[test]
    fn default_is_seventy_two() {
        assert_eq!(Temperature::default().value(), 72);
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::new(68).unwrap().to_string(), "68°F");
    }

    #[test]
    fn deserialize_validates() {
        assert_eq!(serde_json::from_str::<Temperature>("70").unwrap().value(), 70);
        assert!(serde_json::from_str::<Temperature>("90").is_err());
    }
}
