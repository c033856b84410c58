// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The kind of a controllable device.
///
/// The type decides which optional fields of a
/// [`Device`](crate::device::Device) are meaningful: lights carry a
/// brightness, speakers a volume.
///
/// # Examples
///
/// ```
/// use homedeck::types::DeviceType;
///
/// let kind: DeviceType = "speaker".parse().unwrap();
/// assert_eq!(kind, DeviceType::Speaker);
/// assert!(kind.has_volume());
/// assert_eq!(DeviceType::Light.as_str(), "light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// A dimmable light.
    Light,
    /// A television.
    Tv,
    /// A speaker with adjustable volume.
    Speaker,
    /// A fan.
    Fan,
    /// A kitchen or household appliance.
    Appliance,
    /// Network equipment such as a router.
    Network,
}

impl DeviceType {
    /// All device types, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Light,
        Self::Tv,
        Self::Speaker,
        Self::Fan,
        Self::Appliance,
        Self::Network,
    ];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Tv => "tv",
            Self::Speaker => "speaker",
            Self::Fan => "fan",
            Self::Appliance => "appliance",
            Self::Network => "network",
        }
    }

    /// Returns `true` if devices of this type carry a brightness.
    #[must_use]
    pub const fn has_brightness(&self) -> bool {
        matches!(self, Self::Light)
    }

    /// Returns `true` if devices of this type carry a volume.
    #[must_use]
    pub const fn has_volume(&self) -> bool {
        matches!(self, Self::Speaker)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownDeviceType(s.to_string()))
    }
}
