// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View selection and view-only decoration.
//!
//! Decoration such as icons is derived from a record at render time through
//! pure mappings and is never stored in the shared state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::types::DeviceType;

/// The dashboard tabs.
///
/// # Examples
///
/// ```
/// use homedeck::view::Tab;
///
/// assert_eq!(Tab::default(), Tab::Machine);
/// assert_eq!("energy".parse::<Tab>().unwrap(), Tab::Energy);
/// assert_eq!(Tab::Live.label(), "Live View");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// The central control machine.
    #[default]
    Machine,
    /// Live view of the living room.
    Live,
    /// Room grid.
    Rooms,
    /// All devices.
    Devices,
    /// Energy usage.
    Energy,
    /// Security center.
    Security,
}

impl Tab {
    /// All tabs, in header order.
    pub const ALL: [Self; 6] = [
        Self::Machine,
        Self::Live,
        Self::Rooms,
        Self::Devices,
        Self::Energy,
        Self::Security,
    ];

    /// Returns the lowercase id.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Machine => "machine",
            Self::Live => "live",
            Self::Rooms => "rooms",
            Self::Devices => "devices",
            Self::Energy => "energy",
            Self::Security => "security",
        }
    }

    /// Returns the header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Machine => "Control Machine",
            Self::Live => "Live View",
            Self::Rooms => "Rooms",
            Self::Devices => "Devices",
            Self::Energy => "Energy",
            Self::Security => "Security",
        }
    }

    /// Returns the header icon.
    #[must_use]
    pub const fn icon(&self) -> Icon {
        match self {
            Self::Machine => Icon::Monitor,
            Self::Live => Icon::Eye,
            Self::Rooms => Icon::Home,
            Self::Devices => Icon::Lightbulb,
            Self::Energy => Icon::Zap,
            Self::Security => Icon::Shield,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownTab(s.to_string()))
    }
}

/// Icon names understood by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Bulb, for lights.
    Lightbulb,
    /// Television set.
    Tv,
    /// Loudspeaker.
    Speaker,
    /// Fan blades.
    Fan,
    /// Coffee cup, for kitchen appliances.
    Coffee,
    /// Wireless waves, for network gear.
    Wifi,
    /// Monitor, for the machine tab.
    Monitor,
    /// Eye, for the live tab.
    Eye,
    /// House, for the rooms tab.
    Home,
    /// Lightning bolt, for the energy tab.
    Zap,
    /// Shield, for the security tab.
    Shield,
}

/// Icon for a device type.
#[must_use]
pub const fn icon_for(kind: DeviceType) -> Icon {
    match kind {
        DeviceType::Light => Icon::Lightbulb,
        DeviceType::Tv => Icon::Tv,
        DeviceType::Speaker => Icon::Speaker,
        DeviceType::Fan => Icon::Fan,
        DeviceType::Appliance => Icon::Coffee,
        DeviceType::Network => Icon::Wifi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_round_trip_through_str() {
        for tab in Tab::ALL {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn unknown_tab() {
        assert!(matches!(
            "settings".parse::<Tab>(),
            Err(ParseError::UnknownTab(ref s)) if s == "settings"
        ));
    }

    #[test]
    fn device_icons() {
        assert_eq!(icon_for(DeviceType::Light), Icon::Lightbulb);
        assert_eq!(icon_for(DeviceType::Appliance), Icon::Coffee);
        assert_eq!(icon_for(DeviceType::Network), Icon::Wifi);
    }
}
