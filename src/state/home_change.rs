// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mutation requests as data.
//!
//! # Change Types
//!
//! - Device changes: power toggle, absolute and relative brightness/volume
//! - Room changes: light toggle, relative temperature
//! - [`HomeChange::Temperature`] - Global target, absolute or stepped
//! - Security switches, system power and tab selection
//! - [`HomeChange::Batch`] - Multiple changes grouped together

use serde::{Deserialize, Serialize};

use crate::climate::TemperatureRequest;
use crate::device::DeviceId;
use crate::room::RoomId;
use crate::types::Level;
use crate::view::Tab;

/// A requested mutation of the home state.
///
/// # Examples
///
/// ```
/// use homedeck::state::HomeChange;
/// use homedeck::types::Level;
///
/// let change = HomeChange::batch(vec![
///     HomeChange::toggle_power("1"),
///     HomeChange::set_brightness("1", Level::new(40).unwrap()),
/// ]);
/// assert_eq!(change.change_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HomeChange {
    /// Flip a device's power state.
    TogglePower {
        /// Target device.
        id: DeviceId,
    },

    /// Set a device's brightness.
    SetBrightness {
        /// Target device.
        id: DeviceId,
        /// New brightness.
        level: Level,
    },

    /// Set a device's volume.
    SetVolume {
        /// Target device.
        id: DeviceId,
        /// New volume.
        level: Level,
    },

    /// Offset a device's brightness, saturating at 0 and 100.
    AdjustBrightness {
        /// Target device.
        id: DeviceId,
        /// Signed offset.
        delta: i32,
    },

    /// Offset a device's volume, saturating at 0 and 100.
    AdjustVolume {
        /// Target device.
        id: DeviceId,
        /// Signed offset.
        delta: i32,
    },

    /// Flip a room's lights.
    ToggleRoomLights {
        /// Target room.
        id: RoomId,
    },

    /// Offset a room's temperature, saturating at 60 and 85 °F.
    AdjustRoomTemperature {
        /// Target room.
        id: RoomId,
        /// Signed offset in °F.
        delta: i32,
    },

    /// Change the global target temperature.
    Temperature {
        /// Absolute or stepped request.
        request: TemperatureRequest,
    },

    /// Flip the alarm.
    ToggleArmed,

    /// Flip the smart lock.
    ToggleDoorLock,

    /// Flip notifications.
    ToggleNotifications,

    /// Flip the master system power switch.
    ToggleSystemPower,

    /// Select a tab.
    SelectTab {
        /// Tab to show.
        tab: Tab,
    },

    /// Multiple changes applied in order.
    Batch {
        /// The nested changes.
        changes: Vec<HomeChange>,
    },
}

impl HomeChange {
    /// Creates a power toggle.
    #[must_use]
    pub fn toggle_power(id: impl Into<DeviceId>) -> Self {
        Self::TogglePower { id: id.into() }
    }

    /// Creates an absolute brightness change.
    #[must_use]
    pub fn set_brightness(id: impl Into<DeviceId>, level: Level) -> Self {
        Self::SetBrightness {
            id: id.into(),
            level,
        }
    }

    /// Creates an absolute volume change.
    #[must_use]
    pub fn set_volume(id: impl Into<DeviceId>, level: Level) -> Self {
        Self::SetVolume {
            id: id.into(),
            level,
        }
    }

    /// Creates a relative brightness change.
    #[must_use]
    pub fn adjust_brightness(id: impl Into<DeviceId>, delta: i32) -> Self {
        Self::AdjustBrightness {
            id: id.into(),
            delta,
        }
    }

    /// Creates a relative volume change.
    #[must_use]
    pub fn adjust_volume(id: impl Into<DeviceId>, delta: i32) -> Self {
        Self::AdjustVolume {
            id: id.into(),
            delta,
        }
    }

    /// Creates a room light toggle.
    #[must_use]
    pub fn toggle_room_lights(id: impl Into<RoomId>) -> Self {
        Self::ToggleRoomLights { id: id.into() }
    }

    /// Creates a relative room temperature change.
    #[must_use]
    pub fn adjust_room_temperature(id: impl Into<RoomId>, delta: i32) -> Self {
        Self::AdjustRoomTemperature {
            id: id.into(),
            delta,
        }
    }

    /// Creates a global temperature change.
    #[must_use]
    pub fn temperature(request: TemperatureRequest) -> Self {
        Self::Temperature { request }
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<HomeChange>) -> Self {
        Self::Batch { changes }
    }

    /// Returns the number of individual changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch { changes } => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            HomeChange::toggle_power("3"),
            HomeChange::TogglePower {
                id: DeviceId::from("3")
            }
        );
        assert_eq!(
            HomeChange::adjust_room_temperature("5", -10),
            HomeChange::AdjustRoomTemperature {
                id: RoomId::from("5"),
                delta: -10
            }
        );
    }

    #[test]
    fn change_count() {
        assert_eq!(HomeChange::ToggleArmed.change_count(), 1);

        let batch = HomeChange::batch(vec![
            HomeChange::toggle_power("1"),
            HomeChange::temperature(TemperatureRequest::UP),
        ]);
        assert_eq!(batch.change_count(), 2);

        let nested = HomeChange::batch(vec![batch, HomeChange::ToggleSystemPower]);
        assert_eq!(nested.change_count(), 3);

        assert_eq!(HomeChange::batch(vec![]).change_count(), 0);
    }

    #[test]
    fn deserializes_tagged_json() {
        let change: HomeChange =
            serde_json::from_str(r#"{ "op": "set_volume", "id": "7", "level": 45 }"#).unwrap();
        assert_eq!(change, HomeChange::set_volume("7", Level::new(45).unwrap()));

        let change: HomeChange =
            serde_json::from_str(r#"{ "op": "temperature", "request": { "step": -1 } }"#).unwrap();
        assert_eq!(change, HomeChange::temperature(TemperatureRequest::DOWN));

        let change: HomeChange = serde_json::from_str(r#"{ "op": "toggle_armed" }"#).unwrap();
        assert_eq!(change, HomeChange::ToggleArmed);
    }
}
