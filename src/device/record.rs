// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device record.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceRole, DeviceType, Level};

use super::DeviceId;

/// One controllable unit.
///
/// `brightness` is meaningful for lights and `volume` for speakers. Both
/// persist across power-off: turning a device off never clears them.
///
/// The `room` field is a free-text label, not a reference to a
/// [`Room`](crate::room::Room).
///
/// # Examples
///
/// ```
/// use homedeck::device::Device;
/// use homedeck::types::{DeviceRole, DeviceType, Level};
///
/// let lamp = Device::new("9", "Floor Lamp", "Living Room", DeviceType::Light)
///     .with_brightness(Level::new(50).unwrap())
///     .with_role(DeviceRole::AmbientLight);
///
/// assert!(!lamp.is_on);
/// assert_eq!(lamp.brightness.map(|b| b.value()), Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Stable unique identifier.
    pub id: DeviceId,
    /// Display label.
    pub name: String,
    /// Free-text room label.
    pub room: String,
    /// Kind of device.
    #[serde(rename = "type")]
    pub kind: DeviceType,
    /// Power state.
    #[serde(default)]
    pub is_on: bool,
    /// Brightness, for lights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Level>,
    /// Volume, for speakers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Level>,
    /// Functional role used for role-keyed lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<DeviceRole>,
}

impl Device {
    /// Creates a powered-off device with no level fields and no role.
    #[must_use]
    pub fn new(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        room: impl Into<String>,
        kind: DeviceType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room: room.into(),
            kind,
            is_on: false,
            brightness: None,
            volume: None,
            role: None,
        }
    }

    /// Sets the initial power state.
    #[must_use]
    pub fn with_power(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Sets the initial brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Level) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the initial volume.
    #[must_use]
    pub fn with_volume(mut self, volume: Level) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Tags the device with a role.
    #[must_use]
    pub fn with_role(mut self, role: DeviceRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Returns `true` if the device has the given role.
    #[must_use]
    pub fn has_role(&self, role: DeviceRole) -> bool {
        self.role == Some(role)
    }

    /// Brightness as seen by a viewer: the stored value while on, 0 while off.
    #[must_use]
    pub fn lit_brightness(&self) -> u8 {
        if self.is_on {
            self.brightness.map_or(0, |b| b.value())
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_camel_case() {
        let json = r#"{
            "id": "3",
            "name": "Sound System",
            "room": "Living Room",
            "type": "speaker",
            "isOn": false,
            "volume": 50
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.kind, DeviceType::Speaker);
        assert_eq!(device.volume, Some(Level::new(50).unwrap()));
        assert_eq!(device.brightness, None);
        assert_eq!(device.role, None);
    }

    #[test]
    fn serialization_skips_absent_levels() {
        let fan = Device::new("4", "Ceiling Fan", "Bedroom", DeviceType::Fan);
        let json = serde_json::to_value(&fan).unwrap();
        assert_eq!(json["type"], "fan");
        assert_eq!(json["isOn"], false);
        assert!(json.get("brightness").is_none());
        assert!(json.get("volume").is_none());
    }

    #[test]
    fn lit_brightness_is_zero_when_off() {
        let light = Device::new("1", "Main Light", "Living Room", DeviceType::Light)
            .with_brightness(Level::new(75).unwrap());
        assert_eq!(light.lit_brightness(), 0);
        assert_eq!(light.with_power(true).lit_brightness(), 75);
    }
}
