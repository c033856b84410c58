// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room summary records and lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Temperature;

/// Stable identifier of a room.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Aggregate summary of one room.
///
/// `devices` is a static total; `active_devices` is a counter moved by
/// light toggles only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Stable unique identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Room target temperature.
    pub temperature: Temperature,
    /// Total number of devices in the room.
    pub devices: u32,
    /// Heuristic count of active devices.
    pub active_devices: u32,
    /// Whether the room lights are on.
    pub lights_on: bool,
}

impl Room {
    /// Creates a room summary.
    #[must_use]
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        temperature: Temperature,
        devices: u32,
        active_devices: u32,
        lights_on: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            temperature,
            devices,
            active_devices,
            lights_on,
        }
    }
}

/// Returns the room with the given id.
#[must_use]
pub fn find<'a>(rooms: &'a [Room], id: &RoomId) -> Option<&'a Room> {
    rooms.iter().find(|r| r.id == *id)
}

/// Sum of the static device totals over all rooms.
#[must_use]
pub fn total_devices(rooms: &[Room]) -> u32 {
    rooms.iter().map(|r| r.devices).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn seeded_total_devices() {
        assert_eq!(total_devices(&seed::rooms()), 36);
    }

    #[test]
    fn find_room() {
        let rooms = seed::rooms();
        assert_eq!(find(&rooms, &RoomId::from("5")).unwrap().name, "Garage");
        assert!(find(&rooms, &RoomId::from("7")).is_none());
    }

    #[test]
    fn deserializes_from_camel_case() {
        let json = r#"{"id":"9","name":"Attic","temperature":70,"devices":2,"activeDevices":0,"lightsOn":false}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.temperature.value(), 70);
        assert_eq!(room.active_devices, 0);
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let json = r#"{"id":"9","name":"Attic","temperature":99,"devices":2,"activeDevices":0,"lightsOn":false}"#;
        assert!(serde_json::from_str::<Room>(json).is_err());
    }
}
