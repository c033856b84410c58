// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home event types.

use serde::Serialize;

use crate::device::Device;
use crate::room::Room;
use crate::security::SecurityState;
use crate::types::Temperature;
use crate::view::Tab;

/// Events emitted by the home state owner.
///
/// Each event carries the complete replacement value, which consumers adopt
/// as the new current state before their next read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HomeEvent {
    /// The device list was replaced.
    DevicesChanged {
        /// The new device list.
        devices: Vec<Device>,
    },

    /// The room list was replaced.
    RoomsChanged {
        /// The new room list.
        rooms: Vec<Room>,
    },

    /// The global target temperature changed.
    TemperatureChanged {
        /// The new target.
        temperature: Temperature,
    },

    /// One of the security switches changed.
    SecurityChanged {
        /// The new switch states.
        security: SecurityState,
    },

    /// The master system power switch changed.
    SystemPowerChanged {
        /// Whether the system is now powered.
        on: bool,
    },

    /// A different tab was selected.
    TabChanged {
        /// The selected tab.
        tab: Tab,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(HomeEvent::TemperatureChanged {
            temperature: Temperature::DEFAULT,
        })
        .unwrap();
        assert_eq!(json["event"], "temperature_changed");
        assert_eq!(json["temperature"], 72);

        let json = serde_json::to_value(HomeEvent::TabChanged { tab: Tab::Energy }).unwrap();
        assert_eq!(json["tab"], "energy");
    }
}
