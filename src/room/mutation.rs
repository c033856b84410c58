// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room mutation API.

use super::{Room, RoomId};

fn replace_matching(rooms: &[Room], id: &RoomId, update: impl Fn(&Room) -> Room) -> Vec<Room> {
    rooms
        .iter()
        .map(|room| {
            if room.id == *id {
                update(room)
            } else {
                room.clone()
            }
        })
        .collect()
}

/// Flips the lights of the room with the given id.
///
/// Turning the lights on increments `active_devices`; turning them off
/// decrements it, stopping at 0.
///
/// # Examples
///
/// ```
/// use homedeck::room::{self, RoomId};
/// use homedeck::seed;
///
/// let bedroom = RoomId::from("2");
/// let rooms = room::toggle_lights(&seed::rooms(), &bedroom);
/// let after = room::find(&rooms, &bedroom).unwrap();
/// assert!(after.lights_on);
/// assert_eq!(after.active_devices, 3);
/// ```
#[must_use]
pub fn toggle_lights(rooms: &[Room], id: &RoomId) -> Vec<Room> {
    replace_matching(rooms, id, |room| {
        let lights_on = !room.lights_on;
        let active_devices = if lights_on {
            room.active_devices.saturating_add(1)
        } else {
            room.active_devices.saturating_sub(1)
        };
        Room {
            lights_on,
            active_devices,
            ..room.clone()
        }
    })
}

/// Offsets the temperature of the room with the given id by `delta`,
/// saturating at 60 and 85 °F.
#[must_use]
pub fn adjust_temperature(rooms: &[Room], id: &RoomId, delta: i32) -> Vec<Room> {
    replace_matching(rooms, id, |room| Room {
        temperature: room.temperature.saturating_add(delta),
        ..room.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::find;
    use crate::seed;
    use crate::types::Temperature;

    #[test]
    fn bedroom_toggle_round_trip() {
        let bedroom = RoomId::from("2");
        let rooms = seed::rooms();

        let on = toggle_lights(&rooms, &bedroom);
        let room = find(&on, &bedroom).unwrap();
        assert!(room.lights_on);
        assert_eq!(room.active_devices, 3);

        let off = toggle_lights(&on, &bedroom);
        let room = find(&off, &bedroom).unwrap();
        assert!(!room.lights_on);
        assert_eq!(room.active_devices, 2);
        assert_eq!(off, rooms);
    }

    #[test]
    fn turning_off_floors_counter_at_zero() {
        let rooms = vec![Room::new("x", "Shed", Temperature::DEFAULT, 1, 0, true)];
        let off = toggle_lights(&rooms, &RoomId::from("x"));
        assert!(!off[0].lights_on);
        assert_eq!(off[0].active_devices, 0);
    }

    #[test]
    fn garage_temperature_clamps_at_sixty() {
        let garage = RoomId::from("5");
        let rooms = adjust_temperature(&seed::rooms(), &garage, -10);
        assert_eq!(find(&rooms, &garage).unwrap().temperature.value(), 60);
    }

    #[test]
    fn temperature_clamps_at_eighty_five() {
        let garden = RoomId::from("6");
        let rooms = adjust_temperature(&seed::rooms(), &garden, 1000);
        assert_eq!(find(&rooms, &garden).unwrap().temperature.value(), 85);
    }

    #[test]
    fn other_rooms_untouched() {
        let rooms = seed::rooms();
        let after = adjust_temperature(&rooms, &RoomId::from("1"), 1);
        assert_eq!(after[0].temperature.value(), 73);
        assert_eq!(&after[1..], &rooms[1..]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let rooms = seed::rooms();
        let missing = RoomId::from("nope");
        assert_eq!(toggle_lights(&rooms, &missing), rooms);
        assert_eq!(adjust_temperature(&rooms, &missing, 5), rooms);
    }
}
