// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only values derived from the device list.
//!
//! Projections are recomputed on every call; nothing is cached.

use crate::types::{DeviceRole, DeviceType};

use super::{Device, DeviceId};

/// Flat per-device power estimate, in watts.
pub const WATTS_PER_ACTIVE_DEVICE: f64 = 12.5;

/// Returns the device with the given id.
#[must_use]
pub fn find<'a>(devices: &'a [Device], id: &DeviceId) -> Option<&'a Device> {
    devices.iter().find(|d| d.id == *id)
}

/// Returns the first device with the given display name.
///
/// Prefer [`find_by_role`]; names are display text and may change.
#[must_use]
pub fn find_by_name<'a>(devices: &'a [Device], name: &str) -> Option<&'a Device> {
    devices.iter().find(|d| d.name == name)
}

/// Returns the first device tagged with `role`.
#[must_use]
pub fn find_by_role(devices: &[Device], role: DeviceRole) -> Option<&Device> {
    devices.iter().find(|d| d.has_role(role))
}

/// Returns the devices whose room label equals `room`, in list order.
pub fn devices_in_room<'a>(devices: &'a [Device], room: &'a str) -> impl Iterator<Item = &'a Device> {
    devices.iter().filter(move |d| d.room == room)
}

/// Number of devices that are on.
#[must_use]
pub fn active_count(devices: &[Device]) -> usize {
    devices.iter().filter(|d| d.is_on).count()
}

/// Number of devices in `room` that are on.
#[must_use]
pub fn active_count_in_room(devices: &[Device], room: &str) -> usize {
    devices_in_room(devices, room).filter(|d| d.is_on).count()
}

/// Estimated power draw in watts: a flat
/// [`WATTS_PER_ACTIVE_DEVICE`] per active device.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimated_power_draw(devices: &[Device]) -> f64 {
    active_count(devices) as f64 * WATTS_PER_ACTIVE_DEVICE
}

/// Ambient brightness: the highest brightness among powered lights tagged
/// [`DeviceRole::AmbientLight`], or 0 if none is lit.
#[must_use]
pub fn ambient_brightness(devices: &[Device]) -> u8 {
    devices
        .iter()
        .filter(|d| d.kind == DeviceType::Light && d.has_role(DeviceRole::AmbientLight))
        .map(Device::lit_brightness)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{set_brightness, toggle_power};
    use crate::seed;
    use crate::types::Level;

    #[test]
    fn seeded_active_count_is_four() {
        assert_eq!(active_count(&seed::devices()), 4);
    }

    #[test]
    fn seeded_power_draw_is_fifty_watts() {
        let watts = estimated_power_draw(&seed::devices());
        assert!((watts - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_list_projections() {
        assert_eq!(active_count(&[]), 0);
        assert_eq!(ambient_brightness(&[]), 0);
        assert!(estimated_power_draw(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn ambient_brightness_seeded() {
        // Main Light on at 75, Floor Lamp off
        assert_eq!(ambient_brightness(&seed::devices()), 75);
    }

    #[test]
    fn ambient_brightness_zero_when_both_off() {
        let devices = toggle_power(&seed::devices(), &DeviceId::from("1"));
        let devices = set_brightness(&devices, &DeviceId::from("9"), Level::MAX);
        assert_eq!(ambient_brightness(&devices), 0);
    }

    #[test]
    fn ambient_brightness_takes_max_of_lit_fixtures() {
        let devices = toggle_power(&seed::devices(), &DeviceId::from("9"));
        let devices = set_brightness(&devices, &DeviceId::from("9"), Level::new(90).unwrap());
        assert_eq!(ambient_brightness(&devices), 90);
    }

    #[test]
    fn ambient_brightness_ignores_untagged_lights() {
        // Accent Lights has no ambient role
        let devices = toggle_power(&seed::devices(), &DeviceId::from("6"));
        let devices = set_brightness(&devices, &DeviceId::from("6"), Level::MAX);
        assert_eq!(ambient_brightness(&devices), 75);
    }

    #[test]
    fn role_lookup_matches_name_lookup_on_seed() {
        let devices = seed::devices();
        assert_eq!(
            find_by_role(&devices, DeviceRole::Display),
            find_by_name(&devices, "Smart TV")
        );
        assert_eq!(
            find_by_role(&devices, DeviceRole::SoundSystem),
            find_by_name(&devices, "Sound System")
        );
        assert_eq!(
            find_by_role(&devices, DeviceRole::AmbientLight),
            find_by_name(&devices, "Main Light")
        );
    }

    #[test]
    fn room_projections() {
        let devices = seed::devices();
        assert_eq!(devices_in_room(&devices, "Living Room").count(), 5);
        assert_eq!(active_count_in_room(&devices, "Living Room"), 3);
        assert_eq!(active_count_in_room(&devices, "Kitchen"), 1);
        assert_eq!(active_count_in_room(&devices, "Attic"), 0);
    }

    #[test]
    fn find_by_id() {
        let devices = seed::devices();
        assert_eq!(find(&devices, &DeviceId::from("5")).unwrap().name, "Coffee Maker");
        assert!(find(&devices, &DeviceId::from("0")).is_none());
    }
}
