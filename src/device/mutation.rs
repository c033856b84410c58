// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device mutation API.
//!
//! All functions return a new list. Records whose id does not match are
//! cloned unchanged, so an unknown id yields a list equal to the input.

use crate::types::Level;

use super::{Device, DeviceId};

/// Rebuilds the list, passing the record(s) matching `id` through `update`.
fn replace_matching(
    devices: &[Device],
    id: &DeviceId,
    update: impl Fn(&Device) -> Device,
) -> Vec<Device> {
    devices
        .iter()
        .map(|device| {
            if device.id == *id {
                update(device)
            } else {
                device.clone()
            }
        })
        .collect()
}

/// Flips the power state of the device with the given id.
#[must_use]
pub fn toggle_power(devices: &[Device], id: &DeviceId) -> Vec<Device> {
    replace_matching(devices, id, |device| Device {
        is_on: !device.is_on,
        ..device.clone()
    })
}

/// Sets the brightness of the device with the given id.
///
/// The value is stored whatever the device type.
#[must_use]
pub fn set_brightness(devices: &[Device], id: &DeviceId, brightness: Level) -> Vec<Device> {
    replace_matching(devices, id, |device| Device {
        brightness: Some(brightness),
        ..device.clone()
    })
}

/// Sets the volume of the device with the given id.
///
/// The value is stored whatever the device type.
#[must_use]
pub fn set_volume(devices: &[Device], id: &DeviceId, volume: Level) -> Vec<Device> {
    replace_matching(devices, id, |device| Device {
        volume: Some(volume),
        ..device.clone()
    })
}

/// Offsets the brightness of the device with the given id by `delta`,
/// saturating at 0 and 100.
///
/// A device without a brightness is left untouched even if its id matches.
///
/// # Examples
///
/// ```
/// use homedeck::device::{self, DeviceId};
/// use homedeck::seed;
///
/// let main_light = DeviceId::from("1");
/// let devices = device::adjust_brightness(&seed::devices(), &main_light, 1000);
/// assert_eq!(device::find(&devices, &main_light).unwrap().brightness.unwrap().value(), 100);
/// ```
#[must_use]
pub fn adjust_brightness(devices: &[Device], id: &DeviceId, delta: i32) -> Vec<Device> {
    replace_matching(devices, id, |device| Device {
        brightness: device.brightness.map(|b| b.saturating_add(delta)),
        ..device.clone()
    })
}

/// Offsets the volume of the device with the given id by `delta`,
/// saturating at 0 and 100.
///
/// A device without a volume is left untouched even if its id matches.
#[must_use]
pub fn adjust_volume(devices: &[Device], id: &DeviceId, delta: i32) -> Vec<Device> {
    replace_matching(devices, id, |device| Device {
        volume: device.volume.map(|v| v.saturating_add(delta)),
        ..device.clone()
    })
}
