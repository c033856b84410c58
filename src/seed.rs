// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Literal initial data for the demo home.
//!
//! Nine devices across three rooms, six room summaries, four cameras, four
//! logged security events and two energy series. Tests rely on these values
//! exactly.

use crate::device::Device;
use crate::energy::{EnergySummary, UsageSample};
use crate::room::Room;
use crate::security::{Camera, CameraStatus, EventKind, SecurityEvent};
use crate::types::{DeviceRole, DeviceType, Level, Temperature};

/// Builds a level from a literal known to be in range.
fn level(value: u8) -> Level {
    Level::clamped(i32::from(value))
}

/// Builds a temperature from a literal known to be in range.
fn temperature(value: i32) -> Temperature {
    Temperature::clamped(value)
}

/// The initial device list.
#[must_use]
pub fn devices() -> Vec<Device> {
    vec![
        Device::new("1", "Main Light", "Living Room", DeviceType::Light)
            .with_power(true)
            .with_brightness(level(75))
            .with_role(DeviceRole::AmbientLight),
        Device::new("2", "Smart TV", "Living Room", DeviceType::Tv)
            .with_power(true)
            .with_role(DeviceRole::Display),
        Device::new("3", "Sound System", "Living Room", DeviceType::Speaker)
            .with_volume(level(50))
            .with_role(DeviceRole::SoundSystem),
        Device::new("4", "Ceiling Fan", "Bedroom", DeviceType::Fan),
        Device::new("5", "Coffee Maker", "Kitchen", DeviceType::Appliance),
        Device::new("6", "Accent Lights", "Bedroom", DeviceType::Light).with_brightness(level(60)),
        Device::new("7", "Kitchen Speaker", "Kitchen", DeviceType::Speaker)
            .with_power(true)
            .with_volume(level(30)),
        Device::new("8", "WiFi Router", "Living Room", DeviceType::Network).with_power(true),
        Device::new("9", "Floor Lamp", "Living Room", DeviceType::Light)
            .with_brightness(level(50))
            .with_role(DeviceRole::AmbientLight),
    ]
}

/// The initial room summaries.
#[must_use]
pub fn rooms() -> Vec<Room> {
    vec![
        Room::new("1", "Living Room", temperature(72), 8, 5, true),
        Room::new("2", "Bedroom", temperature(68), 6, 2, false),
        Room::new("3", "Kitchen", temperature(70), 10, 7, true),
        Room::new("4", "Bathroom", temperature(74), 4, 3, true),
        Room::new("5", "Garage", temperature(65), 5, 1, false),
        Room::new("6", "Garden", temperature(82), 3, 2, false),
    ]
}

/// The security cameras.
#[must_use]
pub fn cameras() -> Vec<Camera> {
    vec![
        Camera::new("1", "Front Door", "Entrance", CameraStatus::Active),
        Camera::new("2", "Backyard", "Garden", CameraStatus::Active),
        Camera::new("3", "Garage", "Garage", CameraStatus::Active),
        Camera::new("4", "Driveway", "Outside", CameraStatus::Offline),
    ]
}

/// The recent security events, newest first.
#[must_use]
pub fn security_events() -> Vec<SecurityEvent> {
    vec![
        SecurityEvent::new("1", "Front door unlocked", "2 minutes ago", EventKind::Info),
        SecurityEvent::new(
            "2",
            "Motion detected - Backyard",
            "15 minutes ago",
            EventKind::Warning,
        ),
        SecurityEvent::new("3", "System armed", "2 hours ago", EventKind::Success),
        SecurityEvent::new("4", "Garage door opened", "3 hours ago", EventKind::Info),
    ]
}

/// Today's usage at four-hour intervals.
#[must_use]
pub fn daily_usage() -> Vec<UsageSample> {
    [
        ("00:00", 2.4),
        ("04:00", 1.8),
        ("08:00", 4.2),
        ("12:00", 5.8),
        ("16:00", 6.5),
        ("20:00", 7.2),
        ("23:59", 3.5),
    ]
    .into_iter()
    .map(|(label, kwh)| UsageSample::new(label, kwh))
    .collect()
}

/// This week's usage per day.
#[must_use]
pub fn weekly_usage() -> Vec<UsageSample> {
    [
        ("Mon", 45.0),
        ("Tue", 52.0),
        ("Wed", 38.0),
        ("Thu", 48.0),
        ("Fri", 55.0),
        ("Sat", 42.0),
        ("Sun", 40.0),
    ]
    .into_iter()
    .map(|(label, kwh)| UsageSample::new(label, kwh))
    .collect()
}

/// Headline energy figures.
#[must_use]
pub fn energy_summary() -> EnergySummary {
    EnergySummary {
        current_kw: 4.2,
        change_from_yesterday_pct: -12,
        month_cost: 124,
        month_saved: 18,
        efficiency_pct: 94,
        efficiency_change_pct: 3,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nine_devices_with_unique_ids() {
        let devices = devices();
        assert_eq!(devices.len(), 9);
        let ids: HashSet<_> = devices.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn devices_span_three_rooms() {
        let rooms: HashSet<_> = devices().into_iter().map(|d| d.room).collect();
        assert_eq!(rooms.len(), 3);
    }

    #[test]
    fn initially_on_ids() {
        let on: Vec<_> = devices()
            .into_iter()
            .filter(|d| d.is_on)
            .map(|d| d.id.to_string())
            .collect();
        assert_eq!(on, ["1", "2", "7", "8"]);
    }

    #[test]
    fn level_fields_follow_device_type() {
        for device in devices() {
            assert_eq!(device.brightness.is_some(), device.kind.has_brightness());
            assert_eq!(device.volume.is_some(), device.kind.has_volume());
        }
    }

    #[test]
    fn six_rooms() {
        let rooms = rooms();
        assert_eq!(rooms.len(), 6);
        assert_eq!(rooms[1].name, "Bedroom");
        assert!(!rooms[1].lights_on);
        assert_eq!(rooms[1].active_devices, 2);
        assert_eq!(rooms[4].temperature.value(), 65);
    }
}
