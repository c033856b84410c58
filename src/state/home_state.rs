// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The home state owner.

use tokio::sync::broadcast;

use crate::climate::{self, TemperatureRequest};
use crate::config::HomeConfig;
use crate::device::{self, Device, DeviceId};
use crate::error::Result;
use crate::event::{EventBus, HomeEvent};
use crate::room::{self, Room, RoomId};
use crate::security::{Camera, SecurityEvent, SecurityState};
use crate::seed;
use crate::subscription::CallbackRegistry;
use crate::types::{DeviceRole, Level, Temperature};
use crate::view::Tab;

use super::HomeChange;

/// Single owner of the home's mutable state.
///
/// Reads go through accessors returning borrowed slices or copies. Writes go
/// through the mutation methods (or [`apply`](Self::apply)), each of which
/// returns `true` if the state changed. A mutation that leaves the state
/// equal (unknown id, value already set, clamped at a bound) publishes
/// nothing, so subscribers see one replacement value per effective change
/// rather than one per call.
///
/// # Examples
///
/// ```
/// use homedeck::device::DeviceId;
/// use homedeck::state::HomeState;
///
/// let mut home = HomeState::default();
/// assert_eq!(home.active_count(), 4);
/// assert!((home.estimated_power_draw() - 50.0).abs() < f64::EPSILON);
///
/// assert!(home.adjust_brightness(&DeviceId::from("1"), 1000));
/// assert_eq!(home.ambient_brightness(), 100);
///
/// home.toggle_system_power();
/// assert_eq!(home.effective_ambient_brightness(), 0);
/// ```
#[derive(Debug)]
pub struct HomeState {
    devices: Vec<Device>,
    rooms: Vec<Room>,
    temperature: Temperature,
    security: SecurityState,
    cameras: Vec<Camera>,
    security_events: Vec<SecurityEvent>,
    /// Master switch; gates how devices appear, never edits them.
    system_power: bool,
    tab: Tab,
    event_bus: EventBus,
    callbacks: CallbackRegistry,
}

impl HomeState {
    /// Creates a home from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the configuration
    /// holds a duplicated device or room id.
    pub fn new(config: HomeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: HomeConfig) -> Self {
        Self {
            devices: config.devices,
            rooms: config.rooms,
            temperature: config.temperature,
            security: SecurityState::default(),
            cameras: seed::cameras(),
            security_events: seed::security_events(),
            system_power: true,
            tab: Tab::default(),
            event_bus: EventBus::new(),
            callbacks: CallbackRegistry::new(),
        }
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to home events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HomeEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the event bus, for handing to other consumers.
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns the synchronous callback registry.
    #[must_use]
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    fn notify(&self, event: HomeEvent) {
        self.callbacks.dispatch(&event);
        self.event_bus.publish(event);
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The current device list.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// The current room list.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The global target temperature.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// The security switches.
    #[must_use]
    pub fn security(&self) -> SecurityState {
        self.security
    }

    /// The security cameras.
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// The recent security events.
    #[must_use]
    pub fn security_events(&self) -> &[SecurityEvent] {
        &self.security_events
    }

    /// Whether the master system power switch is on.
    #[must_use]
    pub fn system_power(&self) -> bool {
        self.system_power
    }

    /// The selected tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the device with the given id.
    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        device::find(&self.devices, id)
    }

    /// Returns the first device tagged with `role`.
    #[must_use]
    pub fn device_by_role(&self, role: DeviceRole) -> Option<&Device> {
        device::find_by_role(&self.devices, role)
    }

    /// Returns the room with the given id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        room::find(&self.rooms, id)
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Number of devices that are on.
    #[must_use]
    pub fn active_count(&self) -> usize {
        device::active_count(&self.devices)
    }

    /// Estimated power draw in watts.
    #[must_use]
    pub fn estimated_power_draw(&self) -> f64 {
        device::estimated_power_draw(&self.devices)
    }

    /// Ambient brightness from the device records alone.
    #[must_use]
    pub fn ambient_brightness(&self) -> u8 {
        device::ambient_brightness(&self.devices)
    }

    /// Ambient brightness as displayed: 0 while system power is off.
    #[must_use]
    pub fn effective_ambient_brightness(&self) -> u8 {
        if self.system_power {
            self.ambient_brightness()
        } else {
            0
        }
    }

    /// Whether a device appears on: it is on and system power is on.
    ///
    /// Returns `false` for an unknown id.
    #[must_use]
    pub fn is_effectively_on(&self, id: &DeviceId) -> bool {
        self.system_power && self.device(id).is_some_and(|d| d.is_on)
    }

    /// Sum of the static device totals over all rooms.
    #[must_use]
    pub fn total_room_devices(&self) -> u32 {
        room::total_devices(&self.rooms)
    }

    // =========================================================================
    // Device mutations
    // =========================================================================

    fn replace_devices(&mut self, next: Vec<Device>, op: &'static str, id: &DeviceId) -> bool {
        if next == self.devices {
            tracing::trace!(op, device = %id, "Device mutation left state unchanged");
            return false;
        }
        self.devices = next;
        tracing::debug!(op, device = %id, active = self.active_count(), "Devices updated");
        self.notify(HomeEvent::DevicesChanged {
            devices: self.devices.clone(),
        });
        true
    }

    /// Flips the power state of a device.
    pub fn toggle_power(&mut self, id: &DeviceId) -> bool {
        let next = device::toggle_power(&self.devices, id);
        self.replace_devices(next, "toggle_power", id)
    }

    /// Sets the brightness of a device.
    pub fn set_brightness(&mut self, id: &DeviceId, level: Level) -> bool {
        let next = device::set_brightness(&self.devices, id, level);
        self.replace_devices(next, "set_brightness", id)
    }

    /// Sets the volume of a device.
    pub fn set_volume(&mut self, id: &DeviceId, level: Level) -> bool {
        let next = device::set_volume(&self.devices, id, level);
        self.replace_devices(next, "set_volume", id)
    }

    /// Offsets the brightness of a device.
    pub fn adjust_brightness(&mut self, id: &DeviceId, delta: i32) -> bool {
        let next = device::adjust_brightness(&self.devices, id, delta);
        self.replace_devices(next, "adjust_brightness", id)
    }

    /// Offsets the volume of a device.
    pub fn adjust_volume(&mut self, id: &DeviceId, delta: i32) -> bool {
        let next = device::adjust_volume(&self.devices, id, delta);
        self.replace_devices(next, "adjust_volume", id)
    }

    // =========================================================================
    // Room mutations
    // =========================================================================

    fn replace_rooms(&mut self, next: Vec<Room>, op: &'static str, id: &RoomId) -> bool {
        if next == self.rooms {
            tracing::trace!(op, room = %id, "Room mutation left state unchanged");
            return false;
        }
        self.rooms = next;
        tracing::debug!(op, room = %id, "Rooms updated");
        self.notify(HomeEvent::RoomsChanged {
            rooms: self.rooms.clone(),
        });
        true
    }

    /// Flips a room's lights.
    pub fn toggle_room_lights(&mut self, id: &RoomId) -> bool {
        let next = room::toggle_lights(&self.rooms, id);
        self.replace_rooms(next, "toggle_lights", id)
    }

    /// Offsets a room's temperature.
    pub fn adjust_room_temperature(&mut self, id: &RoomId, delta: i32) -> bool {
        let next = room::adjust_temperature(&self.rooms, id, delta);
        self.replace_rooms(next, "adjust_temperature", id)
    }

    // =========================================================================
    // Global switches
    // =========================================================================

    /// Changes the global target temperature.
    pub fn set_temperature(&mut self, request: TemperatureRequest) -> bool {
        let next = climate::set_temperature(self.temperature, request);
        if next == self.temperature {
            return false;
        }
        self.temperature = next;
        tracing::debug!(temperature = next.value(), "Target temperature updated");
        self.notify(HomeEvent::TemperatureChanged { temperature: next });
        true
    }

    fn replace_security(&mut self, next: SecurityState) -> bool {
        if next == self.security {
            return false;
        }
        self.security = next;
        tracing::debug!(
            armed = next.armed,
            door_locked = next.door_locked,
            notifications = next.notifications,
            "Security switches updated"
        );
        self.notify(HomeEvent::SecurityChanged { security: next });
        true
    }

    /// Flips the alarm.
    pub fn toggle_armed(&mut self) -> bool {
        self.replace_security(self.security.toggle_armed())
    }

    /// Flips the smart lock.
    pub fn toggle_door_lock(&mut self) -> bool {
        self.replace_security(self.security.toggle_door_lock())
    }

    /// Flips notifications.
    pub fn toggle_notifications(&mut self) -> bool {
        self.replace_security(self.security.toggle_notifications())
    }

    /// Flips the master system power switch. Device records are untouched.
    pub fn toggle_system_power(&mut self) -> bool {
        self.system_power = !self.system_power;
        tracing::debug!(on = self.system_power, "System power toggled");
        self.notify(HomeEvent::SystemPowerChanged {
            on: self.system_power,
        });
        true
    }

    /// Selects a tab.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.tab {
            return false;
        }
        self.tab = tab;
        self.notify(HomeEvent::TabChanged { tab });
        true
    }

    // =========================================================================
    // Change application
    // =========================================================================

    /// Applies a change and returns `true` if any state changed.
    ///
    /// Batches apply their changes in order; each nested change that alters
    /// state publishes its own event.
    pub fn apply(&mut self, change: &HomeChange) -> bool {
        match change {
            HomeChange::TogglePower { id } => self.toggle_power(id),
            HomeChange::SetBrightness { id, level } => self.set_brightness(id, *level),
            HomeChange::SetVolume { id, level } => self.set_volume(id, *level),
            HomeChange::AdjustBrightness { id, delta } => self.adjust_brightness(id, *delta),
            HomeChange::AdjustVolume { id, delta } => self.adjust_volume(id, *delta),
            HomeChange::ToggleRoomLights { id } => self.toggle_room_lights(id),
            HomeChange::AdjustRoomTemperature { id, delta } => {
                self.adjust_room_temperature(id, *delta)
            }
            HomeChange::Temperature { request } => self.set_temperature(*request),
            HomeChange::ToggleArmed => self.toggle_armed(),
            HomeChange::ToggleDoorLock => self.toggle_door_lock(),
            HomeChange::ToggleNotifications => self.toggle_notifications(),
            HomeChange::ToggleSystemPower => self.toggle_system_power(),
            HomeChange::SelectTab { tab } => self.select_tab(*tab),
            HomeChange::Batch { changes } => {
                let changed = changes
                    .iter()
                    .fold(false, |changed, nested| self.apply(nested) || changed);
                tracing::debug!(changes = change.change_count(), changed, "Applied batch");
                changed
            }
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::from_valid(HomeConfig::default())
    }
}
