// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for home state subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::device::Device;
use crate::event::HomeEvent;
use crate::room::Room;
use crate::types::Temperature;

/// Unique identifier for a subscription.
///
/// Returned when registering a callback; pass it to
/// [`CallbackRegistry::unsubscribe`] to remove the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type DevicesCallback = Arc<dyn Fn(&[Device]) + Send + Sync>;

type RoomsCallback = Arc<dyn Fn(&[Room]) + Send + Sync>;

type TemperatureCallback = Arc<dyn Fn(Temperature) + Send + Sync>;

type EventCallback = Arc<dyn Fn(&HomeEvent) + Send + Sync>;

/// Registry of home state callbacks.
///
/// Uses `parking_lot::RwLock` for interior mutability so callbacks can be
/// registered through a shared reference while the owner keeps mutating.
/// Callbacks must not register or unregister callbacks on the same
/// registry while being dispatched.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    devices_callbacks: RwLock<HashMap<SubscriptionId, DevicesCallback>>,
    rooms_callbacks: RwLock<HashMap<SubscriptionId, RoomsCallback>>,
    temperature_callbacks: RwLock<HashMap<SubscriptionId, TemperatureCallback>>,
    /// Receive every event.
    event_callbacks: RwLock<HashMap<SubscriptionId, EventCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            devices_callbacks: RwLock::new(HashMap::new()),
            rooms_callbacks: RwLock::new(HashMap::new()),
            temperature_callbacks: RwLock::new(HashMap::new()),
            event_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback receiving the new device list after each change.
    pub fn on_devices_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Device]) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.devices_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback receiving the new room list after each change.
    pub fn on_rooms_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Room]) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.rooms_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback receiving the new global target temperature.
    pub fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all events.
    pub fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&HomeEvent) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.event_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.devices_callbacks.write().remove(&id).is_some()
            || self.rooms_callbacks.write().remove(&id).is_some()
            || self.temperature_callbacks.write().remove(&id).is_some()
            || self.event_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.devices_callbacks.write().clear();
        self.rooms_callbacks.write().clear();
        self.temperature_callbacks.write().clear();
        self.event_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches an event to the generic callbacks and to the callbacks
    /// registered for its kind, in arbitrary order.
    pub fn dispatch(&self, event: &HomeEvent) {
        {
            let callbacks = self.event_callbacks.read();
            for callback in callbacks.values() {
                callback(event);
            }
        }

        match event {
            HomeEvent::DevicesChanged { devices } => {
                let callbacks = self.devices_callbacks.read();
                for callback in callbacks.values() {
                    callback(devices.as_slice());
                }
            }
            HomeEvent::RoomsChanged { rooms } => {
                let callbacks = self.rooms_callbacks.read();
                for callback in callbacks.values() {
                    callback(rooms.as_slice());
                }
            }
            HomeEvent::TemperatureChanged { temperature } => {
                let callbacks = self.temperature_callbacks.read();
                for callback in callbacks.values() {
                    callback(*temperature);
                }
            }
            HomeEvent::SecurityChanged { .. }
            | HomeEvent::SystemPowerChanged { .. }
            | HomeEvent::TabChanged { .. } => {
                // Only generic callbacks observe these
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.devices_callbacks.read().len()
            + self.rooms_callbacks.read().len()
            + self.temperature_callbacks.read().len()
            + self.event_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    use crate::seed;

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let registry = CallbackRegistry::new();
        let a = registry.on_event(|_| {});
        let b = registry.on_devices_changed(|_| {});
        assert_ne!(a, b);
        assert_eq!(registry.callback_count(), 2);
    }

    #[test]
    fn devices_callback_receives_list() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));

        let c = Arc::clone(&counter);
        registry.on_devices_changed(move |devices| {
            c.fetch_add(u32::try_from(devices.len()).unwrap(), Ordering::SeqCst);
        });

        registry.dispatch(&HomeEvent::DevicesChanged {
            devices: seed::devices(),
        });
        assert_eq!(counter.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn kind_specific_callbacks_ignore_other_events() {
        let registry = CallbackRegistry::new();
        let rooms_calls = Arc::new(AtomicU32::new(0));
        let all_calls = Arc::new(AtomicU32::new(0));

        let r = Arc::clone(&rooms_calls);
        registry.on_rooms_changed(move |_| {
            r.fetch_add(1, Ordering::SeqCst);
        });
        let a = Arc::clone(&all_calls);
        registry.on_event(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&HomeEvent::TemperatureChanged {
            temperature: Temperature::DEFAULT,
        });
        registry.dispatch(&HomeEvent::SystemPowerChanged { on: false });

        assert_eq!(rooms_calls.load(Ordering::SeqCst), 0);
        assert_eq!(all_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn temperature_callback_receives_value() {
        let registry = CallbackRegistry::new();
        let last = Arc::new(AtomicU32::new(0));

        let l = Arc::clone(&last);
        registry.on_temperature_changed(move |t| {
            l.store(u32::try_from(t.value()).unwrap(), Ordering::SeqCst);
        });

        registry.dispatch(&HomeEvent::TemperatureChanged {
            temperature: Temperature::MAX,
        });
        assert_eq!(last.load(Ordering::SeqCst), 85);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let id = registry.on_rooms_changed(|_| {});
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();
        registry.on_event(|_| {});
        registry.on_temperature_changed(|_| {});
        registry.clear();
        assert!(registry.is_empty());
    }
}
