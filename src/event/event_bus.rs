// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast fan-out of [`HomeEvent`]s.

use tokio::sync::broadcast;

use super::HomeEvent;

/// Events buffered per receiver before the oldest are dropped.
const BACKLOG: usize = 256;

/// Fan-out channel carrying replacement values to every dashboard view.
///
/// A receiver that falls more than 256 events behind gets
/// `RecvError::Lagged` and resumes at the oldest retained event. Each event
/// replaces a whole slice of state, so the newest event of each kind is
/// enough to resynchronize.
///
/// # Examples
///
/// ```
/// use homedeck::event::{EventBus, HomeEvent};
/// use homedeck::view::Tab;
///
/// let bus = EventBus::new();
/// let mut panel = bus.subscribe();
///
/// bus.publish(HomeEvent::TabChanged { tab: Tab::Energy });
/// assert_eq!(
///     panel.try_recv().unwrap(),
///     HomeEvent::TabChanged { tab: Tab::Energy }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<HomeEvent>,
}

impl EventBus {
    /// Opens an empty bus.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BACKLOG);
        Self { sender }
    }

    /// Attaches a new view. It only sees events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HomeEvent> {
        self.sender.subscribe()
    }

    /// Number of views currently attached.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Sends `event` to every attached view.
    pub fn publish(&self, event: HomeEvent) {
        // Err only means nobody is listening
        if self.sender.send(event).is_err() {
            tracing::trace!("home event dropped, no views attached");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::Temperature;

    #[test]
    fn views_attach_and_detach() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let panel = bus.subscribe();
        let grid = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(panel);
        drop(grid);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn device_list_reaches_every_view() {
        let bus = EventBus::new();
        let mut panel = bus.subscribe();
        let mut grid = bus.subscribe();

        bus.publish(HomeEvent::DevicesChanged {
            devices: seed::devices(),
        });

        for view in [&mut panel, &mut grid] {
            let HomeEvent::DevicesChanged { devices } = view.recv().await.unwrap() else {
                panic!("expected a device list");
            };
            assert_eq!(devices.len(), 9);
        }
    }

    #[test]
    fn late_view_misses_earlier_events() {
        let bus = EventBus::new();
        let _early = bus.subscribe();
        bus.publish(HomeEvent::TemperatureChanged {
            temperature: Temperature::MIN,
        });

        let mut late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn publishing_with_no_views_is_harmless() {
        let bus = EventBus::default();
        bus.publish(HomeEvent::SystemPowerChanged { on: false });
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn clones_feed_the_same_views() {
        let bus = EventBus::new();
        let handle = bus.clone();
        let mut panel = bus.subscribe();

        handle.publish(HomeEvent::SystemPowerChanged { on: true });
        assert_eq!(
            panel.try_recv().unwrap(),
            HomeEvent::SystemPowerChanged { on: true }
        );
        assert_eq!(handle.subscriber_count(), 1);
    }
}
