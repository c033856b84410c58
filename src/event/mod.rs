// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events emitted by the home state owner.
//!
//! Every state-changing mutation on a [`HomeState`](crate::state::HomeState)
//! publishes one [`HomeEvent`] carrying the replacement value. The
//! [`EventBus`] uses tokio's broadcast channel so any number of consumers
//! can follow along.
//!
//! # Examples
//!
//! ```
//! use homedeck::event::{EventBus, HomeEvent};
//! use homedeck::types::Temperature;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(HomeEvent::TemperatureChanged { temperature: Temperature::DEFAULT });
//! assert!(matches!(rx.try_recv(), Ok(HomeEvent::TemperatureChanged { .. })));
//! ```

mod event_bus;
mod home_event;

pub use event_bus::EventBus;
pub use home_event::HomeEvent;
