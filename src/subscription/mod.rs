// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synchronous callback subscriptions.
//!
//! Callbacks registered on a [`HomeState`](crate::state::HomeState) run
//! inline, right after each state-changing mutation, before the mutating
//! method returns. For asynchronous consumers use the broadcast
//! [`EventBus`](crate::event::EventBus) instead.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use homedeck::device::DeviceId;
//! use homedeck::state::HomeState;
//!
//! let mut home = HomeState::default();
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! let sub = home.callbacks().on_devices_changed(move |devices| {
//!     counter.store(homedeck::device::active_count(devices), Ordering::SeqCst);
//! });
//!
//! home.toggle_power(&DeviceId::from("4"));
//! assert_eq!(seen.load(Ordering::SeqCst), 5);
//!
//! assert!(home.callbacks().unsubscribe(sub));
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
