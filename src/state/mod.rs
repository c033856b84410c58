// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home state management.
//!
//! [`HomeState`] is the single owner of the device list, the room list,
//! the global target temperature and the remaining dashboard switches. Its
//! methods are the only write surface; each delegates to the pure mutation
//! API and, when the result differs from the current value, adopts it and
//! notifies subscribers. [`HomeChange`] describes the same mutations as data
//! so they can be queued, logged or batched.
//!
//! # Examples
//!
//! ```
//! use homedeck::state::{HomeChange, HomeState};
//!
//! let mut home = HomeState::default();
//!
//! // Apply returns true if state actually changed
//! assert!(home.apply(&HomeChange::toggle_power("9")));
//! assert_eq!(home.active_count(), 5);
//!
//! // Unknown ids are silently ignored
//! assert!(!home.apply(&HomeChange::toggle_power("missing")));
//! ```

mod home_change;
mod home_state;

pub use home_change::HomeChange;
pub use home_state::HomeState;
