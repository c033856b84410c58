// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room summaries and the room mutation API.
//!
//! Rooms are tracked independently of the device list. The
//! `active_devices` counter is moved only by [`toggle_lights`], so it is a
//! heuristic and can drift from the actual power state of the devices
//! labelled with the room's name.

mod mutation;
mod record;

pub use mutation::{adjust_temperature, toggle_lights};
pub use record::{Room, RoomId, find, total_devices};
