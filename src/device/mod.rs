// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records, the device mutation API and derived projections.
//!
//! Every mutation is a pure function: it takes the current ordered list of
//! devices and returns a new list in which only the targeted record has
//! changed. Record order is preserved and an unknown id yields a list equal
//! to the input.
//!
//! # Examples
//!
//! ```
//! use homedeck::device::{self, DeviceId};
//! use homedeck::seed;
//!
//! let devices = seed::devices();
//! assert_eq!(device::active_count(&devices), 4);
//!
//! let devices = device::toggle_power(&devices, &DeviceId::from("9"));
//! assert_eq!(device::active_count(&devices), 5);
//! assert_eq!(device::ambient_brightness(&devices), 75);
//! ```

mod device_id;
mod mutation;
mod projection;
mod record;

pub use device_id::DeviceId;
pub use mutation::{adjust_brightness, adjust_volume, set_brightness, set_volume, toggle_power};
pub use projection::{
    WATTS_PER_ACTIVE_DEVICE, active_count, active_count_in_room, ambient_brightness,
    devices_in_room, estimated_power_draw, find, find_by_name, find_by_role,
};
pub use record::Device;
