// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the home state model.
//!
//! Each constrained type guarantees its value is within range at
//! construction time, so a stored record can never hold an invalid level
//! or temperature.
//!
//! # Types
//!
//! - [`Level`] - Brightness or volume percentage (0-100)
//! - [`Temperature`] - Target temperature in °F (60-85)
//! - [`DeviceType`] - Kind of device (light, tv, speaker, fan, appliance, network)
//! - [`DeviceRole`] - Optional functional tag used for role-keyed lookups

mod device_type;
mod level;
mod role;
mod temperature;

pub use device_type::DeviceType;
pub use level::Level;
pub use role::DeviceRole;
pub use temperature::Temperature;
