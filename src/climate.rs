// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global temperature control.
//!
//! The home has one target temperature shared by every climate-aware view.
//! A slider sets it absolutely and the +/- buttons step it; both go through
//! the same clamp.

use serde::{Deserialize, Serialize};

use crate::types::Temperature;

/// A request to change the global target temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureRequest {
    /// Set an absolute value in °F.
    Set(i32),
    /// Move by a signed number of degrees.
    Step(i32),
}

impl TemperatureRequest {
    /// One degree warmer.
    pub const UP: Self = Self::Step(1);

    /// One degree cooler.
    pub const DOWN: Self = Self::Step(-1);
}

/// Computes the new global target temperature.
///
/// # Examples
///
/// ```
/// use homedeck::climate::{TemperatureRequest, set_temperature};
/// use homedeck::types::Temperature;
///
/// let current = Temperature::DEFAULT;
/// assert_eq!(set_temperature(current, TemperatureRequest::UP).value(), 73);
/// assert_eq!(set_temperature(current, TemperatureRequest::Set(100)).value(), 85);
/// ```
#[must_use]
pub fn set_temperature(current: Temperature, request: TemperatureRequest) -> Temperature {
    match request {
        TemperatureRequest::Set(value) => Temperature::clamped(value),
        TemperatureRequest::Step(delta) => current.saturating_add(delta),
    }
}
