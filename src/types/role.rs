// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Functional role tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A functional tag attached to a device, independent of its display name.
///
/// Views that need "the ambient lights" or "the sound system" look devices
/// up by role instead of matching on the free-text name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceRole {
    /// A light contributing to the room's ambient brightness.
    AmbientLight,
    /// The main display (television).
    Display,
    /// The main sound system.
    SoundSystem,
}

impl DeviceRole {
    /// Every role.
    pub const ALL: [Self; 3] = [Self::AmbientLight, Self::Display, Self::SoundSystem];

    /// Returns the kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AmbientLight => "ambient-light",
            Self::Display => "display",
            Self::SoundSystem => "sound-system",
        }
    }
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownDeviceRole(s.to_string()))
    }
}
