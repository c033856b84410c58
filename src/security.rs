// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security panel model.
//!
//! Three switches (alarm, smart lock, notifications), a static camera list
//! and a static log of recent events. Nothing here talks to real hardware.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Security switches.
///
/// # Examples
///
/// ```
/// use homedeck::security::SecurityState;
///
/// let state = SecurityState::default();
/// assert!(!state.armed);
/// assert!(state.door_locked);
///
/// let armed = state.toggle_armed();
/// assert!(armed.armed);
/// assert_eq!(armed.door_locked, state.door_locked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityState {
    /// Whether the alarm system is armed.
    pub armed: bool,
    /// Whether the smart lock is engaged.
    pub door_locked: bool,
    /// Whether notifications are enabled.
    pub notifications: bool,
}

impl Default for SecurityState {
    fn default() -> Self {
        Self {
            armed: false,
            door_locked: true,
            notifications: true,
        }
    }
}

impl SecurityState {
    /// Returns the state with the alarm flipped.
    #[must_use]
    pub fn toggle_armed(self) -> Self {
        Self {
            armed: !self.armed,
            ..self
        }
    }

    /// Returns the state with the lock flipped.
    #[must_use]
    pub fn toggle_door_lock(self) -> Self {
        Self {
            door_locked: !self.door_locked,
            ..self
        }
    }

    /// Returns the state with notifications flipped.
    #[must_use]
    pub fn toggle_notifications(self) -> Self {
        Self {
            notifications: !self.notifications,
            ..self
        }
    }
}

/// Reported status of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    /// Streaming.
    Active,
    /// Not reachable.
    Offline,
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("Active"),
            Self::Offline => f.write_str("Offline"),
        }
    }
}

/// A security camera entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Where the camera is mounted.
    pub location: String,
    /// Reported status.
    pub status: CameraStatus,
}

impl Camera {
    /// Creates a camera entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        status: CameraStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            status,
        }
    }
}

/// Number of cameras reporting [`CameraStatus::Active`].
#[must_use]
pub fn active_camera_count(cameras: &[Camera]) -> usize {
    cameras
        .iter()
        .filter(|c| c.status == CameraStatus::Active)
        .count()
}

/// Severity of a logged security event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
    /// Confirmation of a completed action.
    Success,
}

/// An entry in the recent security events log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// Identifier.
    pub id: String,
    /// Human-readable description.
    pub message: String,
    /// Relative time label, e.g. "2 minutes ago".
    pub when: String,
    /// Severity.
    pub kind: EventKind,
}

impl SecurityEvent {
    /// Creates a log entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        when: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            when: when.into(),
            kind,
        }
    }
}
