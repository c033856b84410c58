// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Initial home configuration.
//!
//! A [`HomeConfig`] describes the device list, the room summaries and the
//! global target temperature a [`HomeState`](crate::state::HomeState)
//! starts from. The default is the built-in demo home from [`seed`](crate::seed).
//!
//! # JSON format
//!
//! ```json
//! {
//!   "temperature": 70,
//!   "devices": [
//!     { "id": "1", "name": "Desk Lamp", "room": "Office", "type": "light",
//!       "isOn": true, "brightness": 40, "role": "ambient-light" }
//!   ],
//!   "rooms": [
//!     { "id": "1", "name": "Office", "temperature": 70, "devices": 1,
//!       "activeDevices": 1, "lightsOn": true }
//!   ]
//! }
//! ```
//!
//! Omitted sections fall back to the seed data.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::{ConfigError, ParseError, Result};
use crate::room::Room;
use crate::seed;
use crate::types::Temperature;

/// Initial state of the home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Device list.
    #[serde(default = "seed::devices")]
    pub devices: Vec<Device>,
    /// Room summaries.
    #[serde(default = "seed::rooms")]
    pub rooms: Vec<Room>,
    /// Global target temperature.
    #[serde(default)]
    pub temperature: Temperature,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            devices: seed::devices(),
            rooms: seed::rooms(),
            temperature: Temperature::DEFAULT,
        }
    }
}

impl HomeConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the document is malformed or holds an
    /// out-of-range value, and a [`ConfigError`] if ids are duplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use homedeck::config::HomeConfig;
    ///
    /// let config = HomeConfig::from_json_str(r#"{ "temperature": 68 }"#).unwrap();
    /// assert_eq!(config.temperature.value(), 68);
    /// assert_eq!(config.devices.len(), 9);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise the same
    /// errors as [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            devices = config.devices.len(),
            rooms = config.rooms.len(),
            "Loaded home configuration"
        );
        Ok(config)
    }

    /// Checks that device ids and room ids are unique.
    ///
    /// # Errors
    ///
    /// Returns the first duplicated id found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id.as_str()) {
                return Err(ConfigError::DuplicateDeviceId(device.id.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(ConfigError::DuplicateRoomId(room.id.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_is_seed() {
        let config = HomeConfig::default();
        assert_eq!(config.devices, seed::devices());
        assert_eq!(config.rooms, seed::rooms());
        assert_eq!(config.temperature.value(), 72);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_falls_back_to_seed() {
        assert_eq!(HomeConfig::from_json_str("{}").unwrap(), HomeConfig::default());
    }

    #[test]
    fn custom_devices() {
        let json = r#"{
            "devices": [
                { "id": "a", "name": "Desk Lamp", "room": "Office", "type": "light",
                  "isOn": true, "brightness": 40, "role": "ambient-light" }
            ],
            "rooms": []
        }"#;
        let config = HomeConfig::from_json_str(json).unwrap();
        assert_eq!(config.devices.len(), 1);
        assert!(config.rooms.is_empty());
        assert_eq!(crate::device::ambient_brightness(&config.devices), 40);
    }

    #[test]
    fn duplicate_device_id_rejected() {
        let json = r#"{
            "devices": [
                { "id": "1", "name": "A", "room": "R", "type": "fan" },
                { "id": "1", "name": "B", "room": "R", "type": "tv" }
            ]
        }"#;
        let err = HomeConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::DuplicateDeviceId(ref id)) if id == "1"));
    }

    #[test]
    fn duplicate_room_id_rejected() {
        let mut config = HomeConfig::default();
        config.rooms.push(config.rooms[0].clone());
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateRoomId("1".to_string()))
        );
    }

    #[test]
    fn out_of_range_values_rejected() {
        let err = HomeConfig::from_json_str(r#"{ "temperature": 40 }"#).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));

        let json = r#"{
            "devices": [
                { "id": "1", "name": "A", "room": "R", "type": "light", "brightness": 140 }
            ]
        }"#;
        assert!(HomeConfig::from_json_str(json).is_err());
    }

    #[test]
    fn unknown_device_type_rejected() {
        let json = r#"{ "devices": [ { "id": "1", "name": "A", "room": "R", "type": "toaster" } ] }"#;
        assert!(HomeConfig::from_json_str(json).is_err());
    }
}
