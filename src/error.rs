// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `homedeck` library.
//!
//! The mutation API never fails: targeting an unknown id is a silent no-op
//! and numeric inputs are clamped. Errors only arise at the edges, when
//! constructing constrained values from raw input, parsing names, or
//! loading a home configuration.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The home configuration is inconsistent.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },
}

/// Errors related to parsing names and documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A device type name was not recognised.
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),

    /// A device role name was not recognised.
    #[error("unknown device role: {0}")]
    UnknownDeviceRole(String),

    /// A tab name was not recognised.
    #[error("unknown tab: {0}")]
    UnknownTab(String),
}

/// Errors raised while validating a home configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two devices share the same id.
    #[error("duplicate device id: {0}")]
    DuplicateDeviceId(String),

    /// Two rooms share the same id.
    #[error("duplicate room id: {0}")]
    DuplicateRoomId(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
