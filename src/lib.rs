// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `homedeck` - State model for a simulated smart-home control surface.
//!
//! The crate holds the data behind a single-page home dashboard: a list of
//! devices with power, brightness and volume, a grid of room summaries, a
//! global target temperature, security switches and static energy samples.
//! Nothing here talks to real devices; all data starts from literal seed
//! values or a JSON configuration.
//!
//! # Supported Features
//!
//! - **Device control**: Toggle power, set or step brightness and volume
//! - **Rooms**: Toggle room lights, step room temperature
//! - **Climate**: One global target temperature, clamped to 60-85 °F
//! - **Projections**: Active count, estimated power draw, ambient brightness
//! - **Events**: Broadcast channel and synchronous callbacks on every change
//!
//! # Pure Mutation API
//!
//! ```
//! use homedeck::device::{self, DeviceId};
//! use homedeck::seed;
//!
//! let devices = seed::devices();
//! let devices = device::adjust_volume(&devices, &DeviceId::from("3"), -1000);
//! assert_eq!(devices[2].volume.unwrap().value(), 0);
//!
//! // Unknown ids leave the list unchanged
//! let same = device::toggle_power(&devices, &DeviceId::from("nope"));
//! assert_eq!(same, devices);
//! ```
//!
//! # State Owner
//!
//! ```
//! use homedeck::climate::TemperatureRequest;
//! use homedeck::event::HomeEvent;
//! use homedeck::state::HomeState;
//!
//! let mut home = HomeState::default();
//! let mut events = home.subscribe();
//!
//! home.set_temperature(TemperatureRequest::Step(-20));
//! assert_eq!(home.temperature().value(), 60);
//!
//! let event = events.try_recv().unwrap();
//! assert!(matches!(event, HomeEvent::TemperatureChanged { .. }));
//! ```

pub mod climate;
pub mod config;
pub mod device;
pub mod energy;
pub mod error;
pub mod event;
pub mod room;
pub mod security;
pub mod seed;
pub mod state;
pub mod subscription;
pub mod types;
pub mod view;

pub use climate::TemperatureRequest;
pub use config::HomeConfig;
pub use device::{Device, DeviceId};
pub use error::{ConfigError, Error, ParseError, Result, ValueError};
pub use event::{EventBus, HomeEvent};
pub use room::{Room, RoomId};
pub use security::SecurityState;
pub use state::{HomeChange, HomeState};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use types::{DeviceRole, DeviceType, Level, Temperature};
pub use view::Tab;
