// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HueBridge` Lib - A Rust library to control lights through a Hue bridge.
//!
//! This library provides a blocking client for the bridge's REST API and a
//! typed model of light state.
//!
//! # Supported Features
//!
//! - **Light listing**: All lights known to the bridge, keyed by id
//! - **Light reading**: Metadata and current state of one light
//! - **State control**: Power, brightness, alert, effect, transition time,
//!   and one of three color modes (hue/saturation, color temperature, xy)
//!
//! Bridge discovery and user pairing are not part of this library; the
//! client is built from an address and a username obtained elsewhere.
//!
//! # Quick Start
//!
//! ```no_run
//! use huebridge_lib::{BridgeClient, LightState};
//! use huebridge_lib::types::ColorTemperature;
//!
//! fn main() -> huebridge_lib::Result<()> {
//!     let client = BridgeClient::new("192.168.1.2", "1028d66426293e821ecfd9ef1a0731df")?;
//!
//!     let lights = client.get_all_lights()?;
//!     for light in lights.values() {
//!         println!("{} ({})", light.name(), light.light_type());
//!     }
//!
//!     let state = LightState::temperature().with_color_temperature(ColorTemperature::WARM);
//!     client.push_state_to(1, &state)?;
//!
//!     // Switching off sends {"on":false} only
//!     client.push_state_to(1, &LightState::power(false))?;
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! Requests and responses are reported through [`tracing`] at debug level.
//! The library never installs a subscriber.

mod bridge;
pub mod error;
mod light;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use bridge::{AuthorizedUser, BridgeEndpoint};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use light::Light;
pub use protocol::{BridgeClient, BridgeConfig};
pub use response::{KeyAliases, RawResponse};
pub use state::{ColorMode, LightState};
pub use types::{Alert, ColorTemperature, Effect, XyColor};
