// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state model.
//!
//! A [`LightState`] is the payload pushed to a light and the state object
//! read back from the bridge. Its color is one of the [`ColorMode`]
//! variants, or absent for a plain on/off state.
//!
//! # Examples
//!
//! ```
//! use huebridge_lib::state::LightState;
//!
//! let state = LightState::color_space().with_xy(0.5, 0.25);
//! let json: serde_json::Value = serde_json::from_str(&state.to_wire_json()).unwrap();
//! assert_eq!(json["ct"], "0.5..0.25");
//! ```

mod color_mode;
mod light_state;

pub use color_mode::ColorMode;
pub use light_state::LightState;
