// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! # Types
//!
//! - [`Alert`] - Identification flash (`none`, `select`, `lselect`)
//! - [`Effect`] - Dynamic effect (`none`, `colorloop`)
//! - [`ColorTemperature`] - Color temperature in mirek
//! - [`XyColor`] - CIE xy chromaticity coordinates

mod alert;
mod color;
mod effect;

pub use alert::Alert;
pub use color::{ColorTemperature, XyColor};
pub use effect::Effect;
