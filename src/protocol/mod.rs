// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with a bridge.
//!
//! [`BridgeClient`] exposes the three operations of the bridge REST API
//! this library covers: listing lights, reading one light and pushing a
//! state to a light. Calls are blocking, plain HTTP.

mod http;

pub use http::{BridgeClient, BridgeConfig};
