// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light model.

use std::sync::Arc;

use serde::Deserialize;

use crate::bridge::BridgeEndpoint;
use crate::state::LightState;

/// A light managed by a bridge.
///
/// Lights are built by decoding bridge responses. The id is not part of
/// the response body; it comes from the listing key or from the id that
/// was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    id: u32,
    name: String,
    light_type: String,
    model_id: String,
    software_version: String,
    bridge: Option<Arc<BridgeEndpoint>>,
    state: Option<LightState>,
}

impl Light {
    /// Creates a light known only by its id.
    ///
    /// Useful for pushing a state without reading the light first.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            light_type: String::new(),
            model_id: String::new(),
            software_version: String::new(),
            bridge: None,
            state: None,
        }
    }

    /// Returns the bridge-assigned id.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the user-facing name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the light type, e.g. `Extended color light`.
    #[must_use]
    pub fn light_type(&self) -> &str {
        &self.light_type
    }

    /// Returns the model id, e.g. `LCT001`.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the firmware version.
    #[must_use]
    pub fn software_version(&self) -> &str {
        &self.software_version
    }

    /// Returns the bridge this light was read from.
    #[must_use]
    pub fn bridge(&self) -> Option<&BridgeEndpoint> {
        self.bridge.as_deref()
    }

    /// Returns the state, when it was part of the response.
    ///
    /// Lights from a listing never carry a state.
    #[must_use]
    pub fn state(&self) -> Option<&LightState> {
        self.state.as_ref()
    }

    /// Takes the state out of the light.
    #[must_use]
    pub fn into_state(self) -> Option<LightState> {
        self.state
    }
}

/// Light object as it appears in a bridge response once its keys have been
/// through [`KeyAliases::LIGHT`](crate::response::KeyAliases::LIGHT).
#[derive(Debug, Deserialize)]
pub(crate) struct LightBody {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Type", default)]
    light_type: String,
    #[serde(rename = "ModelId", default)]
    model_id: String,
    #[serde(rename = "SoftwareVersion", default)]
    software_version: String,
    #[serde(default)]
    state: Option<LightState>,
}

impl LightBody {
    /// Builds the light with the given id, keeping the state.
    pub(crate) fn into_light(self, id: u32, bridge: Arc<BridgeEndpoint>) -> Light {
        Light {
            id,
            name: self.name,
            light_type: self.light_type,
            model_id: self.model_id,
            software_version: self.software_version,
            bridge: Some(bridge),
            state: self.state,
        }
    }
}

/// Entry of the light listing once its keys have been through
/// [`KeyAliases::LIGHT_LIST`](crate::response::KeyAliases::LIGHT_LIST).
///
/// Only `name` is renamed there; the other keys keep the bridge spelling.
/// The state object is not decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct LightSummaryBody {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "type", default)]
    light_type: String,
    #[serde(rename = "modelid", default)]
    model_id: String,
    #[serde(rename = "swversion", default)]
    software_version: String,
}

impl LightSummaryBody {
    /// Builds the light with the given id and no state.
    pub(crate) fn into_light(self, id: u32, bridge: Arc<BridgeEndpoint>) -> Light {
        Light {
            id,
            name: self.name,
            light_type: self.light_type,
            model_id: self.model_id,
            software_version: self.software_version,
            bridge: Some(bridge),
            state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn light_new_has_only_id() {
        let light = Light::new(3);
        assert_eq!(light.id(), 3);
        assert!(light.name().is_empty());
        assert!(light.bridge().is_none());
        assert!(light.state().is_none());
    }

    #[test]
    fn body_into_light_assigns_id_and_bridge() {
        let body: LightBody = serde_json::from_value(json!({
            "Name": "Desk",
            "Type": "Dimmable light",
            "ModelId": "LWB004",
            "SoftwareVersion": "66012040",
            "state": {"On": true, "bri": 40}
        }))
        .unwrap();

        let bridge = Arc::new(BridgeEndpoint::new("192.168.1.2"));
        let light = body.into_light(9, Arc::clone(&bridge));

        assert_eq!(light.id(), 9);
        assert_eq!(light.name(), "Desk");
        assert_eq!(light.light_type(), "Dimmable light");
        assert_eq!(light.model_id(), "LWB004");
        assert_eq!(light.software_version(), "66012040");
        assert_eq!(light.bridge(), Some(bridge.as_ref()));
        assert_eq!(light.state().map(LightState::brightness), Some(40));
    }

    #[test]
    fn body_ignores_bridge_spelling() {
        let body: LightBody = serde_json::from_value(json!({
            "name": "Desk",
            "modelid": "LWB004",
            "swversion": "66012040"
        }))
        .unwrap();

        let light = body.into_light(1, Arc::new(BridgeEndpoint::new("h")));
        assert!(light.name().is_empty());
        assert!(light.model_id().is_empty());
        assert!(light.software_version().is_empty());
    }

    #[test]
    fn summary_skips_state_object() {
        let body: LightSummaryBody = serde_json::from_value(json!({
            "Name": "Desk",
            "type": "Extended color light",
            "state": {"anything": [1, 2, 3]}
        }))
        .unwrap();

        let light = body.into_light(1, Arc::new(BridgeEndpoint::new("h")));
        assert_eq!(light.name(), "Desk");
        assert_eq!(light.light_type(), "Extended color light");
        assert!(light.state().is_none());
        assert!(light.into_state().is_none());
    }
}
