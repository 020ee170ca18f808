// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of light listings and single lights.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::bridge::BridgeEndpoint;
use crate::error::ParseError;
use crate::light::{Light, LightBody, LightSummaryBody};

use super::{KeyAliases, decode};

/// Decodes a `/lights` listing.
///
/// Every light gets its id from its key in the listing. State objects are
/// skipped; the returned lights have no state.
pub(crate) fn decode_light_map(
    raw: &str,
    bridge: &Arc<BridgeEndpoint>,
) -> Result<BTreeMap<u32, Light>, ParseError> {
    let bodies: BTreeMap<u32, LightSummaryBody> = decode(raw, KeyAliases::LIGHT_LIST)?;

    Ok(bodies
        .into_iter()
        .map(|(id, body)| (id, body.into_light(id, Arc::clone(bridge))))
        .collect())
}

/// Decodes a `/lights/{id}` response, assigning the requested id.
pub(crate) fn decode_light(
    raw: &str,
    id: u32,
    bridge: &Arc<BridgeEndpoint>,
) -> Result<Light, ParseError> {
    let body: LightBody = decode(raw, KeyAliases::LIGHT)?;
    Ok(body.into_light(id, Arc::clone(bridge)))
}
