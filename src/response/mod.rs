// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response decoding for bridge JSON responses.
//!
//! Responses are decoded in three steps: the raw text is parsed as JSON,
//! object keys are renamed with a [`KeyAliases`] table, and the result is
//! decoded into the model. A response that is the bridge's error envelope
//! (`[{"error": {...}}]`) is reported as [`ParseError::Bridge`]. Every
//! decode failure carries the raw text.

mod key_alias;
mod lights;

pub use key_alias::KeyAliases;
pub(crate) use lights::{decode_light, decode_light_map};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

/// Raw body of a bridge response that is not decoded by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    body: String,
}

impl RawResponse {
    /// Creates a response from its body text.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Parses the body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(|source| ParseError::Json {
            source,
            raw: self.body.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: u32,
    #[serde(default)]
    address: String,
    #[serde(default)]
    description: String,
}

/// Returns the first error of a bridge error envelope.
fn bridge_error(value: &Value, raw: &str) -> Option<ParseError> {
    let first = value.as_array()?.first()?;
    let entry = ErrorEntry::deserialize(first).ok()?;

    Some(ParseError::Bridge {
        kind: entry.error.kind,
        address: entry.error.address,
        description: entry.error.description,
        raw: raw.to_string(),
    })
}

/// Parses `raw`, applies `aliases` and decodes the result.
pub(crate) fn decode<T: DeserializeOwned>(raw: &str, aliases: KeyAliases) -> Result<T, ParseError> {
    let json_error = |source| ParseError::Json {
        source,
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw).map_err(json_error)?;

    if let Some(err) = bridge_error(&value, raw) {
        return Err(err);
    }

    let patched = aliases.apply(value);
    tracing::trace!(patched = %patched, "Decoding aliased bridge response");

    serde_json::from_value(patched).map_err(json_error)
}
