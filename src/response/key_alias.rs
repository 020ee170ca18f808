// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key aliasing between the bridge's field names and the model's.

use serde_json::{Map, Value};

/// Table of whole-key renames applied to a decoded response.
///
/// The bridge emits lowercase field names (`name`, `modelid`, ...) while
/// the light model addresses them as `Name`, `ModelId`, and so on. The
/// renames apply to object keys at every nesting level. String values are
/// never touched, so a light called `rename-me` keeps its name.
///
/// # Examples
///
/// ```
/// use huebridge_lib::response::KeyAliases;
/// use serde_json::json;
///
/// let patched = KeyAliases::LIGHT.apply(json!({"name": "rename-me", "state": {"on": true}}));
/// assert_eq!(patched, json!({"Name": "rename-me", "state": {"On": true}}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyAliases(&'static [(&'static str, &'static str)]);

impl KeyAliases {
    /// Renames applied to the light listing.
    pub const LIGHT_LIST: Self = Self(&[("name", "Name")]);

    /// Renames applied to a single light.
    pub const LIGHT: Self = Self(&[
        ("on", "On"),
        ("name", "Name"),
        ("type", "Type"),
        ("modelid", "ModelId"),
        ("swversion", "SoftwareVersion"),
    ]);

    /// Returns the `(bridge, model)` pairs of this table.
    #[must_use]
    pub const fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.0
    }

    /// Returns the model name for a bridge key, if the table renames it.
    #[must_use]
    pub fn rename(&self, key: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| *to)
    }

    /// Renames the keys of every object inside `value`.
    #[must_use]
    pub fn apply(&self, value: Value) -> Value {
        match value {
            Value::Object(fields) => {
                let fields: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| {
                        let key = self.rename(&key).map_or(key, str::to_string);
                        (key, self.apply(value))
                    })
                    .collect();
                Value::Object(fields)
            }
            Value::Array(items) => Value::Array(items.into_iter().map(|v| self.apply(v)).collect()),
            other => other,
        }
    }
}
