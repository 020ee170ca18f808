// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HueBridge` library.
//!
//! Failures fall into three groups: rejected values (alert, effect and
//! colour-space strings), transport failures while talking to the bridge,
//! and decode failures on the bridge's responses. Decode failures keep the
//! raw response text so a caller can tell a malformed bridge answer apart
//! from an unexpected shape.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the bridge.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a bridge response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation.
///
/// Returned by the explicit parse functions of the value types. The light
/// state keeps its previous value when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Alert must be one of `none`, `select`, `lselect`.
    #[error("invalid alert: {0}")]
    InvalidAlert(String),

    /// Effect must be one of `none`, `colorloop`.
    #[error("invalid effect: {0}")]
    InvalidEffect(String),

    /// Colour-space string is not two numbers joined by `..`.
    #[error("invalid color space coordinates: {0}")]
    InvalidColorSpace(String),
}

/// Errors related to HTTP communication with the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed (connection refused, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Invalid bridge address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding bridge responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response is not valid JSON or does not match the expected shape.
    #[error("JSON parse error: {source}")]
    Json {
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
        /// Response text as received from the bridge.
        raw: String,
    },

    /// The bridge answered with its error envelope.
    #[error("bridge error {kind} at {address}: {description}")]
    Bridge {
        /// Bridge error type number.
        kind: u32,
        /// Resource address the error refers to.
        address: String,
        /// Human readable description.
        description: String,
        /// Response text as received from the bridge.
        raw: String,
    },

    /// A field holds a value that cannot be represented.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

impl ParseError {
    /// Returns the raw response text attached to this error, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Json { raw, .. } | Self::Bridge { raw, .. } => Some(raw),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidAlert("blink".to_string());
        assert_eq!(err.to_string(), "invalid alert: blink");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidEffect("rainbow".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidEffect(ref e)) if e == "rainbow"));
    }

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 - Not Found");
    }

    #[test]
    fn json_error_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ParseError::Json {
            source,
            raw: "{oops".to_string(),
        };
        assert_eq!(err.raw(), Some("{oops"));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn bridge_error_display() {
        let err = ParseError::Bridge {
            kind: 1,
            address: "/lights".to_string(),
            description: "unauthorized user".to_string(),
            raw: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "bridge error 1 at /lights: unauthorized user"
        );
    }
}
