// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alert type for light identification flashes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Alert effect of a light.
///
/// The bridge accepts exactly three values on the wire: `none`, `select`
/// (one breathe cycle) and `lselect` (breathe cycles for 15 seconds).
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::Alert;
///
/// let alert: Alert = "SELECT".parse().unwrap();
/// assert_eq!(alert, Alert::Select);
/// assert_eq!(alert.as_str(), "select");
///
/// assert!("blink".parse::<Alert>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alert {
    /// No alert.
    #[default]
    None,
    /// A single breathe cycle.
    Select,
    /// Breathe cycles for 15 seconds.
    LongSelect,
}

impl Alert {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Select => "select",
            Self::LongSelect => "lselect",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alert {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "select" => Ok(Self::Select),
            "lselect" => Ok(Self::LongSelect),
            _ => Err(ValueError::InvalidAlert(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_parse_is_case_insensitive() {
        assert_eq!("select".parse::<Alert>(), Ok(Alert::Select));
        assert_eq!("SELECT".parse::<Alert>(), Ok(Alert::Select));
        assert_eq!("LSelect".parse::<Alert>(), Ok(Alert::LongSelect));
        assert_eq!("None".parse::<Alert>(), Ok(Alert::None));
    }

    #[test]
    fn alert_parse_rejects_unknown() {
        assert_eq!(
            "blink".parse::<Alert>(),
            Err(ValueError::InvalidAlert("blink".to_string()))
        );
        assert!("".parse::<Alert>().is_err());
    }

    #[test]
    fn alert_default_is_none() {
        assert_eq!(Alert::default(), Alert::None);
        assert_eq!(Alert::default().to_string(), "none");
    }
}
