// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamic effect type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Dynamic effect of a light.
///
/// `colorloop` cycles through all hues at the current brightness and
/// saturation until `none` is sent.
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::Effect;
///
/// let effect: Effect = "COLORLOOP".parse().unwrap();
/// assert_eq!(effect.as_str(), "colorloop");
///
/// assert!("rainbow".parse::<Effect>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// No effect.
    #[default]
    None,
    /// Cycle through all hues.
    ColorLoop,
}

impl Effect {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ColorLoop => "colorloop",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "colorloop" => Ok(Self::ColorLoop),
            _ => Err(ValueError::InvalidEffect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_parse() {
        assert_eq!("colorloop".parse::<Effect>(), Ok(Effect::ColorLoop));
        assert_eq!("COLORLOOP".parse::<Effect>(), Ok(Effect::ColorLoop));
        assert_eq!("NONE".parse::<Effect>(), Ok(Effect::None));
    }

    #[test]
    fn effect_parse_rejects_unknown() {
        assert_eq!(
            "rainbow".parse::<Effect>(),
            Err(ValueError::InvalidEffect("rainbow".to_string()))
        );
    }
}
