// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color representation of a light state.

use crate::types::{ColorTemperature, XyColor};

/// One of the three mutually exclusive color representations.
///
/// A [`LightState`](super::LightState) holds at most one of these; a state
/// without a color mode only switches the light and sets its brightness.
///
/// # Examples
///
/// ```
/// use huebridge_lib::state::ColorMode;
/// use huebridge_lib::types::ColorTemperature;
///
/// let mode = ColorMode::Temperature(ColorTemperature::WARM);
/// assert_eq!(mode.as_str(), "ct");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMode {
    /// Hue (0-65535) and saturation.
    HueSaturation {
        /// Position on the color wheel; 0 and 65535 are both red.
        hue: u16,
        /// Saturation, 0 is white.
        saturation: u16,
    },
    /// White color temperature.
    Temperature(ColorTemperature),
    /// CIE xy color space coordinates.
    ColorSpace(XyColor),
}

impl ColorMode {
    /// Returns the bridge's `colormode` name for this variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HueSaturation { .. } => "hs",
            Self::Temperature(_) => "ct",
            Self::ColorSpace(_) => "xy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_names() {
        let hs = ColorMode::HueSaturation {
            hue: 0,
            saturation: 0,
        };
        assert_eq!(hs.as_str(), "hs");
        assert_eq!(ColorMode::Temperature(ColorTemperature::COOL).as_str(), "ct");
        assert_eq!(ColorMode::ColorSpace(XyColor::default()).as_str(), "xy");
    }
}
