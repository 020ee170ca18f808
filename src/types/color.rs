// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! This module provides the color temperature (mirek) and CIE xy
//! chromaticity types used by the temperature and color-space variants of
//! a light state.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Color temperature in mirek.
///
/// Lower values are cooler (bluer), higher values are warmer. The bridge
/// documents 153 (6500K) to 500 (2000K) but this type does not enforce the
/// range: any value is passed to the bridge as-is.
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::ColorTemperature;
///
/// let ct = ColorTemperature::NEUTRAL;
/// assert_eq!(ct.value(), 285);
/// assert_eq!(ct.to_kelvin(), 3508);
///
/// assert!(ColorTemperature::WARMEST > ColorTemperature::COOLEST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// ~2000K, warmest value supported by the bridge.
    pub const WARMEST: Self = Self(500);

    /// ~2700K, a typical warm consumer bulb.
    pub const WARM: Self = Self(370);

    /// ~3500K, a neutral consumer bulb.
    pub const NEUTRAL: Self = Self(285);

    /// ~4500K, a typical cool consumer bulb.
    pub const COOL: Self = Self(222);

    /// ~6500K, coolest value supported by the bridge.
    pub const COOLEST: Self = Self(153);

    /// Creates a color temperature from a mirek value.
    #[must_use]
    pub const fn new(mirek: u16) -> Self {
        Self(mirek)
    }

    /// Returns the value in mirek.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    ///
    /// A zero mirek value has no Kelvin equivalent and returns 0.
    #[must_use]
    pub fn to_kelvin(&self) -> u32 {
        1_000_000_u32.checked_div(u32::from(self.0)).unwrap_or(0)
    }

    /// Creates a color temperature from a Kelvin value.
    ///
    /// Returns `None` when the Kelvin value has no mirek equivalent that
    /// fits the wire type (0 K and values below 16 K).
    #[must_use]
    pub fn from_kelvin(kelvin: u32) -> Option<Self> {
        let mirek = 1_000_000_u32.checked_div(kelvin)?;
        u16::try_from(mirek).ok().map(Self)
    }
}

impl Default for ColorTemperature {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<u16> for ColorTemperature {
    fn from(mirek: u16) -> Self {
        Self(mirek)
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mirek", self.0)
    }
}

/// CIE 1931 chromaticity coordinates.
///
/// Both coordinates are intended to lie in 0.0-1.0; the type does not
/// enforce it.
///
/// On the wire the pair is written as one string with `..` between the
/// two numbers, e.g. `"0.5..0.25"`.
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::XyColor;
///
/// let xy = XyColor::new(0.5, 0.25);
/// assert_eq!(xy.to_string(), "0.5..0.25");
///
/// let parsed: XyColor = "0.5..0.25".parse().unwrap();
/// assert_eq!(parsed, xy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyColor {
    x: f32,
    y: f32,
}

impl XyColor {
    /// Separator placed between the two coordinates on the wire.
    pub const SEPARATOR: &'static str = "..";

    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

impl Default for XyColor {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

impl fmt::Display for XyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, Self::SEPARATOR, self.y)
    }
}

impl FromStr for XyColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidColorSpace(s.to_string());

        let (x, y) = s.split_once(Self::SEPARATOR).ok_or_else(invalid)?;
        let x = x.trim().parse::<f32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<f32>().map_err(|_| invalid())?;

        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temperature_reference_points() {
        assert_eq!(ColorTemperature::WARMEST.value(), 500);
        assert_eq!(ColorTemperature::WARM.value(), 370);
        assert_eq!(ColorTemperature::NEUTRAL.value(), 285);
        assert_eq!(ColorTemperature::COOL.value(), 222);
        assert_eq!(ColorTemperature::COOLEST.value(), 153);
        assert_eq!(ColorTemperature::default(), ColorTemperature::NEUTRAL);
    }

    #[test]
    fn color_temperature_is_not_range_checked() {
        assert_eq!(ColorTemperature::new(42).value(), 42);
        assert_eq!(ColorTemperature::new(1000).value(), 1000);
    }

    #[test]
    fn color_temperature_kelvin_conversion() {
        assert_eq!(ColorTemperature::COOLEST.to_kelvin(), 6535);
        assert_eq!(ColorTemperature::WARMEST.to_kelvin(), 2000);
        assert_eq!(ColorTemperature::new(0).to_kelvin(), 0);

        assert_eq!(
            ColorTemperature::from_kelvin(2000),
            Some(ColorTemperature::WARMEST)
        );
        assert_eq!(ColorTemperature::from_kelvin(0), None);
        assert_eq!(ColorTemperature::from_kelvin(10), None);
    }

    #[test]
    fn xy_color_wire_string() {
        assert_eq!(XyColor::new(0.5, 0.25).to_string(), "0.5..0.25");
        assert_eq!(XyColor::default().to_string(), "0.5..0.5");
        assert_eq!(XyColor::new(1.0, 0.0).to_string(), "1..0");
    }

    #[test]
    fn xy_color_parse() {
        assert_eq!("0.3..0.7".parse::<XyColor>(), Ok(XyColor::new(0.3, 0.7)));
        assert_eq!("1..0".parse::<XyColor>(), Ok(XyColor::new(1.0, 0.0)));
    }

    #[test]
    fn xy_color_parse_rejects_malformed() {
        assert!("0.5,0.5".parse::<XyColor>().is_err());
        assert!("0.5..".parse::<XyColor>().is_err());
        assert!("abc..0.1".parse::<XyColor>().is_err());
    }
}
