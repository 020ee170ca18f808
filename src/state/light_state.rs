// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state value and its wire encoding.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ParseError, ValueError};
use crate::types::{Alert, ColorTemperature, Effect, XyColor};

use super::ColorMode;

/// Desired or observed behavior of a light.
///
/// Every state carries the power flag, brightness, alert, effect and
/// transition time. On top of that it holds at most one [`ColorMode`].
///
/// Brightness, hue, saturation, transition time and the color-space
/// coordinates are not range checked beyond what their integer types
/// allow; the bridge decides what to do with unusual values.
///
/// # Examples
///
/// ```
/// use huebridge_lib::state::LightState;
/// use huebridge_lib::types::ColorTemperature;
///
/// let state = LightState::temperature().with_color_temperature(ColorTemperature::WARM);
/// assert!(state.is_on());
/// assert_eq!(state.brightness(), 255);
///
/// let off = state.with_on(false);
/// assert_eq!(off.to_wire_json(), r#"{"on":false}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "StateBody")]
pub struct LightState {
    on: bool,
    brightness: u8,
    alert: Alert,
    effect: Effect,
    transition_time: u16,
    color: Option<ColorMode>,
}

impl LightState {
    /// Brightness set by the color-mode constructors.
    pub const DEFAULT_BRIGHTNESS: u8 = 255;

    /// Transition time set by the color-mode constructors, in tenths of a
    /// second.
    pub const DEFAULT_TRANSITION_TIME: u16 = 4;

    /// Payload sent for any state that switches the light off.
    ///
    /// The bridge warns about state parameters sent alongside a power-off,
    /// so nothing else is included.
    pub const OFF_PAYLOAD: &'static str = r#"{"on":false}"#;

    /// Creates an on/off-only state without a color mode.
    ///
    /// Brightness and transition time start at 0; set them explicitly when
    /// switching a light on with this state.
    #[must_use]
    pub const fn power(on: bool) -> Self {
        Self {
            on,
            brightness: 0,
            alert: Alert::None,
            effect: Effect::None,
            transition_time: 0,
            color: None,
        }
    }

    /// Power on at full brightness with the default transition time.
    const fn colored(color: ColorMode) -> Self {
        Self::power(true)
            .with_brightness(Self::DEFAULT_BRIGHTNESS)
            .with_transition_time(Self::DEFAULT_TRANSITION_TIME)
            .with_color(color)
    }

    /// Creates a hue/saturation state with hue and saturation at 0.
    #[must_use]
    pub const fn hue_saturation() -> Self {
        Self::colored(ColorMode::HueSaturation {
            hue: 0,
            saturation: 0,
        })
    }

    /// Creates a color temperature state at [`ColorTemperature::NEUTRAL`].
    #[must_use]
    pub const fn temperature() -> Self {
        Self::colored(ColorMode::Temperature(ColorTemperature::NEUTRAL))
    }

    /// Creates a color-space state at x = y = 0.5.
    #[must_use]
    pub const fn color_space() -> Self {
        Self::colored(ColorMode::ColorSpace(XyColor::new(0.5, 0.5)))
    }

    // ========== Builders ==========

    /// Sets the power flag.
    #[must_use]
    pub const fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Sets the brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the transition time in tenths of a second.
    #[must_use]
    pub const fn with_transition_time(mut self, transition_time: u16) -> Self {
        self.transition_time = transition_time;
        self
    }

    /// Sets the alert.
    #[must_use]
    pub const fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = alert;
        self
    }

    /// Sets the effect.
    #[must_use]
    pub const fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Replaces the color mode.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = Some(color);
        self
    }

    /// Switches to the hue/saturation variant with the given values.
    #[must_use]
    pub const fn with_hue_saturation(self, hue: u16, saturation: u16) -> Self {
        self.with_color(ColorMode::HueSaturation { hue, saturation })
    }

    /// Switches to the temperature variant with the given value.
    #[must_use]
    pub const fn with_color_temperature(self, temperature: ColorTemperature) -> Self {
        self.with_color(ColorMode::Temperature(temperature))
    }

    /// Switches to the color-space variant with the given coordinates.
    #[must_use]
    pub const fn with_xy(self, x: f32, y: f32) -> Self {
        self.with_color(ColorMode::ColorSpace(XyColor::new(x, y)))
    }

    // ========== Accessors ==========

    /// Returns whether the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Returns the brightness.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the alert.
    #[must_use]
    pub const fn alert(&self) -> Alert {
        self.alert
    }

    /// Returns the effect.
    #[must_use]
    pub const fn effect(&self) -> Effect {
        self.effect
    }

    /// Returns the transition time in tenths of a second.
    #[must_use]
    pub const fn transition_time(&self) -> u16 {
        self.transition_time
    }

    /// Returns the active color mode, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&ColorMode> {
        self.color.as_ref()
    }

    /// Returns the hue when the hue/saturation variant is active.
    #[must_use]
    pub const fn hue(&self) -> Option<u16> {
        match self.color {
            Some(ColorMode::HueSaturation { hue, .. }) => Some(hue),
            _ => None,
        }
    }

    /// Returns the saturation when the hue/saturation variant is active.
    #[must_use]
    pub const fn saturation(&self) -> Option<u16> {
        match self.color {
            Some(ColorMode::HueSaturation { saturation, .. }) => Some(saturation),
            _ => None,
        }
    }

    /// Returns the color temperature when the temperature variant is active.
    #[must_use]
    pub const fn color_temperature(&self) -> Option<ColorTemperature> {
        match self.color {
            Some(ColorMode::Temperature(ct)) => Some(ct),
            _ => None,
        }
    }

    /// Returns the coordinates when the color-space variant is active.
    #[must_use]
    pub const fn xy(&self) -> Option<XyColor> {
        match self.color {
            Some(ColorMode::ColorSpace(xy)) => Some(xy),
            _ => None,
        }
    }

    // ========== Mutators ==========

    /// Sets the power flag.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Sets the brightness.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Sets the transition time in tenths of a second.
    pub fn set_transition_time(&mut self, transition_time: u16) {
        self.transition_time = transition_time;
    }

    /// Replaces the color mode. `None` leaves an on/off-only state.
    pub fn set_color(&mut self, color: Option<ColorMode>) {
        self.color = color;
    }

    /// Sets the alert.
    pub fn set_alert(&mut self, alert: Alert) {
        self.alert = alert;
    }

    /// Sets the effect.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
    }

    /// Parses and stores an alert name, case-insensitively.
    ///
    /// On rejection the previous alert is kept. Callers that want the
    /// silent-ignore behavior discard the result:
    ///
    /// ```
    /// use huebridge_lib::state::LightState;
    /// use huebridge_lib::types::Alert;
    ///
    /// let mut state = LightState::hue_saturation();
    /// state.try_set_alert("SELECT").ok();
    /// state.try_set_alert("blink").ok();
    /// assert_eq!(state.alert(), Alert::Select);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidAlert` if the name is not an alert.
    pub fn try_set_alert(&mut self, value: &str) -> Result<(), ValueError> {
        self.alert = value.parse()?;
        Ok(())
    }

    /// Parses and stores an effect name, case-insensitively.
    ///
    /// On rejection the previous effect is kept.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidEffect` if the name is not an effect.
    pub fn try_set_effect(&mut self, value: &str) -> Result<(), ValueError> {
        self.effect = value.parse()?;
        Ok(())
    }

    // ========== Wire encoding ==========

    /// Returns the JSON value sent to the bridge for this state.
    ///
    /// An off state is always exactly `{"on":false}`. An on state carries
    /// every base field plus the fields of the active color mode. The
    /// color-space pair goes into the `ct` key as `"x..y"`.
    #[must_use]
    pub fn to_wire_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("on".to_string(), Value::Bool(self.on));
        if !self.on {
            return Value::Object(fields);
        }

        fields.insert("bri".to_string(), self.brightness.into());
        fields.insert("alert".to_string(), self.alert.as_str().into());
        fields.insert("effect".to_string(), self.effect.as_str().into());
        fields.insert("transitiontime".to_string(), self.transition_time.into());

        match self.color {
            Some(ColorMode::HueSaturation { hue, saturation }) => {
                fields.insert("hue".to_string(), hue.into());
                fields.insert("sat".to_string(), saturation.into());
            }
            Some(ColorMode::Temperature(ct)) => {
                fields.insert("ct".to_string(), ct.value().into());
            }
            Some(ColorMode::ColorSpace(xy)) => {
                fields.insert("ct".to_string(), xy.to_string().into());
            }
            None => {}
        }

        Value::Object(fields)
    }

    /// Returns the JSON text sent to the bridge for this state.
    #[must_use]
    pub fn to_wire_json(&self) -> String {
        if !self.on {
            return Self::OFF_PAYLOAD.to_string();
        }
        self.to_wire_value().to_string()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::power(false)
    }
}

// ========== Decoding ==========

/// `ct` is a mirek number for temperature states and an `"x..y"` string for
/// color-space states.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CtField {
    Mirek(u16),
    ColorSpace(String),
}

/// State object as it appears in a bridge response once its keys have been
/// through [`KeyAliases::LIGHT`](crate::response::KeyAliases::LIGHT).
#[derive(Debug, Deserialize)]
struct StateBody {
    #[serde(rename = "On")]
    on: bool,
    #[serde(default)]
    bri: u8,
    #[serde(default)]
    alert: Option<String>,
    #[serde(default)]
    effect: Option<String>,
    #[serde(default)]
    transitiontime: u16,
    #[serde(default)]
    hue: Option<u16>,
    #[serde(default)]
    sat: Option<u16>,
    #[serde(default)]
    ct: Option<CtField>,
    #[serde(default)]
    xy: Option<[f32; 2]>,
    #[serde(default)]
    colormode: Option<String>,
}

impl StateBody {
    /// Picks the color variant, preferring the one named by `colormode`.
    fn color_mode(&self) -> Result<Option<ColorMode>, ParseError> {
        let hs = match (self.hue, self.sat) {
            (Some(hue), Some(saturation)) => Some(ColorMode::HueSaturation { hue, saturation }),
            _ => None,
        };

        let ct = match self.ct {
            Some(CtField::Mirek(mirek)) => {
                Some(ColorMode::Temperature(ColorTemperature::new(mirek)))
            }
            _ => None,
        };

        let xy = match (&self.ct, self.xy) {
            (Some(CtField::ColorSpace(raw)), _) => {
                let xy = raw
                    .parse::<XyColor>()
                    .map_err(|e| ParseError::InvalidValue {
                        field: "ct".to_string(),
                        message: e.to_string(),
                    })?;
                Some(ColorMode::ColorSpace(xy))
            }
            (_, Some([x, y])) => Some(ColorMode::ColorSpace(XyColor::new(x, y))),
            _ => None,
        };

        let mode = match self.colormode.as_deref() {
            Some("hs") if hs.is_some() => hs,
            Some("ct") if ct.is_some() => ct,
            Some("xy") if xy.is_some() => xy,
            _ => hs.or(ct).or(xy),
        };

        Ok(mode)
    }
}

impl TryFrom<StateBody> for LightState {
    type Error = ParseError;

    fn try_from(body: StateBody) -> Result<Self, Self::Error> {
        let color = body.color_mode()?;

        // Unknown names fall back to `none`, same as a rejected setter.
        let alert = body
            .alert
            .as_deref()
            .and_then(|a| a.parse().ok())
            .unwrap_or_default();
        let effect = body
            .effect
            .as_deref()
            .and_then(|e| e.parse().ok())
            .unwrap_or_default();

        Ok(Self {
            on: body.on,
            brightness: body.bri,
            alert,
            effect,
            transition_time: body.transitiontime,
            color,
        })
    }
}
