use crate::conversion::ConversionError;
use crate::domain::{Chromaticity, Color, ColorError, ColorGamut, MiredColor, RgbColor};
use serde::Serialize;
use tracing::{debug, instrument, warn};

// API: https://developers.meethue.com/develop/hue-api-v2/api-reference/#resource_light__id__put
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct LightState {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<On>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimming: Option<Dimming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<XyColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_temperature: Option<ColorTemperature>,
}

impl LightState {
    pub fn builder() -> LightStateBuilder {
        LightStateBuilder::new()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct On {
    on: bool,
}

#[derive(Debug, PartialEq, Serialize)]
struct Dimming {
    brightness: f64,
}

#[derive(Debug, PartialEq, Serialize)]
struct XyColor {
    xy: Chromaticity,
}

#[derive(Debug, PartialEq, Serialize)]
struct ColorTemperature {
    mirek: MiredColor,
}

/// Builds the body of a light update. Setting a field twice keeps the last value.
#[derive(Debug, Default)]
pub struct LightStateBuilder {
    state: LightState,
}

impl LightStateBuilder {
    pub fn new() -> Self {
        LightStateBuilder::default()
    }

    pub fn on(mut self, on: bool) -> Self {
        self.state.on = Some(On { on });
        self
    }

    /// Brightness in percent, clamped to `[0, 100]`. NaN is treated as off.
    pub fn brightness(mut self, brightness: f64) -> Self {
        let clamped = if brightness.is_nan() { 0.0 } else { brightness.clamp(0.0, 100.0) };
        if clamped != brightness {
            warn!(brightness, clamped, "⚠️ Brightness out of range, clamping");
        }

        self.state.dimming = Some(Dimming { brightness: clamped });
        self
    }

    pub fn xy(mut self, xy: Chromaticity) -> Self {
        self.state.color = Some(XyColor { xy });
        self
    }

    #[instrument(skip(self))]
    pub fn rgb(self, rgb: RgbColor, gamut: &ColorGamut) -> Result<Self, ConversionError> {
        let xy = rgb.to_chromaticity(gamut)?;
        debug!(x = xy.x(), y = xy.y(), "Converted {} to xy", rgb.to_hex());
        Ok(self.xy(xy))
    }

    pub fn color(self, color: &Color, gamut: &ColorGamut) -> Result<Self, ColorError> {
        let xy = color.to_chromaticity(gamut)?;
        Ok(self.xy(xy))
    }

    pub fn color_temperature(mut self, mirek: MiredColor) -> Self {
        self.state.color_temperature = Some(ColorTemperature { mirek });
        self
    }

    pub fn build(self) -> LightState {
        self.state
    }
}
