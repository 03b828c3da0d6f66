use config::{Config, ConfigError};
use prism::domain::{Color, ColorGamut, GamutType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    conversion: Conversion,
    #[serde(default)]
    colors: Vec<Color>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

#[derive(Debug, Deserialize)]
pub struct Conversion {
    gamut_type: GamutType,
    gamut: Option<ColorGamut>,
    #[serde(default = "default_brightness")]
    brightness: f64,
    #[serde(default)]
    random_colors: usize,
    seed: Option<u64>,
}

fn default_brightness() -> f64 {
    1.0
}

impl Conversion {
    /// The custom gamut if one is configured, otherwise the preset for the gamut type.
    pub fn gamut(&self) -> ColorGamut {
        self.gamut.unwrap_or_else(|| self.gamut_type.gamut())
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn random_colors(&self) -> usize {
        self.random_colors
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
