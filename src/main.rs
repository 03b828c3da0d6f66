use crate::app_config::AppConfig;
use prism::conversion::to_rgb;
use prism::domain::{Color, ColorError, ColorGamut, RgbColor};
use prism::hue::LightState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

mod app_config;

#[instrument(skip(gamut, brightness))]
fn report(color: &Color, gamut: &ColorGamut, brightness: f64) -> Result<(), ColorError> {
    let xy = color.to_chromaticity(gamut)?;
    let rgb = to_rgb(xy, gamut, brightness)?;
    let state = LightState::builder().on(true).color(color, gamut)?.build();

    match state.to_json() {
        Ok(json) => info!(x = xy.x(), y = xy.y(), rgb = rgb.to_hex(), "🎨 {}", json),
        Err(e) => warn!("⚠️ Unable to serialize the light state: {:?}", e),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let gamut = config.conversion().gamut();
    let brightness = config.conversion().brightness();

    for color in config.colors() {
        if let Err(e) = report(color, &gamut, brightness) {
            warn!(?color, "⚠️ Unable to convert color: {}", e);
        }
    }

    let mut rng = match config.conversion().seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    for _ in 0..config.conversion().random_colors() {
        let color = Color::from(RgbColor::random(&mut rng));
        if let Err(e) = report(&color, &gamut, brightness) {
            warn!(?color, "⚠️ Unable to convert color: {}", e);
        }
    }

    info!("🔥 Converted {} colors", config.colors().len() + config.conversion().random_colors());

    Ok(())
}
