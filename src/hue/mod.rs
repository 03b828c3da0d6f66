mod light_state;

pub use light_state::{LightState, LightStateBuilder};
