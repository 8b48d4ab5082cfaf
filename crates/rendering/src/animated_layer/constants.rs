//! Tuning values for animated transit layers.

/// Angular frequency of cabin sway, in radians per unit of animation time.
pub const SWAY_FREQUENCY: f64 = 10.0;

/// Peak roll of a swinging gondola cabin, in radians.
pub const CABIN_SWAY_AMPLITUDE: f64 = 0.02;

/// Rail vehicles ride without sway.
pub const RAIL_SWAY_AMPLITUDE: f64 = 0.0;

/// Height of the model origin above ground, in local units.
pub const CABIN_RIDE_HEIGHT: f32 = 3.8;
pub const TRAIN_RIDE_HEIGHT: f32 = 0.5;
pub const TRAM_RIDE_HEIGHT: f32 = 0.5;

pub const DEFAULT_CABIN_COUNT: usize = 3;
pub const DEFAULT_TRAIN_COUNT: usize = 2;
pub const DEFAULT_TRAM_COUNT: usize = 2;
pub const DEFAULT_CAR_COUNT: usize = 3;

/// Speeds are the fraction of the route covered per rendered frame.
pub const DEFAULT_CABIN_SPEED: f64 = 0.00015;
pub const DEFAULT_TRAIN_SPEED: f64 = 0.0002;
pub const DEFAULT_TRAM_SPEED: f64 = 0.0003;

/// Scene lighting every layer asks its surface for.
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_FROM: [f32; 3] = [1.0, 2.0, 1.0];
