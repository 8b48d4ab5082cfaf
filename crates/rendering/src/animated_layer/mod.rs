//! Animated transit layers: vehicles moving along a georeferenced route.
//!
//! One [`AnimatedLayer`] drives every vehicle kind. Per frame it advances its
//! animation time by the current speed, samples the route once per instance
//! at evenly staggered progress values, and draws the instances through the
//! host's camera. [`LayerControls`] adjusts speed and visibility at runtime.

pub mod constants;
mod controls;
mod engine;
mod error;
mod types;

pub use controls::LayerControls;
pub use engine::{instance_progress, AnimatedLayer};
pub use error::LayerError;
pub use types::{
    FrameOutcome, InstancePose, LayerConfig, LayerState, RouteSource, SwayConfig, VehicleKind,
};
