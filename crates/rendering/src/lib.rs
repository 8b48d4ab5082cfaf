//! Animated 3D transit layers for the Zagreb 2050 map.
//!
//! - `projection`, `path`: geographic routes to local render space
//! - `vehicle_meshes`: procedural cabins, trains, trams and gondola pylons
//! - `host`: the custom-layer protocol a map engine drives
//! - `animated_layer`: vehicles moving along a route on a shared clock
//! - `map_view`: the Bevy app acting as the map engine, plus 2D overlays
//! - `camera`: orbital map camera

pub mod animated_layer;
pub mod camera;
pub mod host;
pub mod map_view;
pub mod path;
pub mod projection;
pub mod vehicle_meshes;

pub use map_view::{TransitControls, TransitFrameSet, TransitLayersPlugin};
