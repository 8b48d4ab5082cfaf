//! Hosts the animated transit layers inside the Bevy app.
//!
//! The Bevy world plays the map engine: each frame the layers get the
//! mercator-to-clip matrix of the 3D camera and a [`BevySurface`] to draw
//! on. Their draw calls are resolved back to world transforms and shown on a
//! pool of mesh entities, and the lights they declare drive the scene
//! lighting.

mod overlays;
mod surface;
mod systems;
mod tests;
mod types;

pub use overlays::draw_network_overlays;
pub use surface::{standard_material, BevySurface, SurfaceResources};
pub use systems::{
    apply_scene_lighting, detach_on_exit, forward_repaint_requests, line_layer_config,
    render_transit_layers, setup_ground, spawn_transit_layers, sync_draw_slots, GONDOLA_CABINS,
    GONDOLA_SPEED,
};
pub use types::{
    FrameDraws, MapHostHandle, MapOrigin, MeshRegistry, PlacedDraw, RegisteredMesh, RepaintFlag,
    SceneLighting, SceneSun, TransitControls, TransitDrawSlot, TransitLayers,
};

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::{
    apply_orbit_camera, camera_keyboard, camera_left_drag, camera_orbit_drag, camera_zoom,
    setup_camera, CameraOrbitDrag, LeftClickDrag,
};

/// Where the layers render each frame. Systems that change layer speed or
/// visibility run before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitFrameSet;

pub struct TransitLayersPlugin;

impl Plugin for TransitLayersPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.init_resource::<MapOrigin>()
            .init_resource::<MapHostHandle>()
            .init_resource::<TransitLayers>()
            .init_resource::<TransitControls>()
            .init_resource::<MeshRegistry>()
            .init_resource::<FrameDraws>()
            .init_resource::<SceneLighting>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<LeftClickDrag>()
            .add_systems(
                Startup,
                (setup_camera, setup_ground, spawn_transit_layers),
            )
            .add_systems(
                Update,
                (
                    (
                        camera_keyboard,
                        camera_left_drag,
                        camera_orbit_drag,
                        camera_zoom,
                    ),
                    apply_orbit_camera,
                )
                    .chain()
                    .before(TransitFrameSet),
            )
            .add_systems(
                Update,
                (
                    render_transit_layers,
                    (sync_draw_slots, apply_scene_lighting, forward_repaint_requests),
                )
                    .chain()
                    .in_set(TransitFrameSet),
            )
            .add_systems(Update, draw_network_overlays)
            .add_systems(Last, detach_on_exit);
    }
}
