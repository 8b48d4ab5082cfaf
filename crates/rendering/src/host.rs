//! The custom-layer protocol between transit layers and a map engine.
//!
//! A host owns the camera, the frame loop and the drawing surface. Layers are
//! handed a borrowed [`RenderSurface`] on every call and must leave its state
//! as they found it; [`SurfaceGuard`] does the reset/restore bracketing.

use std::sync::Arc;

use bevy::math::DMat4;
use bevy::prelude::*;

use crate::vehicle_meshes::ModelPart;

/// What kind of content a custom layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingMode {
    TwoD,
    ThreeD,
}

/// The host's projected-space-to-clip matrix for one frame, column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrix(pub [f64; 16]);

impl CameraMatrix {
    pub fn to_dmat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.0)
    }
}

impl From<DMat4> for CameraMatrix {
    fn from(m: DMat4) -> Self {
        Self(m.to_cols_array())
    }
}

/// Handle to the map engine a layer is attached to.
pub trait MapHost: Send + Sync {
    /// Ask for one more frame.
    fn trigger_repaint(&self);
}

/// Surface-side handle of an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u64);

/// One mesh drawn with `projection * model`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshId,
    /// Local space to clip space, kept in double precision.
    pub projection: DMat4,
    /// Part placement within the layer's local space.
    pub model: Mat4,
}

impl DrawCall {
    /// `projection * model`, composed in double precision.
    pub fn clip_from_model(&self) -> DMat4 {
        self.projection * self.model.as_dmat4()
    }
}

/// Lights a layer's scene expects the surface to provide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneLight {
    Ambient { color: Color, intensity: f32 },
    /// `direction` points from the scene toward the light.
    Directional {
        color: Color,
        intensity: f32,
        direction: Vec3,
    },
}

/// The shared drawing surface a host lends to its layers.
pub trait RenderSurface {
    fn upload_mesh(&mut self, part: &ModelPart) -> MeshId;
    fn release_mesh(&mut self, mesh: MeshId);
    fn declare_light(&mut self, light: &SceneLight);
    /// Put the surface into the state a layer expects before drawing.
    fn reset_state(&mut self);
    /// Give the surface back to the host.
    fn restore_state(&mut self);
    fn draw(&mut self, call: &DrawCall);
}

/// Resets the surface on creation and restores it on drop, so an early
/// return or `?` inside a render pass still hands back a clean surface.
pub struct SurfaceGuard<'a> {
    surface: &'a mut dyn RenderSurface,
}

impl<'a> SurfaceGuard<'a> {
    pub fn new(surface: &'a mut dyn RenderSurface) -> Self {
        surface.reset_state();
        Self { surface }
    }

    pub fn draw(&mut self, call: &DrawCall) {
        self.surface.draw(call);
    }
}

impl Drop for SurfaceGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}

/// A layer the host calls into: once on add, once per frame, once on removal.
pub trait CustomLayer: Send + Sync {
    fn id(&self) -> &str;
    fn rendering_mode(&self) -> RenderingMode;
    fn on_add(&mut self, host: Arc<dyn MapHost>, surface: &mut dyn RenderSurface);
    fn render(&mut self, surface: &mut dyn RenderSurface, camera: &CameraMatrix);
    fn on_remove(&mut self, surface: &mut dyn RenderSurface);
}
