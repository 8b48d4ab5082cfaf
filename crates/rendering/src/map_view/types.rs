use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bevy::math::{DMat4, DVec2, DVec4};
use bevy::prelude::*;

use network::config::ZAGREB_CENTER;
use network::data::LineKey;
use network::LngLat;

use crate::animated_layer::LayerControls;
use crate::host::{CameraMatrix, CustomLayer, MapHost, MeshId, RenderSurface, SceneLight};
use crate::projection::{Projection, WebMercator};

// ---------------------------------------------------------------------------
// Map origin
// ---------------------------------------------------------------------------

/// Ties the Bevy world to the map: world units are meters east (X) and south
/// (Z) of `center`, Y up.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapOrigin {
    pub center: LngLat,
    anchor: DVec2,
    units_per_meter: f64,
}

impl Default for MapOrigin {
    fn default() -> Self {
        Self::new(ZAGREB_CENTER)
    }
}

impl MapOrigin {
    pub fn new(center: LngLat) -> Self {
        Self {
            center,
            anchor: WebMercator.project(center),
            units_per_meter: WebMercator.units_per_meter(center),
        }
    }

    /// Ground position of `p` in world meters.
    pub fn to_world(&self, p: LngLat) -> Vec3 {
        let m = (WebMercator.project(p) - self.anchor) / self.units_per_meter;
        Vec3::new(m.x as f32, 0.0, m.y as f32)
    }

    /// Mercator `(x, y, height)` to world meters.
    pub fn world_from_mercator(&self) -> DMat4 {
        let k = 1.0 / self.units_per_meter;
        DMat4::from_cols(
            DVec4::new(k, 0.0, 0.0, 0.0),
            DVec4::new(0.0, 0.0, k, 0.0),
            DVec4::new(0.0, k, 0.0, 0.0),
            DVec4::new(-self.anchor.x * k, 0.0, -self.anchor.y * k, 1.0),
        )
    }

    /// What the layers receive as their camera: clip space from mercator.
    pub fn camera_matrix(&self, clip_from_world: DMat4) -> CameraMatrix {
        CameraMatrix::from(clip_from_world * self.world_from_mercator())
    }
}

// ---------------------------------------------------------------------------
// Host handle
// ---------------------------------------------------------------------------

/// Repaint requests from layers, drained once per frame into `RequestRedraw`.
#[derive(Debug, Default)]
pub struct RepaintFlag {
    requested: AtomicBool,
}

impl RepaintFlag {
    /// Returns whether a repaint was requested since the last call.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::Relaxed)
    }
}

impl MapHost for RepaintFlag {
    fn trigger_repaint(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MapHostHandle(pub Arc<RepaintFlag>);

impl MapHostHandle {
    pub fn as_host(&self) -> Arc<dyn MapHost> {
        self.0.clone()
    }
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

struct LayerEntry {
    layer: Box<dyn CustomLayer>,
    added: bool,
}

/// The custom layer stack, rendered in insertion order.
#[derive(Resource, Default)]
pub struct TransitLayers {
    entries: Vec<LayerEntry>,
}

impl TransitLayers {
    pub fn add(&mut self, layer: impl CustomLayer + 'static) {
        self.entries.push(LayerEntry {
            layer: Box::new(layer),
            added: false,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.layer.id())
    }

    /// Add any layer the host has not seen yet, then render every layer.
    pub fn render_all(
        &mut self,
        host: &Arc<dyn MapHost>,
        surface: &mut dyn RenderSurface,
        camera: &CameraMatrix,
    ) {
        for entry in &mut self.entries {
            if !entry.added {
                entry.layer.on_add(host.clone(), surface);
                entry.added = true;
            }
            entry.layer.render(surface, camera);
        }
    }

    /// Remove every layer from the host.
    pub fn remove_all(&mut self, surface: &mut dyn RenderSurface) {
        for mut entry in self.entries.drain(..) {
            if entry.added {
                entry.layer.on_remove(surface);
            }
        }
    }
}

/// Controls of the layer built for each line.
#[derive(Resource, Default, Debug, Clone)]
pub struct TransitControls {
    pub entries: Vec<(LineKey, LayerControls)>,
}

impl TransitControls {
    pub fn get(&self, line: LineKey) -> Option<&LayerControls> {
        self.entries
            .iter()
            .find(|(key, _)| *key == line)
            .map(|(_, controls)| controls)
    }
}

// ---------------------------------------------------------------------------
// Surface state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RegisteredMesh {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Meshes layers have uploaded, by id.
#[derive(Resource, Default)]
pub struct MeshRegistry {
    next_id: u64,
    pub entries: HashMap<MeshId, RegisteredMesh>,
}

impl MeshRegistry {
    pub fn register(&mut self, entry: RegisteredMesh) -> MeshId {
        self.next_id += 1;
        let id = MeshId(self.next_id);
        self.entries.insert(id, entry);
        id
    }
}

/// One draw resolved to world space.
#[derive(Debug, Clone)]
pub struct PlacedDraw {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
}

/// Draws collected this frame, applied to pooled entities afterwards.
#[derive(Resource, Default)]
pub struct FrameDraws {
    pub in_pass: bool,
    pub draws: Vec<PlacedDraw>,
}

/// Strongest light of each kind any layer asked for.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SceneLighting {
    pub ambient: Option<(Color, f32)>,
    pub directional: Option<(Color, f32, Vec3)>,
}

impl SceneLighting {
    pub fn declare(&mut self, light: &SceneLight) {
        match *light {
            SceneLight::Ambient { color, intensity } => {
                if self.ambient.is_none_or(|(_, current)| intensity > current) {
                    self.ambient = Some((color, intensity));
                }
            }
            SceneLight::Directional {
                color,
                intensity,
                direction,
            } => {
                if self
                    .directional
                    .is_none_or(|(_, current, _)| intensity > current)
                {
                    self.directional = Some((color, intensity, direction));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A pooled entity that shows one draw call per frame.
#[derive(Component)]
pub struct TransitDrawSlot;

/// The directional light driven by `SceneLighting`.
#[derive(Component)]
pub struct SceneSun;
