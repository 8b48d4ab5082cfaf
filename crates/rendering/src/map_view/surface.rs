use bevy::ecs::system::SystemParam;
use bevy::math::DMat4;
use bevy::prelude::*;

use super::types::{FrameDraws, MeshRegistry, PlacedDraw, RegisteredMesh};
use crate::host::{DrawCall, MeshId, RenderSurface, SceneLight};
use crate::vehicle_meshes::{ModelPart, PartMaterial};

/// Everything a [`BevySurface`] writes to, borrowed for one system run.
#[derive(SystemParam)]
pub struct SurfaceResources<'w> {
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<StandardMaterial>>,
    pub registry: ResMut<'w, MeshRegistry>,
    pub frame: ResMut<'w, FrameDraws>,
}

impl SurfaceResources<'_> {
    pub fn surface(&mut self, world_from_clip: DMat4) -> BevySurface<'_> {
        BevySurface {
            meshes: &mut *self.meshes,
            materials: &mut *self.materials,
            registry: &mut *self.registry,
            frame: &mut *self.frame,
            lights: Vec::new(),
            world_from_clip,
        }
    }
}

/// Render surface backed by Bevy assets.
///
/// Draw calls arrive in clip space; multiplying by `world_from_clip` turns
/// them back into world transforms for ordinary mesh entities.
pub struct BevySurface<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub registry: &'a mut MeshRegistry,
    pub frame: &'a mut FrameDraws,
    /// Lights declared since the surface was created.
    pub lights: Vec<SceneLight>,
    pub world_from_clip: DMat4,
}

pub fn standard_material(material: &PartMaterial) -> StandardMaterial {
    StandardMaterial {
        base_color: material.color.with_alpha(material.opacity),
        emissive: material
            .emissive
            .map(|c| c.to_linear())
            .unwrap_or(LinearRgba::BLACK),
        unlit: material.unlit,
        alpha_mode: if material.is_transparent() {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    }
}

impl RenderSurface for BevySurface<'_> {
    fn upload_mesh(&mut self, part: &ModelPart) -> MeshId {
        let mesh = self.meshes.add(part.mesh.clone());
        let material = self.materials.add(standard_material(&part.material));
        self.registry.register(RegisteredMesh { mesh, material })
    }

    fn release_mesh(&mut self, mesh: MeshId) {
        // Dropping the last strong handles frees the assets.
        if self.registry.entries.remove(&mesh).is_none() {
            warn!("Release of unknown transit mesh {mesh:?}");
        }
    }

    fn declare_light(&mut self, light: &SceneLight) {
        self.lights.push(*light);
    }

    fn reset_state(&mut self) {
        self.frame.in_pass = true;
    }

    fn restore_state(&mut self) {
        self.frame.in_pass = false;
    }

    fn draw(&mut self, call: &DrawCall) {
        if !self.frame.in_pass {
            warn!("Transit draw outside a render pass ignored");
            return;
        }
        let Some(entry) = self.registry.entries.get(&call.mesh) else {
            warn!("Draw of unknown transit mesh {:?}", call.mesh);
            return;
        };
        let world_from_model = self.world_from_clip * call.clip_from_model();
        self.frame.draws.push(PlacedDraw {
            mesh: entry.mesh.clone(),
            material: entry.material.clone(),
            transform: Transform::from_matrix(world_from_model.as_mat4()),
        });
    }
}
