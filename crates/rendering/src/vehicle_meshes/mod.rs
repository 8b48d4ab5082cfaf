//! Static geometry for transit vehicles and gondola infrastructure.
//!
//! Every builder returns a [`VehicleModel`]: a flat list of primitive meshes,
//! each with its own material and placement relative to the model origin.
//! Models are authored in local units (see `projection::OBJECT_SCALE`), Y up,
//! travelling along +X. Nothing here touches an asset store; the host uploads
//! parts once and reuses them for every instance.

mod cabin;
pub mod colors;
mod infrastructure;
mod train;
mod tram;

pub use cabin::{build_cabin, build_cabin_with};
pub use infrastructure::{build_cable, build_pylon, CABLE_HEIGHT, PYLON_HEIGHT};
pub use train::{build_train, build_train_car, CAR_SPACING};
pub use tram::{build_tram, build_tram_with};

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

/// Surface appearance of one model part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartMaterial {
    pub color: Color,
    /// 1.0 is opaque.
    pub opacity: f32,
    pub emissive: Option<Color>,
    pub unlit: bool,
}

impl PartMaterial {
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            emissive: None,
            unlit: false,
        }
    }

    pub const fn translucent(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            emissive: None,
            unlit: false,
        }
    }

    pub const fn glowing(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            emissive: Some(color),
            unlit: false,
        }
    }

    pub const fn line(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            emissive: None,
            unlit: true,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One primitive of a model.
#[derive(Debug, Clone)]
pub struct ModelPart {
    pub mesh: Mesh,
    pub material: PartMaterial,
    pub transform: Transform,
}

impl ModelPart {
    pub fn new(mesh: impl Into<Mesh>, material: PartMaterial, transform: Transform) -> Self {
        Self {
            mesh: mesh.into(),
            material,
            transform,
        }
    }
}

/// A vehicle or prop as a list of parts sharing one origin.
#[derive(Debug, Clone, Default)]
pub struct VehicleModel {
    pub parts: Vec<ModelPart>,
}

impl VehicleModel {
    pub fn push(&mut self, mesh: impl Into<Mesh>, material: PartMaterial, transform: Transform) {
        self.parts.push(ModelPart::new(mesh, material, transform));
    }

    /// Append `other`'s parts moved by `offset`.
    pub fn merge(&mut self, other: VehicleModel, offset: Transform) {
        self.parts.extend(other.parts.into_iter().map(|mut part| {
            part.transform = offset.mul_transform(part.transform);
            part
        }));
    }

    /// Axis-aligned bounds of every vertex, in model space.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;
        for part in &self.parts {
            let Some(VertexAttributeValues::Float32x3(positions)) =
                part.mesh.attribute(Mesh::ATTRIBUTE_POSITION)
            else {
                continue;
            };
            for p in positions {
                let world = part.transform.transform_point(Vec3::from_array(*p));
                min = min.min(world);
                max = max.max(world);
                any = true;
            }
        }
        any.then_some((min, max))
    }

    pub fn size(&self) -> Vec3 {
        self.bounds().map(|(min, max)| max - min).unwrap_or(Vec3::ZERO)
    }
}
