use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use super::colors::{ROOF_GREY, STEEL};
use super::{PartMaterial, VehicleModel};

pub const PYLON_HEIGHT: f32 = 4.0;

/// Height of the haul rope above the ground.
pub const CABLE_HEIGHT: f32 = 4.1;

/// Lattice pylon standing on the origin with a cross-arm at the top.
pub fn build_pylon() -> VehicleModel {
    let mut model = VehicleModel::default();
    model.push(
        Cylinder::new(0.18, PYLON_HEIGHT),
        PartMaterial::solid(ROOF_GREY),
        Transform::from_xyz(0.0, PYLON_HEIGHT / 2.0, 0.0),
    );
    model.push(
        Cuboid::new(2.0, 0.15, 0.15),
        PartMaterial::solid(ROOF_GREY),
        Transform::from_xyz(0.0, PYLON_HEIGHT, 0.0),
    );
    model
}

/// The haul rope through `points` (local X/Z ground positions), drawn as a
/// line strip at [`CABLE_HEIGHT`].
pub fn build_cable(points: &[Vec2]) -> VehicleModel {
    let positions: Vec<[f32; 3]> = points
        .iter()
        .map(|p| [p.x, CABLE_HEIGHT, p.y])
        .collect();
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    let mesh = Mesh::new(
        PrimitiveTopology::LineStrip,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

    let mut model = VehicleModel::default();
    model.push(mesh, PartMaterial::line(STEEL), Transform::IDENTITY);
    model
}
