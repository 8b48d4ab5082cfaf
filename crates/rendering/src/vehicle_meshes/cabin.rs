use bevy::prelude::*;

use super::colors::{GONDOLA_AMBER, STEEL, WINDOW_GLASS};
use super::{PartMaterial, VehicleModel};

/// Gondola cabin in the Skyway's amber livery.
pub fn build_cabin() -> VehicleModel {
    build_cabin_with(GONDOLA_AMBER)
}

/// Gondola cabin hanging below its grip. The grip ball sits 0.5 above the
/// origin.
pub fn build_cabin_with(color: Color) -> VehicleModel {
    let mut model = VehicleModel::default();
    model.push(
        Cuboid::new(1.0, 0.8, 0.6),
        PartMaterial::translucent(color, 0.9),
        Transform::from_xyz(0.0, -0.2, 0.0),
    );
    model.push(
        Cuboid::new(0.9, 0.5, 0.65),
        PartMaterial::translucent(WINDOW_GLASS, 0.7),
        Transform::from_xyz(0.0, -0.1, 0.0),
    );
    model.push(
        Cylinder::new(0.05, 0.3),
        PartMaterial::solid(STEEL),
        Transform::from_xyz(0.0, 0.35, 0.0),
    );
    model.push(
        Sphere::new(0.1),
        PartMaterial::solid(STEEL),
        Transform::from_xyz(0.0, 0.5, 0.0),
    );
    model
}
