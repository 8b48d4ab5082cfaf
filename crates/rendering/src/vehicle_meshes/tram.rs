use bevy::prelude::*;

use super::colors::{STEEL, STRIPE_WHITE, STRIPE_YELLOW, TRAM_PURPLE, WINDOW_GLASS};
use super::{PartMaterial, VehicleModel};

/// Premetro tram in the default purple livery.
pub fn build_tram() -> VehicleModel {
    build_tram_with(TRAM_PURPLE)
}

/// Low-floor tram with white ends, a yellow waist stripe and a pantograph.
pub fn build_tram_with(color: Color) -> VehicleModel {
    let mut model = VehicleModel::default();
    model.push(
        Cuboid::new(2.5, 0.8, 0.6),
        PartMaterial::solid(color),
        Transform::from_xyz(0.0, 0.4, 0.0),
    );
    model.push(
        Cuboid::new(2.3, 0.5, 0.65),
        PartMaterial::solid(WINDOW_GLASS),
        Transform::from_xyz(0.0, 0.5, 0.0),
    );
    for x in [-1.3, 1.3] {
        model.push(
            Cuboid::new(0.1, 0.6, 0.55),
            PartMaterial::solid(STRIPE_WHITE),
            Transform::from_xyz(x, 0.4, 0.0),
        );
    }
    model.push(
        Cuboid::new(2.5, 0.08, 0.62),
        PartMaterial::solid(STRIPE_YELLOW),
        Transform::from_xyz(0.0, 0.25, 0.0),
    );
    model.push(
        Cuboid::new(2.5, 0.05, 0.65),
        PartMaterial::solid(color),
        Transform::from_xyz(0.0, 0.825, 0.0),
    );
    model.push(
        Cuboid::new(0.1, 0.3, 0.05),
        PartMaterial::solid(STEEL),
        Transform::from_xyz(0.0, 1.1, 0.0),
    );
    model
}
