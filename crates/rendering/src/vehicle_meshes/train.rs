use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::colors::{CAB_DARK, HEADLIGHT, ROOF_GREY, STRIPE_WHITE, WINDOW_GLASS};
use super::{PartMaterial, VehicleModel};

/// Distance between the centers of two coupled cars.
pub const CAR_SPACING: f32 = 3.7;

const CAR_LENGTH: f32 = 3.5;

/// One metro car: body, window band, cabs at both ends, a white stripe, a
/// roof and two headlights on the leading face.
pub fn build_train_car(color: Color) -> VehicleModel {
    let mut model = VehicleModel::default();
    model.push(
        Cuboid::new(CAR_LENGTH, 1.0, 0.7),
        PartMaterial::solid(color),
        Transform::from_xyz(0.0, 0.5, 0.0),
    );
    model.push(
        Cuboid::new(3.3, 0.6, 0.75),
        PartMaterial::solid(WINDOW_GLASS),
        Transform::from_xyz(0.0, 0.6, 0.0),
    );
    for x in [-1.85, 1.85] {
        model.push(
            Cuboid::new(0.2, 0.8, 0.65),
            PartMaterial::solid(CAB_DARK),
            Transform::from_xyz(x, 0.5, 0.0),
        );
    }
    model.push(
        Cuboid::new(CAR_LENGTH, 0.1, 0.72),
        PartMaterial::solid(STRIPE_WHITE),
        Transform::from_xyz(0.0, 0.3, 0.0),
    );
    model.push(
        Cuboid::new(CAR_LENGTH, 0.08, 0.75),
        PartMaterial::solid(ROOF_GREY),
        Transform::from_xyz(0.0, 1.04, 0.0),
    );
    for z in [-0.2, 0.2] {
        model.push(
            Circle::new(0.08),
            PartMaterial::glowing(HEADLIGHT),
            Transform::from_xyz(1.96, 0.35, z).with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        );
    }
    model
}

/// `car_count` cars coupled along X, centered on the origin.
pub fn build_train(color: Color, car_count: usize) -> VehicleModel {
    let mut train = VehicleModel::default();
    let middle = (car_count as f32 - 1.0) / 2.0;
    for i in 0..car_count {
        let offset = Transform::from_xyz((i as f32 - middle) * CAR_SPACING, 0.0, 0.0);
        train.merge(build_train_car(color), offset);
    }
    train
}
