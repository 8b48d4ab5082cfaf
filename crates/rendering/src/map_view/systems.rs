use bevy::math::DMat4;
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use network::data::{LineKey, TransitMode};

use super::surface::SurfaceResources;
use super::types::{
    FrameDraws, MapHostHandle, MapOrigin, SceneLighting, SceneSun, TransitControls,
    TransitDrawSlot, TransitLayers,
};
use crate::animated_layer::{AnimatedLayer, LayerConfig, RouteSource};
use crate::vehicle_meshes::colors::from_rgb;

/// Cabins on the Skyway and their speed.
pub const GONDOLA_CABINS: usize = 5;
pub const GONDOLA_SPEED: f64 = 0.0002;

/// Light units per unit of layer-declared intensity.
const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;
const DIRECTIONAL_LUX_SCALE: f32 = 10_000.0;

const GROUND_SIZE: f32 = 80_000.0;
const GROUND_COLOR: Color = Color::srgb(0.10, 0.12, 0.15);

/// The animated layer configuration for one line, running its full length.
pub fn line_layer_config(line: LineKey) -> LayerConfig {
    let info = line.info();
    let id = format!("{}-3d", line.slug());
    let color = from_rgb(info.color);
    let route = RouteSource::AllSegments(line.segments());
    match info.mode {
        TransitMode::Metro => LayerConfig::metro(id, route, color),
        TransitMode::Tram => LayerConfig::tram(id, route, color),
        TransitMode::Gondola => LayerConfig::gondola(id, route)
            .with_instances(GONDOLA_CABINS)
            .with_speed(GONDOLA_SPEED),
    }
}

pub fn setup_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.05, 0.0),
    ));
}

/// Build one layer per line. A line whose layer fails to build is left off
/// the map.
pub fn spawn_transit_layers(
    mut layers: ResMut<TransitLayers>,
    mut controls: ResMut<TransitControls>,
) {
    for line in LineKey::ALL {
        match AnimatedLayer::new(line_layer_config(line)) {
            Ok((layer, handle)) => {
                layers.add(layer);
                controls.entries.push((line, handle));
            }
            Err(err) => warn!("Skipping {} layer: {err}", line.info().name),
        }
    }
    info!("Built {} transit layers", layers.len());
}

/// Drive the custom layers with this frame's camera.
pub fn render_transit_layers(
    mut layers: ResMut<TransitLayers>,
    mut resources: SurfaceResources,
    mut lighting: ResMut<SceneLighting>,
    host: Res<MapHostHandle>,
    origin: Res<MapOrigin>,
    cameras: Query<(&Camera, &Transform), With<Camera3d>>,
) {
    let Ok((camera, transform)) = cameras.get_single() else {
        return;
    };
    // No projection until the camera has been sized to its viewport.
    if camera.logical_viewport_size().is_none() {
        return;
    }
    let clip_from_world =
        camera.clip_from_view().as_dmat4() * transform.compute_matrix().as_dmat4().inverse();
    let world_from_clip = clip_from_world.inverse();
    if !world_from_clip.is_finite() {
        return;
    }
    let camera_matrix = origin.camera_matrix(clip_from_world);

    resources.frame.draws.clear();
    let mut surface = resources.surface(world_from_clip);
    layers.render_all(&host.as_host(), &mut surface, &camera_matrix);

    for light in &surface.lights {
        lighting.declare(light);
    }
}

/// Show this frame's draws on pooled mesh entities; hide the rest.
#[allow(clippy::type_complexity)]
pub fn sync_draw_slots(
    mut commands: Commands,
    frame: Res<FrameDraws>,
    mut slots: Query<
        (
            &mut Mesh3d,
            &mut MeshMaterial3d<StandardMaterial>,
            &mut Transform,
            &mut Visibility,
        ),
        With<TransitDrawSlot>,
    >,
) {
    let mut draws = frame.draws.iter();
    for (mut mesh, mut material, mut transform, mut visibility) in &mut slots {
        match draws.next() {
            Some(draw) => {
                if mesh.0 != draw.mesh {
                    mesh.0 = draw.mesh.clone();
                }
                if material.0 != draw.material {
                    material.0 = draw.material.clone();
                }
                *transform = draw.transform;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
    for draw in draws {
        commands.spawn((
            TransitDrawSlot,
            Mesh3d(draw.mesh.clone()),
            MeshMaterial3d(draw.material.clone()),
            draw.transform,
            Visibility::Visible,
        ));
    }
}

/// Apply the lights the layers declared.
pub fn apply_scene_lighting(
    mut commands: Commands,
    lighting: Res<SceneLighting>,
    mut ambient: ResMut<AmbientLight>,
    mut suns: Query<(&mut DirectionalLight, &mut Transform), With<SceneSun>>,
) {
    if !lighting.is_changed() {
        return;
    }
    if let Some((color, intensity)) = lighting.ambient {
        ambient.color = color;
        ambient.brightness = intensity * AMBIENT_BRIGHTNESS_SCALE;
    }
    let Some((color, intensity, direction)) = lighting.directional else {
        return;
    };
    let placement = Transform::from_translation(direction).looking_at(Vec3::ZERO, Vec3::Y);
    let illuminance = intensity * DIRECTIONAL_LUX_SCALE;
    match suns.get_single_mut() {
        Ok((mut light, mut transform)) => {
            light.color = color;
            light.illuminance = illuminance;
            *transform = placement;
        }
        Err(_) => {
            commands.spawn((
                SceneSun,
                DirectionalLight {
                    color,
                    illuminance,
                    ..default()
                },
                placement,
            ));
        }
    }
}

/// Turn layer repaint requests into a window redraw.
pub fn forward_repaint_requests(host: Res<MapHostHandle>, mut redraw: EventWriter<RequestRedraw>) {
    if host.0.take() {
        redraw.send(RequestRedraw);
    }
}

/// Detach every layer when the app is closing.
pub fn detach_on_exit(
    mut exit: EventReader<AppExit>,
    mut layers: ResMut<TransitLayers>,
    mut resources: SurfaceResources,
) {
    if exit.read().next().is_none() || layers.is_empty() {
        return;
    }
    let mut surface = resources.surface(DMat4::IDENTITY);
    layers.remove_all(&mut surface);
    info!("Transit layers detached");
}
