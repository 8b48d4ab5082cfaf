//! Criterion benchmarks for the per-frame work of the transit layers.
//!
//! Benchmarks:
//!   - route sampling at a spread of progress values
//!   - one frame of each line's layer against a counting surface
//!   - one frame of the whole network through the Bevy surface
//!
//! Run with: cargo bench -p rendering --bench layer_frame

use std::sync::Arc;

use bevy::math::DMat4;
use bevy::prelude::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use network::data::LineKey;
use rendering::animated_layer::AnimatedLayer;
use rendering::host::{CameraMatrix, DrawCall, MapHost, MeshId, RenderSurface, SceneLight};
use rendering::map_view::{
    line_layer_config, BevySurface, FrameDraws, MapOrigin, MeshRegistry, RepaintFlag,
    TransitLayers,
};
use rendering::path::PathInterpolator;
use rendering::projection::WebMercator;
use rendering::vehicle_meshes::ModelPart;

#[derive(Default)]
struct CountingSurface {
    next_id: u64,
    draws: usize,
}

impl RenderSurface for CountingSurface {
    fn upload_mesh(&mut self, _part: &ModelPart) -> MeshId {
        self.next_id += 1;
        MeshId(self.next_id)
    }
    fn release_mesh(&mut self, _mesh: MeshId) {}
    fn declare_light(&mut self, _light: &SceneLight) {}
    fn reset_state(&mut self) {}
    fn restore_state(&mut self) {}
    fn draw(&mut self, _call: &DrawCall) {
        self.draws += 1;
    }
}

fn camera() -> (DMat4, CameraMatrix) {
    let clip_from_view =
        Mat4::perspective_infinite_reverse_rh(45f32.to_radians(), 16.0 / 9.0, 0.1).as_dmat4();
    let view = Transform::from_xyz(0.0, 8_000.0, 8_000.0)
        .looking_at(Vec3::ZERO, Vec3::Y)
        .compute_matrix()
        .as_dmat4();
    let clip_from_world = clip_from_view * view.inverse();
    (clip_from_world, MapOrigin::default().camera_matrix(clip_from_world))
}

// ---------------------------------------------------------------------------
// Benchmark: path sampling
// ---------------------------------------------------------------------------

fn bench_path_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_sample");
    for line in [LineKey::MetroA, LineKey::Gondola] {
        let route = line_layer_config(line)
            .route
            .resolve()
            .expect("bundled route is valid");
        let path = PathInterpolator::new(&route, &WebMercator);
        group.bench_function(line.slug(), |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(path.sample(black_box(i as f64 * 0.0137)));
                }
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: single layer frame
// ---------------------------------------------------------------------------

fn bench_layer_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_frame");
    let (_, camera) = camera();
    for line in LineKey::ALL {
        let (mut layer, _) =
            AnimatedLayer::new(line_layer_config(line)).expect("bundled line builds");
        let mut surface = CountingSurface::default();
        let host: Arc<dyn MapHost> = Arc::new(RepaintFlag::default());
        layer
            .on_attach(host, &mut surface)
            .expect("fresh layer attaches");
        group.bench_function(line.slug(), |b| {
            b.iter(|| black_box(layer.on_frame(&mut surface, black_box(&camera))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: whole network through the Bevy surface
// ---------------------------------------------------------------------------

fn bench_network_frame(c: &mut Criterion) {
    let (clip_from_world, camera) = camera();
    let world_from_clip = clip_from_world.inverse();
    let host: Arc<dyn MapHost> = Arc::new(RepaintFlag::default());

    let mut meshes = Assets::<Mesh>::default();
    let mut materials = Assets::<StandardMaterial>::default();
    let mut registry = MeshRegistry::default();
    let mut frame = FrameDraws::default();

    let mut layers = TransitLayers::default();
    for line in LineKey::ALL {
        let (layer, _) =
            AnimatedLayer::new(line_layer_config(line)).expect("bundled line builds");
        layers.add(layer);
    }

    c.bench_function("network_frame", |b| {
        b.iter(|| {
            frame.draws.clear();
            let mut surface = BevySurface {
                meshes: &mut meshes,
                materials: &mut materials,
                registry: &mut registry,
                frame: &mut frame,
                lights: Vec::new(),
                world_from_clip,
            };
            layers.render_all(&host, &mut surface, black_box(&camera));
        });
    });
}

criterion_group!(
    benches,
    bench_path_sample,
    bench_layer_frame,
    bench_network_frame
);
criterion_main!(benches);
