use std::sync::Arc;

use bevy::prelude::*;

use network::{LngLat, Route};

use super::constants::{AMBIENT_INTENSITY, DIRECTIONAL_FROM, DIRECTIONAL_INTENSITY};
use super::controls::{LayerControls, LiveState};
use super::error::LayerError;
use super::types::{FrameOutcome, InstancePose, LayerConfig, LayerState, SwayConfig, VehicleKind};
use crate::host::{
    CameraMatrix, CustomLayer, DrawCall, MapHost, MeshId, RenderSurface, RenderingMode,
    SceneLight, SurfaceGuard,
};
use crate::path::{wrap_unit, PathInterpolator};
use crate::projection::{LocalFrame, Projection};
use crate::vehicle_meshes::{build_cable, build_pylon, VehicleModel};

/// Progress of instance `index` of `count` at animation time `time`.
///
/// Instances are spread evenly around the route, `1 / count` apart.
pub fn instance_progress(time: f64, index: usize, count: usize) -> f64 {
    wrap_unit(time + index as f64 / count as f64)
}

/// Vehicles of one kind travelling a single route on a shared clock.
///
/// Built unattached; the host calls [`on_attach`](Self::on_attach) once,
/// [`on_frame`](Self::on_frame) every frame and [`on_detach`](Self::on_detach)
/// on teardown. Every instance's pose is a pure function of the layer's
/// animation time and the instance index.
pub struct AnimatedLayer {
    id: String,
    kind: VehicleKind,
    color: Color,
    instance_count: usize,
    sway: SwayConfig,
    projection: Arc<dyn Projection>,
    route: Route,
    path: PathInterpolator,
    frame: LocalFrame,
    live: Arc<LiveState>,
    time: f64,
    state: LayerState,
    /// Uploaded vehicle parts, shared by every instance.
    vehicle_parts: Vec<(MeshId, Mat4)>,
    /// Pylons and cable, placed once in local space.
    static_parts: Vec<(MeshId, Mat4)>,
    uploaded: Vec<MeshId>,
}

impl AnimatedLayer {
    /// Validate `config` and build the layer plus the controls that steer it.
    pub fn new(config: LayerConfig) -> Result<(Self, LayerControls), LayerError> {
        let route = config.route.resolve()?;
        if config.instance_count == 0 {
            return Err(LayerError::NoInstances);
        }
        if config.kind == (VehicleKind::Train { car_count: 0 }) {
            return Err(LayerError::NoCars);
        }
        let path = PathInterpolator::new(&route, config.projection.as_ref());
        let frame = LocalFrame::from_route(&route, config.projection.as_ref());
        let live = Arc::new(LiveState::new(config.speed));
        let controls = LayerControls::new(live.clone());
        let layer = Self {
            id: config.id,
            kind: config.kind,
            color: config.color,
            instance_count: config.instance_count,
            sway: config.sway,
            projection: config.projection,
            route,
            path,
            frame,
            live,
            time: 0.0,
            state: LayerState::Unattached,
            vehicle_parts: Vec::new(),
            static_parts: Vec::new(),
            uploaded: Vec::new(),
        };
        Ok((layer, controls))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn state(&self) -> LayerState {
        self.state
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn local_frame(&self) -> &LocalFrame {
        &self.frame
    }

    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    pub fn animation_time(&self) -> f64 {
        self.time
    }

    /// Upload geometry, declare lights and start accepting frames.
    pub fn on_attach(
        &mut self,
        host: Arc<dyn MapHost>,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), LayerError> {
        match self.state {
            LayerState::Ready => return Err(LayerError::AlreadyAttached),
            LayerState::Detached => return Err(LayerError::Detached),
            LayerState::Unattached => {}
        }

        let vehicle = self.kind.build_instance(self.color);
        self.vehicle_parts = self.upload(surface, &vehicle);

        if self.kind.has_cable() {
            self.static_parts = self.build_infrastructure(surface);
        }

        surface.declare_light(&SceneLight::Ambient {
            color: Color::WHITE,
            intensity: AMBIENT_INTENSITY,
        });
        surface.declare_light(&SceneLight::Directional {
            color: Color::WHITE,
            intensity: DIRECTIONAL_INTENSITY,
            direction: Vec3::from_array(DIRECTIONAL_FROM).normalize(),
        });

        self.live.attach_host(host);
        self.state = LayerState::Ready;
        info!(
            "Transit layer '{}' attached: {} x {} on {} route points",
            self.id,
            self.instance_count,
            self.kind.label(),
            self.route.points().len()
        );
        Ok(())
    }

    /// Advance the clock by the current speed and draw every instance.
    pub fn on_frame(
        &mut self,
        surface: &mut dyn RenderSurface,
        camera: &CameraMatrix,
    ) -> Result<FrameOutcome, LayerError> {
        if self.state != LayerState::Ready {
            return Ok(FrameOutcome::NotReady);
        }
        if !self.live.is_visible() {
            return Ok(FrameOutcome::Hidden);
        }

        let next = self.time + self.live.speed();
        if !next.is_finite() {
            return Err(LayerError::NonFiniteTime { time: next });
        }
        self.time = next;

        // Right-multiplied onto the host camera, never replacing it.
        let projection = camera.to_dmat4() * self.frame.anchor_matrix();

        {
            let mut guard = SurfaceGuard::new(surface);
            for index in 0..self.instance_count {
                let instance = self.pose(index).transform.compute_matrix();
                for &(mesh, part) in &self.vehicle_parts {
                    guard.draw(&DrawCall {
                        mesh,
                        projection,
                        model: instance * part,
                    });
                }
            }
            for &(mesh, model) in &self.static_parts {
                guard.draw(&DrawCall {
                    mesh,
                    projection,
                    model,
                });
            }
        }

        self.live.request_repaint();
        Ok(FrameOutcome::Drawn)
    }

    /// Release every uploaded mesh. The layer never renders again.
    pub fn on_detach(&mut self, surface: &mut dyn RenderSurface) {
        for mesh in self.uploaded.drain(..) {
            surface.release_mesh(mesh);
        }
        self.vehicle_parts.clear();
        self.static_parts.clear();
        self.live.detach_host();
        if self.state == LayerState::Ready {
            info!("Transit layer '{}' detached", self.id);
        }
        self.state = LayerState::Detached;
    }

    /// Pose of instance `index` at the current animation time.
    pub fn pose(&self, index: usize) -> InstancePose {
        let progress = instance_progress(self.time, index, self.instance_count);
        let sample = self.path.sample(progress);
        let local = self.to_local(sample.position);
        let roll = self.sway.roll(self.time, index);
        let transform = Transform::from_xyz(local.x, self.kind.ride_height(), local.y)
            .with_rotation(Quat::from_euler(
                EulerRot::YXZ,
                sample.heading as f32,
                0.0,
                roll as f32,
            ));
        InstancePose {
            progress,
            position: sample.position,
            heading: sample.heading,
            transform,
        }
    }

    fn to_local(&self, p: LngLat) -> Vec2 {
        self.frame.to_local(self.projection.project(p)).as_vec2()
    }

    fn upload(
        &mut self,
        surface: &mut dyn RenderSurface,
        model: &VehicleModel,
    ) -> Vec<(MeshId, Mat4)> {
        model
            .parts
            .iter()
            .map(|part| {
                let id = surface.upload_mesh(part);
                self.uploaded.push(id);
                (id, part.transform.compute_matrix())
            })
            .collect()
    }

    /// One pylon per route vertex and a cable through all of them.
    fn build_infrastructure(&mut self, surface: &mut dyn RenderSurface) -> Vec<(MeshId, Mat4)> {
        let ground: Vec<Vec2> = self
            .route
            .points()
            .iter()
            .map(|&p| self.to_local(p))
            .collect();

        let pylon = self.upload(surface, &build_pylon());
        let mut parts = Vec::with_capacity(ground.len() * pylon.len() + 1);
        for (i, at) in ground.iter().enumerate() {
            // Cross-arm perpendicular to the outgoing cable.
            // The last pylon reuses the incoming segment's heading.
            let heading = self
                .path
                .heading(i)
                .or_else(|| self.path.heading(i.saturating_sub(1)))
                .unwrap_or_default();
            let placement = Mat4::from_translation(Vec3::new(at.x, 0.0, at.y))
                * Mat4::from_rotation_y(heading as f32 + std::f32::consts::FRAC_PI_2);
            parts.extend(pylon.iter().map(|&(mesh, part)| (mesh, placement * part)));
        }
        parts.extend(self.upload(surface, &build_cable(&ground)));
        parts
    }
}

impl std::fmt::Debug for AnimatedLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedLayer")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

impl CustomLayer for AnimatedLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn rendering_mode(&self) -> RenderingMode {
        RenderingMode::ThreeD
    }

    fn on_add(&mut self, host: Arc<dyn MapHost>, surface: &mut dyn RenderSurface) {
        if let Err(err) = self.on_attach(host, surface) {
            warn!("Transit layer '{}' not attached: {err}", self.id);
        }
    }

    fn render(&mut self, surface: &mut dyn RenderSurface, camera: &CameraMatrix) {
        if let Err(err) = self.on_frame(surface, camera) {
            warn!("Transit layer '{}' skipped a frame: {err}", self.id);
        }
    }

    fn on_remove(&mut self, surface: &mut dyn RenderSurface) {
        self.on_detach(surface);
    }
}
