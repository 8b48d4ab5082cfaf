use std::sync::Arc;

use bevy::prelude::*;

use network::{LngLat, Route, RouteError, SegmentMap};

use super::constants::*;
use crate::projection::{Projection, WebMercator};
use crate::vehicle_meshes::colors::GONDOLA_AMBER;
use crate::vehicle_meshes::{build_cabin_with, build_train, build_tram_with, VehicleModel};

// ---------------------------------------------------------------------------
// Vehicle kinds
// ---------------------------------------------------------------------------

/// What travels along a layer's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Cabin,
    Train { car_count: usize },
    Tram,
}

impl VehicleKind {
    /// Geometry of one instance in the given livery.
    pub fn build_instance(self, color: Color) -> VehicleModel {
        match self {
            VehicleKind::Cabin => build_cabin_with(color),
            VehicleKind::Train { car_count } => build_train(color, car_count),
            VehicleKind::Tram => build_tram_with(color),
        }
    }

    pub fn ride_height(self) -> f32 {
        match self {
            VehicleKind::Cabin => CABIN_RIDE_HEIGHT,
            VehicleKind::Train { .. } => TRAIN_RIDE_HEIGHT,
            VehicleKind::Tram => TRAM_RIDE_HEIGHT,
        }
    }

    pub fn default_sway(self) -> SwayConfig {
        match self {
            VehicleKind::Cabin => SwayConfig::new(CABIN_SWAY_AMPLITUDE),
            VehicleKind::Train { .. } | VehicleKind::Tram => SwayConfig::new(RAIL_SWAY_AMPLITUDE),
        }
    }

    /// Cabins hang from a cable strung between pylons.
    pub fn has_cable(self) -> bool {
        matches!(self, VehicleKind::Cabin)
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Cabin => "cabin",
            VehicleKind::Train { .. } => "train",
            VehicleKind::Tram => "tram",
        }
    }
}

/// Cosmetic roll oscillation: `amplitude * sin(time * frequency + index)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayConfig {
    pub amplitude: f64,
    pub frequency: f64,
}

impl SwayConfig {
    pub const NONE: SwayConfig = SwayConfig::new(0.0);

    pub const fn new(amplitude: f64) -> Self {
        Self {
            amplitude,
            frequency: SWAY_FREQUENCY,
        }
    }

    pub fn roll(&self, time: f64, index: usize) -> f64 {
        self.amplitude * (time * self.frequency + index as f64).sin()
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where a layer's route comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteSource {
    Points(Vec<LngLat>),
    /// The listed segments, spliced in order.
    Segments { segments: SegmentMap, ids: Vec<String> },
    /// Every segment, in insertion order.
    AllSegments(SegmentMap),
}

impl RouteSource {
    pub fn resolve(&self) -> Result<Route, RouteError> {
        match self {
            RouteSource::Points(points) => Route::new(points.clone()),
            RouteSource::Segments { segments, ids } => segments.splice(ids.as_slice()),
            RouteSource::AllSegments(segments) => segments.splice_all(),
        }
    }
}

impl From<Vec<LngLat>> for RouteSource {
    fn from(points: Vec<LngLat>) -> Self {
        RouteSource::Points(points)
    }
}

impl From<Route> for RouteSource {
    fn from(route: Route) -> Self {
        RouteSource::Points(route.points().to_vec())
    }
}

/// Everything needed to build an [`AnimatedLayer`](super::AnimatedLayer).
#[derive(Clone)]
pub struct LayerConfig {
    pub id: String,
    pub route: RouteSource,
    pub kind: VehicleKind,
    pub color: Color,
    pub instance_count: usize,
    /// Initial speed; adjustable later through the layer's controls.
    pub speed: f64,
    pub sway: SwayConfig,
    pub projection: Arc<dyn Projection>,
}

impl LayerConfig {
    pub fn new(id: impl Into<String>, route: impl Into<RouteSource>, kind: VehicleKind) -> Self {
        let (instance_count, speed) = match kind {
            VehicleKind::Cabin => (DEFAULT_CABIN_COUNT, DEFAULT_CABIN_SPEED),
            VehicleKind::Train { .. } => (DEFAULT_TRAIN_COUNT, DEFAULT_TRAIN_SPEED),
            VehicleKind::Tram => (DEFAULT_TRAM_COUNT, DEFAULT_TRAM_SPEED),
        };
        Self {
            id: id.into(),
            route: route.into(),
            kind,
            color: Color::WHITE,
            instance_count,
            speed,
            sway: kind.default_sway(),
            projection: Arc::new(WebMercator),
        }
    }

    pub fn gondola(id: impl Into<String>, route: impl Into<RouteSource>) -> Self {
        Self::new(id, route, VehicleKind::Cabin).with_color(GONDOLA_AMBER)
    }

    pub fn metro(id: impl Into<String>, route: impl Into<RouteSource>, color: Color) -> Self {
        Self::new(
            id,
            route,
            VehicleKind::Train {
                car_count: DEFAULT_CAR_COUNT,
            },
        )
        .with_color(color)
    }

    pub fn tram(id: impl Into<String>, route: impl Into<RouteSource>, color: Color) -> Self {
        Self::new(id, route, VehicleKind::Tram).with_color(color)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_instances(mut self, count: usize) -> Self {
        self.instance_count = count;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sway(mut self, sway: SwayConfig) -> Self {
        self.sway = sway;
        self
    }

    pub fn with_projection(mut self, projection: impl Projection + 'static) -> Self {
        self.projection = Arc::new(projection);
        self
    }
}

impl std::fmt::Debug for LayerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerConfig")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("instance_count", &self.instance_count)
            .field("speed", &self.speed)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerState {
    Unattached,
    Ready,
    Detached,
}

/// What one frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not attached yet, or already detached.
    NotReady,
    /// Paused; time did not advance.
    Hidden,
    Drawn,
}

/// One instance's pose for the current animation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstancePose {
    /// Progress sampled on the route, in `[0, 1)`.
    pub progress: f64,
    pub position: LngLat,
    pub heading: f64,
    /// Placement in the layer's local space.
    pub transform: Transform,
}
