//! Sampling a route by normalized progress.

use network::{LngLat, Route};

use crate::projection::Projection;

/// Reduce `t` into `[0, 1)`, the same way for negative and positive input.
pub fn wrap_unit(t: f64) -> f64 {
    let wrapped = t - t.floor();
    // Tiny negative inputs round up to exactly 1.0.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Position and heading at one point along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: LngLat,
    /// Radians, counter-clockwise from east in the north-up plane.
    pub heading: f64,
    pub segment: usize,
}

/// A route plus the per-segment headings sampled from it.
#[derive(Debug, Clone)]
pub struct PathInterpolator {
    points: Vec<LngLat>,
    headings: Vec<f64>,
}

impl PathInterpolator {
    pub fn new(route: &Route, projection: &dyn Projection) -> Self {
        let points = route.points().to_vec();
        let headings = points
            .windows(2)
            .map(|w| {
                let a = projection.project(w[0]);
                let b = projection.project(w[1]);
                // Projected Y grows south.
                (-(b.y - a.y)).atan2(b.x - a.x)
            })
            .collect();
        Self { points, headings }
    }

    pub fn segment_count(&self) -> usize {
        self.headings.len()
    }

    /// Heading of `segment`, or `None` past the last segment.
    pub fn heading(&self, segment: usize) -> Option<f64> {
        self.headings.get(segment).copied()
    }

    /// Sample at progress `t`, wrapped into `[0, 1)` first.
    pub fn sample(&self, t: f64) -> PathSample {
        let segments = self.segment_count();
        let scaled = wrap_unit(t) * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let u = (scaled - index as f64).clamp(0.0, 1.0);
        PathSample {
            position: self.points[index].lerp(self.points[index + 1], u),
            heading: self.headings[index],
            segment: index,
        }
    }
}
