//! Validated route polylines and the named segments they are spliced from.
//!
//! A `Route` always has at least two points and no zero-length segment, so
//! anything sampling it (headings, interpolation) never divides by zero.
//! Routes are usually assembled from a `SegmentMap`: each transit line is
//! split into named segments that open in different construction phases,
//! and a route is the concatenation of whichever segments are requested.

mod error;

pub use error::RouteError;

use crate::config::COINCIDENT_EPSILON;
use crate::geo::{self, LngLat};

/// An ordered polyline of at least two geographic points.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<LngLat>,
}

impl Route {
    /// Validate and wrap a list of points.
    ///
    /// Rejects fewer than two points, non-finite coordinates, and consecutive
    /// points that coincide (their segment would have no heading).
    pub fn new(points: Vec<LngLat>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints {
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::NonFiniteCoordinate { index });
        }
        if let Some(index) = points
            .windows(2)
            .position(|w| w[0].coincides_with(w[1], COINCIDENT_EPSILON))
        {
            return Err(RouteError::CoincidentPoints { index });
        }
        Ok(Self { points })
    }

    /// Convenience constructor from raw `[lng, lat]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self, RouteError> {
        Self::new(pairs.iter().copied().map(LngLat::from).collect())
    }

    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    /// Number of straight segments (always at least 1).
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Arithmetic mean of all points.
    pub fn centroid(&self) -> LngLat {
        // Non-empty by construction.
        geo::centroid(&self.points).unwrap_or_default()
    }

    pub fn first(&self) -> LngLat {
        self.points[0]
    }

    pub fn last(&self) -> LngLat {
        self.points[self.points.len() - 1]
    }
}

/// A named sub-polyline of a transit line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: String,
    pub points: Vec<LngLat>,
}

impl Segment {
    pub fn new(id: impl Into<String>, points: Vec<LngLat>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }
}

/// Segments of one line, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentMap {
    segments: Vec<Segment>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment, replacing any existing segment with the same id in place.
    pub fn insert(&mut self, segment: Segment) {
        if let Some(existing) = self.segments.iter_mut().find(|s| s.id == segment.id) {
            *existing = segment;
        } else {
            self.segments.push(segment);
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, id: &str, pairs: &[[f64; 2]]) -> Self {
        self.insert(Segment::new(
            id,
            pairs.iter().copied().map(LngLat::from).collect(),
        ));
        self
    }

    pub fn get(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenate the named segments, in the given order, into one route.
    ///
    /// When the last point so far equals (exactly) the first point of the
    /// next segment the duplicate join point is dropped. An id missing from
    /// the map is an error.
    pub fn splice<S: AsRef<str>>(&self, ids: &[S]) -> Result<Route, RouteError> {
        let mut points = Vec::new();
        for id in ids {
            let id = id.as_ref();
            let segment = self
                .get(id)
                .ok_or_else(|| RouteError::UnknownSegment { id: id.to_string() })?;
            append_elided(&mut points, &segment.points);
        }
        Route::new(points)
    }

    /// Concatenate every segment in insertion order.
    pub fn splice_all(&self) -> Result<Route, RouteError> {
        let mut points = Vec::new();
        for segment in &self.segments {
            append_elided(&mut points, &segment.points);
        }
        Route::new(points)
    }
}

fn append_elided(acc: &mut Vec<LngLat>, next: &[LngLat]) {
    match (acc.last(), next.first()) {
        (Some(last), Some(first)) if last == first => acc.extend_from_slice(&next[1..]),
        _ => acc.extend_from_slice(next),
    }
}
