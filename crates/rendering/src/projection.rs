//! Geographic ↔ local render-space transforms.
//!
//! Vehicles are modelled in a small Y-up Cartesian space whose unit is
//! [`OBJECT_SCALE`] meters. A [`LocalFrame`] anchors that space at a
//! route's projected centroid; the host's projected space is the one its
//! camera matrix expects.

use std::f64::consts::{FRAC_PI_2, PI};

use bevy::math::{DMat4, DVec2, DVec3};

use network::{LngLat, Route};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Equatorial circumference of the sphere the host projects onto.
pub const EARTH_CIRCUMFERENCE_M: f64 = 2.0 * PI * EARTH_RADIUS_M;

/// One local unit is this many meters.
pub const OBJECT_SCALE: f64 = 2.0;

/// Maps geographic coordinates into the host's projected 2D space.
pub trait Projection: Send + Sync {
    fn project(&self, p: LngLat) -> DVec2;

    /// Projected units spanned by one meter on the ground at `p`.
    fn units_per_meter(&self, p: LngLat) -> f64;
}

/// Spherical Web Mercator normalized to `[0, 1]` on both axes, X growing east
/// and Y growing south.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn project(&self, p: LngLat) -> DVec2 {
        let x = (180.0 + p.lng) / 360.0;
        let y = (180.0 - (180.0 / PI) * (PI / 4.0 + p.lat * PI / 360.0).tan().ln()) / 360.0;
        DVec2::new(x, y)
    }

    fn units_per_meter(&self, p: LngLat) -> f64 {
        1.0 / (EARTH_CIRCUMFERENCE_M * p.lat.to_radians().cos())
    }
}

/// Identity projection: `x = lng`, `y = lat`, one unit per meter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatProjection;

impl Projection for FlatProjection {
    fn project(&self, p: LngLat) -> DVec2 {
        DVec2::new(p.lng, p.lat)
    }

    fn units_per_meter(&self, _p: LngLat) -> f64 {
        1.0
    }
}

/// Fixed origin and scale of one layer's local render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    anchor: DVec2,
    scale: f64,
}

impl LocalFrame {
    /// Anchor at the route's centroid (mean of longitudes and latitudes).
    pub fn from_route(route: &Route, projection: &dyn Projection) -> Self {
        let centroid = route.centroid();
        Self {
            anchor: projection.project(centroid),
            scale: projection.units_per_meter(centroid) * OBJECT_SCALE,
        }
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    /// Projected units per local unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_local(&self, projected: DVec2) -> DVec2 {
        (projected - self.anchor) / self.scale
    }

    /// Local-to-projected transform for the render pass.
    ///
    /// Local space is Y-up with Z along projected Y; projected space has Z up,
    /// so the local frame is tipped over the X axis and Y is flipped.
    pub fn anchor_matrix(&self) -> DMat4 {
        let s = self.scale;
        DMat4::from_translation(self.anchor.extend(0.0))
            * DMat4::from_scale(DVec3::new(s, -s, s))
            * DMat4::from_rotation_x(FRAC_PI_2)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn zagreb_route() -> Route {
        Route::from_pairs(&[[15.9378, 45.8123], [15.9534, 45.7934], [15.9834, 45.7878]])
            .unwrap()
    }

    #[test]
    fn test_mercator_origin_and_range() {
        let p = WebMercator.project(LngLat::new(0.0, 0.0));
        assert!((p.x - 0.5).abs() < 1e-12, "got: {p:?}");
        assert!((p.y - 0.5).abs() < 1e-12, "got: {p:?}");

        let ne = WebMercator.project(LngLat::new(180.0, 85.0));
        assert!((ne.x - 1.0).abs() < 1e-12);
        assert!(ne.y < 0.01 && ne.y > 0.0, "got: {ne:?}");
    }

    #[test]
    fn test_mercator_y_grows_south() {
        let north = WebMercator.project(LngLat::new(15.98, 45.9));
        let south = WebMercator.project(LngLat::new(15.98, 45.7));
        assert!(south.y > north.y);
    }

    #[test]
    fn test_units_per_meter_matches_projected_distance() {
        // 100 m east along a parallel, measured in projected units.
        let p = LngLat::new(15.98, 45.8);
        let meters = 100.0;
        let dlng = meters / (EARTH_CIRCUMFERENCE_M * p.lat.to_radians().cos()) * 360.0;
        let a = WebMercator.project(p);
        let b = WebMercator.project(LngLat::new(p.lng + dlng, p.lat));
        let expected = WebMercator.units_per_meter(p) * meters;
        assert!(((b.x - a.x) - expected).abs() < 1e-15, "got: {}", b.x - a.x);
    }

    #[test]
    fn test_centroid_maps_to_local_origin() {
        for projection in [&WebMercator as &dyn Projection, &FlatProjection] {
            let route = zagreb_route();
            let frame = LocalFrame::from_route(&route, projection);
            let local = frame.to_local(projection.project(route.centroid()));
            assert!(local.length() < 1e-9, "got: {local:?}");
        }
    }

    #[test]
    fn test_nearby_points_stay_nearby() {
        let route = zagreb_route();
        let frame = LocalFrame::from_route(&route, &WebMercator);
        let local = |p: LngLat| frame.to_local(WebMercator.project(p));

        let start = LngLat::new(15.95, 45.80);
        let mut previous = local(start);
        let mut previous_distance = 0.0;
        for step in 1..=20 {
            let p = LngLat::new(start.lng + step as f64 * 1e-4, start.lat + step as f64 * 5e-5);
            let here = local(p);
            // Each step is roughly ten meters, about five local units.
            let hop = here.distance(previous);
            assert!(hop > 4.0 && hop < 6.0, "step {step} got: {hop}");
            let distance = here.distance(local(start));
            assert!(distance > previous_distance, "step {step} not monotonic");
            previous = here;
            previous_distance = distance;
        }
    }

    #[test]
    fn test_local_unit_is_object_scale_meters() {
        let route = zagreb_route();
        let frame = LocalFrame::from_route(&route, &WebMercator);
        let centroid = route.centroid();
        let meters = 200.0;
        let dlng = meters / (EARTH_CIRCUMFERENCE_M * centroid.lat.to_radians().cos()) * 360.0;
        let east = frame.to_local(WebMercator.project(LngLat::new(centroid.lng + dlng, centroid.lat)));
        assert!((east.x - meters / OBJECT_SCALE).abs() < 1e-6, "got: {east:?}");
        assert!(east.y.abs() < 1e-6, "got: {east:?}");
    }

    #[test]
    fn test_anchor_matrix_places_local_points() {
        let route = zagreb_route();
        let frame = LocalFrame::from_route(&route, &WebMercator);
        let target = WebMercator.project(LngLat::new(15.96, 45.80));
        let local = frame.to_local(target);

        // Local (x, height, z) lands on projected (x, y, height * scale).
        let height = 3.0;
        let world = frame
            .anchor_matrix()
            .transform_point3(DVec3::new(local.x, height, local.y));
        assert!((world.x - target.x).abs() < 1e-12, "got: {world:?}");
        assert!((world.y - target.y).abs() < 1e-12, "got: {world:?}");
        assert!((world.z - height * frame.scale()).abs() < 1e-15, "got: {world:?}");
    }

    fn arb_points() -> impl Strategy<Value = Vec<LngLat>> {
        prop::collection::vec((15.0f64..17.0, 45.0f64..46.5), 2..=20)
            .prop_map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(lng, lat)| LngLat::new(lng, lat))
                    .collect()
            })
    }

    /// Ground distance in meters on a locally flat earth.
    fn ground_meters(a: LngLat, b: LngLat) -> f64 {
        let per_degree = EARTH_CIRCUMFERENCE_M / 360.0;
        let mid_lat = (0.5 * (a.lat + b.lat)).to_radians();
        let dx = (b.lng - a.lng) * per_degree * mid_lat.cos();
        let dy = (b.lat - a.lat) * per_degree;
        dx.hypot(dy)
    }

    proptest! {
        #[test]
        fn centroid_is_local_origin_for_any_route(points in arb_points()) {
            let route = Route::new(points);
            prop_assume!(route.is_ok());
            let route = route.unwrap();
            for projection in [&WebMercator as &dyn Projection, &FlatProjection] {
                let frame = LocalFrame::from_route(&route, projection);
                let local = frame.to_local(projection.project(route.centroid()));
                prop_assert!(local.length() < 1e-9, "got: {:?}", local);
            }
        }

        #[test]
        fn mercator_local_distance_tracks_ground_distance(points in arb_points()) {
            let route = Route::new(points);
            prop_assume!(route.is_ok());
            let route = route.unwrap();
            let frame = LocalFrame::from_route(&route, &WebMercator);
            let local = |p: LngLat| frame.to_local(WebMercator.project(p));
            for pair in route.points().windows(2) {
                let expected = ground_meters(pair[0], pair[1]) / OBJECT_SCALE;
                let actual = local(pair[0]).distance(local(pair[1]));
                // Mercator stretch varies by a few percent across the band.
                prop_assert!(actual <= 1.1 * expected + 1e-6, "{} vs {}", actual, expected);
                prop_assert!(actual >= 0.9 * expected - 1e-6, "{} vs {}", actual, expected);
            }
        }

        #[test]
        fn flat_local_distance_is_degrees_over_scale(points in arb_points()) {
            let route = Route::new(points);
            prop_assume!(route.is_ok());
            let route = route.unwrap();
            let frame = LocalFrame::from_route(&route, &FlatProjection);
            for pair in route.points().windows(2) {
                let degrees = DVec2::new(pair[1].lng - pair[0].lng, pair[1].lat - pair[0].lat);
                let actual = frame
                    .to_local(FlatProjection.project(pair[0]))
                    .distance(frame.to_local(FlatProjection.project(pair[1])));
                prop_assert!(
                    (actual - degrees.length() / OBJECT_SCALE).abs() < 1e-9,
                    "got: {}", actual
                );
            }
        }
    }
}
