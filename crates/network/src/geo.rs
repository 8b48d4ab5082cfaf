//! Geographic coordinates.

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Linear interpolation of longitude and latitude independently.
    pub fn lerp(self, other: LngLat, u: f64) -> LngLat {
        LngLat {
            lng: self.lng + (other.lng - self.lng) * u,
            lat: self.lat + (other.lat - self.lat) * u,
        }
    }

    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// True when both axes differ by at most `epsilon`.
    pub fn coincides_with(self, other: LngLat, epsilon: f64) -> bool {
        (self.lng - other.lng).abs() <= epsilon && (self.lat - other.lat).abs() <= epsilon
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        LngLat::new(pair[0], pair[1])
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

/// Arithmetic mean of the points, or `None` for an empty slice.
pub fn centroid(points: &[LngLat]) -> Option<LngLat> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sum_lng, sum_lat) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.lng, y + p.lat));
    Some(LngLat::new(sum_lng / n, sum_lat / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(10.0, -4.0);
        assert_eq!(a.lerp(b, 0.5), LngLat::new(5.0, -2.0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = LngLat::new(15.9, 45.8);
        let b = LngLat::new(16.0, 45.7);
        assert_eq!(a.lerp(b, 0.0), a);
        let end = a.lerp(b, 1.0);
        assert!((end.lng - b.lng).abs() < 1e-12, "got: {end:?}");
        assert!((end.lat - b.lat).abs() < 1e-12, "got: {end:?}");
    }

    #[test]
    fn test_centroid_of_square() {
        let pts = [
            LngLat::new(0.0, 0.0),
            LngLat::new(2.0, 0.0),
            LngLat::new(2.0, 2.0),
            LngLat::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&pts), Some(LngLat::new(1.0, 1.0)));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_coincides_with_epsilon() {
        let a = LngLat::new(1.0, 1.0);
        assert!(a.coincides_with(LngLat::new(1.0, 1.0), 0.0));
        assert!(a.coincides_with(LngLat::new(1.0 + 1e-13, 1.0), 1e-12));
        assert!(!a.coincides_with(LngLat::new(1.0 + 1e-6, 1.0), 1e-12));
    }

    #[test]
    fn test_pair_conversion() {
        let p: LngLat = [15.98, 45.81].into();
        assert_eq!(p, LngLat::new(15.98, 45.81));
        let back: [f64; 2] = p.into();
        assert_eq!(back, [15.98, 45.81]);
    }
}
