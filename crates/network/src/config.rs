use crate::geo::LngLat;

/// Geographic center of the city, used as the host map's initial focus.
pub const ZAGREB_CENTER: LngLat = LngLat::new(15.9819, 45.815);

/// Glavni kolodvor, the main interchange. The "reset view" target.
pub const STATION_GLAVNI_KOLODVOR: LngLat = LngLat::new(15.979, 45.805);

/// Initial zoom of the host map.
pub const DEFAULT_ZOOM: f64 = 11.5;

/// Two consecutive route points closer than this (in degrees, per axis) are
/// treated as the same point.
pub const COINCIDENT_EPSILON: f64 = 1e-12;

/// First year shown on the timeline scrubber.
pub const TIMELINE_FIRST_YEAR: u32 = 2025;

/// Last year shown on the timeline scrubber.
pub const TIMELINE_LAST_YEAR: u32 = 2050;

/// Year selected when the app starts (everything built).
pub const DEFAULT_YEAR: u32 = TIMELINE_LAST_YEAR;
