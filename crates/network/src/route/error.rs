use std::fmt;

/// Why a route could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// A route needs at least two points.
    TooFewPoints { found: usize },
    /// Points `index` and `index + 1` are the same location.
    CoincidentPoints { index: usize },
    /// Point `index` has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },
    /// A requested segment id is not in the segment map.
    UnknownSegment { id: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::TooFewPoints { found } => {
                write!(f, "Route needs at least 2 points, found {found}")
            }
            RouteError::CoincidentPoints { index } => write!(
                f,
                "Route points {index} and {} coincide (zero-length segment)",
                index + 1
            ),
            RouteError::NonFiniteCoordinate { index } => {
                write!(f, "Route point {index} has a non-finite coordinate")
            }
            RouteError::UnknownSegment { id } => write!(f, "Unknown segment id: {id}"),
        }
    }
}

impl std::error::Error for RouteError {}
