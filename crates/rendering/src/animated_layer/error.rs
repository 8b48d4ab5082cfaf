use std::fmt;

use network::RouteError;

/// Why a layer could not be built or advanced.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerError {
    /// The configured route is malformed.
    Route(RouteError),
    NoInstances,
    NoCars,
    AlreadyAttached,
    /// A detached layer cannot be attached again.
    Detached,
    /// Animation time stopped being a finite number.
    NonFiniteTime { time: f64 },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::Route(err) => write!(f, "Invalid route: {err}"),
            LayerError::NoInstances => write!(f, "Layer needs at least one vehicle instance"),
            LayerError::NoCars => write!(f, "Train needs at least one car"),
            LayerError::AlreadyAttached => write!(f, "Layer is already attached to a map"),
            LayerError::Detached => {
                write!(f, "Layer was detached; build a new layer to attach again")
            }
            LayerError::NonFiniteTime { time } => {
                write!(f, "Animation time is not finite: {time}")
            }
        }
    }
}

impl std::error::Error for LayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayerError::Route(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RouteError> for LayerError {
    fn from(err: RouteError) -> Self {
        LayerError::Route(err)
    }
}
