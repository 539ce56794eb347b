use std::fmt;

use gridpath_core::{Point, Range};

/// Which end of the requested route an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// A search request that cannot be run on the given map.
///
/// Detected before any search work is done. An unreachable goal is not an
/// error; see [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint lies outside the map.
    OutOfBounds {
        which: Endpoint,
        point: Point,
        bounds: Range,
    },
    /// The endpoint is a closed cell.
    Blocked { which: Endpoint, point: Point },
}

impl ConfigError {
    /// The endpoint the error is about.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::OutOfBounds { which, .. } | Self::Blocked { which, .. } => *which,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                which,
                point,
                bounds,
            } => write!(f, "{which} {point} is outside the map {bounds}"),
            Self::Blocked { which, point } => write!(f, "{which} {point} is a closed cell"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = ConfigError::Blocked {
            which: Endpoint::Goal,
            point: Point::new(2, 2),
        };
        assert_eq!(e.to_string(), "goal (2, 2) is a closed cell");
        assert_eq!(e.endpoint(), Endpoint::Goal);

        let e = ConfigError::OutOfBounds {
            which: Endpoint::Start,
            point: Point::new(-1, 0),
            bounds: Range::new(0, 0, 3, 3),
        };
        assert_eq!(e.to_string(), "start (-1, 0) is outside the map [(0, 0)-(3, 3))");
    }
}
