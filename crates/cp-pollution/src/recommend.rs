//! The lower-pollution recommendation rule.

use std::fmt;

/// Which of the two computed routes a summary refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// The route minimizing total length.
    Shortest,
    /// The route minimizing total travel time.
    Fastest,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Shortest => write!(f, "Shortest"),
            RouteKind::Fastest => write!(f, "Fastest"),
        }
    }
}

/// Pick the route with the strictly lower pollution score.
///
/// The comparison is strict less-than on the shortest route's score, so
/// equal scores recommend [`RouteKind::Fastest`].  The tie direction is a
/// deliberate product decision; flip the comparison to favor the shortest
/// route instead.
pub fn recommend(shortest_score: f64, fastest_score: f64) -> RouteKind {
    if shortest_score < fastest_score {
        RouteKind::Shortest
    } else {
        RouteKind::Fastest
    }
}
