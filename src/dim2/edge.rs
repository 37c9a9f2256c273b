use core::fmt;

use glam::DVec2;

use crate::dim2::{
    orientation::{classify, orient2d},
    Orientation, Point,
};

/// An ordered pair of points defining an oriented line.
///
/// The edge splits the plane into the half-plane left of travel from
/// [`origin`](Self::origin) to [`terminus`](Self::terminus), the half-plane
/// right of it, and the line itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedEdge {
    /// The start of the edge.
    pub origin: Point,
    /// The end of the edge.
    pub terminus: Point,
}

/// A [`DirectedEdge`] that lies on the boundary of a convex hull.
pub type BoundaryEdge = DirectedEdge;

impl DirectedEdge {
    /// Creates a new edge from `origin` to `terminus`.
    #[inline]
    pub const fn new(origin: Point, terminus: Point) -> Self {
        Self { origin, terminus }
    }

    /// Returns the edge traversed in the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            origin: self.terminus,
            terminus: self.origin,
        }
    }

    /// Returns `[origin, terminus]`.
    #[inline]
    pub const fn endpoints(self) -> [Point; 2] {
        [self.origin, self.terminus]
    }

    /// Returns `true` if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.origin == self.terminus
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[inline]
    pub fn has_endpoint(self, point: Point) -> bool {
        self.origin == point || self.terminus == point
    }

    /// The vector from the origin to the terminus.
    #[inline]
    pub fn direction(self) -> DVec2 {
        DVec2::from(self.terminus) - DVec2::from(self.origin)
    }

    /// The Euclidean length of the edge.
    #[inline]
    pub fn length(self) -> f64 {
        self.direction().length()
    }

    /// Classifies `point` against this edge.
    ///
    /// See [`classify`](crate::classify).
    #[inline]
    pub fn orientation_of(self, point: Point) -> Orientation {
        classify(self, point)
    }

    /// The perpendicular distance from `point` to the infinite line through this edge.
    ///
    /// This is `|(b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x|`
    /// divided by the length of the edge, evaluated through the exact orientation
    /// determinant. A degenerate edge has no line, and every distance is zero.
    #[inline]
    pub fn distance_to(self, point: Point) -> f64 {
        let length = self.length();
        if length == 0.0 {
            return 0.0;
        }
        orient2d(self.origin, self.terminus, point).abs() / length
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.terminus)
    }
}

impl From<(Point, Point)> for DirectedEdge {
    #[inline]
    fn from((origin, terminus): (Point, Point)) -> Self {
        Self { origin, terminus }
    }
}

impl From<DirectedEdge> for (Point, Point) {
    #[inline]
    fn from(edge: DirectedEdge) -> Self {
        (edge.origin, edge.terminus)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn distance_matches_closed_form() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(7.0, -3.0);
        let edge = DirectedEdge::new(a, b);

        for p in [
            Point::new(0.0, 0.0),
            Point::new(4.0, 9.0),
            Point::new(-6.0, 1.5),
        ] {
            let numerator = ((b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x).abs();
            let denominator = ((b.y - a.y).powi(2) + (b.x - a.x).powi(2)).sqrt();
            assert_relative_eq!(edge.distance_to(p), numerator / denominator, epsilon = 1e-12);
        }
    }

    #[test]
    fn distance_ignores_direction() {
        let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let p = Point::new(-4.0, 3.0);
        assert_relative_eq!(edge.distance_to(p), 5.0);
        assert_relative_eq!(edge.reversed().distance_to(p), 5.0);
    }

    #[test]
    fn points_on_the_line_have_zero_distance() {
        let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert_eq!(edge.distance_to(Point::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn degenerate_edge() {
        let p = Point::new(1.0, 1.0);
        let edge = DirectedEdge::new(p, p);
        assert!(edge.is_degenerate());
        assert_eq!(edge.length(), 0.0);
        assert_eq!(edge.distance_to(Point::new(5.0, 5.0)), 0.0);
    }

    #[test]
    fn display() {
        let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(4.0, 1.0));
        assert_eq!(edge.to_string(), "(0, 0) -> (4, 1)");
    }
}
