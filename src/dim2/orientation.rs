use crate::dim2::{DirectedEdge, Point};

/// The side of a [`DirectedEdge`] a point lies on, looking from the origin
/// towards the terminus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The point is strictly left of the edge (counterclockwise turn).
    Left,
    /// The point is strictly right of the edge (clockwise turn).
    Right,
    /// The point lies on the line through the edge.
    OnLine,
}

impl Orientation {
    /// Returns the orientation seen from the reversed edge.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::OnLine => Orientation::OnLine,
        }
    }
}

/// Gives the orientation determinant of the triangle formed by `a`, `b`, `c`.
///
/// This is `(b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)`, twice the signed
/// area of the triangle.
///
/// - `det > 0`: counterclockwise
/// - `det < 0`: clockwise
/// - `det == 0`: collinear
///
/// The sign is exact for all finite inputs.
#[inline]
pub(crate) fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(a.to_robust(), b.to_robust(), c.to_robust())
}

/// Classifies `point` against the directed `edge`.
///
/// # Example
///
/// ```
/// use quickhull2d::{classify, DirectedEdge, Orientation, Point};
///
/// let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
///
/// assert_eq!(classify(edge, Point::new(1.0, 3.0)), Orientation::Left);
/// assert_eq!(classify(edge, Point::new(1.0, -3.0)), Orientation::Right);
/// assert_eq!(classify(edge, Point::new(9.0, 0.0)), Orientation::OnLine);
/// ```
#[inline]
pub fn classify(edge: DirectedEdge, point: Point) -> Orientation {
    let det = orient2d(edge.origin, edge.terminus, point);

    if det > 0.0 {
        Orientation::Left
    } else if det < 0.0 {
        Orientation::Right
    } else {
        Orientation::OnLine
    }
}
