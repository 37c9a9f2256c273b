use crate::dim2::{orientation::classify, DirectedEdge, Orientation, Point};

/// Splits `points` into those strictly left of `edge` and those strictly right of it.
///
/// Points on the line through the edge are dropped from both sides, including the
/// endpoints of the edge and any duplicates of them. Both outputs keep the relative
/// order of `points`, and the input is left untouched.
///
/// # Example
///
/// ```
/// use quickhull2d::{partition, DirectedEdge, Point};
///
/// let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
/// let points = [
///     Point::new(4.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 4.0),
/// ];
///
/// let (left, right) = partition(edge, &points);
/// assert_eq!(left, vec![Point::new(0.0, 4.0)]);
/// assert_eq!(right, vec![Point::new(4.0, 0.0)]);
/// ```
pub fn partition(edge: DirectedEdge, points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &point in points {
        match classify(edge, point) {
            Orientation::Left => left.push(point),
            Orientation::Right => right.push(point),
            Orientation::OnLine => {}
        }
    }

    (left, right)
}
