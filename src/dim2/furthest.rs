use core::cmp::Ordering;

use crate::dim2::{DirectedEdge, Point, TieBreak};

/// Finds the point of `points` furthest from the line through `edge`.
///
/// The running maximum starts at zero, so a point must lie at a strictly positive
/// distance to be selected. Returns `None` if there is no such point, which happens
/// when `points` is empty or every point is on the line.
///
/// Equidistant candidates are resolved by `tie_break`.
///
/// # Example
///
/// ```
/// use quickhull2d::{furthest_point, DirectedEdge, Point, TieBreak};
///
/// let edge = DirectedEdge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
///
/// let points = [Point::new(2.0, 3.0), Point::new(8.0, -5.0), Point::new(5.0, 1.0)];
/// assert_eq!(
///     furthest_point(edge, &points, TieBreak::FirstOccurrence),
///     Some(Point::new(8.0, -5.0)),
/// );
///
/// let collinear = [Point::new(3.0, 0.0), Point::new(12.0, 0.0)];
/// assert_eq!(furthest_point(edge, &collinear, TieBreak::FirstOccurrence), None);
/// ```
pub fn furthest_point(
    edge: DirectedEdge,
    points: &[Point],
    tie_break: TieBreak,
) -> Option<Point> {
    let mut furthest: Option<Point> = None;
    let mut max_distance = 0.0;

    for &point in points {
        let distance = edge.distance_to(point);

        let replace = if distance > max_distance {
            true
        } else if distance == max_distance {
            match (tie_break, furthest) {
                (TieBreak::Lexicographic, Some(current)) => {
                    point.lexicographic_cmp(&current) == Ordering::Less
                }
                _ => false,
            }
        } else {
            false
        };

        if replace {
            max_distance = distance;
            furthest = Some(point);
        }
    }

    furthest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_axis() -> DirectedEdge {
        DirectedEdge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
    }

    #[test]
    fn picks_the_maximum_on_either_side() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(4.0, -6.0),
            Point::new(7.0, 5.0),
        ];
        for tie_break in [TieBreak::FirstOccurrence, TieBreak::Lexicographic] {
            assert_eq!(
                furthest_point(x_axis(), &points, tie_break),
                Some(Point::new(4.0, -6.0))
            );
        }
    }

    #[test]
    fn first_occurrence_wins_ties() {
        let points = [
            Point::new(9.0, 4.0),
            Point::new(1.0, -4.0),
            Point::new(3.0, 4.0),
        ];
        assert_eq!(
            furthest_point(x_axis(), &points, TieBreak::FirstOccurrence),
            Some(Point::new(9.0, 4.0))
        );
    }

    #[test]
    fn lexicographic_minimum_wins_ties() {
        let points = [
            Point::new(9.0, 4.0),
            Point::new(1.0, -4.0),
            Point::new(3.0, 4.0),
            Point::new(1.0, 4.0),
        ];
        assert_eq!(
            furthest_point(x_axis(), &points, TieBreak::Lexicographic),
            Some(Point::new(1.0, -4.0))
        );
    }

    #[test]
    fn lexicographic_result_does_not_depend_on_order() {
        let mut points = vec![
            Point::new(2.0, 3.0),
            Point::new(6.0, -3.0),
            Point::new(-1.0, 3.0),
            Point::new(5.0, 1.0),
        ];
        let expected = furthest_point(x_axis(), &points, TieBreak::Lexicographic);
        points.reverse();
        assert_eq!(
            furthest_point(x_axis(), &points, TieBreak::Lexicographic),
            expected
        );
        assert_eq!(expected, Some(Point::new(-1.0, 3.0)));
    }

    #[test]
    fn none_for_empty_or_collinear_sets() {
        assert_eq!(
            furthest_point(x_axis(), &[], TieBreak::FirstOccurrence),
            None
        );
        let collinear = [Point::new(-4.0, 0.0), Point::new(20.0, 0.0)];
        for tie_break in [TieBreak::FirstOccurrence, TieBreak::Lexicographic] {
            assert_eq!(furthest_point(x_axis(), &collinear, tie_break), None);
        }
    }

    #[test]
    fn none_for_degenerate_edge() {
        let p = Point::new(1.0, 1.0);
        let edge = DirectedEdge::new(p, p);
        assert_eq!(
            furthest_point(edge, &[Point::new(5.0, 9.0)], TieBreak::Lexicographic),
            None
        );
    }
}
