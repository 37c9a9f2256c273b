use crate::dim2::{orientation::classify, DirectedEdge, Orientation, Point};

/// Checks every non-degenerate edge as a supporting line of `points`.
///
/// Returns the first edge with points strictly on both of its sides, together with
/// the first point found on the side opposite to the earlier ones.
pub(crate) fn find_separated_point(
    edges: &[DirectedEdge],
    points: &[Point],
) -> Option<(DirectedEdge, Point)> {
    for &edge in edges.iter().filter(|edge| !edge.is_degenerate()) {
        let mut inner_side = Orientation::OnLine;

        for &point in points {
            match (inner_side, classify(edge, point)) {
                (_, Orientation::OnLine) => {}
                (Orientation::OnLine, side) => inner_side = side,
                (inner, side) if inner != side => return Some((edge, point)),
                _ => {}
            }
        }
    }

    None
}
