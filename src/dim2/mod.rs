mod edge;
mod furthest;
mod options;
mod orientation;
mod partition;
mod point;
mod validation;

pub use edge::{BoundaryEdge, DirectedEdge};
pub use furthest::furthest_point;
pub use options::{DegeneratePolicy, HullOptions, TieBreak};
pub use orientation::{classify, Orientation};
pub use partition::partition;
pub use point::{points_from_records, Point};

use thiserror::Error;

use crate::fixed_hasher::point_set_with_capacity;

/// An error returned during [`ConvexHull2d`] construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvexHull2dError {
    /// The input point set is empty, so there are no extreme points to start from.
    #[error("Cannot compute the convex hull of an empty point set.")]
    EmptyInput,
    /// No candidate has a positive distance from an edge that still has outside points.
    ///
    /// Only returned with [`DegeneratePolicy::Error`].
    #[error("No furthest point found for edge {edge} among its outside points.")]
    DegenerateSelection {
        /// The edge whose furthest point search came up empty.
        edge: DirectedEdge,
    },
    /// A point record does not have exactly two coordinates.
    #[error("Expected a point with 2 coordinates, found {len}.")]
    MalformedPoint {
        /// The number of coordinates in the rejected record.
        len: usize,
    },
    /// A point has a NaN or infinite coordinate.
    #[error("Point at index {index} has a non-finite coordinate.")]
    NonFinitePoint {
        /// The index of the point in the input.
        index: usize,
    },
}

/// The boundary of a 2D [convex hull], computed with the QuickHull algorithm.
///
/// The hull is stored as a sequence of [`BoundaryEdge`]s made of two chains.
/// The algorithm splits the input by the edge between the leftmost and rightmost
/// points, then builds one chain from the points left of that edge and another
/// from the points right of it. Edges within a chain follow each other, but the
/// chains are not joined into a single polygon, and both chains start at the
/// leftmost point.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull2d::{ConvexHull2d, DirectedEdge, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 4.0),
///     Point::new(0.0, 4.0),
///     Point::new(2.0, 2.0),
/// ];
///
/// let hull = ConvexHull2d::try_from_points(&points).unwrap();
///
/// assert_eq!(
///     hull.edges(),
///     &[
///         // Left of the diagonal from (0, 0) to (4, 4).
///         DirectedEdge::new(Point::new(0.0, 0.0), Point::new(0.0, 4.0)),
///         DirectedEdge::new(Point::new(0.0, 4.0), Point::new(4.0, 4.0)),
///         // Right of it.
///         DirectedEdge::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0)),
///         DirectedEdge::new(Point::new(4.0, 0.0), Point::new(4.0, 4.0)),
///     ],
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull2d {
    /// Both chains, left chain first.
    edges: Vec<BoundaryEdge>,
    /// The number of edges in the left chain.
    split: usize,
    /// The edge from the leftmost to the rightmost point.
    seed: DirectedEdge,
}

impl ConvexHull2d {
    /// Computes the [`ConvexHull2d`] of the given points with the default [`HullOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::EmptyInput`] if `points` is empty and
    /// [`ConvexHull2dError::NonFinitePoint`] if any coordinate is NaN or infinite.
    #[inline]
    pub fn try_from_points(points: &[Point]) -> Result<Self, ConvexHull2dError> {
        Self::try_from_points_with(points, &HullOptions::default())
    }

    /// Computes the [`ConvexHull2d`] of the given points.
    ///
    /// The input is only read. If all points are collinear, the result is the single
    /// edge between the two extreme points, and if all points coincide, that edge is
    /// degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::EmptyInput`] if `points` is empty and
    /// [`ConvexHull2dError::NonFinitePoint`] if any coordinate is NaN or infinite.
    /// With [`DegeneratePolicy::Error`], returns [`ConvexHull2dError::DegenerateSelection`]
    /// if an edge with outside points has no furthest point.
    pub fn try_from_points_with(
        points: &[Point],
        options: &HullOptions,
    ) -> Result<Self, ConvexHull2dError> {
        if points.is_empty() {
            return Err(ConvexHull2dError::EmptyInput);
        }

        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(ConvexHull2dError::NonFinitePoint { index });
        }

        let (min, max) = extreme_points(points, options.tie_break);
        let seed = DirectedEdge::new(min, max);

        // Split the rest of the points by the line through the extremes.
        let (left, right) = partition(seed, points);

        log::debug!(
            "QuickHull over {} points from {} ({} left, {} right)",
            points.len(),
            seed,
            left.len(),
            right.len()
        );

        let mut edges = Vec::new();

        // All points are on one line, so the seed edge is the whole hull.
        if left.is_empty() && right.is_empty() {
            edges.push(seed);
            return Ok(Self {
                edges,
                split: 1,
                seed,
            });
        }

        Self::hull_set(seed, &left, options, &mut edges)?;
        let split = edges.len();
        Self::hull_set(seed, &right, options, &mut edges)?;

        log::debug!("QuickHull produced {} boundary edges", edges.len());

        Ok(Self { edges, split, seed })
    }

    /// Returns the boundary edges: the left chain followed by the right chain.
    #[inline]
    pub fn edges(&self) -> &[BoundaryEdge] {
        &self.edges
    }

    /// Returns the boundary edges.
    ///
    /// This consumes the convex hull. If you want a reference to the edges,
    /// consider using [`edges`](Self::edges) instead.
    #[inline]
    pub fn into_edges(self) -> Vec<BoundaryEdge> {
        self.edges
    }

    /// Returns the chain built from the points left of the edge from the leftmost to
    /// the rightmost point.
    #[inline]
    pub fn upper_chain(&self) -> &[BoundaryEdge] {
        &self.edges[..self.split]
    }

    /// Returns the chain built from the points right of the edge from the leftmost to
    /// the rightmost point.
    #[inline]
    pub fn lower_chain(&self) -> &[BoundaryEdge] {
        &self.edges[self.split..]
    }

    /// Returns the leftmost and rightmost points the hull was seeded with.
    #[inline]
    pub fn extremes(&self) -> (Point, Point) {
        (self.seed.origin, self.seed.terminus)
    }

    /// Returns the distinct endpoints of the boundary edges in order of first appearance.
    pub fn vertices(&self) -> Vec<Point> {
        let mut seen = point_set_with_capacity(self.edges.len() + 1);

        self.edges
            .iter()
            .flat_map(|edge| edge.endpoints())
            .filter(|point| seen.insert(point.bits()))
            .collect()
    }

    /// Returns the number of boundary edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no boundary edges.
    ///
    /// A successfully constructed hull always has at least one edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns an iterator over the boundary edges.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, BoundaryEdge> {
        self.edges.iter()
    }

    /// Returns `true` if every point of `points` is inside the hull or on its boundary.
    ///
    /// Each edge is checked as a supporting line: no two points may lie strictly on
    /// opposite sides of it.
    #[inline]
    pub fn encloses(&self, points: &[Point]) -> bool {
        validation::find_separated_point(&self.edges, points).is_none()
    }

    /// Recursively collects the boundary edges between `edge.origin` and `edge.terminus`
    /// on the side of `edge` where `outside_points` lie.
    ///
    /// `outside_points` never contains the endpoints of `edge`. Every recursive call
    /// receives a strict subset of it, since the furthest point itself is on the line
    /// of both new edges and is dropped by the partition.
    fn hull_set(
        edge: DirectedEdge,
        outside_points: &[Point],
        options: &HullOptions,
        hull: &mut Vec<BoundaryEdge>,
    ) -> Result<(), ConvexHull2dError> {
        if outside_points.is_empty() {
            hull.push(edge);
            return Ok(());
        }

        let Some(furthest) = furthest_point(edge, outside_points, options.tie_break) else {
            return match options.degenerate_policy {
                DegeneratePolicy::Terminate => {
                    log::warn!(
                        "No furthest point for {} among {} candidates, keeping it as a boundary edge",
                        edge,
                        outside_points.len()
                    );
                    hull.push(edge);
                    Ok(())
                }
                DegeneratePolicy::Error => Err(ConvexHull2dError::DegenerateSelection { edge }),
            };
        };

        log::trace!(
            "Edge {} with {} outside points, furthest {}",
            edge,
            outside_points.len(),
            furthest
        );

        // Recursively find hull edges on either side of the triangle `origin, furthest, terminus`.
        let first = DirectedEdge::new(edge.origin, furthest);
        let points = outside_of(first, edge.terminus, outside_points);
        Self::hull_set(first, &points, options, hull)?;

        let second = DirectedEdge::new(furthest, edge.terminus);
        let points = outside_of(second, edge.origin, outside_points);
        Self::hull_set(second, &points, options, hull)
    }
}

impl<'a> IntoIterator for &'a ConvexHull2d {
    type Item = &'a BoundaryEdge;
    type IntoIter = core::slice::Iter<'a, BoundaryEdge>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for ConvexHull2d {
    type Item = BoundaryEdge;
    type IntoIter = std::vec::IntoIter<BoundaryEdge>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Returns the points of `points` strictly on the other side of `edge` than `opposite`.
///
/// If `opposite` is on the line, no point is outside.
fn outside_of(edge: DirectedEdge, opposite: Point, points: &[Point]) -> Vec<Point> {
    let (left, right) = partition(edge, points);

    match classify(edge, opposite) {
        Orientation::Right => left,
        Orientation::Left => right,
        Orientation::OnLine => Vec::new(),
    }
}

/// Finds the leftmost and rightmost points of a non-empty point set.
///
/// With [`TieBreak::FirstOccurrence`], ties in `x` go to the first point in input order.
/// If every point has the same `x`, that rule cannot tell the ends of the vertical
/// line apart, and the lexicographic extremes are used instead.
fn extreme_points(points: &[Point], tie_break: TieBreak) -> (Point, Point) {
    let first = points[0];

    if tie_break == TieBreak::FirstOccurrence {
        let (min, max) = points.iter().fold((first, first), |(min, max), &point| {
            let min = if point.x < min.x { point } else { min };
            let max = if point.x > max.x { point } else { max };
            (min, max)
        });

        if min.x != max.x {
            return (min, max);
        }
    }

    points.iter().fold((first, first), |(min, max), &point| {
        let min = if point.lexicographic_cmp(&min).is_lt() {
            point
        } else {
            min
        };
        let max = if point.lexicographic_cmp(&max).is_gt() {
            point
        } else {
            max
        };
        (min, max)
    })
}
