//! # QuickHull 2D
//!
//! A Rust implementation of the divide-and-conquer QuickHull algorithm for the
//! boundary of the convex hull of a 2D point set.
//!
//! The hull starts from the edge between the leftmost and rightmost points. The
//! points on each side of that edge are handled separately: the point furthest
//! from the edge is found, the edge is split in two at that point, and each new
//! edge is processed with the points still outside of it. An edge with no points
//! outside of it is on the boundary.
//!
//! The result is a [`ConvexHull2d`]: a sequence of [`BoundaryEdge`]s made of two
//! independently built chains, one per side of the starting edge.
//!
//! Orientation tests use adaptive-precision arithmetic and are exact for all
//! finite inputs, in particular for all integer coordinates.
//!
//! # Example
//!
//! ```
//! use quickhull2d::{ConvexHull2d, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(5.0, 10.0),
//!     Point::new(5.0, 3.0),
//! ];
//!
//! let hull = ConvexHull2d::try_from_points(&points).unwrap();
//!
//! // Three sides of the triangle; the interior point is not on the boundary.
//! assert_eq!(hull.len(), 3);
//! assert!(hull.iter().all(|edge| !edge.has_endpoint(Point::new(5.0, 3.0))));
//!
//! for edge in &hull {
//!     println!("{edge}");
//! }
//! ```
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)
//! - Jonathan Richard Shewchuk. 1997. [Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric Predicates](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf)

#![warn(missing_docs)]

mod dim2;
mod fixed_hasher;

pub use dim2::{
    classify, furthest_point, partition, points_from_records, BoundaryEdge, ConvexHull2d,
    ConvexHull2dError, DegeneratePolicy, DirectedEdge, HullOptions, Orientation, Point, TieBreak,
};
