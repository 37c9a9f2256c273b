use core::cmp::Ordering;
use core::fmt;

use glam::DVec2;

use crate::dim2::ConvexHull2dError;

/// A point in the plane.
///
/// Points have no identity beyond their coordinates: two points with the same
/// `x` and `y` are the same point. The derived ordering compares `x` first and
/// then `y`. For a total order that also handles NaN, see
/// [`lexicographic_cmp`](Self::lexicographic_cmp).
///
/// Integer coordinates are stored as `f64`. Every integer of magnitude below
/// 2<sup>53</sup> is represented exactly, and the orientation test is exact
/// for all finite inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The `x` coordinate.
    pub x: f64,
    /// The `y` coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compares two points first by `x`, then by `y`.
    #[inline]
    pub fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// The bit pattern of the coordinates, with `-0.0` folded onto `0.0`.
    ///
    /// Equal points always produce equal keys.
    #[inline]
    pub(crate) fn bits(self) -> [u64; 2] {
        [(self.x + 0.0).to_bits(), (self.y + 0.0).to_bits()]
    }

    #[inline]
    pub(crate) fn to_robust(self) -> robust::Coord<f64> {
        robust::Coord {
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = ConvexHull2dError;

    /// Accepts a coordinate record with exactly two fields.
    fn try_from(record: &[f64]) -> Result<Self, Self::Error> {
        match record {
            &[x, y] => Ok(Self { x, y }),
            _ => Err(ConvexHull2dError::MalformedPoint { len: record.len() }),
        }
    }
}

/// Converts raw coordinate records into points.
///
/// Every record must hold exactly two coordinates. The first record of any other
/// length is rejected with [`ConvexHull2dError::MalformedPoint`].
///
/// # Example
///
/// ```
/// use quickhull2d::{points_from_records, ConvexHull2dError, Point};
///
/// let points = points_from_records(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
/// assert_eq!(points, vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
///
/// let records: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![2.0, 3.0, 7.0]];
/// assert_eq!(
///     points_from_records(&records),
///     Err(ConvexHull2dError::MalformedPoint { len: 3 }),
/// );
/// ```
pub fn points_from_records<R: AsRef<[f64]>>(
    records: &[R],
) -> Result<Vec<Point>, ConvexHull2dError> {
    records
        .iter()
        .map(|record| Point::try_from(record.as_ref()))
        .collect()
}
