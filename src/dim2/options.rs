/// What to do when the furthest point search finds no candidate off the current edge.
///
/// With the exact orientation test this only happens when a distance is not
/// representable, for example when the length of the edge overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DegeneratePolicy {
    /// Emit the current edge as a boundary edge and end the branch.
    #[default]
    Terminate,
    /// Fail with [`ConvexHull2dError::DegenerateSelection`](crate::ConvexHull2dError::DegenerateSelection).
    Error,
}

/// How to choose between candidates that are equally extreme.
///
/// This applies both to the leftmost and rightmost seed points and to
/// equidistant candidates in the furthest point search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Compare by `x`, then `y`. The seeds are the lexicographic minimum and maximum,
    /// and the lexicographically smallest of several furthest points wins.
    ///
    /// The output does not depend on the order of the input points.
    #[default]
    Lexicographic,
    /// The first candidate in input order wins.
    FirstOccurrence,
}

/// Configuration for [`ConvexHull2d`](crate::ConvexHull2d) construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HullOptions {
    /// See [`DegeneratePolicy`].
    pub degenerate_policy: DegeneratePolicy,
    /// See [`TieBreak`].
    pub tie_break: TieBreak,
}

impl HullOptions {
    /// Returns the options with the given [`DegeneratePolicy`].
    #[inline]
    pub const fn with_degenerate_policy(mut self, degenerate_policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = degenerate_policy;
        self
    }

    /// Returns the options with the given [`TieBreak`].
    #[inline]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
