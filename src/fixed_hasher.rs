//! Deterministic hashing for sets of points.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};
use hashbrown::HashSet;

const POINT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Builds [`FoldHasher`]s from one fixed seed, so hashing a point gives the same
/// result in every run.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        const STATE: FixedState = FixedState::with_seed(POINT_SEED);
        STATE.build_hasher()
    }
}

/// A set of points keyed by the bit patterns of their coordinates.
pub(crate) type PointSet = HashSet<[u64; 2], FixedHasher>;

/// Creates an empty [`PointSet`] with room for `capacity` points.
#[inline]
pub(crate) fn point_set_with_capacity(capacity: usize) -> PointSet {
    PointSet::with_capacity_and_hasher(capacity, FixedHasher)
}
