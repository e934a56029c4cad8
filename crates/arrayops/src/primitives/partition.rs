//! Partitioning primitives for fork-join worker teams.
//!
//! This module provides the low-level helper for splitting an index range
//! into contiguous, disjoint partitions, one per worker.

/// Length of each contiguous partition when splitting `len` items across
/// a team of `teams` workers.
///
/// The last partition may be shorter; every partition is non-empty as long
/// as `len > 0`.
#[inline]
pub fn span(len: usize, teams: usize) -> usize {
    debug_assert!(teams >= 1, "span: team count must be at least 1");

    usize::max(1, len.div_ceil(teams.max(1)))
}

/// Number of partitions `span` actually produces for `len` items.
#[inline]
pub fn count(len: usize, teams: usize) -> usize {
    len.div_ceil(span(len, teams))
}
