//! Parallel execution passes for reduction and selection-sort scans.
//!
//! ## Purpose
//!
//! This module provides the parallel pass functions that are injected into
//! the `arrayops` executors. Each pass forks a worker team over disjoint
//! contiguous partitions of the buffer, joins, and combines the partial
//! results on the calling thread.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements matching the sequential pass
//!   signatures.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU
//!   cores; `par_chunks` supplies both the partitioning and the fork-join
//!   barrier.
//! * **Teams**: The worker count controls the partition count; `None`
//!   resolves to `rayon::current_num_threads()`.
//! * **Exactness**: Partial sums are exact `i128` values, so their
//!   combination is bit-identical to the sequential sum for every
//!   partitioning.
//!
//! ## Key concepts
//!
//! * **Local seeding**: Every worker seeds its local state from its own
//!   partition's first element, never from a shared sentinel, so no worker
//!   reads shared state during the scan.
//! * **Critical update**: The selection scan's only shared mutable state
//!   is a mutex-protected `(value, index)` candidate; the comparison and
//!   the write happen inside a single lock acquisition, so no two workers
//!   can both win against a stale value.
//!
//! ## Invariants
//!
//! * Buffers are only read during a parallel region.
//! * Partial-result combination runs after the join, single-threaded.
//! * A pass holds no state across calls; worker teams are ephemeral.
//!
//! ## Non-goals
//!
//! * This module does not handle the outer sort pass loop (handled by
//!   `arrayops::engine`).
//! * This module does not validate input (handled by the core validator).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use std::sync::Mutex;

// Export dependencies from the arrayops crate
#[cfg(feature = "cpu")]
use arrayops::internals::algorithms::reduction::{self, WideInt};
#[cfg(feature = "cpu")]
use arrayops::internals::algorithms::selection;
#[cfg(feature = "cpu")]
use arrayops::internals::primitives::partition;

// ============================================================================
// Team Sizing
// ============================================================================

/// Resolve the configured worker count to a usable team size.
#[cfg(feature = "cpu")]
fn team_count(workers: Option<usize>) -> usize {
    workers.unwrap_or_else(rayon::current_num_threads).max(1)
}

// ============================================================================
// Parallel Reduction Passes
// ============================================================================

/// Sum the buffer on a worker team.
///
/// Each worker folds its partition into a local `i128` partial sum; the
/// partials are added after the join. Integer addition is associative and
/// commutative, so the result equals the sequential sum exactly.
#[cfg(feature = "cpu")]
pub fn sum_pass_parallel<T: WideInt>(data: &[T], workers: Option<usize>) -> i128 {
    let teams = team_count(workers);
    if teams <= 1 || data.len() <= 1 {
        return reduction::sum_wide(data);
    }

    let span = partition::span(data.len(), teams);
    data.par_chunks(span).map(reduction::sum_wide).sum()
}

/// Find min and max on a worker team.
///
/// Each worker runs the sequential kernel over its own partition (seeded
/// from that partition's first element); the per-partition extrema merge
/// with the associative, commutative combiner after the join.
#[cfg(feature = "cpu")]
pub fn min_max_pass_parallel<T: WideInt>(data: &[T], workers: Option<usize>) -> Option<(T, T)> {
    let teams = team_count(workers);
    if teams <= 1 || data.len() <= 1 {
        return reduction::min_max(data);
    }

    let span = partition::span(data.len(), teams);
    data.par_chunks(span)
        .filter_map(reduction::min_max)
        .reduce_with(reduction::combine_min_max)
}

// ============================================================================
// Parallel Selection Scan
// ============================================================================

/// Shared minimum candidate for one scan pass.
#[cfg(feature = "cpu")]
struct Candidate<T> {
    value: T,
    index: usize,
}

/// Find the offset of a minimal element in the unsorted suffix on a
/// worker team.
///
/// The shared candidate is seeded from the suffix's pivot slot (offset 0).
/// Workers scan disjoint partitions of the tail, each seeded from its own
/// partition, then contend to update the shared candidate under a mutex:
/// only a strictly smaller local minimum wins. Among equal minima the
/// winning offset therefore depends on completion order; the sorted value
/// order is unaffected.
#[cfg(feature = "cpu")]
pub fn scan_min_parallel<T: WideInt>(suffix: &[T], workers: Option<usize>) -> usize {
    if suffix.len() < 2 {
        return 0;
    }

    let teams = team_count(workers);
    if teams <= 1 {
        return selection::scan_min(suffix);
    }

    let tail = &suffix[1..];
    let span = partition::span(tail.len(), teams);
    let shared = Mutex::new(Candidate {
        value: suffix[0],
        index: 0,
    });

    tail.par_chunks(span).enumerate().for_each(|(chunk, part)| {
        // Local scan over this partition only; no shared state touched.
        let local = selection::scan_min(part);
        let value = part[local];
        let index = 1 + chunk * span + local;

        // Critical update: compare and write as one atomic unit.
        let mut best = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if value < best.value {
            best.value = value;
            best.index = index;
        }
    });

    shared
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .index
}
