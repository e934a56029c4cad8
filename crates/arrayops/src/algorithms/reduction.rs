//! Sequential reduction kernels.
//!
//! ## Purpose
//!
//! This module provides the sequential kernels for summation and min/max
//! search, plus the combination operator used to merge per-worker partial
//! results. Parallel passes in extension crates are built from these same
//! kernels applied per partition.
//!
//! ## Design notes
//!
//! * **Wide accumulation**: Sums accumulate into `i128` via [`WideInt`],
//!   so no realistic buffer length can overflow for any primitive element
//!   type.
//! * **Seeding**: Min/max is seeded from the first element of the slice it
//!   is given, never from a type-level sentinel. A parallel pass that runs
//!   this kernel per partition therefore seeds each worker from its own
//!   partition.
//! * **Combination**: `combine_min_max` is associative and commutative, so
//!   the merged result is independent of partition count and merge order.
//!
//! ## Invariants
//!
//! * For any non-empty slice, `min <= every element <= max`.
//! * `sum_wide` over a concatenation equals the sum of `sum_wide` over the
//!   parts, exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not divide sums into averages (handled by the
//!   engine, behind the empty-input guard).

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Element Trait
// ============================================================================

/// Primitive integer element of a reducible buffer.
///
/// The single method widens an element into the `i128` accumulator used
/// for overflow-free summation.
pub trait WideInt: PrimInt + Send + Sync + 'static {
    /// Widen into the summation accumulator.
    fn widen(self) -> i128;
}

macro_rules! impl_wide_int {
    ($($int:ty),* $(,)?) => {$(
        impl WideInt for $int {
            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_wide_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// Sequential Kernels
// ============================================================================

/// Sum all elements into the wide accumulator.
#[inline]
pub fn sum_wide<T: WideInt>(data: &[T]) -> i128 {
    data.iter().fold(0i128, |acc, &v| acc + v.widen())
}

/// Find the minimum and maximum of a slice, or `None` if it is empty.
///
/// Both extrema are seeded from element 0; the remaining elements update
/// them on strict `<` / `>` comparisons.
#[inline]
pub fn min_max<T: WideInt>(data: &[T]) -> Option<(T, T)> {
    let (&first, rest) = data.split_first()?;

    let mut min = first;
    let mut max = first;
    for &v in rest {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    Some((min, max))
}

// ============================================================================
// Combination
// ============================================================================

/// Merge two `(min, max)` partial results.
///
/// Associative and commutative, so per-worker results may be combined in
/// any order.
#[inline]
pub fn combine_min_max<T: WideInt>(a: (T, T), b: (T, T)) -> (T, T) {
    (a.0.min(b.0), a.1.max(b.1))
}
