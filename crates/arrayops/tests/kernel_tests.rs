#![cfg(feature = "dev")]
//! Tests for the internal kernels and primitives.
//!
//! These tests reach through the `dev`-gated internals:
//! - Sequential minimum scan and its tie-break
//! - Widening summation and splitting invariance
//! - Min/max combination properties
//! - Partition span arithmetic
//! - Validator checks

use arrayops::internals::algorithms::reduction::{combine_min_max, min_max, sum_wide};
use arrayops::internals::algorithms::selection::scan_min;
use arrayops::internals::engine::validator::Validator;
use arrayops::internals::primitives::partition;

// ============================================================================
// Minimum Scan Tests
// ============================================================================

/// Test that the scan returns the index of the smallest value.
#[test]
fn test_scan_min_basic() {
    assert_eq!(scan_min(&[5, 1, 4, 2, 3]), 1);
    assert_eq!(scan_min(&[1, 2, 3]), 0);
    assert_eq!(scan_min(&[3, 2, 1]), 2);
}

/// Test that the lowest index wins among equal minima.
#[test]
fn test_scan_min_tie_break() {
    assert_eq!(scan_min(&[2, 1, 1, 1]), 1);
    assert_eq!(scan_min(&[0, 3, 0, 0]), 0);
}

/// Test the scan on a single-element suffix.
#[test]
fn test_scan_min_single() {
    assert_eq!(scan_min(&[9]), 0);
}

// ============================================================================
// Summation Tests
// ============================================================================

/// Test the wide sum against hand-computed values.
#[test]
fn test_sum_wide_basic() {
    assert_eq!(sum_wide(&[1, 2, 3, 4]), 10);
    assert_eq!(sum_wide(&[-5i64, 5]), 0);
    assert_eq!(sum_wide::<i8>(&[]), 0);
}

/// Test that summing parts equals summing the whole, exactly.
///
/// This is the property the parallel pass relies on: any contiguous split
/// of the buffer combines to the same wide sum.
#[test]
fn test_sum_wide_split_invariance() {
    let data: Vec<i64> = (0..1_000).map(|i| (i * 31 % 157) - 78).collect();
    let whole = sum_wide(&data);

    for split in [1, 7, 250, 999] {
        let (a, b) = data.split_at(split);
        assert_eq!(sum_wide(a) + sum_wide(b), whole);
    }
}

// ============================================================================
// Min/Max Kernel Tests
// ============================================================================

/// Test the sequential min/max kernel and its empty-slice contract.
#[test]
fn test_min_max_kernel() {
    assert_eq!(min_max(&[5, -3, 10, 7, -3]), Some((-3, 10)));
    assert_eq!(min_max(&[8]), Some((8, 8)));
    assert_eq!(min_max::<i32>(&[]), None);
}

/// Test that the combiner is commutative and associative.
#[test]
fn test_combine_min_max_properties() {
    let a = (1, 5);
    let b = (-2, 3);
    let c = (0, 9);

    assert_eq!(combine_min_max(a, b), combine_min_max(b, a));
    assert_eq!(
        combine_min_max(combine_min_max(a, b), c),
        combine_min_max(a, combine_min_max(b, c))
    );
    assert_eq!(combine_min_max(a, b), (-2, 5));
}

// ============================================================================
// Partition Tests
// ============================================================================

/// Test partition span arithmetic.
///
/// Every partition is non-empty and the partitions cover the range with
/// at most `teams` pieces.
#[test]
fn test_partition_span() {
    assert_eq!(partition::span(10, 2), 5);
    assert_eq!(partition::span(10, 3), 4);
    assert_eq!(partition::span(1, 8), 1);
    assert_eq!(partition::span(0, 4), 1);

    for len in [1usize, 2, 9, 100, 4097] {
        for teams in [1usize, 2, 3, 7, 16] {
            let span = partition::span(len, teams);
            assert!(span >= 1);
            assert!(partition::count(len, teams) <= teams);
            // The final partition must start inside the range.
            assert!(span * (len.div_ceil(span) - 1) < len);
        }
    }
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test the fail-fast validator checks.
#[test]
fn test_validator() {
    use arrayops::prelude::KernelError;

    assert!(Validator::validate_input(&[1]).is_ok());
    assert_eq!(
        Validator::validate_input::<i32>(&[]),
        Err(KernelError::EmptyInput)
    );

    assert!(Validator::validate_workers(None).is_ok());
    assert!(Validator::validate_workers(Some(1)).is_ok());
    assert_eq!(
        Validator::validate_workers(Some(0)),
        Err(KernelError::InvalidWorkers(0))
    );

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("mode")),
        Err(KernelError::DuplicateParameter { parameter: "mode" })
    );
}
