//! Sequential vs. parallel consistency tests.
//!
//! These tests verify the central contract of the crate: for every worker
//! count and partitioning, parallel reductions return exactly the
//! sequential results, and the parallel sort produces the same ascending
//! value order as the sequential baseline.

use approx::assert_abs_diff_eq;
use fastArrayops::prelude::*;
use rand::prelude::*;

/// Worker counts exercised by the sweeps; 1 forces the sequential path
/// inside the parallel pass, the rest force uneven partitionings.
const WORKER_COUNTS: [usize; 5] = [1, 2, 3, 7, 16];

fn random_buffer(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-50_000..50_000)).collect()
}

// ============================================================================
// Reduction Consistency
// ============================================================================

/// Test that the parallel average equals the sequential one bit for bit.
///
/// Integer accumulation makes the sum exact in both modes, so this is an
/// equality test, not an epsilon test.
#[test]
fn test_average_consistency() {
    let seq = Reduction::new().mode(Sequential).build().unwrap();

    for &n in &[1usize, 2, 3, 10, 1_000, 4_097] {
        let data = random_buffer(n, n as u64);
        let expected = seq.average(&data).unwrap();

        for &workers in &WORKER_COUNTS {
            let par = Reduction::new().workers(workers).build().unwrap();
            let got = par.average(&data).unwrap();
            assert_abs_diff_eq!(got, expected, epsilon = 0.0);
        }
    }
}

/// Test the known average from a fixed buffer in both modes.
#[test]
fn test_average_known_value() {
    let data = vec![1, 2, 3, 4];

    let seq = Reduction::new().mode(Sequential).build().unwrap();
    let par = Reduction::new().build().unwrap();

    assert_abs_diff_eq!(seq.average(&data).unwrap(), 2.5, epsilon = 0.0);
    assert_abs_diff_eq!(par.average(&data).unwrap(), 2.5, epsilon = 0.0);
}

/// Test that parallel min/max equals sequential min/max for every worker
/// count.
#[test]
fn test_min_max_consistency() {
    let seq = Reduction::new().mode(Sequential).build().unwrap();

    for &n in &[1usize, 2, 5, 100, 4_097] {
        let data = random_buffer(n, 1_000 + n as u64);
        let expected = seq.min_max(&data).unwrap();

        for &workers in &WORKER_COUNTS {
            let par = Reduction::new().workers(workers).build().unwrap();
            assert_eq!(par.min_max(&data).unwrap(), expected);
        }
    }
}

/// Test the fixed min/max buffer from both modes.
#[test]
fn test_min_max_known_value() {
    let data = vec![5, -3, 10, 7, -3];

    for &workers in &WORKER_COUNTS {
        let par = Reduction::new().workers(workers).build().unwrap();
        let mm = par.min_max(&data).unwrap();
        assert_eq!((mm.min, mm.max), (-3, 10));
    }
}

/// Test that the full summary agrees between modes.
#[test]
fn test_summarize_consistency() {
    let data = random_buffer(2_048, 77);

    let seq = Reduction::new().mode(Sequential).build().unwrap();
    let par = Reduction::new().workers(5).build().unwrap();

    assert_eq!(seq.summarize(&data).unwrap(), par.summarize(&data).unwrap());
}

/// Test the overflow property under parallel execution.
///
/// 5_000_000 elements at `i32::MAX` must sum exactly in every mode and
/// partitioning.
#[test]
fn test_parallel_overflow_safety() {
    let n = 5_000_000usize;
    let data = vec![i32::MAX; n];
    let expected_sum = i32::MAX as i128 * n as i128;

    for &workers in &[1usize, 4, 16] {
        let par = Reduction::new().workers(workers).build().unwrap();
        let out = par.summarize(&data).unwrap();
        assert_eq!(out.sum, expected_sum);
        assert_abs_diff_eq!(out.average, i32::MAX as f64, epsilon = 0.0);
    }
}

// ============================================================================
// Boundary Behavior
// ============================================================================

/// Test empty-input failure and single-element results through the
/// parallel builders.
#[test]
fn test_parallel_boundaries() {
    let empty: Vec<i32> = vec![];
    let single = vec![42];

    let par = Reduction::new().build().unwrap();

    assert_eq!(par.average(&empty), Err(KernelError::EmptyInput));
    assert_eq!(par.min_max(&empty), Err(KernelError::EmptyInput));

    assert_abs_diff_eq!(par.average(&single).unwrap(), 42.0, epsilon = 0.0);
    let mm = par.min_max(&single).unwrap();
    assert_eq!((mm.min, mm.max), (42, 42));
}

/// Test that worker-count validation applies to the parallel builders too.
#[test]
fn test_parallel_zero_workers_rejected() {
    assert_eq!(
        Reduction::<i32>::new().workers(0).build().err(),
        Some(KernelError::InvalidWorkers(0))
    );
    assert_eq!(
        SelectionSort::<i32>::new().workers(0).build().err(),
        Some(KernelError::InvalidWorkers(0))
    );
}

// ============================================================================
// Sort Consistency
// ============================================================================

/// Test that the parallel sort produces the ascending value order on
/// random buffers, for every worker count.
#[test]
fn test_sort_consistency() {
    for &n in &[2usize, 3, 33, 512] {
        let data = random_buffer(n, 9_000 + n as u64);
        let mut expected = data.clone();
        expected.sort_unstable();

        for &workers in &WORKER_COUNTS {
            let mut buf = data.clone();
            let sorter = SelectionSort::new().workers(workers).build().unwrap();
            sorter.sort(&mut buf);
            assert_eq!(buf, expected, "mismatch at n = {n}, workers = {workers}");
        }
    }
}

/// Test the fixed sort buffers from both modes.
#[test]
fn test_sort_known_values() {
    let mut a = vec![5, 1, 4, 2, 3];
    SelectionSort::new().build().unwrap().sort(&mut a);
    assert_eq!(a, vec![1, 2, 3, 4, 5]);

    // Duplicate values: value order is guaranteed, index provenance is not.
    let mut b = vec![2, 2, 1];
    SelectionSort::new().build().unwrap().sort(&mut b);
    assert_eq!(b, vec![1, 2, 2]);
}

/// Test that a single-worker parallel sort reproduces the sequential
/// result exactly, including its deterministic tie-break.
#[test]
fn test_sort_single_worker_matches_sequential() {
    let data = random_buffer(257, 31);

    let mut seq_buf = data.clone();
    SelectionSort::new().mode(Sequential).build().unwrap().sort(&mut seq_buf);

    let mut par_buf = data;
    SelectionSort::new().workers(1).build().unwrap().sort(&mut par_buf);

    assert_eq!(seq_buf, par_buf);
}

/// Test parallel sort boundary behavior: empty and single-element buffers
/// are no-ops, an already-sorted buffer is unchanged.
#[test]
fn test_sort_boundaries() {
    let sorter = SelectionSort::new().build().unwrap();

    let mut empty: Vec<i32> = vec![];
    sorter.sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![3];
    sorter.sort(&mut single);
    assert_eq!(single, vec![3]);

    let mut sorted: Vec<i32> = (0..100).collect();
    sorter.sort(&mut sorted);
    assert_eq!(sorted, (0..100).collect::<Vec<_>>());
}

/// Test the sequential fallback through the parallel builder.
#[test]
fn test_sequential_fallback() {
    let data = random_buffer(100, 55);

    let seq = Reduction::new().mode(Sequential).build().unwrap();
    let par = Reduction::new().build().unwrap();

    // Forcing Sequential through the fastArrayops builder must match the
    // parallel result too, since reductions are exact in both modes.
    assert_eq!(
        seq.summarize(&data).unwrap(),
        par.summarize(&data).unwrap()
    );
}
