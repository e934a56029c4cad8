//! Execution engine for reduction and selection-sort operations.
//!
//! ## Purpose
//!
//! This module provides the executors that orchestrate the kernels. The
//! reduction executor computes averages, min/max pairs and combined
//! summaries; the sort executor drives the selection-sort pass loop. Both
//! dispatch each pass either to the sequential kernel or to an injected
//! custom pass function.
//!
//! ## Design notes
//!
//! * **Pass hooks**: Custom pass functions are plain `fn` pointers stored
//!   in `#[doc(hidden)]` fields, set by extension crates at build time.
//!   Absent a hook, the sequential kernel runs.
//! * **Worker count**: `workers` is forwarded to every injected pass;
//!   `None` means "host-reported parallelism". The sequential kernels
//!   ignore it.
//! * **No allocation**: Executors read or swap within the caller's buffer
//!   and allocate nothing.
//!
//! ## Invariants
//!
//! * Reductions never mutate the input buffer.
//! * During a sort pass, elements `0..i` are in final position and are
//!   never touched again.
//! * The swap of a sort pass happens strictly after the scan has produced
//!   its index; a scan never observes a buffer mid-swap.
//!
//! ## Non-goals
//!
//! * This module does not implement parallel passes (extension crates do).
//! * This module does not validate builder parameters (handled by `api`
//!   via `validator` at build time).

// Internal dependencies
use crate::algorithms::reduction::{self, WideInt};
use crate::algorithms::selection;
use crate::engine::output::{MinMax, ReductionOutput};
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;

// ============================================================================
// Pass Hook Types
// ============================================================================

/// Signature for a custom summation pass.
///
/// Receives the buffer and the configured worker count (`None` = host
/// default) and returns the exact wide sum.
#[doc(hidden)]
pub type SumPassFn<T> = fn(&[T], Option<usize>) -> i128;

/// Signature for a custom min/max pass.
///
/// Returns `None` only for an empty buffer.
#[doc(hidden)]
pub type MinMaxPassFn<T> = fn(&[T], Option<usize>) -> Option<(T, T)>;

/// Signature for a custom minimum-scan pass.
///
/// Receives the unsorted suffix (never empty) and returns the offset of a
/// minimal element within it. Which offset is returned among equal minima
/// is pass-defined; the sequential kernel returns the lowest.
#[doc(hidden)]
pub type ScanPassFn<T> = fn(&[T], Option<usize>) -> usize;

// ============================================================================
// Reduction Executor
// ============================================================================

/// Executor for sum/average and min/max reductions.
#[derive(Debug, Clone, Copy)]
pub struct ReductionExecutor<T> {
    /// Worker count forwarded to injected passes (`None` = host default).
    pub workers: Option<usize>,

    /// Custom summation pass (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_sum_pass: Option<SumPassFn<T>>,

    /// Custom min/max pass (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_min_max_pass: Option<MinMaxPassFn<T>>,
}

impl<T: WideInt> Default for ReductionExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> ReductionExecutor<T> {
    /// Create a new executor with the sequential kernels and host-default
    /// worker count.
    pub fn new() -> Self {
        Self {
            workers: None,
            custom_sum_pass: None,
            custom_min_max_pass: None,
        }
    }

    /// Set the worker count forwarded to injected passes.
    pub fn workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Set a custom summation pass.
    #[doc(hidden)]
    pub fn custom_sum_pass(mut self, pass: Option<SumPassFn<T>>) -> Self {
        self.custom_sum_pass = pass;
        self
    }

    /// Set a custom min/max pass.
    #[doc(hidden)]
    pub fn custom_min_max_pass(mut self, pass: Option<MinMaxPassFn<T>>) -> Self {
        self.custom_min_max_pass = pass;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Arithmetic mean of the buffer.
    ///
    /// The sum is exact integer arithmetic in both execution modes, so the
    /// single `f64` division yields bit-identical averages regardless of
    /// mode or partitioning.
    pub fn average(&self, data: &[T]) -> Result<f64, KernelError> {
        Validator::validate_input(data)?;
        Ok(self.sum(data) as f64 / data.len() as f64)
    }

    /// Minimum and maximum of the buffer.
    pub fn min_max(&self, data: &[T]) -> Result<MinMax<T>, KernelError> {
        Validator::validate_input(data)?;

        let (min, max) = match self.custom_min_max_pass {
            Some(pass) => pass(data, self.workers),
            None => reduction::min_max(data),
        }
        .ok_or(KernelError::EmptyInput)?;

        Ok(MinMax { min, max })
    }

    /// Combined summary: count, exact sum, average, min and max.
    pub fn summarize(&self, data: &[T]) -> Result<ReductionOutput<T>, KernelError> {
        let MinMax { min, max } = self.min_max(data)?;
        let sum = self.sum(data);

        Ok(ReductionOutput {
            count: data.len(),
            sum,
            average: sum as f64 / data.len() as f64,
            min,
            max,
        })
    }

    // ========================================================================
    // Pass Dispatch
    // ========================================================================

    fn sum(&self, data: &[T]) -> i128 {
        match self.custom_sum_pass {
            Some(pass) => pass(data, self.workers),
            None => reduction::sum_wide(data),
        }
    }
}

// ============================================================================
// Sort Executor
// ============================================================================

/// Executor for in-place ascending selection sort.
#[derive(Debug, Clone, Copy)]
pub struct SortExecutor<T> {
    /// Worker count forwarded to the injected scan pass.
    pub workers: Option<usize>,

    /// Custom minimum-scan pass (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn<T>>,
}

impl<T: WideInt> Default for SortExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> SortExecutor<T> {
    /// Create a new executor with the sequential scan kernel.
    pub fn new() -> Self {
        Self {
            workers: None,
            custom_scan_pass: None,
        }
    }

    /// Set the worker count forwarded to the injected scan pass.
    pub fn workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Set a custom minimum-scan pass.
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: Option<ScanPassFn<T>>) -> Self {
        self.custom_scan_pass = pass;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Sort the buffer ascending, in place.
    ///
    /// Buffers of length 0 or 1 are already sorted and are left untouched.
    /// Each pass scans the unsorted suffix for a minimal element, then
    /// swaps it into position; the swap is a permitted no-op when the
    /// minimum is already in place.
    pub fn sort(&self, data: &mut [T]) {
        let n = data.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            let offset = match self.custom_scan_pass {
                Some(pass) => pass(&data[i..], self.workers),
                None => selection::scan_min(&data[i..]),
            };
            data.swap(i, i + offset);
        }
    }
}
