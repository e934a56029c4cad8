//! High-level API for reduction and selection sort.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: fluent
//! builders that configure an execution mode and worker count, validate
//! the configuration, and produce ready-to-use engine handles.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `build()` is called.
//! * **Extension seams**: The builders carry `#[doc(hidden)]` pass hooks
//!   that extension crates fill in before delegating to `build()`.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Reduction::new()` or `SelectionSort::new()`.
//! 2. Chain configuration methods (`.mode()`, `.workers()`).
//! 3. Call `.build()` to validate and obtain an engine handle.
//!
//! In this crate an unset mode defaults to `Sequential`; the
//! `fastArrayops` builders default to `Parallel` instead.

// External dependencies
use crate::algorithms::reduction::WideInt;
use crate::engine::executor::{
    MinMaxPassFn, ReductionExecutor, ScanPassFn, SortExecutor, SumPassFn,
};
use crate::engine::output::{MinMax, ReductionOutput};
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::mode::ExecMode;

// ============================================================================
// Reduction Builder
// ============================================================================

/// Fluent builder for the reduction engine.
#[derive(Debug, Clone, Copy)]
pub struct ReductionBuilder<T> {
    /// Execution mode (default: `Sequential` in this crate).
    pub mode: Option<ExecMode>,

    /// Worker count for parallel passes (default: host parallelism).
    pub workers: Option<usize>,

    /// Custom summation pass.
    #[doc(hidden)]
    pub custom_sum_pass: Option<SumPassFn<T>>,

    /// Custom min/max pass.
    #[doc(hidden)]
    pub custom_min_max_pass: Option<MinMaxPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: WideInt> Default for ReductionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> ReductionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            workers: None,
            custom_sum_pass: None,
            custom_min_max_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the execution mode.
    pub fn mode(mut self, mode: ExecMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the worker count used by parallel passes.
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
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

    /// Validate the configuration and build the engine handle.
    pub fn build(self) -> Result<ReductionEngine<T>, KernelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_workers(self.workers)?;

        // Sequential mode discards injected passes so a parallel-first
        // builder can still be forced onto the baseline path.
        let (sum_pass, min_max_pass) = match self.mode.unwrap_or_default() {
            ExecMode::Sequential => (None, None),
            ExecMode::Parallel => (self.custom_sum_pass, self.custom_min_max_pass),
        };

        Ok(ReductionEngine {
            executor: ReductionExecutor::new()
                .workers(self.workers)
                .custom_sum_pass(sum_pass)
                .custom_min_max_pass(min_max_pass),
        })
    }
}

// ============================================================================
// Reduction Engine Handle
// ============================================================================

/// Configured reduction engine.
///
/// Produces a fresh result on every call and never mutates the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ReductionEngine<T> {
    pub(crate) executor: ReductionExecutor<T>,
}

impl<T: WideInt> ReductionEngine<T> {
    /// Arithmetic mean of a non-empty buffer.
    pub fn average(&self, data: &[T]) -> Result<f64, KernelError> {
        self.executor.average(data)
    }

    /// Minimum and maximum of a non-empty buffer.
    pub fn min_max(&self, data: &[T]) -> Result<MinMax<T>, KernelError> {
        self.executor.min_max(data)
    }

    /// Combined summary (count, sum, average, min, max).
    pub fn summarize(&self, data: &[T]) -> Result<ReductionOutput<T>, KernelError> {
        self.executor.summarize(data)
    }
}

// ============================================================================
// Selection-Sort Builder
// ============================================================================

/// Fluent builder for the selection sorter.
#[derive(Debug, Clone, Copy)]
pub struct SelectionSortBuilder<T> {
    /// Execution mode (default: `Sequential` in this crate).
    pub mode: Option<ExecMode>,

    /// Worker count for the parallel scan pass.
    pub workers: Option<usize>,

    /// Custom minimum-scan pass.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: WideInt> Default for SelectionSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> SelectionSortBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            workers: None,
            custom_scan_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the execution mode.
    pub fn mode(mut self, mode: ExecMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the worker count used by the parallel scan pass.
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
        self
    }

    /// Set a custom minimum-scan pass.
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: Option<ScanPassFn<T>>) -> Self {
        self.custom_scan_pass = pass;
        self
    }

    /// Validate the configuration and build the sorter handle.
    pub fn build(self) -> Result<SelectionSorter<T>, KernelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_workers(self.workers)?;

        let scan_pass = match self.mode.unwrap_or_default() {
            ExecMode::Sequential => None,
            ExecMode::Parallel => self.custom_scan_pass,
        };

        Ok(SelectionSorter {
            executor: SortExecutor::new()
                .workers(self.workers)
                .custom_scan_pass(scan_pass),
        })
    }
}

// ============================================================================
// Sorter Handle
// ============================================================================

/// Configured selection sorter.
#[derive(Debug, Clone, Copy)]
pub struct SelectionSorter<T> {
    pub(crate) executor: SortExecutor<T>,
}

impl<T: WideInt> SelectionSorter<T> {
    /// Sort the buffer ascending, in place.
    ///
    /// Empty and one-element buffers are no-ops; sorting never fails.
    pub fn sort(&self, data: &mut [T]) {
        self.executor.sort(data);
    }
}
