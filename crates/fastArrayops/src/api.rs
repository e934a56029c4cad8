//! High-level API with parallel-first execution defaults.
//!
//! ## Purpose
//!
//! This module provides the user-facing builders of `fastArrayops`. They
//! wrap the base `arrayops` builders, resolve an unset mode to `Parallel`,
//! inject the rayon passes, and delegate validation and construction to
//! the base `build()`.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base builder pattern; the handles
//!   returned are the base crate's engine types.
//! * **Parallel-First**: Defaults to parallel execution; `.mode(Sequential)`
//!   recovers the exact baseline because the base builder discards
//!   injected passes in sequential mode.
//! * **Feature-Gated**: Without the `cpu` feature no passes are injected
//!   and every mode runs the sequential kernels.

// External dependencies
use arrayops::internals::api::{ReductionBuilder, SelectionSortBuilder};
use arrayops::prelude::{ExecMode, KernelError, ReductionEngine, SelectionSorter, WideInt};

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::{min_max_pass_parallel, scan_min_parallel, sum_pass_parallel};

// ============================================================================
// Parallel Reduction Builder
// ============================================================================

/// Fluent builder for a parallel-first reduction engine.
#[derive(Debug, Clone, Copy)]
pub struct ParallelReductionBuilder<T> {
    base: ReductionBuilder<T>,
}

impl<T: WideInt> Default for ParallelReductionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> ParallelReductionBuilder<T> {
    /// Create a new builder with default settings (parallel mode).
    pub fn new() -> Self {
        Self {
            base: ReductionBuilder::new(),
        }
    }

    /// Set the execution mode.
    pub fn mode(mut self, mode: ExecMode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Set the worker count (default: host-reported parallelism).
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    /// Validate the configuration and build the engine handle.
    pub fn build(self) -> Result<ReductionEngine<T>, KernelError> {
        let mut base = self.base;

        // Unset mode resolves to Parallel here, unlike the base crate.
        if base.mode.is_none() {
            base.mode = Some(ExecMode::Parallel);
        }

        #[cfg(feature = "cpu")]
        let base = base
            .custom_sum_pass(Some(sum_pass_parallel::<T>))
            .custom_min_max_pass(Some(min_max_pass_parallel::<T>));

        base.build()
    }
}

// ============================================================================
// Parallel Selection-Sort Builder
// ============================================================================

/// Fluent builder for a parallel-first selection sorter.
#[derive(Debug, Clone, Copy)]
pub struct ParallelSelectionSortBuilder<T> {
    base: SelectionSortBuilder<T>,
}

impl<T: WideInt> Default for ParallelSelectionSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WideInt> ParallelSelectionSortBuilder<T> {
    /// Create a new builder with default settings (parallel mode).
    pub fn new() -> Self {
        Self {
            base: SelectionSortBuilder::new(),
        }
    }

    /// Set the execution mode.
    pub fn mode(mut self, mode: ExecMode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Set the worker count (default: host-reported parallelism).
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    /// Validate the configuration and build the sorter handle.
    pub fn build(self) -> Result<SelectionSorter<T>, KernelError> {
        let mut base = self.base;

        if base.mode.is_none() {
            base.mode = Some(ExecMode::Parallel);
        }

        #[cfg(feature = "cpu")]
        let base = base.custom_scan_pass(Some(scan_min_parallel::<T>));

        base.build()
    }
}
