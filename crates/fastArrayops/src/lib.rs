//! # fastArrayops — Parallel Array Reduction and Selection-Sort Kernels
//!
//! Fork-join parallel execution for the `arrayops` kernels: sum/average
//! and min/max reductions whose results are identical to the sequential
//! baseline for every worker count and partitioning, and a selection sort
//! whose per-pass minimum scan runs on a worker team coordinated through a
//! mutually-exclusive shared-minimum update.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastArrayops::prelude::*;
//!
//! let data = vec![5, -3, 10, 7, -3];
//!
//! // Parallel by default; workers() pins the team size.
//! let engine = Reduction::new().workers(4).build()?;
//!
//! assert_eq!(engine.average(&data)?, 3.2);
//! assert_eq!(engine.min_max(&data)?.min, -3);
//!
//! let mut buf = vec![5, 1, 4, 2, 3];
//! SelectionSort::new().build()?.sort(&mut buf);
//! assert_eq!(buf, vec![1, 2, 3, 4, 5]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Execution Model
//!
//! Each parallel operation splits the index range into contiguous
//! partitions, one per worker, executed on rayon's pool. Sums are exact
//! `i128` arithmetic, so partial sums combine to the same value in any
//! order and the parallel average equals the sequential one bit for bit.
//! Min/max workers seed their local extrema from their own partition and
//! the per-partition results merge with an associative, commutative
//! reduction.
//!
//! The selection sorter parallelizes only the minimum scan of the
//! unsorted suffix. With duplicate minima the winning index depends on
//! worker completion order, so the sorted value order is guaranteed but
//! the choice among equal elements is not; force `workers(1)` to recover
//! the sequential lowest-index tie-break.
//!
//! ## Sequential Fallback
//!
//! `.mode(Sequential)` on any builder yields exactly the `arrayops`
//! baseline, which is useful for timing comparisons against the same API.

#![allow(non_snake_case)]

// Parallel execution passes.
mod engine;

// Parallel-first builder API.
mod api;

// Standard fastArrayops prelude.
pub mod prelude {
    pub use crate::api::{
        ParallelReductionBuilder as Reduction, ParallelSelectionSortBuilder as SelectionSort,
    };
    pub use arrayops::prelude::{
        ExecMode::{self, Parallel, Sequential},
        KernelError, MinMax, ReductionEngine, ReductionOutput, SelectionSorter, WideInt,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
