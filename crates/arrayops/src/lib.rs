//! # arrayops — Array Reduction and Selection-Sort Kernels
//!
//! Reduction (sum, average, min/max) and in-place selection sort over
//! caller-owned integer buffers, with a sequential baseline and injectable
//! execution passes for parallel extension crates.
//!
//! ## What does it do?
//!
//! The crate answers two elementary questions about a buffer of integers,
//! "what are its sum, average, minimum and maximum?" and "what is its
//! ascending order?", through engines that never allocate or free the
//! buffer themselves. Sums accumulate into a 128-bit integer, so the
//! average is exact division of an exact sum: no overflow, no NaN, and
//! bit-for-bit agreement between execution modes.
//!
//! ## Quick Start
//!
//! ### Reductions
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let data = vec![5, -3, 10, 7, -3];
//!
//! let engine = Reduction::new().build()?;
//!
//! let avg = engine.average(&data)?;
//! let mm = engine.min_max(&data)?;
//!
//! assert_eq!(avg, 3.2);
//! assert_eq!((mm.min, mm.max), (-3, 10));
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Sorting
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let mut data = vec![5, 1, 4, 2, 3];
//!
//! let sorter = SelectionSort::new().build()?;
//! sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Reductions return `Result<_, KernelError>`; an empty buffer is reported
//! as [`KernelError::EmptyInput`](prelude::KernelError) rather than
//! producing NaN or a garbage extremum. Sorting an empty buffer is a no-op,
//! not an error.
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let empty: Vec<i64> = vec![];
//!
//! let engine = Reduction::new().build()?;
//! assert_eq!(engine.average(&empty), Err(KernelError::EmptyInput));
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Parallel Execution
//!
//! This crate is sequential. The `fastArrayops` companion crate injects
//! rayon-based passes through the engine's hidden pass hooks and defaults
//! to parallel execution; its builders are drop-in replacements for the
//! ones here.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - errors, execution mode, partitioning.
mod primitives;

// Layer 2: Algorithms - sequential reduction and scan kernels.
mod algorithms;

// Layer 3: Engine - orchestration, validation, output types.
mod engine;

// High-level fluent API.
mod api;

// Standard arrayops prelude.
pub mod prelude {
    pub use crate::api::{
        ReductionBuilder as Reduction, ReductionEngine, SelectionSortBuilder as SelectionSort,
        SelectionSorter,
    };
    pub use crate::algorithms::reduction::WideInt;
    pub use crate::engine::output::{MinMax, ReductionOutput};
    pub use crate::primitives::errors::KernelError;
    pub use crate::primitives::mode::ExecMode::{self, Parallel, Sequential};
}

// Internal modules for extension crates and testing.
//
// This module re-exports internal modules for extension crates (such as
// `fastArrayops`) and tests. It is only available with the `dev` feature
// enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
