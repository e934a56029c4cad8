//! Layer 2: Algorithms
//!
//! This layer implements the sequential kernels: widening summation,
//! min/max scanning, and the selection-sort minimum scan. It contains the
//! "business logic" of the crate but is orchestrated by the engine layer.

// Sum, average and min/max reduction kernels.
pub mod reduction;

// Selection-sort minimum scan.
pub mod selection;
