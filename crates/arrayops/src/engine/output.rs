//! Output types for reduction operations.
//!
//! ## Purpose
//!
//! This module defines the result structures produced by the reduction
//! engine: the combined summary (`ReductionOutput`) and the narrower
//! min/max pair (`MinMax`).
//!
//! ## Design notes
//!
//! * **Fresh per call**: Results carry no references into the input buffer
//!   and no state survives between calls.
//! * **Exactness**: `sum` is exact integer arithmetic; `average` is the
//!   single division `sum / count` in `f64`.
//! * **Ergonomics**: Both types implement `Display` for human-readable
//!   output.
//!
//! ## Invariants
//!
//! * `min <= max`, and `average` lies in `[min, max]`.
//! * `count` is the length of the buffer the result was computed from and
//!   is always at least 1.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

use crate::algorithms::reduction::WideInt;

// ============================================================================
// Result Structures
// ============================================================================

/// Minimum and maximum of a non-empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax<T> {
    /// Smallest element.
    pub min: T,

    /// Largest element.
    pub max: T,
}

/// Combined reduction summary of a non-empty buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionOutput<T> {
    /// Number of elements reduced.
    pub count: usize,

    /// Exact sum in the wide accumulator.
    pub sum: i128,

    /// Arithmetic mean, `sum / count` as `f64`.
    pub average: f64,

    /// Smallest element.
    pub min: T,

    /// Largest element.
    pub max: T,
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: WideInt + Display> Display for MinMax<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "min = {}, max = {}", self.min, self.max)
    }
}

impl<T: WideInt + Display> Display for ReductionOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Reduction Summary:")?;
        writeln!(f, "  Elements: {}", self.count)?;
        writeln!(f, "  Sum:      {}", self.sum)?;
        writeln!(f, "  Average:  {}", self.average)?;
        writeln!(f, "  Min:      {}", self.min)?;
        write!(f, "  Max:      {}", self.max)
    }
}
