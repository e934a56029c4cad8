//! Input validation for engine configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for builder parameters
//! and input buffers. It checks requirements such as non-empty input for
//! reductions and a usable worker count.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Placement**: Reductions validate per call (the buffer changes);
//!   builder parameters validate once at `build()`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not perform the reduction or sort itself.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use crate::algorithms::reduction::WideInt;
use crate::primitives::errors::KernelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and input data.
///
/// Provides static methods returning `Result<(), KernelError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate an input buffer for reduction.
    ///
    /// Sorting accepts any buffer (the empty buffer is trivially sorted),
    /// so only the reduction paths call this.
    pub fn validate_input<T: WideInt>(data: &[T]) -> Result<(), KernelError> {
        if data.is_empty() {
            return Err(KernelError::EmptyInput);
        }
        Ok(())
    }

    /// Validate the configured worker count.
    ///
    /// `None` means "host-reported parallelism" and is always valid; an
    /// explicit count must be at least 1.
    pub fn validate_workers(workers: Option<usize>) -> Result<(), KernelError> {
        if let Some(n) = workers {
            if n == 0 {
                return Err(KernelError::InvalidWorkers(n));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KernelError> {
        if let Some(parameter) = duplicate_param {
            return Err(KernelError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
