//! Execution mode configuration for extension crates.
//!
//! ## Purpose
//!
//! This module defines the `ExecMode` enum used to select between the
//! sequential baseline and parallel execution. The core `arrayops` crate
//! does not implement parallelism directly; `Parallel` acts as a
//! configuration hint that extension crates (like `fastArrayops`) honor by
//! injecting their own passes.
//!
//! ## Design notes
//!
//! * **Extension-focused**: Without an injected pass, `Parallel` runs the
//!   sequential kernels.
//! * **Per-engine**: The mode is fixed at `build()` time, not per call.
//!
//! ## Key concepts
//!
//! * **Sequential**: Single-threaded linear scans, deterministic
//!   tie-breaking.
//! * **Parallel**: Fork-join worker teams over disjoint partitions
//!   (requires an extension crate).
//!
//! ## Invariants
//!
//! * The default mode in this crate is always `Sequential`.
//!
//! ## Non-goals
//!
//! * This module does not provide parallel implementations (handled by
//!   extension crates).

/// Execution mode for reduction and sorting engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecMode {
    /// Sequential execution (single-threaded baseline).
    #[default]
    Sequential,

    /// Parallel execution (requires an extension crate with injected passes).
    Parallel,
}
