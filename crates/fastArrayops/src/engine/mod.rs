//! Parallel execution engine.
//!
//! Holds the rayon-based passes that replace the sequential `arrayops`
//! kernels when a builder resolves to parallel mode.

// Parallel reduction and scan passes.
pub mod executor;
