//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`NornError`] covers the failure modes of the
//! fallible surfaces:
//! - Loading a compiled-graph description from JSON
//! - Assigning static uniform values by name
//!
//! Per-draw binding itself never fails: an entry that cannot be resolved is
//! skipped for that call, and the only observable effect is that the uniform
//! is never pushed.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, NornError>`.

use thiserror::Error;

/// The main error type for the Norn runtime.
#[derive(Error, Debug)]
pub enum NornError {
    // ========================================================================
    // Uniform Assignment Errors
    // ========================================================================
    /// The named uniform does not exist in the binding table.
    #[error("Unknown uniform: {0}")]
    UnknownUniform(String),

    /// The named uniform is driven by a system value; its payload cannot be
    /// assigned directly.
    #[error("Uniform '{0}' is driven by a system value")]
    SystemValueUniform(String),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error while loading a compiled-graph description.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, NornError>`.
pub type Result<T> = std::result::Result<T, NornError>;
