//! Error types for discrete trigonometric transform operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or executing a transform: out-of-range transform-type codes, out-of-range
//! axis codes, inconsistent shapes, and backend planning failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending value (e.g., the rejected code).
//! * **Terminal**: Every variant is surfaced synchronously to the caller;
//!   nothing is retried or recovered internally.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Boundary validation**: Type codes and axis codes are checked where
//!    they enter the crate; invalid values never reach the transform core.
//! 2. **Planning failures**: Geometry the backend cannot plan for (e.g., a
//!    DCT-I lane shorter than two samples) indicates a programming error,
//!    not a transient condition.
//!
//! ## Invariants
//!
//! * On error, no output buffer is produced and the input is left unmodified.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for discrete trigonometric transform operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DttError {
    /// Transform type code outside the supported range [1, 8].
    InvalidTypeCode(u8),

    /// Axis code outside the two-valued enumeration {1, 2}.
    InvalidAxis(u8),

    /// Buffer extents or type-code list do not describe a valid 2D problem.
    ShapeMismatch(String),

    /// The backend could not construct a plan for the requested geometry.
    PlanningFailure {
        /// Name of the transform kind that failed to plan (e.g., "DCT-I").
        kind: &'static str,
        /// Lane length for which planning was attempted.
        length: usize,
    },

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DttError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidTypeCode(code) => {
                write!(f, "Invalid DTT type code: {code} (must be an integer between 1 and 8)")
            }
            Self::InvalidAxis(code) => {
                write!(f, "Invalid axis code: {code} (must be 1 for columns or 2 for rows)")
            }
            Self::ShapeMismatch(msg) => write!(f, "Shape mismatch: {msg}"),
            Self::PlanningFailure { kind, length } => {
                write!(f, "Planning failed: {kind} cannot be planned for length {length}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for DttError {}
