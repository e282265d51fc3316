//! Boundary validation for transform configuration and buffers.
//!
//! ## Purpose
//!
//! This module validates everything that crosses the crate boundary —
//! type codes, axis codes, extents, buffer lengths, and type-code lists —
//! before any buffer is allocated or any plan is constructed.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Early**: Invalid values never reach the mapping or backend layers.
//! * **Stateless**: All methods are pure static functions.
//!
//! ## Invariants
//!
//! * Validated type codes lie in [1, 8]; validated axis codes in {1, 2}.
//! * Validated extents are positive and consistent with the buffer length.
//!
//! ## Non-goals
//!
//! * This module does not transform, allocate, or plan anything.
//! * This module does not check element values (NaN/Inf pass through).

// Internal dependencies
use crate::mapping::kinds::{map_type_code, TransformKind};
use crate::mapping::layout::Axis;
use crate::primitives::errors::DttError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for transform configuration and input buffers.
///
/// Provides static methods returning `Result<(), DttError>` (or the parsed
/// value) that fail fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate that both extents are positive.
    pub fn validate_shape(nx: usize, ny: usize) -> Result<(), DttError> {
        if nx == 0 || ny == 0 {
            return Err(DttError::ShapeMismatch(format!(
                "extents must be positive, got {nx} x {ny}"
            )));
        }
        Ok(())
    }

    /// Validate that a buffer length agrees with the claimed extents.
    pub fn validate_buffer(len: usize, nx: usize, ny: usize) -> Result<(), DttError> {
        Self::validate_shape(nx, ny)?;
        if len != nx * ny {
            return Err(DttError::ShapeMismatch(format!(
                "buffer holds {len} elements but extents {nx} x {ny} require {}",
                nx * ny
            )));
        }
        Ok(())
    }

    /// Validate a transform type code and resolve its kernel kind.
    pub fn validate_type_code(code: u8) -> Result<TransformKind, DttError> {
        map_type_code(code)
    }

    /// Validate an axis wire code and resolve the axis.
    pub fn validate_axis_code(code: u8) -> Result<Axis, DttError> {
        Axis::from_code(code)
    }

    /// Validate a type-code list for the 2D path.
    ///
    /// A single code applies to both axes; a pair is `[code_x, code_y]`;
    /// any other length fails with [`DttError::ShapeMismatch`].
    pub fn validate_code_list(codes: &[u8]) -> Result<(u8, u8), DttError> {
        match codes {
            [code] => Ok((*code, *code)),
            [code_x, code_y] => Ok((*code_x, *code_y)),
            _ => Err(DttError::ShapeMismatch(format!(
                "DTT type list must hold one or two codes, got {}",
                codes.len()
            ))),
        }
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DttError> {
        if let Some(parameter) = duplicate_param {
            return Err(DttError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
