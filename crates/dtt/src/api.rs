//! High-level API for discrete trigonometric transforms.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! configuring a 1D or 2D transform, and thin convenience functions that
//! mirror the classic `dtt1D(array, type, dim)` / `dtt2D(array, types)`
//! calling convention.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builders carry sensible defaults (axis = columns) and
//!   validate at `build()`.
//! * **Boundary validation**: Type codes, axis codes, and code lists are
//!   checked here, before any buffer allocation or planning.
//! * **Type-Safe**: Models are generic over `DctNum + Float` element types
//!   (`f32`/`f64`) at the transform call.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via [`Dtt1d::new`], [`Dtt2d::new`], or
//!    [`Dtt2d::mixed`].
//! 2. Chain configuration methods (`.axis()` for the 1D case).
//! 3. Call `.build()` to validate and obtain a model, then `.transform()`.

// External dependencies
use num_traits::Float;
use rustdct::DctNum;

// Internal dependencies
use crate::engine::executor::DttExecutor;
use crate::engine::validator::Validator;
use crate::mapping::kinds::TransformKind;
use crate::mapping::layout::Axis;
use crate::primitives::array::Array2D;
use crate::primitives::errors::DttError;

// ============================================================================
// 1D Builder
// ============================================================================

/// Builder for a 1D transform along one axis of a 2D array.
#[derive(Debug, Clone)]
pub struct Dtt1d {
    /// Transform type code (1-8).
    type_code: u8,

    /// Target axis; defaults to columns when unset.
    axis: Option<Axis>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl Dtt1d {
    /// Create a builder for transform type `type_code` (1-8).
    ///
    /// The code is validated at [`build`](Self::build).
    pub fn new(type_code: u8) -> Self {
        Self {
            type_code,
            axis: None,
            duplicate_param: None,
        }
    }

    /// Set the axis the transform is applied along.
    pub fn axis(mut self, axis: Axis) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Validate the configuration and build the transform model.
    pub fn build(self) -> Result<Dtt1dModel, DttError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let kind = Validator::validate_type_code(self.type_code)?;
        Ok(Dtt1dModel {
            kind,
            axis: self.axis.unwrap_or_default(),
        })
    }
}

/// A validated 1D transform configuration.
#[derive(Debug, Clone, Copy)]
pub struct Dtt1dModel {
    kind: TransformKind,
    axis: Axis,
}

impl Dtt1dModel {
    /// The kernel kind this model applies.
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// The requested axis (the degenerate-shape override may still apply
    /// per input).
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Transform `input`, returning a freshly allocated output of the same
    /// shape.
    pub fn transform<T: DctNum + Float>(
        &self,
        input: &Array2D<T>,
    ) -> Result<Array2D<T>, DttError> {
        DttExecutor::run_1d(input, self.kind, self.axis)
    }
}

// ============================================================================
// 2D Builder
// ============================================================================

/// Builder for a fused 2D transform with per-axis kernel kinds.
#[derive(Debug, Clone)]
pub struct Dtt2d {
    /// Transform type code for the x (fast) axis.
    type_code_x: u8,

    /// Transform type code for the y (slow) axis.
    type_code_y: u8,
}

impl Dtt2d {
    /// Create a builder applying one transform type to both axes.
    pub fn new(type_code: u8) -> Self {
        Self::mixed(type_code, type_code)
    }

    /// Create a builder with independent per-axis transform types.
    pub fn mixed(type_code_x: u8, type_code_y: u8) -> Self {
        Self {
            type_code_x,
            type_code_y,
        }
    }

    /// Validate the configuration and build the transform model.
    ///
    /// The two codes are mapped independently through the shared
    /// code-to-kind table; mixed transforms (cosine along one axis, sine
    /// along the other) are fully supported.
    pub fn build(self) -> Result<Dtt2dModel, DttError> {
        let kind_x = Validator::validate_type_code(self.type_code_x)?;
        let kind_y = Validator::validate_type_code(self.type_code_y)?;
        Ok(Dtt2dModel { kind_x, kind_y })
    }
}

/// A validated 2D transform configuration.
#[derive(Debug, Clone, Copy)]
pub struct Dtt2dModel {
    kind_x: TransformKind,
    kind_y: TransformKind,
}

impl Dtt2dModel {
    /// The kernel kind applied along the x (fast) axis.
    pub fn kind_x(&self) -> TransformKind {
        self.kind_x
    }

    /// The kernel kind applied along the y (slow) axis.
    pub fn kind_y(&self) -> TransformKind {
        self.kind_y
    }

    /// Transform `input`, returning a freshly allocated output of the same
    /// shape.
    pub fn transform<T: DctNum + Float>(
        &self,
        input: &Array2D<T>,
    ) -> Result<Array2D<T>, DttError> {
        DttExecutor::run_2d(input, self.kind_x, self.kind_y)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Apply transform type `type_code` along `axis` of `input` (columns when
/// `None`, matching the classic default of dimension 1).
pub fn dtt_1d<T: DctNum + Float>(
    input: &Array2D<T>,
    type_code: u8,
    axis: Option<Axis>,
) -> Result<Array2D<T>, DttError> {
    let mut builder = Dtt1d::new(type_code);
    if let Some(axis) = axis {
        builder = builder.axis(axis);
    }
    builder.build()?.transform(input)
}

/// Apply transform type `type_code` along both axes of `input`.
pub fn dtt_2d<T: DctNum + Float>(input: &Array2D<T>, type_code: u8) -> Result<Array2D<T>, DttError> {
    Dtt2d::new(type_code).build()?.transform(input)
}

/// Apply a fused 2D transform configured by a type-code list.
///
/// One code applies to both axes; a pair is `[code_x, code_y]`; any other
/// length fails with [`DttError::ShapeMismatch`].
pub fn dtt_2d_codes<T: DctNum + Float>(
    input: &Array2D<T>,
    type_codes: &[u8],
) -> Result<Array2D<T>, DttError> {
    let (code_x, code_y) = Validator::validate_code_list(type_codes)?;
    Dtt2d::mixed(code_x, code_y).build()?.transform(input)
}
