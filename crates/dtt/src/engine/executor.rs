//! Transform orchestration.
//!
//! ## Purpose
//!
//! This module drives one complete transform call: resolve geometry (1D)
//! or compose the per-axis kinds (2D), allocate a fresh output buffer of
//! the input's shape, plan once through the backend, execute, and return
//! the output.
//!
//! ## Design notes
//!
//! * **Stateless**: Nothing is retained between calls; every call is an
//!   independent construct-plan, execute, release cycle with no plan
//!   caching (a simplicity/correctness tradeoff; caching would be a
//!   future optimization).
//! * **Axis-order inversion**: The fused 2D plan takes extents and kinds
//!   in row-major `(y, x)` order while the buffer is column-major. The
//!   inversion at that call boundary is deliberate and load-bearing; see
//!   the regression test on asymmetric inputs.
//! * **Failure atomicity**: Planning happens before the output buffer is
//!   touched, so a failed call produces no output and leaves the input
//!   unmodified.
//!
//! ## Invariants
//!
//! * The output buffer is a fresh allocation of the input's exact shape,
//!   never aliasing the input.
//! * The 1D path applies one kernel kind uniformly to every batch
//!   instance, with identical input and output strides and distances.
//!
//! ## Non-goals
//!
//! * This module does not validate type or axis codes (handled by
//!   `validator` at the API boundary).
//! * This module does not implement the transform algorithm (backend).

// External dependencies
use num_traits::Float;
use rustdct::DctNum;

// Internal dependencies
use crate::backend;
use crate::mapping::kinds::TransformKind;
use crate::mapping::layout::{resolve_axis_layout, Axis};
use crate::primitives::array::Array2D;
use crate::primitives::errors::DttError;

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates complete 1D and 2D transform calls.
pub struct DttExecutor;

impl DttExecutor {
    /// Apply one kernel kind along one axis of a 2D array.
    ///
    /// Resolves the batch geometry from the input's shape and the given
    /// axis (subject to the degenerate-shape override), plans one
    /// multi-instance rank-1 transform, and executes it into a freshly
    /// allocated output of the input's shape.
    pub fn run_1d<T: DctNum + Float>(
        input: &Array2D<T>,
        kind: TransformKind,
        axis: Axis,
    ) -> Result<Array2D<T>, DttError> {
        let (nx, ny) = input.shape();
        let layout = resolve_axis_layout(nx, ny, axis)?;
        let plan = backend::plan_many::<T>(kind, layout)?;

        let mut output = vec![T::zero(); input.len()];
        plan.execute(input.as_slice(), &mut output);
        Ok(Array2D::from_shape(output, nx, ny))
    }

    /// Apply a fused 2D transform with independent per-axis kernel kinds.
    ///
    /// The backend's fused entry point expects row-major axis order, so
    /// extents are passed as `(ny, nx)` and the kinds in matching
    /// `(kind_y, kind_x)` order.
    pub fn run_2d<T: DctNum + Float>(
        input: &Array2D<T>,
        kind_x: TransformKind,
        kind_y: TransformKind,
    ) -> Result<Array2D<T>, DttError> {
        let (nx, ny) = input.shape();
        let plan = backend::plan_2d::<T>(ny, nx, kind_y, kind_x)?;

        let mut output = vec![T::zero(); input.len()];
        plan.execute(input.as_slice(), &mut output);
        Ok(Array2D::from_shape(output, nx, ny))
    }
}
