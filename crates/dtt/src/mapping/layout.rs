//! Axis selection and batch geometry resolution.
//!
//! ## Purpose
//!
//! This module computes the stride/distance/loop-count parameters for
//! applying a 1D transform along either axis of a column-major 2D buffer:
//! the lane length, the number of independent lanes (batch), the element
//! offset between consecutive samples within one lane (stride), and the
//! offset between the first samples of successive lanes (distance).
//!
//! ## Design notes
//!
//! * **Pure**: The resolver is a function of its inputs alone.
//! * **Layout-preserving**: The transform is out-of-place but input and
//!   output share the same shape and storage order, so one geometry serves
//!   both buffers.
//! * **Degenerate shapes**: A single-row or single-column array has only
//!   one meaningful transform axis, so the requested axis is overridden
//!   (matching the long-standing behavior of the original tooling this
//!   crate mirrors, surprising as it may be — see the crate docs).
//!
//! ## Key concepts
//!
//! * **Columns pass** (axis code 1): each column is one lane; samples are
//!   adjacent in memory, lanes start `nx` apart.
//! * **Rows pass** (axis code 2): each row is one lane; samples sit `nx`
//!   apart, lanes start at consecutive offsets.
//!
//! ## Invariants
//!
//! * `stride * (length - 1) + distance * (batch - 1) + 1 <= nx * ny`;
//!   resolved geometry never addresses outside the buffer.
//! * `length * batch == nx * ny`; every element belongs to exactly one lane.
//!
//! ## Non-goals
//!
//! * This module does not touch buffer contents.
//! * This module does not choose transform kinds.

// Internal dependencies
use crate::primitives::errors::DttError;

// ============================================================================
// Axis
// ============================================================================

/// Axis along which a 1D transform is applied to a 2D array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Transform each column independently (vary the fast-moving x index).
    #[default]
    Columns,

    /// Transform each row independently (vary the slow-moving y index).
    Rows,
}

impl Axis {
    /// Parse a wire-format axis code: 1 for columns, 2 for rows.
    ///
    /// This is the only place an [`DttError::InvalidAxis`] originates;
    /// past this boundary the enum makes invalid axes unrepresentable.
    pub fn from_code(code: u8) -> Result<Self, DttError> {
        match code {
            1 => Ok(Self::Columns),
            2 => Ok(Self::Rows),
            _ => Err(DttError::InvalidAxis(code)),
        }
    }

    /// The wire-format code of this axis.
    pub fn code(self) -> u8 {
        match self {
            Self::Columns => 1,
            Self::Rows => 2,
        }
    }
}

// ============================================================================
// Axis Layout
// ============================================================================

/// Iteration geometry for one separable 1D pass over a 2D buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    /// Lane length (number of samples per transform instance).
    pub length: usize,

    /// Number of independent lanes.
    pub batch: usize,

    /// Element offset between consecutive samples within one lane.
    pub stride: usize,

    /// Element offset between the first samples of successive lanes.
    pub distance: usize,

    /// The axis this geometry walks, after any degenerate-shape override.
    pub axis: Axis,
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolve the batch geometry for a 1D pass along `requested` over an
/// `nx x ny` column-major buffer.
///
/// If `nx == 1` the effective axis is forced to [`Axis::Rows`]; if
/// `ny == 1`, to [`Axis::Columns`]. For non-degenerate shapes the
/// requested axis is used as-is. Non-positive extents fail with
/// [`DttError::ShapeMismatch`].
pub fn resolve_axis_layout(nx: usize, ny: usize, requested: Axis) -> Result<AxisLayout, DttError> {
    if nx == 0 || ny == 0 {
        return Err(DttError::ShapeMismatch(format!(
            "extents must be positive, got {nx} x {ny}"
        )));
    }

    // Degenerate-shape override: a 1 x NY array only has rows to transform,
    // an NX x 1 array only has columns.
    let axis = if nx == 1 {
        Axis::Rows
    } else if ny == 1 {
        Axis::Columns
    } else {
        requested
    };

    let layout = match axis {
        Axis::Columns => AxisLayout {
            length: nx,
            batch: ny,
            stride: 1,
            distance: nx,
            axis,
        },
        Axis::Rows => AxisLayout {
            length: ny,
            batch: nx,
            stride: nx,
            distance: 1,
            axis,
        },
    };

    debug_assert!(
        layout.stride * (layout.length - 1) + layout.distance * (layout.batch - 1) + 1 <= nx * ny
    );
    Ok(layout)
}
