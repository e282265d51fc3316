//! Column-major 2D array buffer.
//!
//! ## Purpose
//!
//! This module provides [`Array2D`], the real-valued buffer that transforms
//! consume and produce. Storage is column-major: element `(x, y)` of an
//! `NX x NY` array lives at offset `x + y * NX`, so the x index is the
//! fast-moving one.
//!
//! ## Design notes
//!
//! * **Out-of-place**: Transforms never mutate an `Array2D`; each call
//!   allocates a fresh output of identical shape.
//! * **Validated construction**: `from_vec` rejects empty extents and
//!   length/extent disagreements so downstream code can rely on
//!   `data.len() == nx * ny` with both extents positive.
//! * **Generics**: Generic over the element type; numeric bounds are only
//!   required where they are used.
//!
//! ## Invariants
//!
//! * `nx >= 1`, `ny >= 1`, and `data.len() == nx * ny` for every instance.
//! * A column vector is `NX x 1`; a row vector is `1 x NY`.
//!
//! ## Non-goals
//!
//! * This module does not provide arithmetic, slicing views, or reshaping.
//! * This module does not validate element values (NaN/Inf pass through,
//!   as they do in the underlying transform library).

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::DttError;

// ============================================================================
// Array2D
// ============================================================================

/// Real-valued 2D array in column-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    /// Elements in column-major order (`x + y * nx`).
    data: Vec<T>,

    /// Row extent (length of one column, the fast-moving index).
    nx: usize,

    /// Column extent (length of one row, the slow-moving index).
    ny: usize,
}

impl<T: Copy> Array2D<T> {
    /// Create an array from column-major data with the given extents.
    pub fn from_vec(data: Vec<T>, nx: usize, ny: usize) -> Result<Self, DttError> {
        if nx == 0 || ny == 0 {
            return Err(DttError::ShapeMismatch(format!(
                "extents must be positive, got {nx} x {ny}"
            )));
        }
        if data.len() != nx * ny {
            return Err(DttError::ShapeMismatch(format!(
                "buffer holds {} elements but extents {nx} x {ny} require {}",
                data.len(),
                nx * ny
            )));
        }
        Ok(Self { data, nx, ny })
    }

    /// Construct from parts whose invariants the caller has already established.
    pub(crate) fn from_shape(data: Vec<T>, nx: usize, ny: usize) -> Self {
        debug_assert!(nx > 0 && ny > 0 && data.len() == nx * ny);
        Self { data, nx, ny }
    }

    /// Row extent NX.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Column extent NY.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Extents as `(nx, ny)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed array; present for slice-like symmetry.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= nx` or `y >= ny`.
    pub fn get(&self, x: usize, y: usize) -> T {
        assert!(x < self.nx && y < self.ny, "index ({x}, {y}) out of bounds");
        self.data[x + y * self.nx]
    }

    /// The column-major backing slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the array and return the column-major backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy + Zero> Array2D<T> {
    /// Create a zero-filled array with the given extents.
    pub fn zeros(nx: usize, ny: usize) -> Result<Self, DttError> {
        Self::from_vec(vec![T::zero(); nx.saturating_mul(ny)], nx, ny)
    }
}
