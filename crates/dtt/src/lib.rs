//! # DTT — Discrete Trigonometric Transforms for Rust
//!
//! 1D and 2D discrete trigonometric transforms (DCT and DST, types I-IV)
//! over real-valued 2D arrays, applied row- or column-wise, with the fast
//! transform execution delegated to [`rustdct`].
//!
//! ## What is a DTT?
//!
//! A discrete trigonometric transform is a real-to-real frequency
//! transform — a cosine or sine variant distinguished by the
//! boundary-symmetry assumption at each edge of the sequence. The eight
//! classic variants are selected here by a type code from 1 to 8, in the
//! order DCT-I..DCT-IV then DST-I..DST-IV (the FFTW r2r kind ordering
//! REDFT00, REDFT10, REDFT01, REDFT11, RODFT00, RODFT10, RODFT01,
//! RODFT11). Outputs follow the unnormalized FFTW conventions: a transform
//! followed by its inverse scales the data by the variant's logical DFT
//! length (2N for types II-IV, 2(N-1) for DCT-I, 2(N+1) for DST-I).
//!
//! ## Quick Start
//!
//! ### 1D transform of a column vector
//!
//! ```rust
//! use dtt::prelude::*;
//!
//! let input = Array2D::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0], 4, 1)?;
//!
//! // DCT-II forward, DCT-III back: the documented inverse pair.
//! let forward = Dtt1d::new(2).build()?.transform(&input)?;
//! let back = Dtt1d::new(3).build()?.transform(&forward)?;
//!
//! // Unnormalized round trip scales by 2N = 8.
//! assert!((back.get(0, 0) / 8.0 - 1.0).abs() < 1e-12);
//! # Result::<(), DttError>::Ok(())
//! ```
//!
//! ### Mixed 2D transform
//!
//! ```rust
//! use dtt::prelude::*;
//!
//! // 3 x 2 column-major array.
//! let input = Array2D::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2)?;
//!
//! // DCT-II along x, DST-II along y.
//! let output = Dtt2d::mixed(2, 6).build()?.transform(&input)?;
//! assert_eq!(output.shape(), (3, 2));
//! # Result::<(), DttError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible call returns `Result<_, DttError>`; the `?` operator is
//! idiomatic. Errors are terminal for the call: either a complete,
//! correctly-shaped output buffer is produced, or no output is produced
//! and the input is untouched.
//!
//! ```rust
//! use dtt::prelude::*;
//!
//! let input = Array2D::from_vec(vec![0.0_f32; 6], 2, 3)?;
//! match dtt_1d(&input, 9, None) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e, DttError::InvalidTypeCode(9)),
//! }
//! # Result::<(), DttError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! * Buffers are column-major: element `(x, y)` of an `NX x NY` array is
//!   at offset `x + y * NX`. Axis code 1 transforms columns (the default),
//!   axis code 2 transforms rows.
//! * Degenerate shapes override the requested axis: a `1 x NY` input is
//!   always transformed along its rows, an `NX x 1` input along its
//!   columns.
//! * Transforms are out-of-place and never mutate the input; each call
//!   plans afresh and caches nothing.
//! * A 2D transform may mix kinds per axis (e.g. cosine along x, sine
//!   along y).

// Layer 1: Primitives - buffers and shared error types.
pub mod primitives;

// Layer 2: Mapping - type-code table and axis geometry.
pub mod mapping;

// Layer 3: Backend - adapter over the rustdct execution library.
pub mod backend;

// Layer 4: Engine - validation and orchestration.
pub mod engine;

// High-level fluent API for discrete trigonometric transforms.
mod api;

pub use api::{dtt_1d, dtt_2d, dtt_2d_codes, Dtt1d, Dtt1dModel, Dtt2d, Dtt2dModel};

// Standard DTT prelude.
pub mod prelude {
    pub use crate::api::{dtt_1d, dtt_2d, dtt_2d_codes, Dtt1d, Dtt1dModel, Dtt2d, Dtt2dModel};
    pub use crate::mapping::kinds::{map_type_code, TransformKind};
    pub use crate::mapping::layout::{resolve_axis_layout, Axis, AxisLayout};
    pub use crate::primitives::array::Array2D;
    pub use crate::primitives::errors::DttError;
}
