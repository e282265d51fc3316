//! Layer 2: Mapping
//!
//! # Purpose
//!
//! This layer maps the crate's abstract transform description onto concrete
//! execution parameters: the type-code-to-kernel-kind table and the
//! stride/distance geometry for per-axis passes over a column-major buffer.
//! Everything here is pure data and pure functions.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Backend
//!   ↓
//! Layer 2: Mapping ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Transform kinds and the type-code mapping table.
pub mod kinds;

/// Axis selection and batch geometry resolution.
pub mod layout;
