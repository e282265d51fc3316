//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates complete transform calls: it validates boundary
//! inputs, resolves kernel kinds and batch geometry through the mapping
//! layer, drives the backend's plan/execute cycle, and produces the output
//! buffer.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Backend
//!   ↓
//! Layer 2: Mapping
//!   ↓
//! Layer 1: Primitives
//! ```

/// Boundary validation utilities.
pub mod validator;

/// Transform orchestration.
pub mod executor;
