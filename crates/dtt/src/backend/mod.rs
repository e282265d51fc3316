//! Layer 3: Backend
//!
//! # Purpose
//!
//! This layer adapts the `rustdct` execution library to the crate's
//! planning model: plan a multi-instance real-to-real transform for a given
//! lane length, batch count, and stride/distance geometry, then execute it
//! out-of-place. It is the single translation point between
//! [`TransformKind`](crate::mapping::kinds::TransformKind) and the
//! library's per-variant planner entry points, so the execution library can
//! be swapped without touching the mapping contract.
//!
//! # Design notes
//!
//! * **Per-call planning**: A fresh `DctPlanner` is constructed for every
//!   plan, and no plan is cached across calls. Each transform is an
//!   independent construct-plan, execute, release cycle. `rustdct` selects
//!   its algorithm heuristically (the equivalent of estimate-style planning
//!   hints); there is no exhaustive runtime tuning.
//! * **FFTW conventions**: `rustdct` computes each variant at exactly half
//!   the classic unnormalized FFTW r2r amplitude, so every processed lane
//!   is doubled on the way out. Round trips therefore scale by the
//!   variant's logical DFT length
//!   ([`round_trip_scale`](crate::mapping::kinds::TransformKind::round_trip_scale)).
//! * **Thread model**: Planning is call-local (no shared planner), and
//!   built plans are immutable `Arc`s, so independent buffers may be
//!   transformed concurrently.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Backend ← You are here
//!   ↓
//! Layer 2: Mapping
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use std::sync::Arc;

use num_traits::Float;
use rustdct::{Dct1, DctNum, DctPlanner, Dst1, TransformType2And3, TransformType4};

// Internal dependencies
use crate::mapping::kinds::TransformKind;
use crate::mapping::layout::AxisLayout;
use crate::primitives::errors::DttError;

// ============================================================================
// Lane Plan
// ============================================================================

/// A planned 1D transform for a single lane of a fixed length.
///
/// One closed variant per kernel kind, each wrapping the trait object the
/// `rustdct` planner hands out for that variant.
pub enum LanePlan<T: DctNum> {
    /// Planned DCT type I.
    Dct1(Arc<dyn Dct1<T>>),
    /// Planned DCT type II.
    Dct2(Arc<dyn TransformType2And3<T>>),
    /// Planned DCT type III.
    Dct3(Arc<dyn TransformType2And3<T>>),
    /// Planned DCT type IV.
    Dct4(Arc<dyn TransformType4<T>>),
    /// Planned DST type I.
    Dst1(Arc<dyn Dst1<T>>),
    /// Planned DST type II.
    Dst2(Arc<dyn TransformType2And3<T>>),
    /// Planned DST type III.
    Dst3(Arc<dyn TransformType2And3<T>>),
    /// Planned DST type IV.
    Dst4(Arc<dyn TransformType4<T>>),
}

impl<T: DctNum + Float> LanePlan<T> {
    /// Plan one transform variant for lanes of `length` samples.
    ///
    /// Fails with [`DttError::PlanningFailure`] for geometry the variant is
    /// not defined over (zero-length lanes; DCT-I lanes shorter than two
    /// samples).
    pub fn plan(kind: TransformKind, length: usize) -> Result<Self, DttError> {
        if length < kind.min_length() {
            return Err(DttError::PlanningFailure {
                kind: kind.name(),
                length,
            });
        }

        let mut planner = DctPlanner::<T>::new();
        Ok(match kind {
            TransformKind::Dct1 => Self::Dct1(planner.plan_dct1(length)),
            TransformKind::Dct2 => Self::Dct2(planner.plan_dct2(length)),
            TransformKind::Dct3 => Self::Dct3(planner.plan_dct3(length)),
            TransformKind::Dct4 => Self::Dct4(planner.plan_dct4(length)),
            TransformKind::Dst1 => Self::Dst1(planner.plan_dst1(length)),
            TransformKind::Dst2 => Self::Dst2(planner.plan_dst2(length)),
            TransformKind::Dst3 => Self::Dst3(planner.plan_dst3(length)),
            TransformKind::Dst4 => Self::Dst4(planner.plan_dst4(length)),
        })
    }

    /// Transform one lane in place.
    ///
    /// The result follows the unnormalized FFTW r2r definitions (twice the
    /// amplitude `rustdct` computes natively).
    pub fn process(&self, lane: &mut [T]) {
        match self {
            Self::Dct1(plan) => plan.process_dct1(lane),
            Self::Dct2(plan) => plan.process_dct2(lane),
            Self::Dct3(plan) => plan.process_dct3(lane),
            Self::Dct4(plan) => plan.process_dct4(lane),
            Self::Dst1(plan) => plan.process_dst1(lane),
            Self::Dst2(plan) => plan.process_dst2(lane),
            Self::Dst3(plan) => plan.process_dst3(lane),
            Self::Dst4(plan) => plan.process_dst4(lane),
        }

        let two = T::one() + T::one();
        for value in lane.iter_mut() {
            *value = *value * two;
        }
    }
}

// ============================================================================
// Multi-Instance (Batch) Plan
// ============================================================================

/// A planned multi-instance rank-1 transform: one kernel kind applied
/// uniformly to every lane of a stride/distance geometry.
pub struct BatchPlan<T: DctNum> {
    lane: LanePlan<T>,
    layout: AxisLayout,
}

/// Plan a multi-instance rank-1 real-to-real transform over `layout`.
pub fn plan_many<T: DctNum + Float>(
    kind: TransformKind,
    layout: AxisLayout,
) -> Result<BatchPlan<T>, DttError> {
    let lane = LanePlan::plan(kind, layout.length)?;
    Ok(BatchPlan { lane, layout })
}

impl<T: DctNum + Float> BatchPlan<T> {
    /// The geometry this plan walks.
    pub fn layout(&self) -> AxisLayout {
        self.layout
    }

    /// Execute the plan out-of-place.
    ///
    /// Input and output use identical strides and distances; `output` must
    /// have the same element count as `input`.
    pub fn execute(&self, input: &[T], output: &mut [T]) {
        debug_assert_eq!(input.len(), output.len());

        let mut lane = vec![T::zero(); self.layout.length];
        for instance in 0..self.layout.batch {
            let base = instance * self.layout.distance;
            for (i, sample) in lane.iter_mut().enumerate() {
                *sample = input[base + i * self.layout.stride];
            }
            self.lane.process(&mut lane);
            for (i, sample) in lane.iter().enumerate() {
                output[base + i * self.layout.stride] = *sample;
            }
        }
    }

    /// Execute the plan in place on one buffer.
    ///
    /// Lanes are disjoint and each lane is gathered in full before it is
    /// written back, so in-place execution is exact.
    pub fn execute_in_place(&self, buffer: &mut [T]) {
        let mut lane = vec![T::zero(); self.layout.length];
        for instance in 0..self.layout.batch {
            let base = instance * self.layout.distance;
            for (i, sample) in lane.iter_mut().enumerate() {
                *sample = buffer[base + i * self.layout.stride];
            }
            self.lane.process(&mut lane);
            for (i, sample) in lane.iter().enumerate() {
                buffer[base + i * self.layout.stride] = *sample;
            }
        }
    }
}

// ============================================================================
// Fused 2D Plan
// ============================================================================

/// A planned fused 2D real-to-real transform, composed of one pass per axis.
pub struct Plan2d<T: DctNum> {
    fast: BatchPlan<T>,
    slow: BatchPlan<T>,
}

/// Plan a fused 2D real-to-real transform.
///
/// Arguments follow the fused call's row-major convention: extent and kind
/// 0 belong to the slow (outer) axis, extent and kind 1 to the fast
/// (contiguous) axis. For this crate's column-major buffers that means
/// `(extent0, extent1) == (ny, nx)` and kinds in `(y, x)` order.
pub fn plan_2d<T: DctNum + Float>(
    extent0: usize,
    extent1: usize,
    kind0: TransformKind,
    kind1: TransformKind,
) -> Result<Plan2d<T>, DttError> {
    use crate::mapping::layout::Axis;

    // Lanes along the contiguous axis: adjacent samples, lanes extent1 apart.
    let fast = plan_many(
        kind1,
        AxisLayout {
            length: extent1,
            batch: extent0,
            stride: 1,
            distance: extent1,
            axis: Axis::Columns,
        },
    )?;

    // Lanes along the outer axis: samples extent1 apart, lanes adjacent.
    let slow = plan_many(
        kind0,
        AxisLayout {
            length: extent0,
            batch: extent1,
            stride: extent1,
            distance: 1,
            axis: Axis::Rows,
        },
    )?;

    Ok(Plan2d { fast, slow })
}

impl<T: DctNum + Float> Plan2d<T> {
    /// Execute the fused transform out-of-place.
    ///
    /// The fast-axis pass writes into `output`; the slow-axis pass then
    /// runs in place over that intermediate.
    pub fn execute(&self, input: &[T], output: &mut [T]) {
        self.fast.execute(input, output);
        self.slow.execute_in_place(output);
    }
}
