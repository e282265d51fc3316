//! Transform kinds and the type-code mapping table.
//!
//! ## Purpose
//!
//! This module owns the closed enumeration of the eight discrete
//! trigonometric transform variants (DCT/DST types I-IV) and the single
//! mapping from user-facing type codes 1-8 onto those variants. The 1D and
//! 2D paths both resolve codes through [`map_type_code`], so the two can
//! never disagree.
//!
//! ## Design notes
//!
//! * **Closed set**: Exactly 8 variants exist; there is no extension point.
//! * **Single table**: The code-to-kind relation is one immutable `static`
//!   array indexed by `code - 1`, constructed once and never mutated.
//! * **Backend-agnostic**: [`TransformKind`] is owned here; the translation
//!   to the execution library's representation lives in the backend layer,
//!   so the backend can be swapped without touching this contract.
//!
//! ## Key concepts
//!
//! * **Type code**: Small positive integer (1-8) in the order
//!   DCT-I..DCT-IV, DST-I..DST-IV, matching the classic FFTW r2r ordering
//!   REDFT00, REDFT10, REDFT01, REDFT11, RODFT00, RODFT10, RODFT01, RODFT11.
//! * **Inverse pairing**: Each variant has a documented inverse among the
//!   eight (I and IV variants are self-inverse; II and III invert each
//!   other), up to a known scale factor.
//!
//! ## Invariants
//!
//! * `map_type_code` is a bijection between [1, 8] and the 8 kinds.
//! * `kind.inverse().inverse() == kind` for every kind.
//!
//! ## Non-goals
//!
//! * This module does not plan or execute transforms.
//! * This module does not validate anything beyond the code range.

// Internal dependencies
use crate::primitives::errors::DttError;

// ============================================================================
// Transform Kind Enum
// ============================================================================

/// Kernel kind selecting one discrete trigonometric transform variant.
///
/// The variants differ only in the boundary-symmetry assumptions at the
/// sequence edges; all are real-to-real and unnormalized (FFTW r2r
/// conventions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// DCT type I (even symmetry about both endpoints).
    Dct1,

    /// DCT type II (the "standard" DCT).
    Dct2,

    /// DCT type III (inverse of type II).
    Dct3,

    /// DCT type IV (even half-sample symmetry at both edges).
    Dct4,

    /// DST type I (odd symmetry about both endpoints).
    Dst1,

    /// DST type II.
    Dst2,

    /// DST type III (inverse of type II).
    Dst3,

    /// DST type IV (self-inverse).
    Dst4,
}

/// The code-to-kind mapping table, indexed by `code - 1`.
///
/// Shared by every path that resolves a type code; defined exactly once.
static KIND_TABLE: [TransformKind; 8] = [
    TransformKind::Dct1,
    TransformKind::Dct2,
    TransformKind::Dct3,
    TransformKind::Dct4,
    TransformKind::Dst1,
    TransformKind::Dst2,
    TransformKind::Dst3,
    TransformKind::Dst4,
];

// ============================================================================
// Type-Code Mapper
// ============================================================================

/// Map a transform type code (1-8) onto its kernel kind.
///
/// Total over the valid range; any other code fails with
/// [`DttError::InvalidTypeCode`].
pub fn map_type_code(code: u8) -> Result<TransformKind, DttError> {
    if (1..=8).contains(&code) {
        Ok(KIND_TABLE[(code - 1) as usize])
    } else {
        Err(DttError::InvalidTypeCode(code))
    }
}

// ============================================================================
// Kind Metadata
// ============================================================================

impl TransformKind {
    /// The type code (1-8) this kind corresponds to.
    pub fn type_code(self) -> u8 {
        match self {
            Self::Dct1 => 1,
            Self::Dct2 => 2,
            Self::Dct3 => 3,
            Self::Dct4 => 4,
            Self::Dst1 => 5,
            Self::Dst2 => 6,
            Self::Dst3 => 7,
            Self::Dst4 => 8,
        }
    }

    /// Human-readable name of the transform variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dct1 => "DCT-I",
            Self::Dct2 => "DCT-II",
            Self::Dct3 => "DCT-III",
            Self::Dct4 => "DCT-IV",
            Self::Dst1 => "DST-I",
            Self::Dst2 => "DST-II",
            Self::Dst3 => "DST-III",
            Self::Dst4 => "DST-IV",
        }
    }

    /// Whether this is a cosine (as opposed to sine) variant.
    pub fn is_cosine(self) -> bool {
        matches!(self, Self::Dct1 | Self::Dct2 | Self::Dct3 | Self::Dct4)
    }

    /// The kind whose application undoes this one, up to the scale factor
    /// given by [`round_trip_scale`](Self::round_trip_scale).
    pub fn inverse(self) -> TransformKind {
        match self {
            Self::Dct1 => Self::Dct1,
            Self::Dct2 => Self::Dct3,
            Self::Dct3 => Self::Dct2,
            Self::Dct4 => Self::Dct4,
            Self::Dst1 => Self::Dst1,
            Self::Dst2 => Self::Dst3,
            Self::Dst3 => Self::Dst2,
            Self::Dst4 => Self::Dst4,
        }
    }

    /// Minimum lane length for which this variant is defined.
    ///
    /// DCT-I of a single sample is degenerate (its logical DFT length is
    /// `2 * (len - 1)`); every other variant accepts any positive length.
    pub fn min_length(self) -> usize {
        match self {
            Self::Dct1 => 2,
            _ => 1,
        }
    }

    /// Scale factor accumulated by a transform of length `len` followed by
    /// its inverse: the logical DFT length of the variant.
    pub fn round_trip_scale(self, len: usize) -> usize {
        match self {
            Self::Dct1 => 2 * (len - 1),
            Self::Dst1 => 2 * (len + 1),
            _ => 2 * len,
        }
    }
}
