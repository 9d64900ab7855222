//! Layer 2: Kernels
//!
//! # Purpose
//!
//! This layer provides the bulk numeric kernel family (one routine per
//! operation per element type, mirroring the shape of hardware DSP kernel
//! libraries) plus the compile-time dispatch that selects, for each
//! element type, between the portable scalar implementation and the SIMD
//! implementation.
//!
//! The portable module is always compiled and is the behavioral reference:
//! for every operation and input, the SIMD path must agree with it exactly
//! for integer types and within [`dispatch::FLOAT_EQ_EPSILON`] for `f32`.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Array
//!   ↓
//! Layer 3: Fixed
//!   ↓
//! Layer 2: Kernels ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! # Call contract
//!
//! In-place kernels mutate their destination slice (`y = y ⊕ x`); division
//! kernels write into a separate `f32` destination because fractional
//! results cannot be represented in integer storage. Every kernel returns
//! [`KernelError::ParamOutOfRange`] for zero-length or mismatched slices.
//! Integer arithmetic is modular (wrapping); the 16-bit multiply and
//! dot-product variants take a fractional-bit right-shift so Q-format
//! arrays stay in scale.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Portable scalar reference kernels.
pub mod portable;

/// SIMD kernels for the fast element types.
#[cfg(feature = "simd")]
pub mod simd;

/// Per-element-type dispatch between the portable and SIMD paths.
pub mod dispatch;

// The preferred kernel set: SIMD where available, portable otherwise.
// `simd` re-exports the portable routine for every operation it does not
// accelerate, so `bulk::*` is a complete family either way.
#[cfg(feature = "simd")]
pub(crate) use self::simd as bulk;

#[cfg(not(feature = "simd"))]
pub(crate) use self::portable as bulk;

// ============================================================================
// Kernel Status
// ============================================================================

/// Parameter error reported by a bulk kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A slice was empty or the operand lengths disagree.
    ParamOutOfRange,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ParamOutOfRange => write!(f, "kernel parameter out of range"),
        }
    }
}

/// Result alias for kernel invocations.
pub type KernelResult = Result<(), KernelError>;

// ============================================================================
// Parameter Checks
// ============================================================================

/// Validate an in-place binary kernel call: `y` non-empty, lengths equal.
#[inline]
pub(crate) fn check_pair(y_len: usize, x_len: usize) -> KernelResult {
    if y_len == 0 || y_len != x_len {
        return Err(KernelError::ParamOutOfRange);
    }
    Ok(())
}

/// Validate an in-place unary kernel call: `y` non-empty.
#[inline]
pub(crate) fn check_dest(y_len: usize) -> KernelResult {
    if y_len == 0 {
        return Err(KernelError::ParamOutOfRange);
    }
    Ok(())
}

/// Validate an out-of-place division kernel call.
#[inline]
pub(crate) fn check_div(x1_len: usize, x2_len: usize, y_len: usize) -> KernelResult {
    if y_len == 0 || x1_len != y_len || x2_len != y_len {
        return Err(KernelError::ParamOutOfRange);
    }
    Ok(())
}
