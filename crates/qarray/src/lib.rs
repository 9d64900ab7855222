//! # qarray: typed numeric arrays for embedded DSP workloads
//!
//! Fixed-length arrays over small arithmetic element types (8/16/32-bit
//! integers and `f32`) with element-wise operators, reductions, convolution
//! and correlation, plus a Q-format fixed-point scalar type. Every operator
//! on the "fast" element types (`i8`, `i16`, `i32`, `u32`, `f32`) is
//! transparently routed to a bulk kernel; every other type falls back to the
//! portable scalar loops. Both paths produce identical results (exactly for
//! integers, within a small absolute tolerance for `f32`).
//!
//! ## Quick Start
//!
//! ```rust
//! use qarray::prelude::*;
//!
//! let a = Array::<i16>::from_slice(&[10, 20, 30])?;
//! let b = Array::<i16>::from_slice(&[1, 2, 3])?;
//!
//! // Allocating binary operators leave their inputs untouched.
//! let sum = &a + &b;
//! assert!(sum == [11i16, 22, 33][..]);
//!
//! // Division always promotes to f32.
//! let q = &Array::<f32>::from_slice(&[1.0, 2.0, 4.0])? / 2.0f32;
//! assert!(q == [0.5f32, 1.0, 2.0][..]);
//!
//! // Dot product reduces to a scalar of the element type.
//! assert_eq!(a.dot(&b), 140);
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! ## Fixed Point
//!
//! ```rust
//! use qarray::prelude::*;
//!
//! let x = FixedPoint::from_f32(2.5, 8);
//! let y = FixedPoint::from_f32(2.0, 8);
//! let p = x * y;
//! assert!((p.to_f32() - 5.0).abs() <= 1.0 / 256.0);
//! ```
//!
//! Arithmetic between two fixed-point values requires identical
//! fractional-bit counts; a mismatch is a programming error and panics.
//! Integer arrays can carry a shared fractional-bit interpretation through
//! [`ArrayConfig::with_frac`]; `i16` multiply and dot-product rescale their
//! results by that shift, so an `Array<i16>` behaves as an array of Q(f)
//! values.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (an allocator is still
//! required). Disable default features to remove the standard library
//! dependency and the SIMD kernels:
//!
//! ```toml
//! [dependencies]
//! qarray = { version = "0.1", default-features = false }
//! ```
//!
//! With the `simd` feature off, every operation runs on the portable scalar
//! path; results are unchanged.
//!
//! ## Error Handling
//!
//! Fallible operations (allocation, checked writes, convolution) return
//! `Result<_, ArrayError>` and compose with `?`. Precondition violations
//! (mismatched operand lengths, mismatched fractional-bit counts) are fatal
//! panics, not recoverable errors: continuing with silently wrong numeric
//! results is worse than halting.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, configuration, raw buffer storage.
mod primitives;

// Layer 2: Kernels - bulk numeric kernel family and per-type dispatch.
mod kernels;

// Layer 3: Fixed - Q-format fixed-point scalar type.
mod fixed;

// Layer 4: Array - the typed array and its operators.
mod array;

// Standard qarray prelude.
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::fixed::{FixedPoint, DEFAULT_FRAC};
    pub use crate::kernels::dispatch::{Element, FLOAT_EQ_EPSILON};
    pub use crate::kernels::KernelError;
    pub use crate::primitives::config::{ArrayConfig, DEFAULT_ALIGNMENT};
    pub use crate::primitives::errors::ArrayError;
}

pub use crate::array::Array;
pub use crate::fixed::{FixedPoint, DEFAULT_FRAC};
pub use crate::kernels::dispatch::{Element, FLOAT_EQ_EPSILON};
pub use crate::kernels::KernelError;
pub use crate::primitives::config::{ArrayConfig, DEFAULT_ALIGNMENT};
pub use crate::primitives::errors::ArrayError;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod kernels {
        pub use crate::kernels::*;
    }
}
