//! SIMD bulk kernels for the fast element types.
//!
//! ## Purpose
//!
//! This module accelerates the hot bulk operations with `wide` vector
//! types: `f32x8` for float, `i32x8` for 32-bit integers, `i16x16` and
//! `i8x32` for the narrow adds/subtracts. Every operation it does not
//! accelerate is re-exported from the portable module, so this module
//! always presents the complete kernel family.
//!
//! ## Design notes
//!
//! * **Behavioral equivalence**: Each routine must agree with its portable
//!   counterpart: exactly for integers, within the float tolerance for
//!   `f32` (reductions may reassociate, which is why the tolerance exists).
//! * **Unaligned loads**: Vectors are loaded through fixed-size arrays, so
//!   any slice works regardless of alignment; the array layer's alignment
//!   padding keeps the fast path on aligned data in practice.
//! * **u32 reinterpretation**: Unsigned 32-bit operations reinterpret the
//!   buffers as `i32` and call the signed kernels. Two's-complement bit
//!   patterns are identical under modular add/sub/mul, which is the only
//!   reason the cast is sound.
//! * **Scalar tails**: Lengths that are not a lane multiple finish on a
//!   scalar loop with the same wrapping semantics.
//!
//! ## Invariants
//!
//! * No allocation; all routines work in the caller's slices.
//! * Integer vector arithmetic wraps, matching the portable kernels.
//!
//! ## Non-goals
//!
//! * No runtime CPU feature detection; `wide` lowers to whatever the
//!   target enables at compile time.

// External dependencies
use wide::{f32x8, i16x16, i32x8, i8x32};

// Internal dependencies
use super::{check_dest, check_div, check_pair, KernelResult};

// Operations without an accelerated implementation fall back to the
// portable routines under their family names.
pub use super::portable::{
    addc_s16, addc_s8, cdiv_s16, cdiv_s32, cdiv_s8, cdiv_u32, conv_f32, corr_f32, csub_s16,
    csub_s32, csub_s8, csub_u32, div_s16, div_s32, div_s8, div_u32, divc_s16, divc_s32, divc_s8,
    divc_u32, dot_s16, dot_s32, dot_s8, dot_u32, mul_s16, mul_s8, mulc_s16, mulc_s8, subc_s16,
    subc_s32, subc_s8, subc_u32, sum_s16, sum_s32, sum_s8, sum_u32,
};

pub use super::portable::{
    add_u8, addc_u8, cdiv_u8, csub_u8, div_u8, divc_u8, dot_u8, mul_u8, mulc_u8, sub_u8, subc_u8,
    sum_u8,
};

// ============================================================================
// Vectorized Loops
// ============================================================================

macro_rules! simd_binary_inplace {
    ($(#[$meta:meta])* $name:ident, $t:ty, $zero:expr, $lanes:expr, $vec:ty, $op:tt, $tail:expr) => {
        $(#[$meta])*
        pub fn $name(y: &mut [$t], x: &[$t]) -> KernelResult {
            check_pair(y.len(), x.len())?;
            let n = y.len();
            let main = n - n % $lanes;
            for (yc, xc) in y[..main]
                .chunks_exact_mut($lanes)
                .zip(x[..main].chunks_exact($lanes))
            {
                let mut a = [$zero; $lanes];
                a.copy_from_slice(yc);
                let mut b = [$zero; $lanes];
                b.copy_from_slice(xc);
                let v = <$vec>::from(a) $op <$vec>::from(b);
                yc.copy_from_slice(&v.to_array());
            }
            for i in main..n {
                y[i] = $tail(y[i], x[i]);
            }
            Ok(())
        }
    };
}

macro_rules! simd_const_inplace {
    ($(#[$meta:meta])* $name:ident, $t:ty, $zero:expr, $lanes:expr, $vec:ty, $combine:expr, $tail:expr) => {
        $(#[$meta])*
        pub fn $name(y: &mut [$t], c: $t) -> KernelResult {
            check_dest(y.len())?;
            let n = y.len();
            let main = n - n % $lanes;
            let cv = <$vec>::splat(c);
            for yc in y[..main].chunks_exact_mut($lanes) {
                let mut a = [$zero; $lanes];
                a.copy_from_slice(yc);
                let v = $combine(<$vec>::from(a), cv);
                yc.copy_from_slice(&v.to_array());
            }
            for i in main..n {
                y[i] = $tail(y[i], c);
            }
            Ok(())
        }
    };
}

// ============================================================================
// f32 Kernels
// ============================================================================

simd_binary_inplace!(
    /// `y[i] = y[i] + x[i]`.
    add_f32, f32, 0.0f32, 8, f32x8, +, |a: f32, b: f32| a + b
);
simd_binary_inplace!(
    /// `y[i] = y[i] - x[i]`.
    sub_f32, f32, 0.0f32, 8, f32x8, -, |a: f32, b: f32| a - b
);
simd_binary_inplace!(
    /// `y[i] = y[i] * x[i]`.
    mul_f32, f32, 0.0f32, 8, f32x8, *, |a: f32, b: f32| a * b
);
simd_binary_inplace!(
    /// `y[i] = y[i] / x[i]`, in place.
    div_assign_f32, f32, 0.0f32, 8, f32x8, /, |a: f32, b: f32| a / b
);

simd_const_inplace!(
    /// `y[i] = y[i] + c`.
    addc_f32, f32, 0.0f32, 8, f32x8, |a: f32x8, c: f32x8| a + c, |a: f32, c: f32| a + c
);
simd_const_inplace!(
    /// `y[i] = y[i] - c`.
    subc_f32, f32, 0.0f32, 8, f32x8, |a: f32x8, c: f32x8| a - c, |a: f32, c: f32| a - c
);
simd_const_inplace!(
    /// `y[i] = c - y[i]`.
    csub_f32, f32, 0.0f32, 8, f32x8, |a: f32x8, c: f32x8| c - a, |a: f32, c: f32| c - a
);
simd_const_inplace!(
    /// `y[i] = y[i] * c`.
    mulc_f32, f32, 0.0f32, 8, f32x8, |a: f32x8, c: f32x8| a * c, |a: f32, c: f32| a * c
);
simd_const_inplace!(
    /// `y[i] = y[i] / c`, in place.
    divc_assign_f32, f32, 0.0f32, 8, f32x8, |a: f32x8, c: f32x8| a / c, |a: f32, c: f32| a / c
);

/// `y[i] = x1[i] / x2[i]`.
pub fn div_f32(x1: &[f32], x2: &[f32], y: &mut [f32]) -> KernelResult {
    check_div(x1.len(), x2.len(), y.len())?;
    let n = y.len();
    let main = n - n % 8;
    for ((ac, bc), yc) in x1[..main]
        .chunks_exact(8)
        .zip(x2[..main].chunks_exact(8))
        .zip(y[..main].chunks_exact_mut(8))
    {
        let mut a = [0.0f32; 8];
        a.copy_from_slice(ac);
        let mut b = [0.0f32; 8];
        b.copy_from_slice(bc);
        let v = f32x8::from(a) / f32x8::from(b);
        yc.copy_from_slice(&v.to_array());
    }
    for i in main..n {
        y[i] = x1[i] / x2[i];
    }
    Ok(())
}

/// `y[i] = x[i] / c`.
pub fn divc_f32(x: &[f32], y: &mut [f32], c: f32) -> KernelResult {
    check_pair(y.len(), x.len())?;
    y.copy_from_slice(x);
    divc_assign_f32(y, c)
}

/// `y[i] = c / x[i]`.
pub fn cdiv_f32(x: &[f32], y: &mut [f32], c: f32) -> KernelResult {
    check_pair(y.len(), x.len())?;
    let n = y.len();
    let main = n - n % 8;
    let cv = f32x8::splat(c);
    for (xc, yc) in x[..main]
        .chunks_exact(8)
        .zip(y[..main].chunks_exact_mut(8))
    {
        let mut a = [0.0f32; 8];
        a.copy_from_slice(xc);
        let v = cv / f32x8::from(a);
        yc.copy_from_slice(&v.to_array());
    }
    for i in main..n {
        y[i] = c / x[i];
    }
    Ok(())
}

/// Dot product. Lane-parallel accumulation; the reassociation is why
/// float equivalence is defined with a tolerance.
pub fn dot_f32(x1: &[f32], x2: &[f32]) -> f32 {
    let n = x1.len().min(x2.len());
    let main = n - n % 8;
    let mut acc = f32x8::splat(0.0);
    for (ac, bc) in x1[..main]
        .chunks_exact(8)
        .zip(x2[..main].chunks_exact(8))
    {
        let mut a = [0.0f32; 8];
        a.copy_from_slice(ac);
        let mut b = [0.0f32; 8];
        b.copy_from_slice(bc);
        acc = acc + f32x8::from(a) * f32x8::from(b);
    }
    let mut total: f32 = acc.to_array().iter().sum();
    for i in main..n {
        total += x1[i] * x2[i];
    }
    total
}

/// Sum reduction, lane-parallel.
pub fn sum_f32(x: &[f32]) -> f32 {
    let n = x.len();
    let main = n - n % 8;
    let mut acc = f32x8::splat(0.0);
    for xc in x[..main].chunks_exact(8) {
        let mut a = [0.0f32; 8];
        a.copy_from_slice(xc);
        acc = acc + f32x8::from(a);
    }
    let mut total: f32 = acc.to_array().iter().sum();
    for v in &x[main..] {
        total += *v;
    }
    total
}

// ============================================================================
// i32 Kernels
// ============================================================================

simd_binary_inplace!(
    /// `y[i] = y[i] + x[i]` (wrapping).
    add_s32, i32, 0i32, 8, i32x8, +, |a: i32, b: i32| a.wrapping_add(b)
);
simd_binary_inplace!(
    /// `y[i] = y[i] - x[i]` (wrapping).
    sub_s32, i32, 0i32, 8, i32x8, -, |a: i32, b: i32| a.wrapping_sub(b)
);
simd_binary_inplace!(
    /// `y[i] = y[i] * x[i]` (wrapping).
    mul_s32, i32, 0i32, 8, i32x8, *, |a: i32, b: i32| a.wrapping_mul(b)
);

simd_const_inplace!(
    /// `y[i] = y[i] + c` (wrapping).
    addc_s32, i32, 0i32, 8, i32x8,
    |a: i32x8, c: i32x8| a + c, |a: i32, c: i32| a.wrapping_add(c)
);
simd_const_inplace!(
    /// `y[i] = y[i] * c` (wrapping).
    mulc_s32, i32, 0i32, 8, i32x8,
    |a: i32x8, c: i32x8| a * c, |a: i32, c: i32| a.wrapping_mul(c)
);

// ============================================================================
// u32 Kernels (reinterpreted as i32)
// ============================================================================

#[inline]
fn u32_as_i32(x: &[u32]) -> &[i32] {
    // SAFETY: u32 and i32 have identical size and alignment, and the
    // signed kernels are modular, so the two's-complement bit pattern is
    // value-preserving for add/sub/mul.
    unsafe { core::slice::from_raw_parts(x.as_ptr().cast(), x.len()) }
}

#[inline]
fn u32_as_i32_mut(x: &mut [u32]) -> &mut [i32] {
    // SAFETY: as for `u32_as_i32`.
    unsafe { core::slice::from_raw_parts_mut(x.as_mut_ptr().cast(), x.len()) }
}

/// `y[i] = y[i] + x[i]` (wrapping), via the signed kernel.
pub fn add_u32(y: &mut [u32], x: &[u32]) -> KernelResult {
    add_s32(u32_as_i32_mut(y), u32_as_i32(x))
}

/// `y[i] = y[i] - x[i]` (wrapping), via the signed kernel.
pub fn sub_u32(y: &mut [u32], x: &[u32]) -> KernelResult {
    sub_s32(u32_as_i32_mut(y), u32_as_i32(x))
}

/// `y[i] = y[i] * x[i]` (wrapping), via the signed kernel.
pub fn mul_u32(y: &mut [u32], x: &[u32]) -> KernelResult {
    mul_s32(u32_as_i32_mut(y), u32_as_i32(x))
}

/// `y[i] = y[i] + c` (wrapping), via the signed kernel.
pub fn addc_u32(y: &mut [u32], c: u32) -> KernelResult {
    addc_s32(u32_as_i32_mut(y), c as i32)
}

/// `y[i] = y[i] * c` (wrapping), via the signed kernel.
pub fn mulc_u32(y: &mut [u32], c: u32) -> KernelResult {
    mulc_s32(u32_as_i32_mut(y), c as i32)
}

// ============================================================================
// i16 / i8 Kernels
// ============================================================================

simd_binary_inplace!(
    /// `y[i] = y[i] + x[i]` (wrapping).
    add_s16, i16, 0i16, 16, i16x16, +, |a: i16, b: i16| a.wrapping_add(b)
);
simd_binary_inplace!(
    /// `y[i] = y[i] - x[i]` (wrapping).
    sub_s16, i16, 0i16, 16, i16x16, -, |a: i16, b: i16| a.wrapping_sub(b)
);
simd_binary_inplace!(
    /// `y[i] = y[i] + x[i]` (wrapping).
    add_s8, i8, 0i8, 32, i8x32, +, |a: i8, b: i8| a.wrapping_add(b)
);
simd_binary_inplace!(
    /// `y[i] = y[i] - x[i]` (wrapping).
    sub_s8, i8, 0i8, 32, i8x32, -, |a: i8, b: i8| a.wrapping_sub(b)
);
