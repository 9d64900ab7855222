//! Portable scalar kernels.
//!
//! ## Purpose
//!
//! This module implements every bulk operation as a plain element-by-element
//! loop. It is the behavioral reference for the SIMD kernels and the only
//! path for element types without an accelerated implementation.
//!
//! ## Design notes
//!
//! * **Per-type family**: One routine per operation per element type,
//!   matching the naming of hardware DSP kernel libraries
//!   (`add_s16`, `mulc_f32`, ...). The generic dispatch layer picks the
//!   right family member at compile time.
//! * **Modular integers**: All integer arithmetic wraps; the kernel
//!   contract treats operations as bitwise/modular, never range-checked.
//! * **Float promotion**: Division kernels convert operands to `f32`
//!   before dividing, so integer division by zero follows IEEE semantics
//!   (±inf/NaN) instead of faulting.
//!
//! ## Invariants
//!
//! * The 16-bit multiply and dot-product kernels apply exactly the
//!   fractional-bit shift they are given; no other kernel rescales.
//! * Reductions accumulate in a wider intermediate and truncate back.
//!
//! ## Non-goals
//!
//! * No vectorization (see `kernels::simd`).
//! * No stride support; operands are contiguous slices.

// Internal dependencies
use super::{check_dest, check_div, check_pair, KernelResult};

// ============================================================================
// Integer Kernel Family
// ============================================================================

macro_rules! int_kernels {
    ($t:ty, $acc:ty,
     $add:ident, $sub:ident,
     $addc:ident, $subc:ident, $csub:ident,
     $div:ident, $divc:ident, $cdiv:ident,
     $sum:ident) => {
        /// `y[i] = y[i] + x[i]` (wrapping).
        pub fn $add(y: &mut [$t], x: &[$t]) -> KernelResult {
            check_pair(y.len(), x.len())?;
            for (yi, xi) in y.iter_mut().zip(x.iter()) {
                *yi = yi.wrapping_add(*xi);
            }
            Ok(())
        }

        /// `y[i] = y[i] - x[i]` (wrapping).
        pub fn $sub(y: &mut [$t], x: &[$t]) -> KernelResult {
            check_pair(y.len(), x.len())?;
            for (yi, xi) in y.iter_mut().zip(x.iter()) {
                *yi = yi.wrapping_sub(*xi);
            }
            Ok(())
        }

        /// `y[i] = y[i] + c` (wrapping).
        pub fn $addc(y: &mut [$t], c: $t) -> KernelResult {
            check_dest(y.len())?;
            for yi in y.iter_mut() {
                *yi = yi.wrapping_add(c);
            }
            Ok(())
        }

        /// `y[i] = y[i] - c` (wrapping).
        pub fn $subc(y: &mut [$t], c: $t) -> KernelResult {
            check_dest(y.len())?;
            for yi in y.iter_mut() {
                *yi = yi.wrapping_sub(c);
            }
            Ok(())
        }

        /// `y[i] = c - y[i]` (wrapping).
        pub fn $csub(y: &mut [$t], c: $t) -> KernelResult {
            check_dest(y.len())?;
            for yi in y.iter_mut() {
                *yi = c.wrapping_sub(*yi);
            }
            Ok(())
        }

        /// `y[i] = x1[i] / x2[i]` as `f32`.
        pub fn $div(x1: &[$t], x2: &[$t], y: &mut [f32]) -> KernelResult {
            check_div(x1.len(), x2.len(), y.len())?;
            for i in 0..y.len() {
                y[i] = x1[i] as f32 / x2[i] as f32;
            }
            Ok(())
        }

        /// `y[i] = x[i] / c` as `f32`.
        pub fn $divc(x: &[$t], y: &mut [f32], c: f32) -> KernelResult {
            check_pair(y.len(), x.len())?;
            for (yi, xi) in y.iter_mut().zip(x.iter()) {
                *yi = *xi as f32 / c;
            }
            Ok(())
        }

        /// `y[i] = c / x[i]` as `f32`.
        pub fn $cdiv(x: &[$t], y: &mut [f32], c: f32) -> KernelResult {
            check_pair(y.len(), x.len())?;
            for (yi, xi) in y.iter_mut().zip(x.iter()) {
                *yi = c / *xi as f32;
            }
            Ok(())
        }

        /// Sum reduction; accumulates widened, truncates back.
        pub fn $sum(x: &[$t]) -> $t {
            let mut acc: $acc = 0;
            for xi in x.iter() {
                acc = acc.wrapping_add(*xi as $acc);
            }
            acc as $t
        }
    };
}

macro_rules! int_mul_kernels {
    ($t:ty, $acc:ty, $mul:ident, $mulc:ident, $dot:ident) => {
        /// `y[i] = y[i] * x[i]` (wrapping).
        pub fn $mul(y: &mut [$t], x: &[$t]) -> KernelResult {
            check_pair(y.len(), x.len())?;
            for (yi, xi) in y.iter_mut().zip(x.iter()) {
                *yi = yi.wrapping_mul(*xi);
            }
            Ok(())
        }

        /// `y[i] = y[i] * c` (wrapping).
        pub fn $mulc(y: &mut [$t], c: $t) -> KernelResult {
            check_dest(y.len())?;
            for yi in y.iter_mut() {
                *yi = yi.wrapping_mul(c);
            }
            Ok(())
        }

        /// Dot product; accumulates widened, truncates back.
        pub fn $dot(x1: &[$t], x2: &[$t]) -> $t {
            let mut acc: $acc = 0;
            for (a, b) in x1.iter().zip(x2.iter()) {
                acc = acc.wrapping_add((*a as $acc).wrapping_mul(*b as $acc));
            }
            acc as $t
        }
    };
}

int_kernels!(i8, i32, add_s8, sub_s8, addc_s8, subc_s8, csub_s8, div_s8, divc_s8, cdiv_s8, sum_s8);
int_kernels!(u8, i32, add_u8, sub_u8, addc_u8, subc_u8, csub_u8, div_u8, divc_u8, cdiv_u8, sum_u8);
int_kernels!(
    i16, i32, add_s16, sub_s16, addc_s16, subc_s16, csub_s16, div_s16, divc_s16, cdiv_s16, sum_s16
);
int_kernels!(
    i32, i64, add_s32, sub_s32, addc_s32, subc_s32, csub_s32, div_s32, divc_s32, cdiv_s32, sum_s32
);
int_kernels!(
    u32, u64, add_u32, sub_u32, addc_u32, subc_u32, csub_u32, div_u32, divc_u32, cdiv_u32, sum_u32
);

int_mul_kernels!(i8, i32, mul_s8, mulc_s8, dot_s8);
int_mul_kernels!(u8, i32, mul_u8, mulc_u8, dot_u8);
int_mul_kernels!(i32, i64, mul_s32, mulc_s32, dot_s32);
int_mul_kernels!(u32, u64, mul_u32, mulc_u32, dot_u32);

// ============================================================================
// Fractional-Bit 16-bit Kernels
// ============================================================================

/// `y[i] = (y[i] * x[i]) >> frac`, Q(frac) multiply in an `i32`
/// intermediate, truncated back to `i16`.
pub fn mul_s16(y: &mut [i16], x: &[i16], frac: u8) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi = ((i32::from(*yi) * i32::from(*xi)) >> frac) as i16;
    }
    Ok(())
}

/// `y[i] = (y[i] * c) >> frac`, Q(frac) scalar multiply.
pub fn mulc_s16(y: &mut [i16], c: i16, frac: u8) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi = ((i32::from(*yi) * i32::from(c)) >> frac) as i16;
    }
    Ok(())
}

/// Dot product with a final `>> frac`; accumulates in `i32` (wrapping),
/// truncates back to `i16`.
pub fn dot_s16(x1: &[i16], x2: &[i16], frac: u8) -> i16 {
    let mut acc: i32 = 0;
    for (a, b) in x1.iter().zip(x2.iter()) {
        acc = acc.wrapping_add(i32::from(*a).wrapping_mul(i32::from(*b)));
    }
    (acc >> frac) as i16
}

// ============================================================================
// f32 Kernel Family
// ============================================================================

/// `y[i] = y[i] + x[i]`.
pub fn add_f32(y: &mut [f32], x: &[f32]) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi += *xi;
    }
    Ok(())
}

/// `y[i] = y[i] - x[i]`.
pub fn sub_f32(y: &mut [f32], x: &[f32]) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi -= *xi;
    }
    Ok(())
}

/// `y[i] = y[i] * x[i]`.
pub fn mul_f32(y: &mut [f32], x: &[f32]) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi *= *xi;
    }
    Ok(())
}

/// `y[i] = x1[i] / x2[i]`.
pub fn div_f32(x1: &[f32], x2: &[f32], y: &mut [f32]) -> KernelResult {
    check_div(x1.len(), x2.len(), y.len())?;
    for i in 0..y.len() {
        y[i] = x1[i] / x2[i];
    }
    Ok(())
}

/// `y[i] = y[i] / x[i]`, in place.
pub fn div_assign_f32(y: &mut [f32], x: &[f32]) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi /= *xi;
    }
    Ok(())
}

/// `y[i] = y[i] + c`.
pub fn addc_f32(y: &mut [f32], c: f32) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi += c;
    }
    Ok(())
}

/// `y[i] = y[i] - c`.
pub fn subc_f32(y: &mut [f32], c: f32) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi -= c;
    }
    Ok(())
}

/// `y[i] = c - y[i]`.
pub fn csub_f32(y: &mut [f32], c: f32) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi = c - *yi;
    }
    Ok(())
}

/// `y[i] = y[i] * c`.
pub fn mulc_f32(y: &mut [f32], c: f32) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi *= c;
    }
    Ok(())
}

/// `y[i] = x[i] / c`.
pub fn divc_f32(x: &[f32], y: &mut [f32], c: f32) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi = *xi / c;
    }
    Ok(())
}

/// `y[i] = y[i] / c`, in place.
pub fn divc_assign_f32(y: &mut [f32], c: f32) -> KernelResult {
    check_dest(y.len())?;
    for yi in y.iter_mut() {
        *yi /= c;
    }
    Ok(())
}

/// `y[i] = c / x[i]`.
pub fn cdiv_f32(x: &[f32], y: &mut [f32], c: f32) -> KernelResult {
    check_pair(y.len(), x.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi = c / *xi;
    }
    Ok(())
}

/// Dot product.
pub fn dot_f32(x1: &[f32], x2: &[f32]) -> f32 {
    let mut acc = 0.0f32;
    for (a, b) in x1.iter().zip(x2.iter()) {
        acc += *a * *b;
    }
    acc
}

/// Sum reduction.
pub fn sum_f32(x: &[f32]) -> f32 {
    let mut acc = 0.0f32;
    for xi in x.iter() {
        acc += *xi;
    }
    acc
}

// ============================================================================
// Convolution / Correlation
// ============================================================================

/// Linear convolution: `y[n] = Σ_k sig[k] * kern[n - k]`.
///
/// Output length must be `sig.len() + kern.len() - 1`.
pub fn conv_f32(sig: &[f32], kern: &[f32], y: &mut [f32]) -> KernelResult {
    if sig.is_empty() || kern.is_empty() || y.len() != sig.len() + kern.len() - 1 {
        return Err(super::KernelError::ParamOutOfRange);
    }
    y.fill(0.0);
    for (i, s) in sig.iter().enumerate() {
        for (j, k) in kern.iter().enumerate() {
            y[i + j] += *s * *k;
        }
    }
    Ok(())
}

/// Sliding correlation against a pattern: `y[n] = Σ_m sig[n + m] * pat[m]`.
///
/// Output length must equal the signal length; windows running past the
/// signal end are zero-padded.
pub fn corr_f32(sig: &[f32], pat: &[f32], y: &mut [f32]) -> KernelResult {
    if sig.is_empty() || pat.is_empty() || y.len() != sig.len() {
        return Err(super::KernelError::ParamOutOfRange);
    }
    let n = sig.len();
    for (i, yi) in y.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (m, p) in pat.iter().enumerate() {
            if i + m >= n {
                break;
            }
            acc += sig[i + m] * *p;
        }
        *yi = acc;
    }
    Ok(())
}
