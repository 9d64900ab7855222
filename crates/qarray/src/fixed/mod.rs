//! Layer 3: Fixed, the Q-format fixed-point scalar type.
//!
//! ## Purpose
//!
//! This module provides [`FixedPoint`], a 16-bit Q-format fixed-point
//! number: an `i16` storage value plus a fractional-bit count `f`, so the
//! represented real value is `bits / 2^f`.
//!
//! ## Design notes
//!
//! * **Shared-frac contract**: Arithmetic and ordering between two
//!   fixed-point values require identical fractional-bit counts. A
//!   mismatch is a programming error, asserted and fatal; continuing with
//!   silently mis-scaled results would be worse than halting.
//! * **Saturating overflow**: Construction and arithmetic clamp to the
//!   `i16` range instead of wrapping.
//! * **Float promotion rule**: Mixed fixed/float arithmetic converts the
//!   float operand at the fixed operand's fractional-bit count, then
//!   applies the fixed/fixed operator. Both operand orders are supported.
//! * **Value type**: `Copy`, no heap ownership, trivially movable.
//!
//! ## Key concepts
//!
//! * **Q-format**: `bits = round(value * 2^frac)`.
//! * **Widened intermediates**: Multiply and divide go through `i32` to
//!   preserve precision before rescaling back to Q(frac).
//!
//! ## Invariants
//!
//! * `frac < 16` (a 16-bit storage cannot carry 16 fractional bits and a
//!   sign).
//! * `to_f32(from_f32(v, f))` is within `2^-f` of `v` for in-range `v`.
//!
//! ## Non-goals
//!
//! * No arbitrary-precision arithmetic and no wider storage formats.
//! * No rounding-mode configuration; round-to-nearest on construction,
//!   truncation on arithmetic rescale.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::Float;

// ============================================================================
// Defaults
// ============================================================================

/// Default fractional-bit count for [`FixedPoint`] values.
pub const DEFAULT_FRAC: u8 = 6;

// ============================================================================
// FixedPoint
// ============================================================================

/// A Q-format fixed-point number: `i16` storage with `frac` fractional
/// bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    bits: i16,
    frac: u8,
}

impl Default for FixedPoint {
    fn default() -> Self {
        Self {
            bits: 0,
            frac: DEFAULT_FRAC,
        }
    }
}

impl FixedPoint {
    /// Construct from a float, rounding to the nearest representable Q(frac)
    /// value and saturating to the `i16` range.
    ///
    /// # Panics
    ///
    /// Panics if `frac >= 16`.
    pub fn from_f32(value: f32, frac: u8) -> Self {
        assert!(frac < 16, "fractional bit count must be < 16, got {frac}");
        let scaled = value * (1i32 << frac) as f32;
        let rounded = <f32 as Float>::round(scaled);
        let bits = if rounded >= f32::from(i16::MAX) {
            i16::MAX
        } else if rounded <= f32::from(i16::MIN) {
            i16::MIN
        } else {
            rounded as i16
        };
        Self { bits, frac }
    }

    /// Construct directly from raw Q(frac) storage bits.
    ///
    /// # Panics
    ///
    /// Panics if `frac >= 16`.
    pub fn from_bits(bits: i16, frac: u8) -> Self {
        assert!(frac < 16, "fractional bit count must be < 16, got {frac}");
        Self { bits, frac }
    }

    /// Raw storage value.
    #[inline]
    pub fn bits(&self) -> i16 {
        self.bits
    }

    /// Fractional-bit count.
    #[inline]
    pub fn frac(&self) -> u8 {
        self.frac
    }

    /// Convert back to a float: `bits / 2^frac`. Lossy inverse of
    /// [`FixedPoint::from_f32`].
    #[inline]
    pub fn to_f32(&self) -> f32 {
        f32::from(self.bits) / (1i32 << self.frac) as f32
    }

    /// One quantization step, `2^-frac`, the round-trip error bound.
    #[inline]
    pub fn quantum(&self) -> f32 {
        1.0 / (1i32 << self.frac) as f32
    }

    #[inline]
    fn check_frac(self, other: Self, op: &str) {
        assert_eq!(
            self.frac, other.frac,
            "fractional bit count mismatch in fixed-point {op}: {} vs {}",
            self.frac, other.frac
        );
    }

    #[inline]
    fn saturate(wide: i32) -> i16 {
        wide.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    }
}

// ============================================================================
// Fixed / Fixed Arithmetic
// ============================================================================

impl Add for FixedPoint {
    type Output = FixedPoint;

    fn add(self, rhs: FixedPoint) -> FixedPoint {
        self.check_frac(rhs, "addition");
        FixedPoint {
            bits: self.bits.saturating_add(rhs.bits),
            frac: self.frac,
        }
    }
}

impl Sub for FixedPoint {
    type Output = FixedPoint;

    fn sub(self, rhs: FixedPoint) -> FixedPoint {
        self.check_frac(rhs, "subtraction");
        FixedPoint {
            bits: self.bits.saturating_sub(rhs.bits),
            frac: self.frac,
        }
    }
}

impl Mul for FixedPoint {
    type Output = FixedPoint;

    /// Q(f) * Q(f) -> Q(2f); the `>> frac` brings the product back to
    /// Q(f) scale.
    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        self.check_frac(rhs, "multiplication");
        let wide = i32::from(self.bits) * i32::from(rhs.bits);
        FixedPoint {
            bits: Self::saturate(wide >> self.frac),
            frac: self.frac,
        }
    }
}

impl Div for FixedPoint {
    type Output = FixedPoint;

    /// The dividend is widened and pre-shifted by `frac` so the quotient
    /// stays in Q(f) scale.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor (fatal precondition, like a fractional-bit
    /// mismatch).
    fn div(self, rhs: FixedPoint) -> FixedPoint {
        self.check_frac(rhs, "division");
        assert!(rhs.bits != 0, "fixed-point division by zero");
        let wide = (i32::from(self.bits) << self.frac) / i32::from(rhs.bits);
        FixedPoint {
            bits: Self::saturate(wide),
            frac: self.frac,
        }
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> FixedPoint {
        FixedPoint {
            bits: self.bits.saturating_neg(),
            frac: self.frac,
        }
    }
}

impl AddAssign for FixedPoint {
    fn add_assign(&mut self, rhs: FixedPoint) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedPoint {
    fn sub_assign(&mut self, rhs: FixedPoint) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedPoint {
    fn mul_assign(&mut self, rhs: FixedPoint) {
        *self = *self * rhs;
    }
}

impl DivAssign for FixedPoint {
    fn div_assign(&mut self, rhs: FixedPoint) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Mixed Fixed / Float Arithmetic
// ============================================================================

// The float operand is first quantized at the fixed operand's
// fractional-bit count; the fixed/fixed operator then applies. This is the
// uniform promotion rule for every fixed⊕float and float⊕fixed pairing.

macro_rules! mixed_float_ops {
    ($($trait:ident, $method:ident);* $(;)?) => {$(
        impl $trait<f32> for FixedPoint {
            type Output = FixedPoint;

            fn $method(self, rhs: f32) -> FixedPoint {
                $trait::$method(self, FixedPoint::from_f32(rhs, self.frac))
            }
        }

        impl $trait<FixedPoint> for f32 {
            type Output = FixedPoint;

            fn $method(self, rhs: FixedPoint) -> FixedPoint {
                $trait::$method(FixedPoint::from_f32(self, rhs.frac), rhs)
            }
        }
    )*};
}

mixed_float_ops! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

// ============================================================================
// Ordering & Conversion
// ============================================================================

impl PartialOrd for FixedPoint {
    /// Storage comparison; only meaningful under an equal fractional-bit
    /// count, which is asserted.
    fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
        self.check_frac(*other, "comparison");
        self.bits.partial_cmp(&other.bits)
    }
}

impl From<FixedPoint> for f32 {
    fn from(v: FixedPoint) -> f32 {
        v.to_f32()
    }
}

impl Display for FixedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_f32())
    }
}
