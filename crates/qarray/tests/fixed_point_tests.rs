//! Tests for the Q-format fixed-point scalar type.
//!
//! These tests verify:
//! - Round-trip conversion within the quantization error
//! - Saturating construction and arithmetic
//! - The widened multiply/divide algorithms
//! - The mixed fixed/float promotion rule
//! - Ordering and the fatal fractional-bit mismatch precondition
//!
//! ## Test Organization
//!
//! 1. **Conversion** - Round-trips, rounding, saturation
//! 2. **Arithmetic** - Add/sub/mul/div identities and known values
//! 3. **Mixed Operands** - fixed⊕float and float⊕fixed
//! 4. **Ordering** - Comparisons under a shared frac
//! 5. **Fatal Preconditions** - Mismatched frac panics

use approx::assert_abs_diff_eq;

use qarray::prelude::*;

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test float round-trips stay within one quantization step 2^-frac.
#[test]
fn test_roundtrip_within_quantum() {
    for &frac in &[0u8, 2, 4, 6, 8, 10] {
        let quantum = 1.0 / (1i32 << frac) as f32;
        for &v in &[0.0f32, 1.0, -1.0, 0.3, -2.7, 15.15] {
            let fp = FixedPoint::from_f32(v, frac);
            assert_abs_diff_eq!(fp.to_f32(), v, epsilon = quantum);
        }
    }
}

/// Test construction rounds to the nearest representable value.
#[test]
fn test_round_to_nearest() {
    // 0.3 * 4 = 1.2 rounds to 1; 0.4 * 4 = 1.6 rounds to 2.
    assert_eq!(FixedPoint::from_f32(0.3, 2).bits(), 1);
    assert_eq!(FixedPoint::from_f32(0.4, 2).bits(), 2);
    assert_eq!(FixedPoint::from_f32(-0.4, 2).bits(), -2);
}

/// Test out-of-range construction saturates to the i16 bounds.
#[test]
fn test_construction_saturates() {
    let hi = FixedPoint::from_f32(1.0e6, 6);
    assert_eq!(hi.bits(), i16::MAX);

    let lo = FixedPoint::from_f32(-1.0e6, 6);
    assert_eq!(lo.bits(), i16::MIN);
}

/// Test raw-bits construction and accessors.
#[test]
fn test_from_bits() {
    let fp = FixedPoint::from_bits(640, 8);
    assert_eq!(fp.bits(), 640);
    assert_eq!(fp.frac(), 8);
    assert_abs_diff_eq!(fp.to_f32(), 2.5, epsilon = 1e-6);
    assert_abs_diff_eq!(fp.quantum(), 1.0 / 256.0, epsilon = 1e-9);
}

/// Test the default value is zero at the default fractional-bit count.
#[test]
fn test_default() {
    let fp = FixedPoint::default();
    assert_eq!(fp.bits(), 0);
    assert_eq!(fp.frac(), DEFAULT_FRAC);
    assert_eq!(fp.to_f32(), 0.0);
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

/// Test (a + b) - b == a exactly: integer add/sub has no rounding.
#[test]
fn test_add_sub_exact_inverse() {
    let a = FixedPoint::from_f32(3.7, 8);
    let b = FixedPoint::from_f32(-1.2, 8);
    let roundtrip = (a + b) - b;
    assert_eq!(roundtrip.bits(), a.bits());
    assert_eq!(roundtrip, a);
}

/// Test multiplication: 2.5 * 2.0 in Q(8) is 5.0 within one quantization
/// step (1/256).
#[test]
fn test_mul_q8() {
    let x = FixedPoint::from_f32(2.5, 8);
    let y = FixedPoint::from_f32(2.0, 8);
    let p = x * y;
    assert_eq!(p.frac(), 8);
    assert_abs_diff_eq!(p.to_f32(), 5.0, epsilon = 1.0 / 256.0);
}

/// Test division preserves fractional precision via the pre-shift.
#[test]
fn test_div_known_value() {
    let x = FixedPoint::from_f32(5.0, 6);
    let y = FixedPoint::from_f32(2.0, 6);
    let q = x / y;
    assert_abs_diff_eq!(q.to_f32(), 2.5, epsilon = 1.0 / 64.0);
}

/// Test (a * b) / b stays within one quantization step of a.
#[test]
fn test_mul_div_identity() {
    let a = FixedPoint::from_f32(2.5, 8);
    let b = FixedPoint::from_f32(2.0, 8);
    let roundtrip = (a * b) / b;
    assert_abs_diff_eq!(roundtrip.to_f32(), 2.5, epsilon = 1.0 / 256.0);
}

/// Test saturating addition clamps instead of wrapping.
#[test]
fn test_add_saturates() {
    let max = FixedPoint::from_bits(i16::MAX, 4);
    let one = FixedPoint::from_bits(1, 4);
    assert_eq!((max + one).bits(), i16::MAX);
    let min = FixedPoint::from_bits(i16::MIN, 4);
    assert_eq!((min - one).bits(), i16::MIN);
}

/// Test negation.
#[test]
fn test_neg() {
    let a = FixedPoint::from_f32(1.25, 4);
    assert_eq!((-a).bits(), -a.bits());
    assert_abs_diff_eq!((-a).to_f32(), -1.25, epsilon = 1.0 / 16.0);
}

/// Test compound assignment operators match their binary forms.
#[test]
fn test_compound_assignment() {
    let mut acc = FixedPoint::from_f32(1.0, 6);
    let step = FixedPoint::from_f32(0.5, 6);

    acc += step;
    assert_abs_diff_eq!(acc.to_f32(), 1.5, epsilon = 1.0 / 64.0);

    acc *= FixedPoint::from_f32(2.0, 6);
    assert_abs_diff_eq!(acc.to_f32(), 3.0, epsilon = 2.0 / 64.0);

    acc -= step;
    assert_abs_diff_eq!(acc.to_f32(), 2.5, epsilon = 2.0 / 64.0);

    acc /= FixedPoint::from_f32(2.0, 6);
    assert_abs_diff_eq!(acc.to_f32(), 1.25, epsilon = 2.0 / 64.0);
}

/// Test fixed-point division by zero is fatal.
#[test]
#[should_panic(expected = "division by zero")]
fn test_div_by_zero_panics() {
    let a = FixedPoint::from_f32(1.0, 6);
    let z = FixedPoint::from_bits(0, 6);
    let _ = a / z;
}

// ============================================================================
// Mixed Operand Tests
// ============================================================================

/// Test fixed⊕float converts the float at the fixed operand's frac.
#[test]
fn test_fixed_float_ops() {
    let a = FixedPoint::from_f32(1.5, 6);

    let sum = a + 0.25f32;
    assert_eq!(sum.frac(), 6);
    assert_abs_diff_eq!(sum.to_f32(), 1.75, epsilon = 1.0 / 64.0);

    let prod = a * 2.0f32;
    assert_abs_diff_eq!(prod.to_f32(), 3.0, epsilon = 1.0 / 64.0);

    let quot = a / 2.0f32;
    assert_abs_diff_eq!(quot.to_f32(), 0.75, epsilon = 1.0 / 64.0);
}

/// Test float⊕fixed applies the same promotion rule with the float on
/// the left.
#[test]
fn test_float_fixed_ops() {
    let b = FixedPoint::from_f32(0.5, 8);

    let sum = 1.0f32 + b;
    assert_eq!(sum.frac(), 8);
    assert_abs_diff_eq!(sum.to_f32(), 1.5, epsilon = 1.0 / 256.0);

    let diff = 1.0f32 - b;
    assert_abs_diff_eq!(diff.to_f32(), 0.5, epsilon = 1.0 / 256.0);

    let quot = 1.0f32 / b;
    assert_abs_diff_eq!(quot.to_f32(), 2.0, epsilon = 1.0 / 256.0);
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test comparisons under a shared fractional-bit count.
#[test]
fn test_ordering() {
    let small = FixedPoint::from_f32(1.0, 6);
    let large = FixedPoint::from_f32(2.0, 6);
    assert!(small < large);
    assert!(large > small);
    assert!(small <= small);
    assert!(small >= small);
}

/// Test equality compares both storage and frac.
#[test]
fn test_equality() {
    let a = FixedPoint::from_bits(64, 6);
    let b = FixedPoint::from_bits(64, 6);
    let c = FixedPoint::from_bits(64, 5);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// ============================================================================
// Fatal Precondition Tests
// ============================================================================

/// Test arithmetic across different fractional-bit counts is fatal.
#[test]
#[should_panic(expected = "fractional bit count mismatch")]
fn test_add_frac_mismatch_panics() {
    let a = FixedPoint::from_f32(1.0, 4);
    let b = FixedPoint::from_f32(1.0, 8);
    let _ = a + b;
}

/// Test ordering across different fractional-bit counts is fatal.
#[test]
#[should_panic(expected = "fractional bit count mismatch")]
fn test_ordering_frac_mismatch_panics() {
    let a = FixedPoint::from_f32(1.0, 4);
    let b = FixedPoint::from_f32(1.0, 8);
    let _ = a < b;
}

/// Test an unrepresentable fractional-bit count is rejected.
#[test]
#[should_panic(expected = "fractional bit count must be < 16")]
fn test_frac_too_large_panics() {
    let _ = FixedPoint::from_f32(1.0, 16);
}
