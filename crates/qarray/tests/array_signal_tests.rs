//! Tests for convolution and correlation.
//!
//! These tests verify:
//! - The convolution length law (n + k - 1) and known output vectors
//! - The correlation length law (n) and zero-padded tail windows
//! - Marshalling of integer arrays into the float kernels
//! - Empty-input error reporting
//!
//! ## Test Organization
//!
//! 1. **Convolution** - Length law, known values, identity kernel
//! 2. **Correlation** - Length law, known values
//! 3. **Marshalling** - Integer element types
//! 4. **Errors** - Empty operands

use approx::assert_abs_diff_eq;

use qarray::prelude::*;

// ============================================================================
// Convolution Tests
// ============================================================================

/// Test the convolution length law: output length is n + k - 1.
#[test]
fn test_conv_length_law() {
    let sig = Array::<f32>::from_slice(&[1.0; 7]).unwrap();
    let kern = Array::<f32>::from_slice(&[1.0; 3]).unwrap();
    let out = sig.convolve(&kern).unwrap();
    assert_eq!(out.len(), 7 + 3 - 1);
}

/// Test convolution against a hand-computed vector.
///
/// [1, 2, 3] * [1, 1] = [1, 3, 5, 3].
#[test]
fn test_conv_known_values() {
    let sig = Array::<f32>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    let kern = Array::<f32>::from_slice(&[1.0, 1.0]).unwrap();
    let out = sig.convolve(&kern).unwrap();
    assert!(out == [1.0f32, 3.0, 5.0, 3.0][..]);
}

/// Test the unit impulse is the convolution identity.
#[test]
fn test_conv_identity_kernel() {
    let sig = Array::<f32>::from_slice(&[0.5, -1.0, 2.0]).unwrap();
    let unit = Array::<f32>::from_slice(&[1.0]).unwrap();
    let out = sig.convolve(&unit).unwrap();
    assert!(out == [0.5f32, -1.0, 2.0][..]);
}

/// Test convolution is commutative.
#[test]
fn test_conv_commutative() {
    let a = Array::<f32>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    let b = Array::<f32>::from_slice(&[0.5, -0.5]).unwrap();
    let ab = a.convolve(&b).unwrap();
    let ba = b.convolve(&a).unwrap();
    assert!(ab == ba);
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Test the correlation length law: output length equals the signal
/// length.
#[test]
fn test_corr_length_law() {
    let sig = Array::<f32>::from_slice(&[1.0; 9]).unwrap();
    let pat = Array::<f32>::from_slice(&[1.0; 4]).unwrap();
    let out = sig.correlate(&pat).unwrap();
    assert_eq!(out.len(), 9);
}

/// Test correlation against a hand-computed vector with a zero-padded
/// tail window.
///
/// corr([1, 2, 3, 4], [1, 1]) = [3, 5, 7, 4].
#[test]
fn test_corr_known_values() {
    let sig = Array::<f32>::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let pat = Array::<f32>::from_slice(&[1.0, 1.0]).unwrap();
    let out = sig.correlate(&pat).unwrap();
    assert!(out == [3.0f32, 5.0, 7.0, 4.0][..]);
}

/// Test correlation peaks where the pattern matches.
#[test]
fn test_corr_peak_at_match() {
    let sig = Array::<f32>::from_slice(&[0.0, 1.0, 2.0, 1.0, 0.0, 0.0]).unwrap();
    let pat = Array::<f32>::from_slice(&[1.0, 2.0, 1.0]).unwrap();
    let out = sig.correlate(&pat).unwrap();

    // The aligned window [1, 2, 1] . [1, 2, 1] = 6 dominates.
    assert_abs_diff_eq!(out[1], 6.0, epsilon = 1e-4);
    let max = out.as_slice().iter().cloned().fold(f32::MIN, f32::max);
    assert_abs_diff_eq!(max, 6.0, epsilon = 1e-4);
}

// ============================================================================
// Marshalling Tests
// ============================================================================

/// Test integer arrays are marshalled into the float kernels.
#[test]
fn test_conv_integer_marshalling() {
    let sig = Array::<i16>::from_slice(&[1, 2, 3]).unwrap();
    let kern = Array::<i16>::from_slice(&[1, 1]).unwrap();
    let out = sig.convolve(&kern).unwrap();
    assert!(out == [1.0f32, 3.0, 5.0, 3.0][..]);
}

/// Test integer correlation likewise promotes to float.
#[test]
fn test_corr_integer_marshalling() {
    let sig = Array::<u8>::from_slice(&[1, 2, 3, 4]).unwrap();
    let pat = Array::<u8>::from_slice(&[1, 1]).unwrap();
    let out = sig.correlate(&pat).unwrap();
    assert!(out == [3.0f32, 5.0, 7.0, 4.0][..]);
}

/// Test the explicit float conversion drops the fractional-bit count.
#[test]
fn test_to_f32() {
    let cfg = ArrayConfig::new().with_frac(4);
    let a = Array::<i16>::from_slice_cfg(&[16, -8], cfg).unwrap();
    let f = a.to_f32().unwrap();
    assert_eq!(f.frac(), 0);
    assert!(f == [16.0f32, -8.0][..]);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test convolution with empty operands reports EmptyInput.
#[test]
fn test_conv_empty_input() {
    let empty = Array::<f32>::new();
    let kern = Array::<f32>::from_slice(&[1.0]).unwrap();
    assert_eq!(empty.convolve(&kern), Err(ArrayError::EmptyInput));
    assert_eq!(kern.convolve(&empty), Err(ArrayError::EmptyInput));
}

/// Test correlation with empty operands reports EmptyInput.
#[test]
fn test_corr_empty_input() {
    let empty = Array::<f32>::new();
    let pat = Array::<f32>::from_slice(&[1.0]).unwrap();
    assert_eq!(empty.correlate(&pat), Err(ArrayError::EmptyInput));
    assert_eq!(pat.correlate(&empty), Err(ArrayError::EmptyInput));
}
