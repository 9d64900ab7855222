//! Comparison masks and aggregate equality.
//!
//! ## Purpose
//!
//! This module provides the two comparison surfaces of an array:
//! per-position masks against a scalar (SIMD-style 0/1 arrays, not a
//! single boolean) and aggregate equality against another array or a raw
//! slice (a true boolean).
//!
//! ## Design notes
//!
//! * **Masks keep the element type**: A mask is a same-length array of the
//!   same element type holding `1` where the predicate holds and `0`
//!   elsewhere, ready to feed back into [`Array::filter`].
//! * **Float tolerance**: Equality on `f32` elements compares within
//!   [`crate::FLOAT_EQ_EPSILON`], because scalar and SIMD code paths may
//!   produce bit-different but numerically equivalent results.
//!
//! ## Invariants
//!
//! * Mask entries are exactly `T::zero()` or `T::one()`.
//! * Aggregate equality is reflexive, including for float arrays.

// External dependencies
use num_traits::Float;

// Internal dependencies
use super::Array;
use crate::kernels::dispatch::Element;

// ============================================================================
// Scalar Comparison Masks
// ============================================================================

impl<T: Element> Array<T> {
    fn mask_with(&self, pred: impl Fn(&T) -> bool) -> Array<T> {
        let mut out = match Array::zeroed_cfg(self.len(), self.config()) {
            Ok(out) => out,
            Err(_) => return Array::new_with(self.config()),
        };
        for (dst, src) in out.as_mut_slice().iter_mut().zip(self.as_slice()) {
            if pred(src) {
                *dst = T::one();
            }
        }
        out
    }

    /// Mask of positions equal to `value` (within the float tolerance for
    /// `f32` elements).
    pub fn eq_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| T::eq_element(*v, value))
    }

    /// Mask of positions different from `value`.
    pub fn ne_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| !T::eq_element(*v, value))
    }

    /// Mask of positions greater than `value`.
    pub fn gt_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| *v > value)
    }

    /// Mask of positions less than `value`.
    pub fn lt_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| *v < value)
    }

    /// Mask of positions greater than or equal to `value`.
    pub fn ge_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| *v >= value)
    }

    /// Mask of positions less than or equal to `value`.
    pub fn le_mask(&self, value: T) -> Array<T> {
        self.mask_with(|v| *v <= value)
    }

    /// Logical negation per position: `1` where the element is zero, `0`
    /// elsewhere.
    pub fn not_mask(&self) -> Array<T> {
        self.mask_with(|v| T::eq_element(*v, T::zero()))
    }
}

// ============================================================================
// Aggregate Equality
// ============================================================================

impl Array<f32> {
    /// Aggregate float comparison with an explicit absolute tolerance,
    /// for callers that need something other than the default
    /// [`crate::FLOAT_EQ_EPSILON`].
    pub fn approx_eq(&self, other: &Array<f32>, epsilon: f32) -> bool {
        self.len() == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| <f32 as Float>::abs(a - b) <= epsilon)
    }
}

impl<T: Element> PartialEq for Array<T> {
    /// True iff the arrays have equal length and every position matches
    /// (within the float tolerance for `f32` elements).
    fn eq(&self, other: &Array<T>) -> bool {
        self.len() == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| T::eq_element(*a, *b))
    }
}

impl<T: Element> PartialEq<[T]> for Array<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.iter())
                .all(|(a, b)| T::eq_element(*a, *b))
    }
}

impl<T: Element> PartialEq<&[T]> for Array<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self == *other
    }
}
