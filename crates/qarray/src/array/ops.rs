//! Element-wise operators for arrays.
//!
//! ## Purpose
//!
//! This module implements the arithmetic operator surface: allocating
//! binary operators between arrays, scalar broadcast in both operand
//! orders, and in-place compound assignment. Everything routes through the
//! kernel dispatch layer.
//!
//! ## Design notes
//!
//! * **Reference operands**: Binary operators take references (`&a + &b`)
//!   and allocate a fresh result; the inputs are never mutated.
//! * **Float promotion**: Division always yields `Array<f32>`, since
//!   fractional results cannot live in integer storage. In-place division
//!   exists only for `Array<f32>`; the type system encodes the promotion
//!   rule.
//! * **Fatal length mismatch**: Array-array operators assert equal operand
//!   lengths. Continuing with an undefined read is not an option.
//! * **Degraded results**: Operators cannot return `Result`; if the result
//!   allocation fails they produce the empty array, and every subsequent
//!   operation on it is a well-defined no-op. The `checked_*` methods are
//!   the fallible forms for callers that must observe the failure.
//! * **Self-assignment**: `a += &a` is rejected by the borrow checker at
//!   compile time; `a += a.clone()` is the supported spelling.
//!
//! ## Invariants
//!
//! * Empty operands short-circuit to empty results before any kernel call.
//! * Results inherit the left/array operand's configuration; promoted
//!   float results reset the fractional-bit count to zero.

// External dependencies
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// Internal dependencies
use super::Array;
use crate::kernels::bulk;
use crate::kernels::dispatch::Element;
use crate::primitives::errors::ArrayError;

// ============================================================================
// Checked Array-Array Forms
// ============================================================================

impl<T: Element> Array<T> {
    #[inline]
    fn assert_same_len(&self, rhs: &Array<T>, op: &str) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "length mismatch in array {op}: {} vs {}",
            self.len(),
            rhs.len()
        );
    }

    /// `self + rhs` into a fresh array.
    ///
    /// # Panics
    ///
    /// Panics if the operand lengths differ.
    pub fn checked_add(&self, rhs: &Array<T>) -> Result<Array<T>, ArrayError> {
        self.assert_same_len(rhs, "addition");
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let mut out = self.try_clone()?;
        T::add_assign_slice(out.as_mut_slice(), rhs.as_slice())?;
        Ok(out)
    }

    /// `self - rhs` into a fresh array.
    ///
    /// # Panics
    ///
    /// Panics if the operand lengths differ.
    pub fn checked_sub(&self, rhs: &Array<T>) -> Result<Array<T>, ArrayError> {
        self.assert_same_len(rhs, "subtraction");
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let mut out = self.try_clone()?;
        T::sub_assign_slice(out.as_mut_slice(), rhs.as_slice())?;
        Ok(out)
    }

    /// `self * rhs` into a fresh array; `i16` elements rescale by the
    /// shared fractional-bit count.
    ///
    /// # Panics
    ///
    /// Panics if the operand lengths differ.
    pub fn checked_mul(&self, rhs: &Array<T>) -> Result<Array<T>, ArrayError> {
        self.assert_same_len(rhs, "multiplication");
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let frac = self.frac();
        let mut out = self.try_clone()?;
        T::mul_assign_slice(out.as_mut_slice(), rhs.as_slice(), frac)?;
        Ok(out)
    }

    /// `self / rhs` into a fresh float array (uniform promotion).
    ///
    /// # Panics
    ///
    /// Panics if the operand lengths differ.
    pub fn checked_div(&self, rhs: &Array<T>) -> Result<Array<f32>, ArrayError> {
        self.assert_same_len(rhs, "division");
        let config = self.config().with_frac(0);
        if self.is_empty() {
            return Ok(Array::new_with(config));
        }
        let mut out = Array::<f32>::zeroed_cfg(self.len(), config)?;
        T::div_into(self.as_slice(), rhs.as_slice(), out.as_mut_slice())?;
        Ok(out)
    }
}

// ============================================================================
// Checked Scalar Forms
// ============================================================================

impl<T: Element> Array<T> {
    /// `self + c` into a fresh array.
    pub fn checked_add_scalar(&self, c: T) -> Result<Array<T>, ArrayError> {
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let mut out = self.try_clone()?;
        T::addc(out.as_mut_slice(), c)?;
        Ok(out)
    }

    /// `self - c` into a fresh array.
    pub fn checked_sub_scalar(&self, c: T) -> Result<Array<T>, ArrayError> {
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let mut out = self.try_clone()?;
        T::subc(out.as_mut_slice(), c)?;
        Ok(out)
    }

    /// `c - self` into a fresh array (scalar on the left).
    pub fn checked_rsub_scalar(&self, c: T) -> Result<Array<T>, ArrayError> {
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let mut out = self.try_clone()?;
        T::csub(out.as_mut_slice(), c)?;
        Ok(out)
    }

    /// `self * c` into a fresh array; `i16` elements rescale by the shared
    /// fractional-bit count.
    pub fn checked_mul_scalar(&self, c: T) -> Result<Array<T>, ArrayError> {
        if self.is_empty() {
            return Ok(Array::new_with(self.config()));
        }
        let frac = self.frac();
        let mut out = self.try_clone()?;
        T::mulc(out.as_mut_slice(), c, frac)?;
        Ok(out)
    }

    /// `self / c` into a fresh float array.
    pub fn checked_div_scalar(&self, c: f32) -> Result<Array<f32>, ArrayError> {
        let config = self.config().with_frac(0);
        if self.is_empty() {
            return Ok(Array::new_with(config));
        }
        let mut out = Array::<f32>::zeroed_cfg(self.len(), config)?;
        T::divc_into(self.as_slice(), out.as_mut_slice(), c)?;
        Ok(out)
    }

    /// `c / self` into a fresh float array (scalar on the left).
    pub fn checked_rdiv_scalar(&self, c: f32) -> Result<Array<f32>, ArrayError> {
        let config = self.config().with_frac(0);
        if self.is_empty() {
            return Ok(Array::new_with(config));
        }
        let mut out = Array::<f32>::zeroed_cfg(self.len(), config)?;
        T::cdiv_into(self.as_slice(), out.as_mut_slice(), c)?;
        Ok(out)
    }
}

// ============================================================================
// Binary Operators (array ⊕ array)
// ============================================================================

impl<'a, T: Element> Add<&Array<T>> for &'a Array<T> {
    type Output = Array<T>;

    fn add(self, rhs: &Array<T>) -> Array<T> {
        self.checked_add(rhs)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Sub<&Array<T>> for &'a Array<T> {
    type Output = Array<T>;

    fn sub(self, rhs: &Array<T>) -> Array<T> {
        self.checked_sub(rhs)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Mul<&Array<T>> for &'a Array<T> {
    type Output = Array<T>;

    fn mul(self, rhs: &Array<T>) -> Array<T> {
        self.checked_mul(rhs)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Div<&Array<T>> for &'a Array<T> {
    type Output = Array<f32>;

    fn div(self, rhs: &Array<T>) -> Array<f32> {
        self.checked_div(rhs)
            .unwrap_or_else(|_| Array::new_with(self.config().with_frac(0)))
    }
}

// ============================================================================
// Binary Operators (array ⊕ scalar)
// ============================================================================

impl<'a, T: Element> Add<T> for &'a Array<T> {
    type Output = Array<T>;

    fn add(self, c: T) -> Array<T> {
        self.checked_add_scalar(c)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Sub<T> for &'a Array<T> {
    type Output = Array<T>;

    fn sub(self, c: T) -> Array<T> {
        self.checked_sub_scalar(c)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Mul<T> for &'a Array<T> {
    type Output = Array<T>;

    fn mul(self, c: T) -> Array<T> {
        self.checked_mul_scalar(c)
            .unwrap_or_else(|_| Array::new_with(self.config()))
    }
}

impl<'a, T: Element> Div<f32> for &'a Array<T> {
    type Output = Array<f32>;

    fn div(self, c: f32) -> Array<f32> {
        self.checked_div_scalar(c)
            .unwrap_or_else(|_| Array::new_with(self.config().with_frac(0)))
    }
}

// ============================================================================
// Binary Operators (scalar ⊕ array)
// ============================================================================

// One impl per element type; a blanket `impl Add<&Array<T>> for T` is not
// expressible under the orphan rules.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<&Array<$t>> for $t {
            type Output = Array<$t>;

            fn add(self, rhs: &Array<$t>) -> Array<$t> {
                rhs + self
            }
        }

        impl Sub<&Array<$t>> for $t {
            type Output = Array<$t>;

            fn sub(self, rhs: &Array<$t>) -> Array<$t> {
                rhs.checked_rsub_scalar(self)
                    .unwrap_or_else(|_| Array::new_with(rhs.config()))
            }
        }

        impl Mul<&Array<$t>> for $t {
            type Output = Array<$t>;

            fn mul(self, rhs: &Array<$t>) -> Array<$t> {
                rhs * self
            }
        }

        impl Div<&Array<$t>> for $t {
            type Output = Array<f32>;

            fn div(self, rhs: &Array<$t>) -> Array<f32> {
                rhs.checked_rdiv_scalar(self as f32)
                    .unwrap_or_else(|_| Array::new_with(rhs.config().with_frac(0)))
            }
        }
    )*};
}

scalar_lhs_ops!(i8, u8, i16, i32, u32, f32);

// ============================================================================
// Compound Assignment (array ⊕= array)
// ============================================================================

impl<T: Element> AddAssign<&Array<T>> for Array<T> {
    fn add_assign(&mut self, rhs: &Array<T>) {
        self.assert_same_len(rhs, "addition");
        if self.is_empty() {
            return;
        }
        let status = T::add_assign_slice(self.as_mut_slice(), rhs.as_slice());
        debug_assert!(status.is_ok());
    }
}

impl<T: Element> SubAssign<&Array<T>> for Array<T> {
    fn sub_assign(&mut self, rhs: &Array<T>) {
        self.assert_same_len(rhs, "subtraction");
        if self.is_empty() {
            return;
        }
        let status = T::sub_assign_slice(self.as_mut_slice(), rhs.as_slice());
        debug_assert!(status.is_ok());
    }
}

impl<T: Element> MulAssign<&Array<T>> for Array<T> {
    fn mul_assign(&mut self, rhs: &Array<T>) {
        self.assert_same_len(rhs, "multiplication");
        if self.is_empty() {
            return;
        }
        let frac = self.frac();
        let status = T::mul_assign_slice(self.as_mut_slice(), rhs.as_slice(), frac);
        debug_assert!(status.is_ok());
    }
}

impl DivAssign<&Array<f32>> for Array<f32> {
    fn div_assign(&mut self, rhs: &Array<f32>) {
        self.assert_same_len(rhs, "division");
        if self.is_empty() {
            return;
        }
        let status = bulk::div_assign_f32(self.as_mut_slice(), rhs.as_slice());
        debug_assert!(status.is_ok());
    }
}

// ============================================================================
// Compound Assignment (array ⊕= scalar)
// ============================================================================

impl<T: Element> AddAssign<T> for Array<T> {
    fn add_assign(&mut self, c: T) {
        if self.is_empty() {
            return;
        }
        let status = T::addc(self.as_mut_slice(), c);
        debug_assert!(status.is_ok());
    }
}

impl<T: Element> SubAssign<T> for Array<T> {
    fn sub_assign(&mut self, c: T) {
        if self.is_empty() {
            return;
        }
        let status = T::subc(self.as_mut_slice(), c);
        debug_assert!(status.is_ok());
    }
}

impl<T: Element> MulAssign<T> for Array<T> {
    fn mul_assign(&mut self, c: T) {
        if self.is_empty() {
            return;
        }
        let frac = self.frac();
        let status = T::mulc(self.as_mut_slice(), c, frac);
        debug_assert!(status.is_ok());
    }
}

impl DivAssign<f32> for Array<f32> {
    fn div_assign(&mut self, c: f32) {
        if self.is_empty() {
            return;
        }
        let status = bulk::divc_assign_f32(self.as_mut_slice(), c);
        debug_assert!(status.is_ok());
    }
}
