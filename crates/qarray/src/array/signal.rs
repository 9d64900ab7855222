//! Convolution and correlation.
//!
//! ## Purpose
//!
//! This module provides linear convolution and sliding correlation for
//! arrays. Both are float operations; arrays of any element type are
//! marshalled into freshly allocated `f32` scratch arrays (aligned through
//! the normal buffer path) before the kernel runs.
//!
//! ## Key concepts
//!
//! * **Length laws**: Convolving a length-n signal with a length-k kernel
//!   yields n + k − 1 samples; correlating against a pattern yields n
//!   samples (tail windows are zero-padded).
//!
//! ## Non-goals
//!
//! * No FFT-based fast paths; the kernels are direct-form.

// External dependencies
use num_traits::AsPrimitive;

// Internal dependencies
use super::Array;
use crate::kernels::bulk;
use crate::kernels::dispatch::Element;
use crate::primitives::errors::ArrayError;

impl<T: Element> Array<T> {
    /// Convert into a float array (the fractional-bit count is dropped;
    /// values convert element-by-element, not by Q-format rescale).
    pub fn to_f32(&self) -> Result<Array<f32>, ArrayError> {
        let mut out = Array::<f32>::zeroed_cfg(self.len(), self.config().with_frac(0))?;
        for (dst, src) in out.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *dst = AsPrimitive::<f32>::as_(*src);
        }
        Ok(out)
    }

    /// Linear convolution with `kernel`; output length is
    /// `self.len() + kernel.len() - 1`.
    pub fn convolve(&self, kernel: &Array<T>) -> Result<Array<f32>, ArrayError> {
        if self.is_empty() || kernel.is_empty() {
            return Err(ArrayError::EmptyInput);
        }
        let sig = self.to_f32()?;
        let ker = kernel.to_f32()?;
        let out_len = self.len() + kernel.len() - 1;
        let mut out = Array::<f32>::zeroed_cfg(out_len, self.config().with_frac(0))?;
        bulk::conv_f32(sig.as_slice(), ker.as_slice(), out.as_mut_slice())?;
        Ok(out)
    }

    /// Sliding correlation against `pattern`; output length equals the
    /// signal length, with windows past the signal end zero-padded.
    pub fn correlate(&self, pattern: &Array<T>) -> Result<Array<f32>, ArrayError> {
        if self.is_empty() || pattern.is_empty() {
            return Err(ArrayError::EmptyInput);
        }
        let sig = self.to_f32()?;
        let pat = pattern.to_f32()?;
        let mut out = Array::<f32>::zeroed_cfg(self.len(), self.config().with_frac(0))?;
        bulk::corr_f32(sig.as_slice(), pat.as_slice(), out.as_mut_slice())?;
        Ok(out)
    }
}
