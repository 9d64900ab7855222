//! Layer 4: Array
//!
//! # Purpose
//!
//! This layer provides [`Array`], the typed fixed-length numeric array:
//! construction and ownership, indexing, append/concatenation, filtering,
//! element-wise operators, comparison masks, reductions, and
//! convolution/correlation. All arithmetic is routed through the kernel
//! dispatch layer, so each element type transparently gets its fastest
//! legal implementation.
//!
//! # Ownership model
//!
//! An array owns its buffer exclusively. Moving an array transfers the
//! buffer and statically invalidates the source; [`Clone`] is the deep
//! copy; `as_slice`/`as_mut_slice` are the borrowed, non-owning views and
//! cannot outlive the owner. There is no shared mutable state between
//! array instances.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Array ← You are here
//!   ↓
//! Layer 3: Fixed
//!   ↓
//! Layer 2: Kernels
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::fmt;
use core::ops::{Index, IndexMut};

// Internal dependencies
use crate::fixed::FixedPoint;
use crate::kernels::dispatch::Element;
use crate::primitives::buffer::RawBuffer;
use crate::primitives::config::ArrayConfig;
use crate::primitives::errors::ArrayError;

// Comparison masks and aggregate equality.
mod compare;

// Element-wise operators.
mod ops;

// Convolution and correlation.
mod signal;

// ============================================================================
// Array
// ============================================================================

/// A typed, growable-but-usually-fixed-length numeric array.
///
/// The element type is fixed for the array's lifetime; capacity may exceed
/// `len * size_of::<T>()` to satisfy the configured alignment. All elements
/// share one fractional-bit interpretation ([`ArrayConfig::frac`]) when the
/// array is used as Q-format fixed-point storage.
pub struct Array<T: Element> {
    buf: RawBuffer<T>,
    len: usize,
    config: ArrayConfig,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Element> Array<T> {
    /// An empty array; touches no allocator state.
    pub fn new() -> Self {
        Self::new_with(ArrayConfig::default())
    }

    /// An empty array carrying the given configuration.
    pub fn new_with(config: ArrayConfig) -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            config,
        }
    }

    /// Allocate room for at least `capacity` elements (rounded up to the
    /// alignment boundary); length starts at zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::with_capacity_cfg(capacity, ArrayConfig::default())
    }

    /// As [`Array::with_capacity`], with an explicit configuration.
    pub fn with_capacity_cfg(capacity: usize, config: ArrayConfig) -> Result<Self, ArrayError> {
        let buf = RawBuffer::allocate(capacity, config.alignment())?;
        Ok(Self {
            buf,
            len: 0,
            config,
        })
    }

    /// A zero-filled array of length `len`.
    pub fn zeroed(len: usize) -> Result<Self, ArrayError> {
        Self::zeroed_cfg(len, ArrayConfig::default())
    }

    /// As [`Array::zeroed`], with an explicit configuration.
    pub fn zeroed_cfg(len: usize, config: ArrayConfig) -> Result<Self, ArrayError> {
        let mut buf = RawBuffer::allocate(len, config.alignment())?;
        buf.fill(len, T::zero());
        Ok(Self { buf, len, config })
    }

    /// Allocate and copy from a source slice. An empty source yields an
    /// empty array.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError> {
        Self::from_slice_cfg(values, ArrayConfig::default())
    }

    /// As [`Array::from_slice`], with an explicit configuration.
    pub fn from_slice_cfg(values: &[T], config: ArrayConfig) -> Result<Self, ArrayError> {
        let mut buf = RawBuffer::allocate(values.len(), config.alignment())?;
        buf.write_slice(0, values);
        Ok(Self {
            buf,
            len: values.len(),
            config,
        })
    }

    /// Fallible deep copy.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        Self::from_slice_cfg(self.as_slice(), self.config)
    }
}

// ============================================================================
// Access
// ============================================================================

impl<T: Element> Array<T> {
    /// Number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in elements (may exceed `len` due to alignment padding).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Allocated buffer size in bytes.
    #[inline]
    pub fn mem_size(&self) -> usize {
        self.buf.mem_size()
    }

    /// The array's configuration.
    #[inline]
    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    /// Shared fractional-bit count of the elements.
    #[inline]
    pub fn frac(&self) -> u8 {
        self.config.frac()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.prefix(self.len)
    }

    /// Borrow the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.prefix_mut(self.len)
    }

    /// Raw pointer to the first element, for kernel interop.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Raw mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Checked element read.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Checked mutable element read.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Checked element write; fails instead of panicking on a bad index.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.buf.write(index, value);
        Ok(())
    }
}

// ============================================================================
// Append / Concatenation
// ============================================================================

impl<T: Element> Array<T> {
    /// Append one element.
    ///
    /// O(1) while spare capacity exists; otherwise reallocates to exactly
    /// fit the new length, rounded to the alignment boundary. Growth is
    /// exact-fit, not geometric.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.buf.capacity() {
            self.buf
                .grow(self.len + 1, self.len, self.config.alignment())?;
        }
        self.buf.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Append every element of a slice, growing at most once.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ArrayError> {
        if values.is_empty() {
            return Ok(());
        }
        let needed = self
            .len
            .checked_add(values.len())
            .ok_or(ArrayError::CapacityOverflow)?;
        if needed > self.buf.capacity() {
            self.buf.grow(needed, self.len, self.config.alignment())?;
        }
        self.buf.write_slice(self.len, values);
        self.len = needed;
        Ok(())
    }

    /// Concatenate another array onto this one.
    pub fn concat(&mut self, other: &Array<T>) -> Result<(), ArrayError> {
        self.extend_from_slice(other.as_slice())
    }
}

// ============================================================================
// Filtering & Reductions
// ============================================================================

impl<T: Element> Array<T> {
    /// Keep the elements at positions where `mask` is non-zero, preserving
    /// relative order.
    ///
    /// # Panics
    ///
    /// Panics if the mask length differs from the array length.
    pub fn filter(&self, mask: &Array<T>) -> Result<Array<T>, ArrayError> {
        assert_eq!(
            self.len,
            mask.len,
            "length mismatch in filter: {} vs {}",
            self.len,
            mask.len
        );
        let keep = mask
            .as_slice()
            .iter()
            .filter(|m| !T::eq_element(**m, T::zero()))
            .count();
        let mut out = Array::with_capacity_cfg(keep, self.config)?;
        for (v, m) in self.as_slice().iter().zip(mask.as_slice().iter()) {
            if !T::eq_element(*m, T::zero()) {
                out.push(*v)?;
            }
        }
        Ok(out)
    }

    /// Dot product: the reduction of the element-wise product, accumulated
    /// in a widened intermediate and narrowed back to the element type.
    /// For `i16` arrays the result is shifted right by the shared
    /// fractional-bit count.
    ///
    /// A zero-length pair reduces to zero.
    ///
    /// # Panics
    ///
    /// Panics if the operand lengths differ.
    pub fn dot(&self, other: &Array<T>) -> T {
        assert_eq!(
            self.len,
            other.len,
            "length mismatch in dot product: {} vs {}",
            self.len,
            other.len
        );
        if self.is_empty() {
            return T::zero();
        }
        T::dot(self.as_slice(), other.as_slice(), self.frac())
    }

    /// Sum reduction over all elements (widened accumulation).
    pub fn sum(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        T::sum(self.as_slice())
    }
}

// ============================================================================
// Fixed-Point Composition
// ============================================================================

impl Array<i16> {
    /// Build a Q-format array from fixed-point scalars: raw storage is
    /// copied and the shared fractional-bit count is taken from the first
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if the values do not all share one fractional-bit count.
    pub fn from_fixed(values: &[FixedPoint]) -> Result<Array<i16>, ArrayError> {
        let Some(first) = values.first() else {
            return Ok(Array::new());
        };
        let frac = first.frac();
        let config = ArrayConfig::default().with_frac(frac);
        let mut out = Array::with_capacity_cfg(values.len(), config)?;
        for v in values {
            assert_eq!(
                v.frac(),
                frac,
                "mixed fractional bit counts in fixed-point source: {} vs {}",
                v.frac(),
                frac
            );
            out.push(v.bits())?;
        }
        Ok(out)
    }

    /// Read one element back as a fixed-point scalar at the array's
    /// fractional-bit count.
    pub fn fixed_at(&self, index: usize) -> FixedPoint {
        FixedPoint::from_bits(self[index], self.frac())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Element> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Array<T> {
    /// Deep copy. On allocation failure the clone is the empty array, the
    /// same degraded state an operator produces.
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|_| Self::new_with(self.config))
    }
}

impl<T: Element> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

impl<T: Element> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Element> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
