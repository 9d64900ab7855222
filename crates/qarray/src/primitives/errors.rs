//! Error types for array operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during array
//! construction and manipulation: allocation failures, checked-access
//! violations, and kernel parameter errors propagated from the bulk
//! kernel layer.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (requested bytes,
//!   offending index) rather than free-form messages.
//! * **No-std**: No heap use; every variant is `Copy`-sized data.
//! * **Recoverable vs. fatal**: Only genuinely recoverable conditions are
//!   errors. Precondition violations (mismatched operand lengths,
//!   mismatched fractional-bit counts) are asserted and panic instead.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::kernels::KernelError;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator returned null for the requested byte size.
    AllocationFailed {
        /// Number of bytes requested from the allocator.
        bytes: usize,
    },

    /// The requested capacity overflowed the addressable byte range.
    CapacityOverflow,

    /// A checked element write was out of range.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The array length at the time of the access.
        len: usize,
    },

    /// The operation requires non-empty operands (convolution/correlation).
    EmptyInput,

    /// A bulk kernel rejected its parameters.
    Kernel(KernelError),
}

impl From<KernelError> for ArrayError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailed { bytes } => {
                write!(f, "Allocation of {bytes} bytes failed")
            }
            Self::CapacityOverflow => write!(f, "Requested capacity overflows usize"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for length {len}")
            }
            Self::EmptyInput => write!(f, "Operation requires non-empty operands"),
            Self::Kernel(e) => write!(f, "Kernel error: {e}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
