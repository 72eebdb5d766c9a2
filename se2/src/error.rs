//! Error types for se2

use thiserror::Error;

/// Construction-time violations of the dual rotation invariants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The real and imaginary parts carry different numbers of terms.
    #[error("dual rotation components differ in order: real has {real} terms, imag has {imag}")]
    MismatchedOrder {
        /// Terms in the real part.
        real: usize,
        /// Terms in the imaginary part.
        imag: usize,
    },

    /// More terms than a dual rotation supports.
    #[error("dual rotation with {size} terms exceeds the maximum of {max}")]
    OrderTooHigh {
        /// Terms in each component.
        size: usize,
        /// Largest supported number of terms.
        max: usize,
    },
}

/// Result alias for fallible se2 constructors.
pub type Result<T> = std::result::Result<T, Error>;
