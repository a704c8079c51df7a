//! Error types for base conversion.

use thiserror::Error;

/// Errors that can occur while converting a value between bases.
///
/// Both kinds are recovered by the caller; neither terminates the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input text could not be parsed in the source base.
    ///
    /// Covers invalid digits for the radix, empty segments, values outside
    /// the signed 64-bit range, out-of-range byte segments, and packed
    /// values that no longer fit in 64 bits.
    #[error("Invalid input")]
    InvalidInput,

    /// Destination base is not one the converter can format.
    #[error("Invalid output base")]
    InvalidOutputBase,
}
