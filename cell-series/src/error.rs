use thiserror::Error;

/// Convenient result alias for this crate
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Everything that can be wrong with the series handed to the charts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A series without any samples
    #[error("series `{name}` is empty")]
    Empty {
        /// Name of the offending series
        name: &'static str,
    },

    /// Two series which must be aligned differ in length
    #[error("series `{name}` has {actual} samples, expected {expected}")]
    LengthMismatch {
        /// Name of the offending series
        name: &'static str,
        /// Length of the reference series
        expected: usize,
        /// Length of the offending series
        actual: usize,
    },

    /// More trailing samples should be dropped than there are
    #[error("cannot drop {trailing} trailing samples from a series of {len}")]
    TrailingInvalid {
        /// Requested number of trailing samples to drop
        trailing: usize,
        /// Length of the series
        len: usize,
    },

    /// The division window does not fit the series
    #[error("division window {start}..{end} does not fit a series of {len} samples")]
    WindowOutOfBounds {
        /// First held index
        start: usize,
        /// One past the last held index
        end: usize,
        /// Length of the series
        len: usize,
    },

    /// A multi-cycle axis needs at least one cycle
    #[error("number of cycles must be positive")]
    ZeroCycles,

    /// Interpolation knots must have finite times
    #[error("interpolation knot time at index {index} is not finite")]
    NonFiniteKnot {
        /// Index of the first non-finite knot time
        index: usize,
    },

    /// Interpolation knots must have strictly increasing times
    #[error("interpolation knots are not strictly increasing at index {index}")]
    KnotsNotIncreasing {
        /// Index of the first knot not greater than its predecessor
        index: usize,
    },
}
