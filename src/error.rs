use thiserror::Error;

/// Errors raised by flat pair sequences.
///
/// Missing keys, missing values and out-of-range pair indices are not errors;
/// those are reported as `None` or `false` by the operation itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The backing sequence has an odd number of elements, so its last key has
    /// no value.
    #[error("flat pair sequence length must be even, got {len}")]
    Structural {
        /// Length of the offending sequence.
        len: usize,
    },
    /// A conversion was handed something other than a key-value map.
    #[error("argument must be a key-value map")]
    TypeMismatch,
}

/// A `Result` whose error type defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
