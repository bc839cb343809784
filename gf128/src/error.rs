//! Error types.

/// Result type with the `gf128` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by a [`Multiplier`](crate::Multiplier).
///
/// Doubling and encoding are total and never fail: only the multiplication façade, which forwards
/// to an external collaborator, can return an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The multiplier could not be reached, e.g. the device is not initialized.
    #[error("GF(2^128) multiplier is unavailable")]
    AcceleratorUnavailable,

    /// The multiplier was reached but did not produce a product, e.g. a bus error or busy timeout.
    #[error("GF(2^128) multiplier reported a fault")]
    AcceleratorFault,
}
