use thiserror::Error;

/// Error raised at reservoir construction time.
///
/// This is the only failure condition in the library: `add` and `sample`
/// are total over valid inputs and never fail or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested sample size was zero.
    #[error("sample capacity must be at least 1")]
    ZeroCapacity,
}
