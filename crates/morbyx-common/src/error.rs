use thiserror::Error;

#[derive(Debug, Error)]
pub enum MorbyxError {
    /// A profile or parameter violates a documented invariant. The message
    /// names the offending entity and field so callers can surface it verbatim.
    #[error("validation error: {0}")]
    Validation(String),

    /// Arithmetic fault while stepping a trajectory (non-finite intermediate,
    /// degenerate decay parameter). Distinct from bad input.
    #[error("computation error: {0}")]
    Computation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MorbyxError>;
