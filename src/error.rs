/// Represents either success(T) or an failure ([`OracleError`])
pub type Result<T> = std::result::Result<T, OracleError>;

/// Represents an error which has occured while driving a cipher or AEAD primitive.
///
/// Every failure is scoped to the single call which produced it.
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum OracleError {
    /// the algorithm identifier is not part of the supported set
    #[error("Unknown algorithm identifier {0:?}")]
    NotFound(String),

    /// a supplied IV does not match the length the cipher mode requires
    #[error("IV of {actual} bytes given, cipher requires {expected} bytes")]
    IvLengthMismatch { expected: usize, actual: usize },

    /// the primitive rejected its configuration, e.g. an unsupported key or tag length
    #[error("Failed to set up the cipher context")]
    SetupFailure,

    /// the primitive failed to transform the input
    #[error("Failed to process the input")]
    UpdateFailure,

    /// the primitive failed to finish the operation or produced an output of unexpected length
    #[error("Failed to finalize the cipher operation")]
    FinalizeFailure,

    /// the AEAD seal operation failed
    #[error("Failed to seal")]
    SealFailure,

    /// the AEAD open operation failed, either the tag did not verify or the plaintext length mismatched
    #[error("Failed to authenticate")]
    AuthenticationFailure,
}
