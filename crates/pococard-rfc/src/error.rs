use thiserror::Error;

/// Errors raised while building contact records from external input.
///
/// Serialization itself never fails; see [`crate::rfc::vcard::build`].
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] pococard_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
