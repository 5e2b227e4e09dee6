use thiserror::Error;

/// Engine-level errors.
///
/// Expected absent-data states (period not yet drawn, unknown game code,
/// short payloads) are NOT errors; they degrade to zero results or typed
/// statuses. Only boundary failures surface here.
#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LottoError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            LottoError::Deserialization(err.to_string())
        } else {
            LottoError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
