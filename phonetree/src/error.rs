use giztoy_bopomofo::BopomofoError;
use thiserror::Error;

/// Errors returned by phonetree indexes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneTreeError {
    #[error(transparent)]
    Bopomofo(#[from] BopomofoError),

    #[error("phonetree: transcription has {len} syllables, index holds at most {max}")]
    TooLong { len: usize, max: usize },

    #[error("phonetree: invalid config: {0}")]
    InvalidConfig(String),
}
