use thiserror::Error;

/// Errors returned by bopomofo encoding and distance operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BopomofoError {
    #[error("bopomofo: invalid syllable {syllable:?}")]
    InvalidSyllable { syllable: String },

    #[error("bopomofo: length mismatch: {left} syllables vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
