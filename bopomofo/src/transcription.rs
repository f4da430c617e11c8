use std::fmt;
use std::str::FromStr;

use crate::error::BopomofoError;
use crate::syllable::{SyllableCode, encode};

/// An encoded, space-separated sequence of syllables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transcription(Vec<SyllableCode>);

impl Transcription {
    pub fn new(codes: Vec<SyllableCode>) -> Self {
        Self(codes)
    }

    /// Syllable count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> &[SyllableCode] {
        &self.0
    }
}

impl From<Vec<SyllableCode>> for Transcription {
    fn from(codes: Vec<SyllableCode>) -> Self {
        Self(codes)
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

impl FromStr for Transcription {
    type Err = BopomofoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_transcription(s)
    }
}

/// Splits `text` on single spaces and encodes every syllable.
///
/// Empty tokens (leading, trailing or doubled spaces) are invalid syllables.
pub fn encode_transcription(text: &str) -> Result<Transcription, BopomofoError> {
    text.split(' ')
        .map(encode)
        .collect::<Result<Vec<_>, _>>()
        .map(Transcription)
}

/// Returns the syllable count of `text` without encoding it.
pub fn syllable_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Component-wise Hamming distance between two transcriptions.
///
/// Every aligned syllable pair contributes one point per differing
/// component, so the result is at most `4 * len`.
///
/// # Errors
/// Returns [`BopomofoError::LengthMismatch`] when the syllable counts differ.
pub fn distance(a: &Transcription, b: &Transcription) -> Result<u32, BopomofoError> {
    if a.len() != b.len() {
        return Err(BopomofoError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.0.iter().zip(&b.0).map(|(x, y)| x.distance(*y)).sum())
}

/// Encodes both texts and returns their [`distance`].
pub fn distance_str(a: &str, b: &str) -> Result<u32, BopomofoError> {
    distance(&encode_transcription(a)?, &encode_transcription(b)?)
}
