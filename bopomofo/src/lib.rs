//! Bopomofo syllable encoding and the phonetic distance used for fuzzy lookup.
//!
//! A syllable is split into up to four components (initial, medial, final,
//! tone) and packed into a [`SyllableCode`]. A [`Transcription`] is a
//! space-separated run of syllables, and [`distance`] counts differing
//! components across two equal-length transcriptions.
//!
//! # Example
//!
//! ```rust
//! use giztoy_bopomofo::{distance_str, encode_transcription};
//!
//! let t = encode_transcription("ㄘㄜˋ ㄕˋ").unwrap();
//! assert_eq!(t.len(), 2);
//! assert_eq!(t.codes()[0].raw(), 10268);
//!
//! // Tone differs on the first syllable only.
//! assert_eq!(distance_str("ㄘㄜˋ ㄕˋ", "ㄘㄜ ㄕˋ").unwrap(), 1);
//! // Initials differ on both syllables.
//! assert_eq!(distance_str("ㄘㄜˋ ㄕˋ", "ㄔㄜˋ ㄙˋ").unwrap(), 2);
//! ```

mod error;
mod syllable;
mod transcription;

pub use error::BopomofoError;
pub use syllable::{Component, SyllableCode, encode};
pub use transcription::{
    Transcription, distance, distance_str, encode_transcription, syllable_count,
};
