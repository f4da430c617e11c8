use serde::{Deserialize, Serialize};

use crate::error::PhoneTreeError;

const DEFAULT_BUCKET_SIZE: usize = 1;
const DEFAULT_MAX_LENGTH: usize = 11;

/// Upper bound on the length table size.
pub const MAX_LENGTH_LIMIT: usize = 255;

/// Controls index shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transcriptions a fixed-query-tree leaf holds before it is split.
    /// Ignored by the BK-tree. Default: 1.
    pub bucket_size: usize,

    /// Longest transcription, in syllables, the index accepts.
    /// Default: 11.
    pub max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Config {
    /// Replaces zero fields with their defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.bucket_size == 0 {
            self.bucket_size = DEFAULT_BUCKET_SIZE;
        }
        if self.max_length == 0 {
            self.max_length = DEFAULT_MAX_LENGTH;
        }
        self
    }

    pub fn validate(&self) -> Result<(), PhoneTreeError> {
        if self.bucket_size == 0 {
            return Err(PhoneTreeError::InvalidConfig(
                "bucket_size must be positive".into(),
            ));
        }
        if self.max_length == 0 || self.max_length > MAX_LENGTH_LIMIT {
            return Err(PhoneTreeError::InvalidConfig(format!(
                "max_length must be in 1..={MAX_LENGTH_LIMIT}, got {}",
                self.max_length
            )));
        }
        Ok(())
    }
}
