//! Error types for IBM float conversion.

use thiserror::Error;

/// Result type for single-word decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors produced while converting one IBM word.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The rebased exponent reached the reserved all-ones IEEE value.
    #[error("numerical overflow decoding IBM word {word:#010x}: IEEE exponent {exponent} exceeds 254")]
    Overflow { word: u32, exponent: i32 },
}

impl DecodeError {
    /// The raw IBM word that failed to decode.
    pub fn word(&self) -> u32 {
        match self {
            Self::Overflow { word, .. } => *word,
        }
    }
}

/// Errors produced by the field-level batch driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    /// A word overflowed while the abort policy was in effect.
    #[error("overflow at index {index}: {source}")]
    Overflow {
        index: usize,
        #[source]
        source: DecodeError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl BatchError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_includes_word() {
        let err = DecodeError::Overflow {
            word: 0x7FFF_FFFF,
            exponent: 378,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x7fffffff"), "unexpected message: {}", msg);
        assert!(msg.contains("378"));
        assert_eq!(err.word(), 0x7FFF_FFFF);
    }

    #[test]
    fn test_batch_error_exposes_source() {
        use std::error::Error as _;

        let err = BatchError::Overflow {
            index: 7,
            source: DecodeError::Overflow {
                word: 0x62FF_FFFF,
                exponent: 262,
            },
        };
        assert!(err.to_string().starts_with("overflow at index 7"));
        assert!(err.source().is_some());
    }
}
