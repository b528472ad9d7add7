//! Batch conversion of whole fields of IBM words.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{BatchConfig, OverflowPolicy};
use crate::decode::decode_one;
use crate::error::{BatchError, DecodeError, DecodeResult};

/// Minimum number of words handed to one rayon task.
const MIN_CHUNK_SIZE: usize = 1024;

/// Decode every word, keeping input order and length.
///
/// Each element carries its own result; a failing word does not affect its
/// neighbours.
pub fn decode_many(words: &[u32]) -> Vec<DecodeResult<f64>> {
    words.iter().map(|&word| decode_one(word)).collect()
}

/// Parallel version of [`decode_many`] with identical output.
pub fn par_decode_many(words: &[u32]) -> Vec<DecodeResult<f64>> {
    let chunk_size = (words.len() / rayon::current_num_threads()).max(MIN_CHUNK_SIZE);

    words
        .par_chunks(chunk_size)
        .flat_map_iter(|chunk| chunk.iter().map(|&word| decode_one(word)))
        .collect()
}

/// A decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedField {
    /// Decoded values, one per input word.
    pub values: Vec<f64>,
    /// Indices of words replaced by the fill value, in ascending order.
    pub overflows: Vec<usize>,
}

impl DecodedField {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every word decoded without substitution.
    pub fn is_complete(&self) -> bool {
        self.overflows.is_empty()
    }
}

/// Decode a field, applying the configured overflow policy.
///
/// Under [`OverflowPolicy::Abort`] the first overflow in input order fails
/// the whole field. Under [`OverflowPolicy::Fill`] overflowing words become
/// `config.fill_value` and their indices are reported.
pub fn decode_field(words: &[u32], config: &BatchConfig) -> Result<DecodedField, BatchError> {
    config.validate()?;

    let parallel = config.use_parallel(words.len());
    let results = if parallel {
        par_decode_many(words)
    } else {
        decode_many(words)
    };

    let mut values = Vec::with_capacity(results.len());
    let mut overflows = Vec::new();

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => values.push(value),
            Err(source) => match config.policy {
                OverflowPolicy::Abort => {
                    return Err(BatchError::Overflow { index, source });
                }
                OverflowPolicy::Fill => {
                    log_overflow(index, &source, config.fill_value);
                    values.push(config.fill_value);
                    overflows.push(index);
                }
            },
        }
    }

    debug!(
        words = words.len(),
        overflows = overflows.len(),
        parallel,
        policy = %config.policy,
        "Decoded IBM field"
    );

    Ok(DecodedField { values, overflows })
}

fn log_overflow(index: usize, error: &DecodeError, fill_value: f64) {
    warn!(
        index,
        word = %format!("{:#010x}", error.word()),
        fill_value,
        "IBM word overflows binary32, substituting fill value"
    );
}
