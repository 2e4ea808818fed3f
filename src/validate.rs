#![forbid(unsafe_code)]
// Length validation for XOR calls.
// - Runs before any allocation; a rejected call has no side effects.
// - Check order: equal lengths, minimum, word multiple, maximum.

use crate::config::XorConfig;
use crate::error::XorError;

/// Checks `a` and `b` against `config` and returns the common length.
pub fn check_inputs(config: &XorConfig, a: &[u8], b: &[u8]) -> Result<usize, XorError> {
    let len = a.len();
    if len != b.len() {
        return Err(reject(XorError::LengthMismatch { left: len, right: b.len() }));
    }
    if len < config.min_len {
        return Err(reject(XorError::TooShort { len, min: config.min_len }));
    }
    if config.require_word_multiple && len % config.word_bytes() != 0 {
        return Err(reject(XorError::Misaligned { len, word: config.word_bytes() }));
    }
    if let Some(max) = config.max_len {
        if len > max {
            return Err(reject(XorError::TooLong { len, max }));
        }
    }
    Ok(len)
}

/// Same as [`check_inputs`], plus `out` must match the input length.
pub fn check_output(
    config: &XorConfig,
    a: &[u8],
    b: &[u8],
    out: &[u8],
) -> Result<usize, XorError> {
    let len = check_inputs(config, a, b)?;
    if out.len() != len {
        return Err(reject(XorError::OutputLength { expected: len, actual: out.len() }));
    }
    Ok(len)
}

#[inline]
fn reject(err: XorError) -> XorError {
    log::debug!("xor rejected: {:?}", err);
    err
}
