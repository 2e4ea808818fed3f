#![forbid(unsafe_code)]
// Public XOR operations: validate, allocate, bulk words, byte tail, return.
// - Inputs are only read; the result is always a fresh buffer or the caller's `out`.
// - Allocation goes through `try_reserve_exact`, so exhaustion is an error value.
// - No shared state between calls.

use alloc::vec::Vec;

use crate::config::XorConfig;
use crate::error::XorError;
use crate::kernel::{split_len, xor_slices, xor_words};
use crate::validate::{check_inputs, check_output};

/// XOR of two equal-length buffers whose length is a positive multiple of 8.
///
/// # Errors
/// * `LengthMismatch` if `a.len() != b.len()`.
/// * `TooShort` if shorter than [`MIN_SIZE`](crate::MIN_SIZE).
/// * `Misaligned` if the length is not a multiple of 8.
/// * `AllocationFailed` if the result cannot be allocated.
///
/// ```
/// let out = fastxor::xor64(b"12345678", b"12345678").unwrap();
/// assert_eq!(out, [0u8; 8]);
/// ```
#[inline]
pub fn xor64(a: &[u8], b: &[u8]) -> Result<Vec<u8>, XorError> {
    xor_with(&XorConfig::STRICT, a, b)
}

/// XOR of two equal-length buffers of any length, including zero.
///
/// Whole words are XORed 8 bytes at a time and the last `len % 8` bytes one
/// at a time; the output is the same as a plain per-byte XOR.
///
/// ```
/// let out = fastxor::xor(b"Hello, World!", b"Secret Key123").unwrap();
/// assert_eq!(out.len(), 13);
/// assert_eq!(out[0], b'H' ^ b'S');
/// ```
#[inline]
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, XorError> {
    xor_with(&XorConfig::FLEXIBLE, a, b)
}

/// [`xor64`] writing into a caller-provided buffer of the same length.
#[inline]
pub fn xor64_into(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<(), XorError> {
    xor_into_with(&XorConfig::STRICT, a, b, out)
}

/// [`xor`] writing into a caller-provided buffer of the same length.
#[inline]
pub fn xor_into(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<(), XorError> {
    xor_into_with(&XorConfig::FLEXIBLE, a, b, out)
}

/// XOR under an explicit validation policy.
pub fn xor_with(config: &XorConfig, a: &[u8], b: &[u8]) -> Result<Vec<u8>, XorError> {
    let len = check_inputs(config, a, b)?;
    let mut out = allocate(len)?;
    run(config, a, b, &mut out);
    Ok(out)
}

/// [`xor_with`] writing into `out`. `out` is left untouched on error.
pub fn xor_into_with(
    config: &XorConfig,
    a: &[u8],
    b: &[u8],
    out: &mut [u8],
) -> Result<(), XorError> {
    check_output(config, a, b, out)?;
    run(config, a, b, out);
    Ok(())
}

fn run(config: &XorConfig, a: &[u8], b: &[u8], out: &mut [u8]) {
    let (bulk, tail) = split_len(out.len());
    log::trace!("xor: {} words, {} tail bytes", bulk / config.word_bytes(), tail);
    if tail == 0 {
        xor_words(a, b, out);
    } else {
        xor_slices(a, b, out);
    }
}

fn allocate(len: usize) -> Result<Vec<u8>, XorError> {
    let mut out = Vec::new();
    if len == 0 {
        return Ok(out);
    }
    out.try_reserve_exact(len).map_err(|_| {
        log::warn!("xor: failed to allocate {} bytes for result", len);
        XorError::AllocationFailed { len }
    })?;
    out.resize(len, 0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::{vec, vec::Vec};

    fn naive(a: &[u8], b: &[u8]) -> Vec<u8> {
        a.iter().zip(b).map(|(x, y)| x ^ y).collect()
    }

    #[test]
    fn test_xor64_self_is_zero() {
        let out = xor64(b"12345678", b"12345678").unwrap();
        assert_eq!(out, vec![0u8; 8]);
    }

    #[test]
    fn test_xor_hello_world() {
        let a = b"Hello, World!";
        let b = b"Secret Key123";
        let out = xor(a, b).unwrap();
        assert_eq!(out.len(), 13);
        assert_eq!(out, naive(a, b));
    }

    #[test]
    fn test_xor_empty() {
        let out = xor(&[], &[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn test_xor64_rejections() {
        assert_eq!(
            xor64(b"1234567", b"1234567"),
            Err(XorError::TooShort { len: 7, min: 8 })
        );
        assert_eq!(
            xor64(b"123456789", b"123456789"),
            Err(XorError::Misaligned { len: 9, word: 8 })
        );
        assert_eq!(
            xor64(b"12345678", b"1234567890"),
            Err(XorError::LengthMismatch { left: 8, right: 10 })
        );
        assert_eq!(
            xor64(&[0u8; 8], &[0u8; 16]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_xor_rejects_mismatch_only() {
        assert_eq!(
            xor(&[0u8; 8], &[0u8; 16]),
            Err(XorError::LengthMismatch { left: 8, right: 16 })
        );
        assert!(xor(b"1234567", b"7654321").is_ok());
    }

    #[test]
    fn test_variants_agree_on_aligned_lengths() {
        let a = b"12345678".repeat(16);
        let b = b"abcdefgh".repeat(16);
        let strict = xor64(&a, &b).unwrap();
        assert_eq!(strict.len(), 128);
        assert_eq!(strict, xor(&a, &b).unwrap());
        assert_eq!(strict, naive(&a, &b));
    }

    #[test]
    fn test_into_variants() {
        let a = b"Hello World!!!!!";
        let b = b"Secret Key 12345";
        let mut out = [0u8; 16];
        xor64_into(a, b, &mut out).unwrap();
        assert_eq!(out.to_vec(), xor64(a, b).unwrap());

        let mut out = [0u8; 13];
        xor_into(b"Hello, World!", b"Secret Key123", &mut out).unwrap();
        assert_eq!(out.to_vec(), xor(b"Hello, World!", b"Secret Key123").unwrap());
    }

    #[test]
    fn test_into_leaves_output_on_error() {
        let mut out = [0xEEu8; 9];
        assert_eq!(
            xor64_into(&[1u8; 9], &[2u8; 9], &mut out),
            Err(XorError::Misaligned { len: 9, word: 8 })
        );
        assert_eq!(out, [0xEEu8; 9]);

        let mut out = [0xEEu8; 4];
        assert_eq!(
            xor_into(&[1u8; 5], &[2u8; 5], &mut out),
            Err(XorError::OutputLength { expected: 5, actual: 4 })
        );
        assert_eq!(out, [0xEEu8; 4]);
    }

    #[test]
    fn test_xor_with_max_len() {
        let cfg = XorConfig::FLEXIBLE.with_max_len(4);
        assert_eq!(xor_with(&cfg, &[1u8; 4], &[3u8; 4]).unwrap(), vec![2u8; 4]);
        assert_eq!(
            xor_with(&cfg, &[1u8; 5], &[3u8; 5]),
            Err(XorError::TooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_allocation_failure_is_resource_exhaustion() {
        // Capacity overflow: the reservation fails without touching the allocator.
        let err = allocate(usize::MAX).unwrap_err();
        assert_eq!(err, XorError::AllocationFailed { len: usize::MAX });
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    }

    #[test]
    fn test_allocate_exact_length() {
        let out = allocate(13).unwrap();
        assert_eq!(out, vec![0u8; 13]);
        assert!(allocate(0).unwrap().is_empty());
    }

    #[test]
    fn test_inputs_unchanged() {
        let a = b"0123456789abcdef".to_vec();
        let b = b"fedcba9876543210".to_vec();
        let (a0, b0) = (a.clone(), b.clone());
        let _ = xor(&a, &b).unwrap();
        let _ = xor64(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }
}
