//! C ABI.
//!
//! Caller-owned buffers in, integer status out. The library never allocates
//! memory that crosses this boundary, so there is nothing for the caller to
//! free. The header is generated into `include/fastxor.h` by the build script.
//!
//! Status codes:
//! - `FASTXOR_OK` (0): success, `out` holds the result.
//! - `-1`: invalid argument (length mismatch, too short, misaligned, wrong output length).
//! - `-2`: resource exhaustion.
//! - `-3`: internal error.
//! - `FASTXOR_NULL_POINTER` (-4): a null pointer was passed with a non-zero length.
//!
//! In-place use is rejected: if `out` overlaps `a` or `b` the call returns
//! `-1` and writes nothing. Use a separate output buffer.

use core::ffi::c_char;

use crate::error::{ErrorKind, XorError};
use crate::info::{ALIGNMENT, MIN_SIZE, WORD_SIZE};
use crate::ops;

pub const FASTXOR_OK: i32 = 0;
pub const FASTXOR_NULL_POINTER: i32 = -4;

const VERSION_C: &[u8] = b"1.0\0";

/// Borrows `len` bytes at `ptr`, allowing a null pointer only for `len == 0`.
///
/// # Safety
/// A non-null `ptr` must be valid for reads of `len` bytes for `'a`.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(Default::default());
    }
    if ptr.is_null() {
        return None;
    }
    Some(core::slice::from_raw_parts(ptr, len))
}

/// # Safety
/// A non-null `ptr` must be valid for writes of `len` bytes for `'a`, and no
/// other live reference may cover those bytes.
unsafe fn output<'a>(ptr: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if len == 0 {
        return Some(Default::default());
    }
    if ptr.is_null() {
        return None;
    }
    Some(core::slice::from_raw_parts_mut(ptr, len))
}

/// True when the byte ranges `[p, p + p_len)` and `[q, q + q_len)` share a byte.
fn overlaps(p: *const u8, p_len: usize, q: *const u8, q_len: usize) -> bool {
    if p_len == 0 || q_len == 0 {
        return false;
    }
    let (p, q) = (p as usize, q as usize);
    p < q.saturating_add(q_len) && q < p.saturating_add(p_len)
}

/// Shared entry for both exported XOR calls.
///
/// # Safety
/// See [`fastxor_xor64`].
unsafe fn call(
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
    out: *mut u8,
    out_len: usize,
    op: fn(&[u8], &[u8], &mut [u8]) -> Result<(), XorError>,
) -> i32 {
    if (a.is_null() && a_len != 0) || (b.is_null() && b_len != 0) || (out.is_null() && out_len != 0)
    {
        return FASTXOR_NULL_POINTER;
    }
    // Checked on raw addresses, before any `&`/`&mut` slice exists.
    if overlaps(out, out_len, a, a_len) || overlaps(out, out_len, b, b_len) {
        log::debug!("xor rejected: output overlaps an input");
        return ErrorKind::InvalidArgument.status();
    }
    let (Some(a), Some(b), Some(out)) = (input(a, a_len), input(b, b_len), output(out, out_len))
    else {
        return FASTXOR_NULL_POINTER;
    };
    status(op(a, b, out))
}

fn status(result: Result<(), XorError>) -> i32 {
    match result {
        Ok(()) => FASTXOR_OK,
        Err(err) => err.kind().status(),
    }
}

/// Strict XOR: `out[i] = a[i] ^ b[i]`, lengths equal, at least 8, multiple of 8.
///
/// Returns `-1` without writing if `out` overlaps `a` or `b`.
///
/// # Safety
/// `a`/`b` must be readable for `a_len`/`b_len` bytes and `out` writable for
/// `out_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn fastxor_xor64(
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
    out: *mut u8,
    out_len: usize,
) -> i32 {
    call(a, a_len, b, b_len, out, out_len, ops::xor64_into)
}

/// Flexible XOR over equal lengths, zero included.
///
/// Returns `-1` without writing if `out` overlaps `a` or `b`.
///
/// # Safety
/// Same contract as [`fastxor_xor64`].
#[no_mangle]
pub unsafe extern "C" fn fastxor_xor(
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
    out: *mut u8,
    out_len: usize,
) -> i32 {
    call(a, a_len, b, b_len, out, out_len, ops::xor_into)
}

#[no_mangle]
pub extern "C" fn fastxor_word_size() -> u32 {
    WORD_SIZE
}

#[no_mangle]
pub extern "C" fn fastxor_min_size() -> usize {
    MIN_SIZE
}

#[no_mangle]
pub extern "C" fn fastxor_alignment() -> usize {
    ALIGNMENT
}

/// NUL-terminated version string with static lifetime.
#[no_mangle]
pub extern "C" fn fastxor_version() -> *const c_char {
    VERSION_C.as_ptr() as *const c_char
}
