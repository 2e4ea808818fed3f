#![forbid(unsafe_code)]
// Word-at-a-time XOR kernel.
// - Bulk region: 32-byte blocks (four u64 words), then single words.
// - Remainder region: per-byte XOR for the last 0..=7 bytes.
// - Words are assembled with `from_ne_bytes`/`to_ne_bytes` on copied chunks,
//   so there is no alignment requirement on the buffers themselves.
// - Length checks live in `validate`; every function here assumes the three
//   slices have the same length.

use crate::info::ALIGNMENT as WORD_BYTES;

const BLOCK_BYTES: usize = WORD_BYTES * 4;

#[inline(always)]
fn load(bytes: &[u8]) -> u64 {
    let mut w = [0u8; WORD_BYTES];
    w.copy_from_slice(bytes);
    u64::from_ne_bytes(w)
}

#[inline(always)]
fn store(out: &mut [u8], word: u64) {
    out.copy_from_slice(&word.to_ne_bytes());
}

/// Splits `len` into `(bulk, remainder)` byte counts.
#[inline(always)]
pub const fn split_len(len: usize) -> (usize, usize) {
    let bulk = len - len % WORD_BYTES;
    (bulk, len - bulk)
}

/// XOR over a region whose length is a multiple of the word size.
#[inline(always)]
pub fn xor_words(a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert_eq!(out.len() % WORD_BYTES, 0);

    let mut a_blocks = a.chunks_exact(BLOCK_BYTES);
    let mut b_blocks = b.chunks_exact(BLOCK_BYTES);
    let mut out_blocks = out.chunks_exact_mut(BLOCK_BYTES);

    for ((o, x), y) in out_blocks.by_ref().zip(a_blocks.by_ref()).zip(b_blocks.by_ref()) {
        let w0 = load(&x[0..8]) ^ load(&y[0..8]);
        let w1 = load(&x[8..16]) ^ load(&y[8..16]);
        let w2 = load(&x[16..24]) ^ load(&y[16..24]);
        let w3 = load(&x[24..32]) ^ load(&y[24..32]);
        store(&mut o[0..8], w0);
        store(&mut o[8..16], w1);
        store(&mut o[16..24], w2);
        store(&mut o[24..32], w3);
    }

    let a_rest = a_blocks.remainder();
    let b_rest = b_blocks.remainder();
    let out_rest = out_blocks.into_remainder();

    for ((o, x), y) in out_rest
        .chunks_exact_mut(WORD_BYTES)
        .zip(a_rest.chunks_exact(WORD_BYTES))
        .zip(b_rest.chunks_exact(WORD_BYTES))
    {
        store(o, load(x) ^ load(y));
    }
}

/// Per-byte XOR for the remainder region.
#[inline(always)]
pub fn xor_tail(a: &[u8], b: &[u8], out: &mut [u8]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x ^ y;
    }
}

/// XOR of any length: bulk words first, then the byte tail.
#[inline(always)]
pub fn xor_slices(a: &[u8], b: &[u8], out: &mut [u8]) {
    let (bulk, _) = split_len(out.len());
    let (a_head, a_tail) = a.split_at(bulk);
    let (b_head, b_tail) = b.split_at(bulk);
    let (out_head, out_tail) = out.split_at_mut(bulk);
    xor_words(a_head, b_head, out_head);
    xor_tail(a_tail, b_tail, out_tail);
}
