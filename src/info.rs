//! Capability descriptor.
//!
//! Static description of the word size and alignment the kernel is built
//! around. Everything here is a compile-time constant.

/// Native word size used by the bulk XOR loop, in bits.
pub const WORD_SIZE: u32 = u64::BITS;

/// Minimum input length accepted by [`xor64`](crate::xor64), in bytes.
pub const MIN_SIZE: usize = core::mem::size_of::<u64>();

/// Length multiple required by [`xor64`](crate::xor64), in bytes.
pub const ALIGNMENT: usize = core::mem::size_of::<u64>();

pub const VERSION: &str = "1.0";

pub const DESCRIPTION: &str = "Fast 64-bit XOR operations";

/// Implementation details reported by [`get_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    /// Bit size of the native integer operations.
    pub word_size: u32,
    /// Byte multiple required by `xor64`.
    pub alignment: usize,
    pub version: &'static str,
    pub description: &'static str,
}

pub const INFO: Descriptor = Descriptor {
    word_size: WORD_SIZE,
    alignment: ALIGNMENT,
    version: VERSION,
    description: DESCRIPTION,
};

/// Returns the static capability descriptor. Never fails.
#[inline]
pub const fn get_info() -> Descriptor {
    INFO
}

#[cfg(feature = "serde")]
impl Descriptor {
    /// Renders the descriptor as a JSON object with the field names above.
    pub fn to_json(&self) -> Result<alloc::string::String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
