//! Validation policy for XOR calls.
//!
//! An [`XorConfig`] is the set of length rules a call is checked against.
//! `xor64` uses [`XorConfig::STRICT`], `xor` uses [`XorConfig::FLEXIBLE`];
//! embedders can build their own and go through [`xor_with`](crate::xor_with).

use crate::info::{ALIGNMENT, MIN_SIZE};

/// Length rules applied before any XOR work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorConfig {
    /// Smallest accepted input length in bytes.
    pub min_len: usize,

    /// Whether the input length must be a multiple of the word size.
    pub require_word_multiple: bool,

    /// Largest accepted input length in bytes.
    /// If None, the only limit is what the allocator will hand out.
    pub max_len: Option<usize>,
}

impl XorConfig {
    /// Word-aligned inputs of at least one word.
    pub const STRICT: XorConfig = XorConfig {
        min_len: MIN_SIZE,
        require_word_multiple: true,
        max_len: None,
    };

    /// Any length, including zero.
    pub const FLEXIBLE: XorConfig = XorConfig {
        min_len: 0,
        require_word_multiple: false,
        max_len: None,
    };

    /// Caps the accepted input length.
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Word size in bytes that `require_word_multiple` refers to.
    pub const fn word_bytes(&self) -> usize {
        ALIGNMENT
    }
}

impl Default for XorConfig {
    fn default() -> Self {
        Self::FLEXIBLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(XorConfig::STRICT.min_len, 8);
        assert!(XorConfig::STRICT.require_word_multiple);
        assert_eq!(XorConfig::FLEXIBLE.min_len, 0);
        assert!(!XorConfig::FLEXIBLE.require_word_multiple);
        assert_eq!(XorConfig::default(), XorConfig::FLEXIBLE);
    }

    #[test]
    fn test_with_max_len() {
        let cfg = XorConfig::STRICT.with_max_len(4096);
        assert_eq!(cfg.max_len, Some(4096));
        assert_eq!(cfg.min_len, XorConfig::STRICT.min_len);
        assert_eq!(cfg.word_bytes(), 8);
    }
}
