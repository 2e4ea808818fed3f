//! Fast 64-bit XOR operations over byte buffers.
//!
//! - [`xor64`]: equal-length inputs whose length is a positive multiple of 8.
//! - [`xor`]: equal-length inputs of any length, zero included.
//! - [`get_info`]: static description of word size and alignment.
//!
//! Both operations XOR whole 64-bit words first and finish any trailing bytes
//! one at a time. Inputs are never modified and every call allocates its own
//! output, so calls on different threads never interact.
//!
//! Length checks always run before the word loop; the unchecked kernel is
//! not reachable from outside the crate:
//!
//! ```compile_fail
//! fastxor::kernel::xor_slices(&[1u8; 4], &[2u8; 13], &mut [0u8; 13]);
//! ```
//!
//! ```
//! let err = fastxor::xor(&[1u8; 4], &[2u8; 13]).unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```
//!
//! With the default `ffi` feature the same operations are exported over a C
//! ABI (see [`ffi`]).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(all(not(feature = "std"), not(test)))]
use core::panic::PanicInfo;

#[cfg(all(not(feature = "std"), not(test)))]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! { loop {} }

pub mod config;
pub mod error;
pub mod info;
mod kernel;
pub mod ops;
mod validate;
#[cfg(feature = "ffi")]
pub mod ffi;

pub use config::XorConfig;
pub use error::{ErrorKind, XorError};
pub use info::{get_info, Descriptor, INFO, MIN_SIZE, WORD_SIZE};
pub use ops::{xor, xor64, xor64_into, xor_into, xor_into_with, xor_with};
