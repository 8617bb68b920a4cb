//! Big Int \
//! This crate provides [`BigInt`]: immutable sign-magnitude integers built on
//! 16-bit words, up to 524,240 bits of magnitude. Beyond that range results
//! are overflows: `checked_*` methods return [`Error::Overflow`], operators
//! produce an overflow value.
//!
//! Values convert from and to decimal and hexadecimal strings and a packed
//! word format ([`Header`] plus magnitude). With the `ffi` feature the crate
//! also exports a C interface over opaque handles.

#[macro_use]
mod big_int;
mod add_sub;
mod big_num_cache;
mod big_num_constants;
mod div;
mod error;
mod mul;
mod packed;
mod radix;
mod shift;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use big_int::BigInt;
pub use big_num_constants::{MAX_BITS, MAX_MAG_WORDS, MAX_TOTAL_WORDS};
pub use error::{Error, Result};
pub use packed::Header;
