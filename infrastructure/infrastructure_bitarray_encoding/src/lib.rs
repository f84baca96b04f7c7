//! Infrastructure Layer: Bitarray Encoding
//!
//! Provides the serialized forms of a bitarray: hexadecimal text and arbitrary
//! precision integers.
//!
//! ## Codecs
//!
//! - **[`hex_codec`](hex_codec/index.html)**: [`ba2hex`] / [`hex2ba`] for
//!   big-endian bitarrays whose length is a multiple of 4.
//!
//! - **[`int_codec`](int_codec/index.html)**: [`ba2int`] / [`int2ba`] between
//!   bitarrays of either endianness and malachite `Integer` values, with
//!   optional fixed width and overflow detection.
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for the container and on the Use
//! Cases layer for `rindex` and `strip`, which the integer codec uses to trim
//! and size its output.
//!
//! ## See Also
//!
//! - [`entities_bitarray`](../entities_bitarray/index.html): Bitarray and errors
//! - [`usecases_bitarray_search`](../usecases_bitarray_search/index.html): search algorithms

pub mod hex_codec;
pub mod int_codec;

pub use hex_codec::{ba2hex, hex2ba};
pub use int_codec::{ba2int, int2ba};

// Re-export the integer type so callers need not depend on malachite directly
pub use malachite::Integer;
