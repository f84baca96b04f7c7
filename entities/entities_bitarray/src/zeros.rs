//! Zero Construction
//!
//! Builds all-zero bitarrays. Used directly by callers and by the codecs to
//! produce padding.

use crate::bitarray::Bitarray;
use crate::endian::Endian;

/// Create a bitarray of `length` bits, all zero
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::{zeros, Endian};
///
/// let a = zeros(5, Endian::Little);
/// assert_eq!(a.to_string(), "00000");
/// assert_eq!(a.endian(), Endian::Little);
/// ```
pub fn zeros(length: usize, endian: Endian) -> Bitarray {
    let mut a = Bitarray::with_capacity(length, endian);
    a.resize(length, false);
    a
}
