//! Utility Facades
//!
//! Entry points mirroring the loosely-typed utility API: lengths and counts
//! arrive as signed integers, endianness and strip mode as text. Each facade
//! validates its arguments, converts them into the typed form and calls the
//! inner layers.

use entities_bitarray::{Bitarray, BitarrayError, Endian, Result};
use infrastructure_bitarray_encoding::Integer;
use tracing::debug;

/// Convert a signed count into `usize`, rejecting negatives
fn non_negative(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        debug!(value, "rejected negative argument");
        BitarrayError::invalid_argument(format!("non-negative integer expected, got {}", value))
    })
}

/// Create a bitarray of `length` zero bits
///
/// # Errors
///
/// `InvalidArgument` if `length` is negative or `endian` is not `"big"` or
/// `"little"`.
pub fn zeros(length: i64, endian: &str) -> Result<Bitarray> {
    let endian: Endian = endian.parse()?;
    Ok(entities_bitarray::zeros(non_negative(length)?, endian))
}

/// Rightmost index of `value`
pub fn rindex(a: &Bitarray, value: bool) -> Result<usize> {
    usecases_bitarray_search::rindex(a, value)
}

/// Strip zeros; `mode` is `"left"`, `"right"` or `"both"`
pub fn strip(a: &Bitarray, mode: &str) -> Result<Bitarray> {
    Ok(usecases_bitarray_search::strip(a, mode.parse()?))
}

/// Smallest index `i` with `n` set bits in `a[0:i]`
///
/// # Errors
///
/// `InvalidArgument` if `n` is negative, `OutOfRange` if `n` exceeds the
/// total count.
pub fn count_n(a: &Bitarray, n: i64) -> Result<usize> {
    usecases_bitarray_search::count_n(a, non_negative(n)?)
}

/// Hexadecimal text of a big-endian bitarray
pub fn ba2hex(a: &Bitarray) -> Result<String> {
    infrastructure_bitarray_encoding::ba2hex(a)
}

/// Big-endian bitarray from hexadecimal text
pub fn hex2ba(s: &str) -> Result<Bitarray> {
    infrastructure_bitarray_encoding::hex2ba(s)
}

/// Integer value of a bitarray
pub fn ba2int(a: &Bitarray) -> Result<Integer> {
    infrastructure_bitarray_encoding::ba2int(a)
}

/// Bitarray of a non-negative integer
///
/// # Errors
///
/// `InvalidArgument` if `value` is negative, `length` is not positive or
/// `endian` is unknown; `Overflow` if `value` does not fit in `length` bits.
pub fn int2ba(value: &Integer, length: Option<i64>, endian: &str) -> Result<Bitarray> {
    let length = match length {
        Some(l) if l <= 0 => {
            return Err(BitarrayError::invalid_argument(format!(
                "integer larger than 0 expected for length, got {}",
                l
            )))
        }
        Some(l) => Some(non_negative(l)?),
        None => None,
    };
    let endian: Endian = endian.parse()?;
    infrastructure_bitarray_encoding::int2ba(value, length, endian)
}

/// Number of set bits in `a & b`
pub fn count_and(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    usecases_bitarray_search::count_and(a, b)
}

/// Number of set bits in `a | b`
pub fn count_or(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    usecases_bitarray_search::count_or(a, b)
}

/// Number of set bits in `a ^ b`
pub fn count_xor(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    usecases_bitarray_search::count_xor(a, b)
}

/// Whether every set bit of `a` is set in `b`
pub fn subset(a: &Bitarray, b: &Bitarray) -> Result<bool> {
    usecases_bitarray_search::subset(a, b)
}
