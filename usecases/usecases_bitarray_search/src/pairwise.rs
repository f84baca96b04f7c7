//! Pairwise Counting
//!
//! Counts over the bitwise combination of two bitarrays without materializing
//! the combined bitarray. Both operands must agree in length and endianness so
//! their storage bytes line up one to one.

use entities_bitarray::{Bitarray, BitarrayError, Result};

fn check_compatible(a: &Bitarray, b: &Bitarray) -> Result<()> {
    if a.len() != b.len() {
        return Err(BitarrayError::invalid_argument(
            "bitarrays of equal length expected",
        ));
    }
    if a.endian() != b.endian() {
        return Err(BitarrayError::invalid_argument(
            "bitarrays of equal endianness expected",
        ));
    }
    Ok(())
}

fn count_with(a: &Bitarray, b: &Bitarray, op: impl Fn(u8, u8) -> u8) -> Result<usize> {
    check_compatible(a, b)?;
    Ok(a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| op(x, y).count_ones() as usize)
        .sum())
}

/// Number of set bits in `a & b`
pub fn count_and(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    count_with(a, b, |x, y| x & y)
}

/// Number of set bits in `a | b`
pub fn count_or(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    count_with(a, b, |x, y| x | y)
}

/// Number of set bits in `a ^ b` (the Hamming distance)
pub fn count_xor(a: &Bitarray, b: &Bitarray) -> Result<usize> {
    count_with(a, b, |x, y| x ^ y)
}

/// Check whether every set bit of `a` is also set in `b`
///
/// Equivalent to `count_and(a, b) == count(a)`, but stops at the first byte
/// that disagrees.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Bitarray;
/// use usecases_bitarray_search::subset;
///
/// let a: Bitarray = "0100".parse().unwrap();
/// let b: Bitarray = "0110".parse().unwrap();
/// assert!(subset(&a, &b).unwrap());
/// assert!(!subset(&b, &a).unwrap());
/// ```
pub fn subset(a: &Bitarray, b: &Bitarray) -> Result<bool> {
    check_compatible(a, b)?;
    Ok(a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .all(|(&x, &y)| x & y == x))
}
