//! Boundary Search
//!
//! Locates the rightmost occurrence of a bit value. Forward searches are the
//! cheap direction on a packed bitarray (whole bytes are skipped), so the
//! rightmost index is found by bisection, asking at each step only whether the
//! value occurs anywhere in the upper half.

use entities_bitarray::{Bitarray, BitarrayError, Result};
use tracing::trace;

/// Return the rightmost index of `value` in `a`
///
/// # Errors
///
/// [`BitarrayError::NotFound`] if `value` does not occur in `a`.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Bitarray;
/// use usecases_bitarray_search::rindex;
///
/// let a: Bitarray = "0010100".parse().unwrap();
/// assert_eq!(rindex(&a, true).unwrap(), 4);
/// assert_eq!(rindex(&a, false).unwrap(), 6);
/// ```
pub fn rindex(a: &Bitarray, value: bool) -> Result<usize> {
    if !a.contains(value) {
        return Err(BitarrayError::not_found(format!(
            "{} not in bitarray",
            value as u8
        )));
    }

    // `value` occurs in [left, right); the search ends once it sits at right - 1
    let (mut left, mut right) = (0, a.len());
    while a.get(right - 1) != Some(value) {
        let middle = (left + right) / 2;
        if a.index(value, middle, right).is_some() {
            left = middle;
        } else {
            right = middle;
        }
        trace!(left, right, "rindex bisection step");
    }
    Ok(right - 1)
}
