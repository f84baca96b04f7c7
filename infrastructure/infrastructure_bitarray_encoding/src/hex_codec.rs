//! Hexadecimal Codec
//!
//! Converts big-endian bitarrays whose length is a multiple of 4 to and from
//! hexadecimal text. Each hex digit maps to one nibble, most significant first,
//! so a bitarray of `4 * k` bits always round-trips through `k` digits.

use std::borrow::Cow;

use entities_bitarray::{zeros, Bitarray, BitarrayError, Endian, Result};
use tracing::trace;

/// Hexadecimal representation of a big-endian bitarray (lower case)
///
/// # Errors
///
/// [`BitarrayError::InvalidArgument`] if `a` is not big-endian or its length
/// is not a multiple of 4.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Bitarray;
/// use infrastructure_bitarray_encoding::ba2hex;
///
/// let a: Bitarray = "0001_1010_0010".parse().unwrap();
/// assert_eq!(ba2hex(&a).unwrap(), "1a2");
/// ```
pub fn ba2hex(a: &Bitarray) -> Result<String> {
    if a.endian() != Endian::Big {
        return Err(BitarrayError::invalid_argument(
            "big-endian bitarray expected",
        ));
    }
    let la = a.len();
    if la % 4 != 0 {
        return Err(BitarrayError::invalid_argument(format!(
            "bitarray length {} not multiple of 4",
            la
        )));
    }

    // pad a copy to a whole byte; the argument stays untouched
    let half_byte = la % 8 != 0;
    let padded: Cow<'_, Bitarray> = if half_byte {
        trace!(len = la, "padding trailing nibble");
        Cow::Owned(a.concat(&zeros(4, Endian::Big)))
    } else {
        Cow::Borrowed(a)
    };

    let mut s = hex::encode(padded.as_bytes());
    if half_byte {
        s.pop();
    }
    Ok(s)
}

/// Big-endian bitarray from hexadecimal text
///
/// Accepts any number of hex digits, upper or lower case. Each digit yields
/// four bits.
///
/// # Errors
///
/// [`BitarrayError::InvalidArgument`] if `s` contains a non-hex character.
///
/// # Examples
///
/// ```rust
/// use infrastructure_bitarray_encoding::hex2ba;
///
/// assert_eq!(hex2ba("1A2").unwrap().to_string(), "000110100010");
/// assert!(hex2ba("").unwrap().is_empty());
/// ```
pub fn hex2ba(s: &str) -> Result<Bitarray> {
    let odd = s.len() % 2 == 1;
    let text: Cow<'_, str> = if odd {
        Cow::Owned(format!("{}0", s))
    } else {
        Cow::Borrowed(s)
    };

    let bytes = hex::decode(&*text).map_err(|e| {
        BitarrayError::invalid_argument(format!("invalid hex string {:?}: {}", s, e))
    })?;

    let mut a = Bitarray::from_bytes(&bytes, Endian::Big);
    if odd {
        a.truncate(a.len() - 4);
    }
    Ok(a)
}
