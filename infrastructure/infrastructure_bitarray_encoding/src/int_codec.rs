//! Integer Codec
//!
//! Converts between bitarrays and non-negative arbitrary precision integers
//! (malachite [`Integer`]). The bitarray's endianness decides significance:
//! for big-endian bit 0 is the most significant bit, for little-endian it is
//! the least significant one.
//!
//! ## Fixed Width
//!
//! [`int2ba`] can produce a result of an exact length. Shorter natural
//! encodings are zero-padded on the significant side (leading for big-endian,
//! trailing for little-endian); longer ones are cut down to the bits actually
//! needed, or rejected with [`BitarrayError::Overflow`] when the value does not
//! fit.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::borrow::Cow;

use entities_bitarray::{bits, zeros, Bitarray, BitarrayError, Endian, Result};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};
use tracing::debug;
use usecases_bitarray_search::{rindex, strip, StripMode};

/// Minimal little-endian bytes of a non-negative Integer (empty for zero)
fn integer_to_le_bytes(value: &Integer) -> Vec<u8> {
    PowerOf2Digits::<u8>::to_power_of_2_digits_asc(value.unsigned_abs_ref(), 8)
}

/// Rebuild an Integer from little-endian bytes
fn le_bytes_to_integer(bytes: &[u8]) -> Integer {
    // every u8 is a valid base-256 digit
    Natural::from_power_of_2_digits_asc(8, bytes.iter().copied())
        .map_or_else(|| Integer::from(0), Integer::from)
}

/// Convert a bitarray into a non-negative integer, respecting its endianness
///
/// # Errors
///
/// [`BitarrayError::InvalidArgument`] if `a` is empty.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::{Bitarray, Endian};
/// use infrastructure_bitarray_encoding::ba2int;
/// use malachite::Integer;
///
/// let big: Bitarray = "1010".parse().unwrap();
/// assert_eq!(ba2int(&big).unwrap(), Integer::from(10));
///
/// let little = Bitarray::from_bin_str("1010", Endian::Little).unwrap();
/// assert_eq!(ba2int(&little).unwrap(), Integer::from(5));
/// ```
pub fn ba2int(a: &Bitarray) -> Result<Integer> {
    if a.is_empty() {
        return Err(BitarrayError::invalid_argument(
            "non-empty bitarray expected",
        ));
    }

    // pad on the significant side up to a byte boundary
    let pad = bits::padding(a.len());
    let padded: Cow<'_, Bitarray> = match (pad, a.endian()) {
        (0, _) => Cow::Borrowed(a),
        (_, Endian::Big) => Cow::Owned(zeros(pad, Endian::Big).concat(a)),
        (_, Endian::Little) => Cow::Owned(a.concat(&zeros(pad, Endian::Little))),
    };

    let mut bytes = padded.to_bytes();
    if a.endian().is_big() {
        bytes.reverse();
    }
    Ok(le_bytes_to_integer(&bytes))
}

/// Convert a non-negative integer into a bitarray
///
/// Without `length` the result carries no leading (big-endian) / trailing
/// (little-endian) zeros, except that zero itself is a single `0` bit. With
/// `length` the result has exactly that many bits.
///
/// # Errors
///
/// - [`BitarrayError::InvalidArgument`] if `value` is negative or `length` is
///   `Some(0)`
/// - [`BitarrayError::Overflow`] if `value` needs more than `length` bits
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Endian;
/// use infrastructure_bitarray_encoding::int2ba;
/// use malachite::Integer;
///
/// let a = int2ba(&Integer::from(10), Some(8), Endian::Big).unwrap();
/// assert_eq!(a.to_string(), "00001010");
///
/// let a = int2ba(&Integer::from(10), None, Endian::Little).unwrap();
/// assert_eq!(a.to_string(), "0101");
///
/// assert!(int2ba(&Integer::from(255), Some(4), Endian::Big).is_err());
/// ```
pub fn int2ba(value: &Integer, length: Option<usize>, endian: Endian) -> Result<Bitarray> {
    if *value < 0 {
        return Err(BitarrayError::invalid_argument(
            "non-negative integer expected",
        ));
    }
    if length == Some(0) {
        return Err(BitarrayError::invalid_argument(
            "integer larger than 0 expected for length",
        ));
    }

    if *value == 0 {
        return Ok(zeros(length.unwrap_or(1), endian));
    }

    let mut bytes = integer_to_le_bytes(value);
    if endian.is_big() {
        bytes.reverse();
    }
    let a = Bitarray::from_bytes(&bytes, endian);
    let la = a.len();

    let length = match length {
        None => {
            let mode = if endian.is_big() {
                StripMode::Left
            } else {
                StripMode::Right
            };
            return Ok(strip(&a, mode));
        }
        Some(length) => length,
    };

    if la == length {
        return Ok(a);
    }

    if la > length {
        let size = match endian {
            Endian::Big => a.index(true, 0, la).map_or(0, |first| la - first),
            Endian::Little => rindex(&a, true)? + 1,
        };
        if size > length {
            debug!(size, length, "integer does not fit requested width");
            return Err(BitarrayError::overflow(format!(
                "cannot represent {} bit integer in {} bits",
                size, length
            )));
        }
        return Ok(match endian {
            Endian::Big => a.slice(la - length, la),
            Endian::Little => a.slice(0, length),
        });
    }

    Ok(match endian {
        Endian::Big => zeros(length - la, Endian::Big).concat(&a),
        Endian::Little => a.concat(&zeros(length - la, Endian::Little)),
    })
}
