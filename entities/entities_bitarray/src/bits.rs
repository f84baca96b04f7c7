//! Bit Manipulation Module
//!
//! Low-level primitives for addressing single bits inside a byte buffer under
//! either bit-endianness. [`Bitarray`](crate::Bitarray) is built on these.
//!
//! ## Bit Numbering
//!
//! Bit `i` of a buffer lives in byte `i / 8`. Its position inside that byte
//! depends on the endianness:
//! - **Big**: position `i % 8` counts from the MSB (bit 0 is `0x80`)
//! - **Little**: position `i % 8` counts from the LSB (bit 0 is `0x01`)
//!
//! ## Examples
//!
//! ```rust
//! use entities_bitarray::{bits, Endian};
//!
//! // Calculate byte requirements for bits
//! let bytes = bits::nbytes(17); // 3 bytes for 17 bits
//! assert_eq!(bytes, 3);
//!
//! // The same bit index selects different masks per endianness
//! assert_eq!(bits::bit_mask(Endian::Big, 0), 0x80);
//! assert_eq!(bits::bit_mask(Endian::Little, 0), 0x01);
//! ```

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

use crate::endian::Endian;

/// Calculate the number of bytes needed to store `bits` bits
///
/// Rounds up to the nearest byte. For example, 1-8 bits require 1 byte,
/// 9-16 bits require 2 bytes, etc.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::bits;
///
/// assert_eq!(bits::nbytes(0), 0);
/// assert_eq!(bits::nbytes(1), 1);
/// assert_eq!(bits::nbytes(8), 1);
/// assert_eq!(bits::nbytes(9), 2);
/// assert_eq!(bits::nbytes(17), 3);
/// ```
///
/// # See Also
///
/// - [`nbits`](crate::bits::nbits): Reverse operation (bytes to bits)
pub fn nbytes(bits: usize) -> usize {
    (bits + 7) >> 3
}

/// Calculate the number of bits in `bytes` bytes
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::bits;
///
/// assert_eq!(bits::nbits(0), 0);
/// assert_eq!(bits::nbits(2), 16);
/// ```
pub fn nbits(bytes: usize) -> usize {
    bytes << 3
}

/// Get the byte offset from a bit offset
pub fn byte_offset(bit_offset: usize) -> usize {
    bit_offset >> 3
}

/// Get the bit offset within a byte (0-7)
pub fn bit_offset(bit_offset: usize) -> usize {
    bit_offset & 7
}

/// Number of zero bits needed to pad `bits` up to the next byte boundary
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::bits;
///
/// assert_eq!(bits::padding(0), 0);
/// assert_eq!(bits::padding(5), 3);
/// assert_eq!(bits::padding(8), 0);
/// assert_eq!(bits::padding(12), 4);
/// ```
pub fn padding(bits: usize) -> usize {
    (8 - bit_offset(bits)) & 7
}

/// Mask selecting bit `i` inside its byte
///
/// # Arguments
/// * `endian` - Bit-endianness of the buffer
/// * `i` - Bit index into the buffer (only `i % 8` matters)
///
/// # Returns
/// A byte with exactly one bit set
pub fn bit_mask(endian: Endian, i: usize) -> u8 {
    match endian {
        Endian::Big => 0x80 >> bit_offset(i),
        Endian::Little => 0x01 << bit_offset(i),
    }
}

/// Get bit `i` of a buffer
///
/// # Panics
/// Panics if `i / 8` is outside `buf`
pub fn get_bit(buf: &[u8], endian: Endian, i: usize) -> bool {
    buf[byte_offset(i)] & bit_mask(endian, i) != 0
}

/// Set bit `i` of a buffer to `value`
///
/// # Panics
/// Panics if `i / 8` is outside `buf`
pub fn set_bit(buf: &mut [u8], endian: Endian, i: usize, value: bool) {
    let mask = bit_mask(endian, i);
    let byte = &mut buf[byte_offset(i)];
    if value {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

/// Mask of the bits in the last byte that belong to a sequence of `nbits` bits
///
/// Returns `0xFF` when `nbits` is a multiple of 8 (the last byte is full).
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::{bits, Endian};
///
/// assert_eq!(bits::used_mask(Endian::Big, 3), 0b1110_0000);
/// assert_eq!(bits::used_mask(Endian::Little, 3), 0b0000_0111);
/// assert_eq!(bits::used_mask(Endian::Big, 16), 0xFF);
/// ```
pub fn used_mask(endian: Endian, nbits: usize) -> u8 {
    let used = bit_offset(nbits);
    if used == 0 {
        return 0xFF;
    }
    let low = ((1u16 << used) - 1) as u8;
    match endian {
        Endian::Big => low << (8 - used),
        Endian::Little => low,
    }
}

/// Count set bits in a byte slice
pub fn count_ones(bytes: &[u8]) -> usize {
    bytes.iter().map(|b| b.count_ones() as usize).sum()
}
